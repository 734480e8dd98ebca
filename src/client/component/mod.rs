pub mod add_to_basket;
pub mod header;
pub mod layout;
pub mod markdown;
pub mod page;
pub mod pagination;
pub mod protected_layout;
pub mod side_basket;

pub use add_to_basket::AddToBasketButton;
pub use header::Header;
pub use layout::Layout;
pub use markdown::Markdown;
pub use page::Page;
pub use protected_layout::{ProtectedLayout, RequiresModerator};
pub use side_basket::SideBasket;
