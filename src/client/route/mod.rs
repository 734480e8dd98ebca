pub mod home;
pub mod login;
pub mod moderator;
pub mod not_found;
pub mod product;

pub use home::Home;
pub use login::Login;
pub use not_found::NotFound;
pub use product::ProductDetail;
