pub use super::ordered_product::Entity as OrderedProduct;
pub use super::orders::Entity as Orders;
pub use super::product::Entity as Product;
pub use super::product_photo::Entity as ProductPhoto;
pub use super::user::Entity as User;
