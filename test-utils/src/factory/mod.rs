//! Factory methods for creating test data.
//!
//! Each factory inserts a row with sensible defaults so tests only spell out the fields they
//! care about. Factories that need a parent row take its id explicitly; `helpers` builds
//! whole object graphs in one call.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let product = factory::product::create_product(&db).await?;
//!
//!     // Create with all dependencies
//!     let (user, product, order, line) =
//!         factory::helpers::create_placed_order_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let moderator = factory::user::UserFactory::new(&db)
//!     .name("Mod")
//!     .moderator(true)
//!     .build()
//!     .await?;
//!
//! let photo = factory::product_photo::ProductPhotoFactory::new(&db, product.id)
//!     .is_main(true)
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod order;
pub mod ordered_product;
pub mod product;
pub mod product_photo;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use order::{create_basket, create_placed_order};
pub use ordered_product::create_ordered_product;
pub use product::create_product;
pub use product_photo::create_photo;
pub use user::create_user;
