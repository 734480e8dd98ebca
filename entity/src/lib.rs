//! SeaORM entity models for the storefront schema.
//!
//! The tables themselves are created by the `migration` crate; these models mirror them
//! column for column.

pub mod prelude;

pub mod ordered_product;
pub mod orders;
pub mod product;
pub mod product_photo;
pub mod user;
