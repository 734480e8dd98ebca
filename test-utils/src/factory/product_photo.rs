//! Product photo factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test product photos.
///
/// Photos default to a non-main photo with a storage `public_id`, matching what an upload
/// through the photo storage produces.
pub struct ProductPhotoFactory<'a> {
    db: &'a DatabaseConnection,
    product_id: i32,
    url: String,
    public_id: Option<String>,
    is_main: bool,
}

impl<'a> ProductPhotoFactory<'a> {
    /// Creates a new ProductPhotoFactory with default values.
    ///
    /// Defaults:
    /// - url: `"/photos/photo_{id}.png"`
    /// - public_id: `Some("photo_{id}.png")`
    /// - is_main: `false`
    pub fn new(db: &'a DatabaseConnection, product_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            product_id,
            url: format!("/photos/photo_{}.png", id),
            public_id: Some(format!("photo_{}.png", id)),
            is_main: false,
        }
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn public_id(mut self, public_id: Option<String>) -> Self {
        self.public_id = public_id;
        self
    }

    pub fn is_main(mut self, is_main: bool) -> Self {
        self.is_main = is_main;
        self
    }

    /// Builds and inserts the photo entity into the database.
    pub async fn build(self) -> Result<entity::product_photo::Model, DbErr> {
        entity::product_photo::ActiveModel {
            product_id: ActiveValue::Set(self.product_id),
            url: ActiveValue::Set(self.url),
            public_id: ActiveValue::Set(self.public_id),
            is_main: ActiveValue::Set(self.is_main),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a photo for the product.
///
/// # Arguments
/// - `db` - Database connection
/// - `product_id` - Product the photo belongs to
/// - `is_main` - Whether the photo is the product's main photo
pub async fn create_photo(
    db: &DatabaseConnection,
    product_id: i32,
    is_main: bool,
) -> Result<entity::product_photo::Model, DbErr> {
    ProductPhotoFactory::new(db, product_id)
        .is_main(is_main)
        .build()
        .await
}
