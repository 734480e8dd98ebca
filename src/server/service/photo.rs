//! Product photo business logic.
//!
//! Coordinates the photo storage with the `product_photo` table. A product's first photo
//! becomes its main photo, the main photo cannot be deleted, and switching the main photo
//! happens inside one transaction.

use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{product::ProductRepository, product_photo::ProductPhotoRepository},
    error::{AppError, PersistenceResultExt},
    model::product::{CreatePhotoParam, ProductPhoto},
    service::product::product_not_found,
    storage::PhotoStorage,
};

pub struct PhotoService<'a> {
    pub db: &'a DatabaseConnection,
    pub storage: &'a dyn PhotoStorage,
}

impl<'a> PhotoService<'a> {
    pub fn new(db: &'a DatabaseConnection, storage: &'a dyn PhotoStorage) -> Self {
        Self { db, storage }
    }

    /// Checks that a product exists before its upload is read.
    ///
    /// # Returns
    /// - `Ok(())` - The product exists
    /// - `Err(AppError::NotFound)` - No product with that id
    pub async fn require_product(&self, product_id: i32) -> Result<(), AppError> {
        if ProductRepository::new(self.db)
            .find_by_id(product_id)
            .await?
            .is_none()
        {
            return Err(product_not_found(product_id));
        }

        Ok(())
    }

    /// Stores an uploaded photo and attaches it to the product.
    ///
    /// The stored file is removed again when the row cannot be inserted.
    ///
    /// # Returns
    /// - `Ok(ProductPhoto)` - The new photo, main when it is the product's first
    /// - `Err(AppError::NotFound)` - No product with that id
    /// - `Err(AppError::PhotoErr)` - Upload rejected by the storage
    /// - `Err(AppError::PersistenceFailed("Problem adding photo"))` - Insert failed
    pub async fn add(
        &self,
        product_id: i32,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<ProductPhoto, AppError> {
        self.require_product(product_id).await?;

        let photo_repo = ProductPhotoRepository::new(self.db);
        let is_main = photo_repo.count_by_product(product_id).await? == 0;

        let stored = self.storage.store(bytes, content_type).await?;

        let result = photo_repo
            .create(CreatePhotoParam {
                product_id,
                url: stored.url,
                public_id: Some(stored.public_id.clone()),
                is_main,
            })
            .await;

        match result {
            Ok(photo) => Ok(photo),
            Err(e) => {
                if let Err(cleanup) = self.storage.delete(&stored.public_id).await {
                    tracing::warn!(
                        "Failed to remove orphaned photo {}: {}",
                        stored.public_id,
                        cleanup
                    );
                }

                Err(e).or_persistence_failure("Problem adding photo")
            }
        }
    }

    /// Makes the photo its product's main photo.
    ///
    /// # Returns
    /// - `Ok(())` - Main photo switched
    /// - `Err(AppError::NotFound)` - No photo with that id
    /// - `Err(AppError::BadRequest("This is already the main photo"))`
    /// - `Err(AppError::PersistenceFailed("Failed to set main photo"))` - Update failed
    pub async fn set_main(&self, photo_id: i32) -> Result<(), AppError> {
        let photo = self.find(photo_id).await?;

        if photo.is_main {
            return Err(AppError::BadRequest(
                "This is already the main photo".to_string(),
            ));
        }

        const FAILED: &str = "Failed to set main photo";

        let txn = self.db.begin().await.or_persistence_failure(FAILED)?;

        ProductPhotoRepository::new(&txn)
            .set_main(photo.product_id, photo.id)
            .await
            .or_persistence_failure(FAILED)?;

        txn.commit().await.or_persistence_failure(FAILED)?;

        Ok(())
    }

    /// Deletes a non-main photo and its stored file.
    ///
    /// # Returns
    /// - `Ok(())` - Photo deleted
    /// - `Err(AppError::NotFound)` - No photo with that id
    /// - `Err(AppError::BadRequest("You cannot delete the main photo"))`
    /// - `Err(AppError::PhotoErr)` - The stored file could not be removed
    /// - `Err(AppError::PersistenceFailed("Failed to delete the photo"))` - Delete failed
    pub async fn delete(&self, photo_id: i32) -> Result<(), AppError> {
        let photo = self.find(photo_id).await?;

        if photo.is_main {
            return Err(AppError::BadRequest(
                "You cannot delete the main photo".to_string(),
            ));
        }

        if let Some(public_id) = photo.public_id.as_deref() {
            self.storage.delete(public_id).await?;
        }

        ProductPhotoRepository::new(self.db)
            .delete(photo.id)
            .await
            .or_persistence_failure("Failed to delete the photo")?;

        Ok(())
    }

    async fn find(&self, photo_id: i32) -> Result<ProductPhoto, AppError> {
        ProductPhotoRepository::new(self.db)
            .find_by_id(photo_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Photo {} not found", photo_id)))
    }
}
