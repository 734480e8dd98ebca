//! Photo storage backends.
//!
//! Product photos are stored outside the database; rows in `product_photo` only keep the
//! public URL and the storage key (`public_id`) needed to remove the file again. The
//! `PhotoStorage` trait is the seam between the photo service and a concrete backend so
//! services can be tested against a temporary directory.

pub mod local;

use async_trait::async_trait;

use crate::server::error::photo::PhotoStorageError;

/// A photo that was written to storage.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredPhoto {
    /// URL the photo is publicly reachable under
    pub url: String,
    /// Storage key used to delete the photo
    pub public_id: String,
}

#[async_trait]
pub trait PhotoStorage: Send + Sync {
    /// Stores an uploaded image.
    ///
    /// # Arguments
    /// - `bytes` - Raw file contents
    /// - `content_type` - MIME type reported by the client, must be `image/*`
    ///
    /// # Returns
    /// - `Ok(StoredPhoto)` - Location of the stored photo
    /// - `Err(PhotoStorageError)` - Upload rejected or could not be written
    async fn store(
        &self,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<StoredPhoto, PhotoStorageError>;

    /// Removes a stored photo by its storage key.
    ///
    /// Deleting a key that no longer exists succeeds.
    async fn delete(&self, public_id: &str) -> Result<(), PhotoStorageError>;
}

/// Checks an upload before it is handed to a backend.
///
/// # Returns
/// - `Ok(&str)` - File extension matching the content type
/// - `Err(PhotoStorageError::EmptyUpload)` - No bytes were uploaded
/// - `Err(PhotoStorageError::UnsupportedContentType)` - Content type is not an image
pub fn validate_upload<'a>(bytes: &[u8], content_type: &'a str) -> Result<&'a str, PhotoStorageError> {
    if bytes.is_empty() {
        return Err(PhotoStorageError::EmptyUpload);
    }

    let Some(subtype) = content_type.strip_prefix("image/") else {
        return Err(PhotoStorageError::UnsupportedContentType(
            content_type.to_string(),
        ));
    };

    let extension = match subtype {
        "jpeg" | "jpg" | "pjpeg" => "jpg",
        "png" => "png",
        "gif" => "gif",
        "webp" => "webp",
        "avif" => "avif",
        _ => {
            return Err(PhotoStorageError::UnsupportedContentType(
                content_type.to_string(),
            ))
        }
    };

    Ok(extension)
}
