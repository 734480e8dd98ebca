use async_trait::async_trait;
use dioxus_logger::tracing;
use rand::Rng;
use std::{io::ErrorKind, path::PathBuf};

use crate::server::{
    error::photo::PhotoStorageError,
    storage::{validate_upload, PhotoStorage, StoredPhoto},
};

const PUBLIC_ID_LENGTH: usize = 24;

/// Stores photos as files in a local directory.
///
/// The directory is served by the router under `base_url`, so a photo with public id
/// `abc.png` is reachable at `{base_url}/abc.png`.
#[derive(Debug, Clone)]
pub struct LocalPhotoStorage {
    dir: PathBuf,
    base_url: String,
}

impl LocalPhotoStorage {
    /// Opens the storage, creating `dir` if it does not exist yet.
    ///
    /// # Arguments
    /// - `dir` - Directory photos are written to
    /// - `base_url` - URL prefix the directory is served under, without trailing slash
    ///
    /// # Returns
    /// - `Ok(LocalPhotoStorage)` - Storage ready for use
    /// - `Err(PhotoStorageError::Io)` - Failed to create the directory
    pub async fn open(
        dir: impl Into<PathBuf>,
        base_url: impl Into<String>,
    ) -> Result<Self, PhotoStorageError> {
        let dir = dir.into();
        tokio::fs::create_dir_all(&dir).await?;

        Ok(Self {
            dir,
            base_url: base_url.into(),
        })
    }

    fn path_for(&self, public_id: &str) -> Result<PathBuf, PhotoStorageError> {
        let is_plain_name = !public_id.is_empty()
            && public_id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
            && !public_id.starts_with('.');

        if !is_plain_name {
            return Err(PhotoStorageError::Io(std::io::Error::new(
                ErrorKind::InvalidInput,
                format!("invalid photo id '{}'", public_id),
            )));
        }

        Ok(self.dir.join(public_id))
    }

    fn random_name() -> String {
        const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

        let mut rng = rand::rng();

        (0..PUBLIC_ID_LENGTH)
            .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
            .collect()
    }
}

#[async_trait]
impl PhotoStorage for LocalPhotoStorage {
    async fn store(
        &self,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<StoredPhoto, PhotoStorageError> {
        let extension = validate_upload(&bytes, content_type)?;

        let public_id = format!("{}.{}", Self::random_name(), extension);
        let path = self.path_for(&public_id)?;

        tokio::fs::write(&path, bytes).await?;
        tracing::debug!("Stored photo {}", path.display());

        Ok(StoredPhoto {
            url: format!("{}/{}", self.base_url, public_id),
            public_id,
        })
    }

    async fn delete(&self, public_id: &str) -> Result<(), PhotoStorageError> {
        let path = self.path_for(public_id)?;

        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::warn!("Photo {} was already removed", path.display());
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }
}
