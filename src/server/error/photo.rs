use thiserror::Error;

/// Failures of the photo storage.
///
/// Every variant is reported to the client as 400 Bad Request carrying the error's message.
#[derive(Error, Debug)]
pub enum PhotoStorageError {
    /// The uploaded file is not an image.
    #[error("Only image uploads are supported")]
    UnsupportedContentType(String),

    /// The upload contained no data.
    #[error("The uploaded file is empty")]
    EmptyUpload,

    /// The upload request had no `file` field.
    #[error("No file was uploaded")]
    MissingFile,

    /// The multipart body could not be read.
    #[error("Failed to read upload: {0}")]
    Upload(String),

    /// Writing or removing the stored file failed.
    #[error("Photo storage failed: {0}")]
    Io(#[from] std::io::Error),
}
