use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A row that was just written could not be read back.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("{entity} {id} missing after write")]
    MissingAfterWrite {
        /// Kind of record
        entity: &'static str,
        /// Primary key of the record
        id: i32,
    },
}
