//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.
//!
//! Response mapping follows one rule set for every endpoint: missing records are 404 with
//! the identifier in the message, business-rule violations are 400 with a readable message,
//! and failed writes are 400 with a generic "Failed to ..." message while the underlying
//! database error is only logged.

pub mod auth;
pub mod config;
pub mod internal;
pub mod photo;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, internal::InternalError, photo::PhotoStorageError,
    },
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion. Domain-specific errors like `AuthError` handle their own response
/// mapping, while generic variants provide standard HTTP status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for custom status code mapping
    /// (401 Unauthorized, 403 Forbidden, 400 Bad Request).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Photo storage error.
    ///
    /// Results in 400 Bad Request carrying the storage error's message.
    #[error(transparent)]
    PhotoErr(#[from] PhotoStorageError),

    /// Unexpected internal state, see `InternalError`.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// SQLx database driver error.
    #[error(transparent)]
    SqlxErr(#[from] sea_orm::SqlxError),

    /// Session store operation error.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// HTTP client request error from reqwest.
    ///
    /// Results in 500 Internal Server Error when identity provider calls fail.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request or violated business rule.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// A write to the data store failed.
    ///
    /// Results in 400 Bad Request with `message`; `source` is logged but never sent to
    /// the client.
    #[error("{message}: {source}")]
    PersistenceFailed {
        /// Generic message returned to the client
        message: String,
        /// The database error that caused the failure
        #[source]
        source: sea_orm::DbErr,
    },
}

/// Maps failed writes onto `AppError::PersistenceFailed`.
pub trait PersistenceResultExt<T> {
    /// Replaces a database error with a persistence failure carrying `message`.
    fn or_persistence_failure(self, message: &str) -> Result<T, AppError>;
}

impl<T> PersistenceResultExt<T> for Result<T, sea_orm::DbErr> {
    fn or_persistence_failure(self, message: &str) -> Result<T, AppError> {
        self.map_err(|source| AppError::PersistenceFailed {
            message: message.to_string(),
            source,
        })
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest`, `PersistenceFailed` and `PhotoErr`
/// - 404 Not Found - For `NotFound` variant
/// - 500 Internal Server Error - For all other error types (DbErr, SessionErr, etc.)
/// - Variable - For `AuthErr`, delegated to `AuthError::into_response()`
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            Self::PersistenceFailed { message, source } => {
                tracing::error!("{}: {}", message, source);
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: message })).into_response()
            }
            Self::PhotoErr(err) => {
                tracing::warn!("Photo storage error: {:?}", err);
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto {
                        error: err.to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
