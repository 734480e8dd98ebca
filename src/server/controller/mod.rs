//! HTTP request handlers.
//!
//! Controllers check access with `AuthGuard`, convert DTOs into server params, call a
//! service and convert the returned domain model back into a DTO. Every JSON handler
//! carries a `#[utoipa::path]` annotation collected by the router.

pub mod auth;
pub mod basket;
pub mod catalog;
pub mod moderator;
