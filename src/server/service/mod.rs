//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Enforcing catalog, photo and basket rules
//! - **Orchestration**: Coordinating repositories with photo storage and the identity provider
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Wrapping multi-step writes in a single transaction
//!
//! Failed writes are reported as `AppError::PersistenceFailed` with a generic message,
//! which the error layer maps onto a 400 response.

pub mod auth;
pub mod basket;
pub mod moderator_code;
pub mod order;
pub mod photo;
pub mod product;

#[cfg(test)]
mod test;
