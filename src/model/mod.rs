//! Data transfer objects shared between the server API and the client.
//!
//! Everything in here is compiled for both targets, so it only depends on `serde` and
//! `chrono`. OpenAPI schemas are derived on the server build only.

pub mod api;
pub mod basket;
pub mod order;
pub mod product;
pub mod user;
