//! Database repository layer for all domain entities.
//!
//! Repositories use SeaORM entity models internally and return domain models to keep the
//! data layer separate from business logic. Each repository borrows any `ConnectionTrait`,
//! so the same code runs against the pool or inside a transaction opened by a service.

pub mod order;
pub mod product;
pub mod product_photo;
pub mod user;

#[cfg(test)]
mod test;
