//! Order queries for the moderator API.

use sea_orm::DatabaseConnection;

use crate::server::{data::order::OrderRepository, error::AppError, model::order::Order};

pub struct OrderService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> OrderService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all orders, baskets included, newest first.
    pub async fn get_all(&self) -> Result<Vec<Order>, AppError> {
        let orders = OrderRepository::new(self.db).get_all().await?;
        Ok(orders)
    }

    /// Gets an order by id.
    ///
    /// # Returns
    /// - `Ok(Order)` - The order with its lines
    /// - `Err(AppError::NotFound)` - No order with that id
    pub async fn get(&self, id: i32) -> Result<Order, AppError> {
        OrderRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Order {} not found", id)))
    }
}
