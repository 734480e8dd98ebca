//! Basket business logic.
//!
//! Every user has at most one basket: an order that has not been placed yet. The basket is
//! created lazily on the first product added and becomes a regular order on checkout.

use chrono::{Duration, Utc};
use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::basket::MAX_LINE_QUANTITY,
    server::{
        data::{order::OrderRepository, product::ProductRepository},
        error::{internal::InternalError, AppError, PersistenceResultExt},
        model::order::{Order, SetBasketQuantityParam},
        service::product::product_not_found,
    },
};

pub struct BasketService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> BasketService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the user's basket, `None` when the user has none.
    pub async fn get(&self, user_id: i32) -> Result<Option<Order>, AppError> {
        let basket = OrderRepository::new(self.db).find_basket(user_id).await?;
        Ok(basket)
    }

    /// Sets the quantity of a product in the user's basket.
    ///
    /// A quantity of 0 removes the product. The basket is created when absent.
    ///
    /// # Returns
    /// - `Ok(Option<Order>)` - The basket after the change
    /// - `Err(AppError::BadRequest)` - Quantity outside 0..=99
    /// - `Err(AppError::NotFound)` - No product with that id
    /// - `Err(AppError::PersistenceFailed("Failed to update basket"))` - Write failed
    pub async fn set_quantity(
        &self,
        param: SetBasketQuantityParam,
    ) -> Result<Option<Order>, AppError> {
        if !(0..=MAX_LINE_QUANTITY).contains(&param.quantity) {
            return Err(AppError::BadRequest(format!(
                "Quantity must be between 0 and {}",
                MAX_LINE_QUANTITY
            )));
        }

        if ProductRepository::new(self.db)
            .find_by_id(param.product_id)
            .await?
            .is_none()
        {
            return Err(product_not_found(param.product_id));
        }

        let order_repo = OrderRepository::new(self.db);

        if param.quantity == 0 && order_repo.find_basket(param.user_id).await?.is_none() {
            return Ok(None);
        }

        const FAILED: &str = "Failed to update basket";

        let txn = self.db.begin().await.or_persistence_failure(FAILED)?;
        let txn_repo = OrderRepository::new(&txn);

        let basket_id = txn_repo
            .find_or_create_basket_id(param.user_id)
            .await
            .or_persistence_failure(FAILED)?;
        txn_repo
            .set_line_quantity(basket_id, param.product_id, param.quantity)
            .await
            .or_persistence_failure(FAILED)?;

        txn.commit().await.or_persistence_failure(FAILED)?;

        self.get(param.user_id).await
    }

    /// Places the user's basket as an order.
    ///
    /// # Returns
    /// - `Ok(Order)` - The placed order
    /// - `Err(AppError::BadRequest("Basket is empty"))` - No basket or no lines
    /// - `Err(AppError::PersistenceFailed("Failed to place order"))` - Update failed
    pub async fn checkout(&self, user_id: i32) -> Result<Order, AppError> {
        let order_repo = OrderRepository::new(self.db);

        let basket = match order_repo.find_basket(user_id).await? {
            Some(basket) if !basket.ordered_products.is_empty() => basket,
            _ => return Err(AppError::BadRequest("Basket is empty".to_string())),
        };

        order_repo
            .place(basket.id, Utc::now())
            .await
            .or_persistence_failure("Failed to place order")?;

        tracing::info!("User {} placed order {}", user_id, basket.id);

        order_repo.find_by_id(basket.id).await?.ok_or_else(|| {
            InternalError::MissingAfterWrite {
                entity: "Order",
                id: basket.id,
            }
            .into()
        })
    }

    /// Deletes baskets not updated within the last `ttl_days` days.
    ///
    /// # Returns
    /// - `Ok(count)` - Number of baskets removed
    /// - `Err(AppError::BadRequest)` - `ttl_days` is not positive or the cutoff is out of range
    pub async fn remove_stale(&self, ttl_days: i64) -> Result<u64, AppError> {
        if ttl_days < 1 {
            return Err(AppError::BadRequest(format!(
                "Basket TTL must be at least 1 day, got {}",
                ttl_days
            )));
        }

        let cutoff = Duration::try_days(ttl_days)
            .and_then(|ttl| Utc::now().checked_sub_signed(ttl))
            .ok_or_else(|| {
                AppError::BadRequest(format!("Basket TTL of {} days is out of range", ttl_days))
            })?;

        let removed = OrderRepository::new(self.db)
            .delete_baskets_updated_before(cutoff)
            .await?;

        Ok(removed)
    }
}
