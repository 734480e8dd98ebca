//! Order factory for creating baskets and placed orders.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test orders.
///
/// An order without `placed_at` is a basket.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::order::OrderFactory;
///
/// let stale_basket = OrderFactory::new(&db, user.id)
///     .updated_at(Utc::now() - Duration::days(60))
///     .build()
///     .await?;
/// ```
pub struct OrderFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    placed_at: Option<DateTime<Utc>>,
}

impl<'a> OrderFactory<'a> {
    /// Creates a new OrderFactory producing a basket created now.
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let now = Utc::now();
        Self {
            db,
            user_id,
            created_at: now,
            updated_at: now,
            placed_at: None,
        }
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn updated_at(mut self, updated_at: DateTime<Utc>) -> Self {
        self.updated_at = updated_at;
        self
    }

    pub fn placed_at(mut self, placed_at: Option<DateTime<Utc>>) -> Self {
        self.placed_at = placed_at;
        self
    }

    /// Builds and inserts the order entity into the database.
    pub async fn build(self) -> Result<entity::orders::Model, DbErr> {
        entity::orders::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.updated_at),
            placed_at: ActiveValue::Set(self.placed_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an open basket for the user.
pub async fn create_basket(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::orders::Model, DbErr> {
    OrderFactory::new(db, user_id).build().await
}

/// Creates an order for the user that was placed now.
pub async fn create_placed_order(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::orders::Model, DbErr> {
    OrderFactory::new(db, user_id)
        .placed_at(Some(Utc::now()))
        .build()
        .await
}
