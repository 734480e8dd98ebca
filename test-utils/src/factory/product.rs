//! Product factory for creating test catalog entries.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test products with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::product::ProductFactory;
///
/// let product = ProductFactory::new(&db)
///     .name("Espresso Cup")
///     .sale_price(12.5)
///     .build()
///     .await?;
/// ```
pub struct ProductFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    description: Option<String>,
    sale_price: f64,
}

impl<'a> ProductFactory<'a> {
    /// Creates a new ProductFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Product {id}"` where id is auto-incremented
    /// - description: `Some("Test product description")`
    /// - sale_price: `9.99`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Product {}", id),
            description: Some("Test product description".to_string()),
            sale_price: 9.99,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn sale_price(mut self, sale_price: f64) -> Self {
        self.sale_price = sale_price;
        self
    }

    /// Builds and inserts the product entity into the database.
    pub async fn build(self) -> Result<entity::product::Model, DbErr> {
        entity::product::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            sale_price: ActiveValue::Set(self.sale_price),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a product with default values.
pub async fn create_product(db: &DatabaseConnection) -> Result<entity::product::Model, DbErr> {
    ProductFactory::new(db).build().await
}

/// Creates a product with a specific name.
pub async fn create_product_named(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entity::product::Model, DbErr> {
    ProductFactory::new(db).name(name).build().await
}
