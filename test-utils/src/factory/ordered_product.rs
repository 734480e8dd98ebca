//! Ordered product (order line) factory.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an order line linking the order to the product.
///
/// # Arguments
/// - `db` - Database connection
/// - `order_id` - Order (or basket) the line belongs to
/// - `product_id` - Product being ordered
/// - `quantity` - Number of units
pub async fn create_ordered_product(
    db: &DatabaseConnection,
    order_id: i32,
    product_id: i32,
    quantity: i32,
) -> Result<entity::ordered_product::Model, DbErr> {
    entity::ordered_product::ActiveModel {
        order_id: ActiveValue::Set(order_id),
        product_id: ActiveValue::Set(product_id),
        quantity: ActiveValue::Set(quantity),
        ..Default::default()
    }
    .insert(db)
    .await
}
