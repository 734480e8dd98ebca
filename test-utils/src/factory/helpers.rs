//! Shared helper utilities for factory methods.
//!
//! Provides unique id generation for default values and convenience functions that create
//! entities together with everything they depend on.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a product with one main photo and one secondary photo.
///
/// # Returns
/// - `Ok((product, main_photo, other_photo))` - The product and both photos
/// - `Err(DbErr)` - Database error during creation
pub async fn create_product_with_photos(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::product::Model,
        entity::product_photo::Model,
        entity::product_photo::Model,
    ),
    DbErr,
> {
    let product = crate::factory::product::create_product(db).await?;
    let main = crate::factory::product_photo::create_photo(db, product.id, true).await?;
    let other = crate::factory::product_photo::create_photo(db, product.id, false).await?;

    Ok((product, main, other))
}

/// Creates a placed order with a single order line.
///
/// This creates:
/// 1. User (the customer)
/// 2. Product
/// 3. Placed order
/// 4. Order line for two units of the product
///
/// # Returns
/// - `Ok((user, product, order, ordered_product))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_placed_order_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::product::Model,
        entity::orders::Model,
        entity::ordered_product::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let product = crate::factory::product::create_product(db).await?;
    let order = crate::factory::order::create_placed_order(db, user.id).await?;
    let line =
        crate::factory::ordered_product::create_ordered_product(db, order.id, product.id, 2)
            .await?;

    Ok((user, product, order, line))
}
