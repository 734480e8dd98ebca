use super::*;

use chrono::{Duration, Utc};
use test_utils::factory::order::OrderFactory;

/// Tests that all orders, baskets included, are returned newest first.
///
/// Expected: Ok with three orders ordered by creation time descending
#[tokio::test]
async fn returns_all_orders_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let now = Utc::now();

    let oldest = OrderFactory::new(db, user.id)
        .created_at(now - Duration::days(2))
        .placed_at(Some(now - Duration::days(2)))
        .build()
        .await?;
    let middle = OrderFactory::new(db, user.id)
        .created_at(now - Duration::days(1))
        .placed_at(Some(now - Duration::days(1)))
        .build()
        .await?;
    let basket = OrderFactory::new(db, user.id).created_at(now).build().await?;

    let orders = OrderRepository::new(db).get_all().await?;

    let ids: Vec<i32> = orders.iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![basket.id, middle.id, oldest.id]);
    assert!(orders[0].is_basket());

    Ok(())
}

/// Tests that lines are attached to the order they belong to.
///
/// Expected: Ok with each order holding only its own lines
#[tokio::test]
async fn keeps_lines_with_their_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let product = factory::product::create_product(db).await?;
    let first = factory::order::create_placed_order(db, user.id).await?;
    let second = factory::order::create_placed_order(db, user.id).await?;
    factory::ordered_product::create_ordered_product(db, first.id, product.id, 1).await?;
    factory::ordered_product::create_ordered_product(db, second.id, product.id, 3).await?;

    let orders = OrderRepository::new(db).get_all().await?;

    let loaded_first = orders.iter().find(|o| o.id == first.id).unwrap();
    let loaded_second = orders.iter().find(|o| o.id == second.id).unwrap();
    assert_eq!(loaded_first.ordered_products.len(), 1);
    assert_eq!(loaded_first.ordered_products[0].quantity, 1);
    assert_eq!(loaded_second.ordered_products[0].quantity, 3);

    Ok(())
}

/// Tests an empty order table.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn empty_without_orders() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(OrderRepository::new(db).get_all().await?.is_empty());

    Ok(())
}
