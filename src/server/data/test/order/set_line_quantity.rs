use super::*;

/// Tests adding, changing and removing a basket line.
///
/// Expected: Ok with the line inserted, updated and finally deleted
#[tokio::test]
async fn inserts_updates_and_removes_line() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let product = factory::product::create_product(db).await?;
    let basket = factory::order::create_basket(db, user.id).await?;

    let repo = OrderRepository::new(db);

    repo.set_line_quantity(basket.id, product.id, 2).await?;
    let loaded = repo.find_by_id(basket.id).await?.unwrap();
    assert_eq!(loaded.ordered_products.len(), 1);
    assert_eq!(loaded.ordered_products[0].quantity, 2);

    repo.set_line_quantity(basket.id, product.id, 5).await?;
    let loaded = repo.find_by_id(basket.id).await?.unwrap();
    assert_eq!(loaded.ordered_products.len(), 1);
    assert_eq!(loaded.ordered_products[0].quantity, 5);

    repo.set_line_quantity(basket.id, product.id, 0).await?;
    let loaded = repo.find_by_id(basket.id).await?.unwrap();
    assert!(loaded.ordered_products.is_empty());

    Ok(())
}

/// Tests that removing an absent line is a no-op.
///
/// Expected: Ok with the basket still empty
#[tokio::test]
async fn removing_absent_line_is_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let product = factory::product::create_product(db).await?;
    let basket = factory::order::create_basket(db, user.id).await?;

    let repo = OrderRepository::new(db);
    repo.set_line_quantity(basket.id, product.id, 0).await?;

    assert!(repo.find_by_id(basket.id).await?.unwrap().ordered_products.is_empty());

    Ok(())
}

/// Tests that changing a line refreshes the basket's update time.
///
/// Expected: Ok with updated_at moved forward
#[tokio::test]
async fn refreshes_updated_at() -> Result<(), DbErr> {
    use chrono::{Duration, Utc};
    use test_utils::factory::order::OrderFactory;

    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let product = factory::product::create_product(db).await?;
    let stale = Utc::now() - Duration::days(10);
    let basket = OrderFactory::new(db, user.id)
        .updated_at(stale)
        .build()
        .await?;

    let repo = OrderRepository::new(db);
    repo.set_line_quantity(basket.id, product.id, 1).await?;

    let loaded = repo.find_by_id(basket.id).await?.unwrap();
    assert!(loaded.updated_at > stale);

    Ok(())
}
