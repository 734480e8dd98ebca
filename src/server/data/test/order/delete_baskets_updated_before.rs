use super::*;

use chrono::{Duration, Utc};
use test_utils::factory::order::OrderFactory;

/// Tests that only stale baskets are removed.
///
/// Expected: Ok(1) with the fresh basket and the old placed order kept
#[tokio::test]
async fn removes_only_stale_baskets() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let now = Utc::now();

    let stale = OrderFactory::new(db, user.id)
        .updated_at(now - Duration::days(40))
        .build()
        .await?;
    let fresh = OrderFactory::new(db, user.id).build().await?;
    let old_order = OrderFactory::new(db, user.id)
        .updated_at(now - Duration::days(40))
        .placed_at(Some(now - Duration::days(40)))
        .build()
        .await?;

    let repo = OrderRepository::new(db);
    let removed = repo
        .delete_baskets_updated_before(now - Duration::days(30))
        .await?;

    assert_eq!(removed, 1);
    assert!(repo.find_by_id(stale.id).await?.is_none());
    assert!(repo.find_by_id(fresh.id).await?.is_some());
    assert!(repo.find_by_id(old_order.id).await?.is_some());

    Ok(())
}

/// Tests that lines of removed baskets go with them.
///
/// Expected: Ok with no order lines left
#[tokio::test]
async fn removes_lines_by_cascade() -> Result<(), DbErr> {
    use sea_orm::{EntityTrait, PaginatorTrait};

    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let product = factory::product::create_product(db).await?;
    let stale = OrderFactory::new(db, user.id)
        .updated_at(Utc::now() - Duration::days(40))
        .build()
        .await?;
    factory::ordered_product::create_ordered_product(db, stale.id, product.id, 4).await?;

    OrderRepository::new(db)
        .delete_baskets_updated_before(Utc::now() - Duration::days(30))
        .await?;

    assert_eq!(entity::prelude::OrderedProduct::find().count(db).await?, 0);

    Ok(())
}
