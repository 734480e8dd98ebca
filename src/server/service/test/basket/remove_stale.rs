use super::*;

/// Tests that only baskets untouched past the TTL are removed.
///
/// Expected: Ok(1) with the fresh basket and the old placed order kept
#[tokio::test]
async fn removes_only_stale_baskets() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stale_owner = factory::user::create_user(db).await?;
    let fresh_owner = factory::user::create_user(db).await?;
    let long_ago = Utc::now() - Duration::days(60);

    factory::order::OrderFactory::new(db, stale_owner.id)
        .created_at(long_ago)
        .updated_at(long_ago)
        .build()
        .await?;
    factory::order::OrderFactory::new(db, stale_owner.id)
        .created_at(long_ago)
        .updated_at(long_ago)
        .placed_at(Some(long_ago))
        .build()
        .await?;
    factory::order::create_basket(db, fresh_owner.id).await?;

    let service = BasketService::new(db);
    let removed = service.remove_stale(30).await?;

    assert_eq!(removed, 1);
    assert!(service.get(stale_owner.id).await?.is_none());
    assert!(service.get(fresh_owner.id).await?.is_some());

    Ok(())
}

/// Tests that a non-positive or overflowing TTL never reaches the delete.
///
/// Expected: Err(BadRequest) with the open basket kept
#[tokio::test]
async fn rejects_invalid_ttl() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    factory::order::create_basket(db, owner.id).await?;
    let service = BasketService::new(db);

    for ttl_days in [-1, 0, i64::MAX / 1000] {
        let result = service.remove_stale(ttl_days).await;
        assert!(
            matches!(result, Err(AppError::BadRequest(_))),
            "ttl {} should be rejected",
            ttl_days
        );
    }

    assert!(service.get(owner.id).await?.is_some());

    Ok(())
}
