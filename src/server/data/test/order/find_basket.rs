use super::*;

/// Tests that placed orders are not returned as the basket.
///
/// Expected: Ok(None) for a user with only placed orders
#[tokio::test]
async fn ignores_placed_orders() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, _, _) = factory::helpers::create_placed_order_with_dependencies(db).await?;

    assert!(OrderRepository::new(db).find_basket(user.id).await?.is_none());

    Ok(())
}

/// Tests finding the open basket of the right user.
///
/// Expected: Ok(Some(basket)) owned by the user
#[tokio::test]
async fn finds_users_basket() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let other_user = factory::user::create_user(db).await?;
    factory::order::create_basket(db, other_user.id).await?;
    let basket = factory::order::create_basket(db, user.id).await?;

    let found = OrderRepository::new(db)
        .find_basket(user.id)
        .await?
        .expect("basket exists");

    assert_eq!(found.id, basket.id);
    assert!(found.is_basket());

    Ok(())
}

/// Tests that a basket is created only once.
///
/// Expected: Ok with the same id returned on both calls
#[tokio::test]
async fn find_or_create_reuses_basket() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = OrderRepository::new(db);
    let first = repo.find_or_create_basket_id(user.id).await?;
    let second = repo.find_or_create_basket_id(user.id).await?;

    assert_eq!(first, second);
    assert_eq!(repo.get_all().await?.len(), 1);

    Ok(())
}
