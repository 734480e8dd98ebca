use super::*;

/// Tests placing a basket turns it into an order.
///
/// Expected: Ok with placed_at set and no basket left
#[tokio::test]
async fn places_basket() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let product = factory::product::create_product(db).await?;
    let service = BasketService::new(db);

    service
        .set_quantity(SetBasketQuantityParam {
            user_id: user.id,
            product_id: product.id,
            quantity: 1,
        })
        .await?;

    let order = service.checkout(user.id).await?;

    assert!(order.placed_at.is_some());
    assert_eq!(order.ordered_products.len(), 1);
    assert!(service.get(user.id).await?.is_none());

    Ok(())
}

/// Tests checking out without a basket or with an empty one.
///
/// Expected: Err(BadRequest("Basket is empty")) for both
#[tokio::test]
async fn rejects_empty_basket() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let service = BasketService::new(db);

    let without_basket = service.checkout(user.id).await;
    factory::order::create_basket(db, user.id).await?;
    let with_empty_basket = service.checkout(user.id).await;

    for result in [without_basket, with_empty_basket] {
        assert!(matches!(result, Err(AppError::BadRequest(ref msg)) if msg == "Basket is empty"));
    }

    Ok(())
}
