use super::*;

use chrono::Utc;

/// Tests that placing a basket turns it into an order.
///
/// Expected: Ok with placed_at set and no basket left for the user
#[tokio::test]
async fn places_basket() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let basket = factory::order::create_basket(db, user.id).await?;

    let repo = OrderRepository::new(db);
    let placed_at = Utc::now();
    repo.place(basket.id, placed_at).await?;

    let order = repo.find_by_id(basket.id).await?.unwrap();
    assert_eq!(
        order.placed_at.map(|t| t.timestamp_millis()),
        Some(placed_at.timestamp_millis())
    );
    assert!(repo.find_basket(user.id).await?.is_none());

    Ok(())
}
