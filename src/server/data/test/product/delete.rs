use super::*;

/// Tests deleting a product removes its photos by cascade.
///
/// Expected: Ok(true) and no photo rows left
#[tokio::test]
async fn deletes_product_and_photos() -> Result<(), DbErr> {
    use sea_orm::{EntityTrait, PaginatorTrait};

    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (product, _, _) = factory::helpers::create_product_with_photos(db).await?;

    let repo = ProductRepository::new(db);

    assert!(repo.delete(product.id).await?);
    assert!(repo.find_by_id(product.id).await?.is_none());
    assert_eq!(entity::prelude::ProductPhoto::find().count(db).await?, 0);

    Ok(())
}

/// Tests deleting a missing product.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_product() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!ProductRepository::new(db).delete(5).await?);

    Ok(())
}

/// Tests that a product referenced by an order line cannot be deleted.
///
/// Expected: Err(DbErr) and the product still exists
#[tokio::test]
async fn fails_when_product_was_ordered() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, product, _, _) = factory::helpers::create_placed_order_with_dependencies(db).await?;

    let repo = ProductRepository::new(db);

    assert!(repo.delete(product.id).await.is_err());
    assert!(repo.find_by_id(product.id).await?.is_some());

    Ok(())
}
