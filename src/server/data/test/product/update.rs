use super::*;

/// Tests overwriting a product's fields.
///
/// Expected: Ok with all fields changed
#[tokio::test]
async fn updates_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let product = factory::product::create_product(db).await?;

    let repo = ProductRepository::new(db);
    repo.update(UpdateProductParam {
        id: product.id,
        name: "Renamed".to_string(),
        description: None,
        sale_price: 3.0,
    })
    .await?;

    let updated = repo.find_by_id(product.id).await?.unwrap();
    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.description, None);
    assert_eq!(updated.sale_price, 3.0);
    assert_eq!(updated.created_at, product.created_at);

    Ok(())
}

/// Tests that renaming onto another product's name fails.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn fails_on_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::product::create_product_named(db, "Taken").await?;
    let product = factory::product::create_product(db).await?;

    let result = ProductRepository::new(db)
        .update(UpdateProductParam {
            id: product.id,
            name: "Taken".to_string(),
            description: None,
            sale_price: 1.0,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}

/// Tests updating a missing product.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn fails_for_missing_product() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ProductRepository::new(db)
        .update(UpdateProductParam {
            id: 77,
            name: "Ghost".to_string(),
            description: None,
            sale_price: 1.0,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
