use super::*;

/// Tests switching the main photo.
///
/// Expected: Ok with exactly the target photo marked main
#[tokio::test]
async fn switches_main_photo() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (product, main, other) = factory::helpers::create_product_with_photos(db).await?;

    let repo = ProductPhotoRepository::new(db);
    repo.set_main(product.id, other.id).await?;

    let photos = ProductRepository::new(db)
        .find_by_id(product.id)
        .await?
        .unwrap()
        .photos;
    let main_ids: Vec<i32> = photos.iter().filter(|p| p.is_main).map(|p| p.id).collect();
    assert_eq!(main_ids, vec![other.id]);
    assert!(!repo.find_by_id(main.id).await?.unwrap().is_main);

    Ok(())
}

/// Tests that other products' main photos are untouched.
///
/// Expected: Ok with the second product's main photo still main
#[tokio::test]
async fn leaves_other_products_alone() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (product, _, other) = factory::helpers::create_product_with_photos(db).await?;
    let (_, foreign_main, _) = factory::helpers::create_product_with_photos(db).await?;

    let repo = ProductPhotoRepository::new(db);
    repo.set_main(product.id, other.id).await?;

    assert!(repo.find_by_id(foreign_main.id).await?.unwrap().is_main);

    Ok(())
}

/// Tests that a photo of another product cannot become main.
///
/// Expected: Err(DbErr::RecordNotUpdated)
#[tokio::test]
async fn rejects_photo_of_other_product() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (product, _, _) = factory::helpers::create_product_with_photos(db).await?;
    let (_, _, foreign) = factory::helpers::create_product_with_photos(db).await?;

    let result = ProductPhotoRepository::new(db)
        .set_main(product.id, foreign.id)
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotUpdated)));

    Ok(())
}
