use super::*;

/// Tests counting photos of one product only.
///
/// Expected: Ok(2) for the product with photos, Ok(0) for the other
#[tokio::test]
async fn counts_photos_per_product() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (product, _, _) = factory::helpers::create_product_with_photos(db).await?;
    let other = factory::product::create_product(db).await?;

    let repo = ProductPhotoRepository::new(db);

    assert_eq!(repo.count_by_product(product.id).await?, 2);
    assert_eq!(repo.count_by_product(other.id).await?, 0);

    Ok(())
}
