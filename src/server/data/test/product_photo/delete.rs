use super::*;

/// Tests deleting a photo row.
///
/// Expected: Ok(true) then Ok(false) on the second attempt
#[tokio::test]
async fn deletes_photo() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (product, _, other) = factory::helpers::create_product_with_photos(db).await?;

    let repo = ProductPhotoRepository::new(db);

    assert!(repo.delete(other.id).await?);
    assert!(!repo.delete(other.id).await?);
    assert_eq!(repo.count_by_product(product.id).await?, 1);

    Ok(())
}
