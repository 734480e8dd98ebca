use super::*;

/// Tests deleting a secondary photo removes the row and the file.
///
/// Expected: Ok with one photo left
#[tokio::test]
async fn deletes_secondary_photo() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let storage = LocalPhotoStorage::open(dir.path(), "/photos").await?;

    let product = factory::product::create_product(db).await?;
    let service = PhotoService::new(db, &storage);
    service.add(product.id, vec![1], "image/png").await?;
    let second = service.add(product.id, vec![2], "image/png").await?;

    service.delete(second.id).await?;

    let loaded = ProductService::new(db).get(product.id).await?;
    assert_eq!(loaded.photos.len(), 1);
    assert!(!dir
        .path()
        .join(second.public_id.as_deref().unwrap())
        .exists());

    Ok(())
}

/// Tests deleting the main photo.
///
/// Expected: Err(BadRequest("You cannot delete the main photo"))
#[tokio::test]
async fn rejects_main_photo() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let storage = LocalPhotoStorage::open(dir.path(), "/photos").await?;

    let (_, main, _) = factory::helpers::create_product_with_photos(db).await?;

    let result = PhotoService::new(db, &storage).delete(main.id).await;

    assert!(matches!(
        result,
        Err(AppError::BadRequest(ref msg)) if msg == "You cannot delete the main photo"
    ));

    Ok(())
}
