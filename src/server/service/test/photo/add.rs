use super::*;

/// Tests that the first photo becomes main and later ones do not.
///
/// Expected: Ok with is_main true then false, files written to the storage directory
#[tokio::test]
async fn first_photo_becomes_main() -> Result<(), AppError> {
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

    let first = service.add(product.id, vec![1, 2, 3], "image/png").await?;
    let second = service.add(product.id, vec![4, 5, 6], "image/jpeg").await?;

    assert!(first.is_main);
    assert!(!second.is_main);
    assert!(first.url.starts_with("/photos/"));
    for photo in [&first, &second] {
        let public_id = photo.public_id.as_deref().unwrap();
        assert!(dir.path().join(public_id).exists());
    }

    let loaded = ProductService::new(db).get(product.id).await?;
    assert_eq!(loaded.photos.len(), 2);
    assert_eq!(loaded.main_photo_url(), Some(first.url.clone()));

    Ok(())
}

/// Tests uploading a photo for a missing product.
///
/// Expected: Err(NotFound) and nothing written
#[tokio::test]
async fn missing_product_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let storage = LocalPhotoStorage::open(dir.path(), "/photos").await?;

    let result = PhotoService::new(db, &storage)
        .add(77, vec![1], "image/png")
        .await;

    assert!(matches!(result, Err(AppError::NotFound(ref msg)) if msg.contains("77")));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);

    Ok(())
}

/// Tests uploading a file that is not an image.
///
/// Expected: Err(PhotoErr)
#[tokio::test]
async fn rejects_non_image_upload() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let storage = LocalPhotoStorage::open(dir.path(), "/photos").await?;

    let product = factory::product::create_product(db).await?;

    let result = PhotoService::new(db, &storage)
        .add(product.id, b"hello".to_vec(), "text/plain")
        .await;

    assert!(matches!(result, Err(AppError::PhotoErr(_))));

    Ok(())
}

/// Tests the existence check run before an upload is read.
///
/// Expected: Err(NotFound("Product 42 not found")) for a missing product, Ok otherwise
#[tokio::test]
async fn require_product_checks_existence() -> Result<(), AppError> {
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

    let missing = service.require_product(42).await;

    assert!(matches!(missing, Err(AppError::NotFound(ref msg)) if msg == "Product 42 not found"));
    service.require_product(product.id).await?;

    Ok(())
}
