use super::*;

/// Tests switching the main photo.
///
/// Expected: Ok with exactly the chosen photo marked main
#[tokio::test]
async fn switches_main_photo() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let storage = LocalPhotoStorage::open(dir.path(), "/photos").await?;

    let (product, main, other) = factory::helpers::create_product_with_photos(db).await?;

    PhotoService::new(db, &storage).set_main(other.id).await?;

    let loaded = ProductService::new(db).get(product.id).await?;
    let mains: Vec<i32> = loaded
        .photos
        .iter()
        .filter(|p| p.is_main)
        .map(|p| p.id)
        .collect();
    assert_eq!(mains, vec![other.id]);
    assert!(loaded.photos.iter().any(|p| p.id == main.id && !p.is_main));

    Ok(())
}

/// Tests choosing the photo that is already main.
///
/// Expected: Err(BadRequest("This is already the main photo"))
#[tokio::test]
async fn rejects_current_main_photo() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let storage = LocalPhotoStorage::open(dir.path(), "/photos").await?;

    let (_, main, _) = factory::helpers::create_product_with_photos(db).await?;

    let result = PhotoService::new(db, &storage).set_main(main.id).await;

    assert!(matches!(
        result,
        Err(AppError::BadRequest(ref msg)) if msg == "This is already the main photo"
    ));

    Ok(())
}

/// Tests choosing a photo that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn missing_photo_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let storage = LocalPhotoStorage::open(dir.path(), "/photos").await?;

    let result = PhotoService::new(db, &storage).set_main(12).await;

    assert!(matches!(result, Err(AppError::NotFound(ref msg)) if msg == "Photo 12 not found"));

    Ok(())
}
