use super::*;

/// Tests inserting a photo row.
///
/// Expected: Ok with all fields stored
#[tokio::test]
async fn creates_photo() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let product = factory::product::create_product(db).await?;

    let repo = ProductPhotoRepository::new(db);
    let photo = repo
        .create(CreatePhotoParam {
            product_id: product.id,
            url: "/photos/abc.png".to_string(),
            public_id: Some("abc.png".to_string()),
            is_main: true,
        })
        .await?;

    assert_eq!(photo.product_id, product.id);
    assert_eq!(photo.url, "/photos/abc.png");
    assert_eq!(photo.public_id.as_deref(), Some("abc.png"));
    assert!(photo.is_main);

    let found = repo.find_by_id(photo.id).await?;
    assert_eq!(found, Some(photo));

    Ok(())
}

/// Tests that photos require an existing product.
///
/// Expected: Err(DbErr) from the foreign key
#[tokio::test]
async fn fails_for_missing_product() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ProductPhotoRepository::new(db)
        .create(CreatePhotoParam {
            product_id: 999,
            url: "/photos/x.png".to_string(),
            public_id: None,
            is_main: false,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
