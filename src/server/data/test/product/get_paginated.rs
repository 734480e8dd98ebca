use super::*;

/// Tests that products are paged in name order.
///
/// Expected: Ok with two products on the first page, one on the second, total 3
#[tokio::test]
async fn pages_products_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::product::create_product_named(db, "Cup").await?;
    factory::product::create_product_named(db, "Apron").await?;
    factory::product::create_product_named(db, "Bowl").await?;

    let repo = ProductRepository::new(db);

    let (first, total) = repo.get_paginated(0, 2).await?;
    let (second, _) = repo.get_paginated(1, 2).await?;

    assert_eq!(total, 3);
    let first_names: Vec<&str> = first.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(first_names, vec!["Apron", "Bowl"]);
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].name, "Cup");

    Ok(())
}

/// Tests that listed products carry their own photos only.
///
/// Expected: Ok with main photo attached to the right product
#[tokio::test]
async fn attaches_photos_per_product() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (with_photos, main, _) = factory::helpers::create_product_with_photos(db).await?;
    let without_photos = factory::product::create_product(db).await?;

    let repo = ProductRepository::new(db);
    let (products, _) = repo.get_paginated(0, 10).await?;

    let listed_with = products.iter().find(|p| p.id == with_photos.id).unwrap();
    let listed_without = products.iter().find(|p| p.id == without_photos.id).unwrap();

    assert_eq!(listed_with.photos.len(), 2);
    assert_eq!(listed_with.main_photo_url(), Some(main.url));
    assert!(listed_without.photos.is_empty());
    assert_eq!(listed_without.main_photo_url(), None);

    Ok(())
}

/// Tests paging past the end.
///
/// Expected: Ok with no products and the real total
#[tokio::test]
async fn empty_page_past_end() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::product::create_product(db).await?;

    let (products, total) = ProductRepository::new(db).get_paginated(5, 10).await?;

    assert!(products.is_empty());
    assert_eq!(total, 1);

    Ok(())
}
