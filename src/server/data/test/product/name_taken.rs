use super::*;

/// Tests detecting an existing name.
///
/// Expected: Ok(true) for a used name, Ok(false) for a free one
#[tokio::test]
async fn detects_existing_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::product::create_product_named(db, "Mug").await?;

    let repo = ProductRepository::new(db);

    assert!(repo.name_taken("Mug", None).await?);
    assert!(!repo.name_taken("Bowl", None).await?);

    Ok(())
}

/// Tests that a product's own name does not count as taken when renaming it.
///
/// Expected: Ok(false) when excluding the owner, Ok(true) for another product
#[tokio::test]
async fn ignores_excluded_product() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mug = factory::product::create_product_named(db, "Mug").await?;
    let bowl = factory::product::create_product_named(db, "Bowl").await?;

    let repo = ProductRepository::new(db);

    assert!(!repo.name_taken("Mug", Some(mug.id)).await?);
    assert!(repo.name_taken("Mug", Some(bowl.id)).await?);

    Ok(())
}

/// Tests that the name check ignores case.
///
/// Expected: Ok(true) for every casing of a used name
#[tokio::test]
async fn ignores_case() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mug = factory::product::create_product_named(db, "Mug").await?;

    let repo = ProductRepository::new(db);

    assert!(repo.name_taken("mug", None).await?);
    assert!(repo.name_taken("MUG", None).await?);
    assert!(!repo.name_taken("mUg", Some(mug.id)).await?);

    Ok(())
}
