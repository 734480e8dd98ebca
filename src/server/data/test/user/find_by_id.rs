use super::*;

/// Tests finding an existing user by id.
///
/// Expected: Ok(Some(User)) with matching fields
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .name("Finder")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_id(user.id).await?;

    let found = found.expect("user should exist");
    assert_eq!(found.id, user.id);
    assert_eq!(found.name, "Finder");

    Ok(())
}

/// Tests that a missing user yields None.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(repo.find_by_id(999).await?.is_none());

    Ok(())
}
