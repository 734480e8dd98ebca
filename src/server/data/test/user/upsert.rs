use super::*;

/// Tests creating a new user.
///
/// Expected: Ok with user created and moderator flag set to false
#[tokio::test]
async fn creates_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .upsert(UpsertUserParam {
            provider_id: "123456789".to_string(),
            name: "TestUser".to_string(),
            moderator: None,
        })
        .await?;

    assert_eq!(user.provider_id, "123456789");
    assert_eq!(user.name, "TestUser");
    assert!(!user.moderator);

    Ok(())
}

/// Tests creating a new user with the moderator flag.
///
/// Expected: Ok with moderator flag set to true
#[tokio::test]
async fn creates_new_moderator() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .upsert(UpsertUserParam {
            provider_id: "123456789".to_string(),
            name: "Moderator".to_string(),
            moderator: Some(true),
        })
        .await?;

    assert!(user.moderator);

    Ok(())
}

/// Tests that logging in again updates the name but keeps the moderator flag.
///
/// Expected: Ok with same id, name updated and moderator flag preserved
#[tokio::test]
async fn updates_name_and_preserves_moderator() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let original = repo
        .upsert(UpsertUserParam {
            provider_id: "123456789".to_string(),
            name: "OriginalName".to_string(),
            moderator: Some(true),
        })
        .await?;

    let updated = repo
        .upsert(UpsertUserParam {
            provider_id: "123456789".to_string(),
            name: "UpdatedName".to_string(),
            moderator: None,
        })
        .await?;

    assert_eq!(updated.id, original.id);
    assert_eq!(updated.name, "UpdatedName");
    assert!(updated.moderator);

    Ok(())
}

/// Tests that an explicit moderator flag is written on conflict.
///
/// Expected: Ok with existing regular user promoted
#[tokio::test]
async fn promotes_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::user::UserFactory::new(db)
        .provider_id("555")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo
        .upsert(UpsertUserParam {
            provider_id: "555".to_string(),
            name: existing.name.clone(),
            moderator: Some(true),
        })
        .await?;

    assert_eq!(user.id, existing.id);
    assert!(user.moderator);

    Ok(())
}
