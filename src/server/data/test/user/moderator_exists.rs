use super::*;

/// Tests that an empty user table has no moderator.
///
/// Expected: Ok(false)
#[tokio::test]
async fn false_without_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!UserRepository::new(db).moderator_exists().await?);

    Ok(())
}

/// Tests that regular users do not count as moderators.
///
/// Expected: Ok(false)
#[tokio::test]
async fn false_with_only_regular_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user(db).await?;
    factory::user::create_user(db).await?;

    assert!(!UserRepository::new(db).moderator_exists().await?);

    Ok(())
}

/// Tests that a single moderator is detected.
///
/// Expected: Ok(true)
#[tokio::test]
async fn true_with_moderator() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user(db).await?;
    factory::user::create_moderator(db).await?;

    assert!(UserRepository::new(db).moderator_exists().await?);

    Ok(())
}
