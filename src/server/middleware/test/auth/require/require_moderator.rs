use super::*;

/// Tests moderator successfully passes moderator permission check.
///
/// Expected: Ok(User) with moderator=true
#[tokio::test]
async fn grants_access_to_moderator() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::UserFactory::new(db)
        .provider_id("123456789")
        .name("Moderator")
        .moderator(true)
        .build()
        .await?;

    AuthSession::new(session).set_user_id(user.id).await?;

    let auth_guard = AuthGuard::new(db, session);
    let returned_user = auth_guard.require(&[Permission::Moderator]).await?;

    assert_eq!(returned_user.id, user.id);
    assert_eq!(returned_user.provider_id, "123456789");
    assert_eq!(returned_user.name, "Moderator");
    assert!(returned_user.moderator);

    Ok(())
}

/// Tests regular user is denied moderator permission.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_access_to_regular_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::create_user(db).await?;

    AuthSession::new(session).set_user_id(user.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Moderator])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id, message))) => {
            assert_eq!(user_id, user.id);
            assert!(message.contains("moderator"));
        }
        other => panic!("Expected AccessDenied error, got: {:?}", other),
    }

    Ok(())
}

/// Tests unauthenticated user is denied moderator permission.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn denies_access_when_not_authenticated() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Moderator])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::UserNotInSession)) => {}
        other => panic!("Expected UserNotInSession error, got: {:?}", other),
    }

    Ok(())
}
