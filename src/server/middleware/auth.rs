use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
};

/// Permissions an endpoint can require on top of being logged in.
pub enum Permission {
    Moderator,
}

/// Resolves the session's user and checks permissions.
///
/// `require(&[])` only requires a logged in user.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Returns the logged in user if they hold every permission in `permissions`.
    ///
    /// # Returns
    /// - `Ok(User)` - The authorized user
    /// - `Err(AuthError::UserNotInSession)` - Not logged in (401)
    /// - `Err(AuthError::UserNotInDatabase)` - Session references a deleted user (401)
    /// - `Err(AuthError::AccessDenied)` - Missing permission (403)
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Moderator => {
                    if !user.moderator {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "User attempted to access the moderator API without the moderator flag"
                                .to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}
