//! Type-safe session management wrappers.
//!
//! Each struct wraps the same underlying `Session` but only exposes the keys belonging to
//! its concern:
//! - `AuthSession` - Logged in user id
//! - `CsrfSession` - CSRF token of a pending OAuth flow
//! - `OAuthFlowSession` - Moderator flag carried across the provider redirect

use tower_sessions::Session;

use crate::server::error::AppError;

pub(crate) const SESSION_AUTH_USER_ID: &str = "auth:user";
const SESSION_AUTH_CSRF_TOKEN: &str = "auth:csrf_token";
const SESSION_AUTH_SET_MODERATOR: &str = "auth:set_moderator";

/// Authentication session management.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the logged in user's id.
    ///
    /// The session id is cycled first so a session fixed before login cannot be reused.
    ///
    /// # Returns
    /// - `Ok(())` - User id stored
    /// - `Err(AppError::SessionErr(_))` - Failed to write the session
    pub async fn set_user_id(&self, user_id: i32) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        self.session.insert(SESSION_AUTH_USER_ID, user_id).await?;
        Ok(())
    }

    /// Retrieves the logged in user's id.
    ///
    /// # Returns
    /// - `Ok(Some(user_id))` - User is logged in
    /// - `Ok(None)` - No user in session
    /// - `Err(AppError::SessionErr(_))` - Failed to read the session
    pub async fn get_user_id(&self) -> Result<Option<i32>, AppError> {
        let user_id = self.session.get::<i32>(SESSION_AUTH_USER_ID).await?;
        Ok(user_id)
    }

    /// Removes all data from the session and deletes it from the store.
    pub async fn clear(&self) -> Result<(), AppError> {
        self.session.flush().await?;
        Ok(())
    }
}

/// CSRF protection session management.
///
/// Tokens are stored when the login redirect is issued and taken during the callback, so
/// each token validates at most once.
pub struct CsrfSession<'a> {
    session: &'a Session,
}

impl<'a> CsrfSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    pub async fn set_token(&self, token: String) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_CSRF_TOKEN, token).await?;
        Ok(())
    }

    pub async fn take_token(&self) -> Result<Option<String>, AppError> {
        let token = self.session.remove(SESSION_AUTH_CSRF_TOKEN).await?;
        Ok(token)
    }
}

/// OAuth flow state that must survive the redirect to the identity provider.
pub struct OAuthFlowSession<'a> {
    session: &'a Session,
}

impl<'a> OAuthFlowSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Marks that a valid moderator code was presented when the login started.
    pub async fn set_moderator_flag(&self, set_moderator: bool) -> Result<(), AppError> {
        self.session
            .insert(SESSION_AUTH_SET_MODERATOR, set_moderator)
            .await?;
        Ok(())
    }

    /// Retrieves and removes the moderator flag, `false` when absent.
    pub async fn take_moderator_flag(&self) -> Result<bool, AppError> {
        let set_moderator = self
            .session
            .remove(SESSION_AUTH_SET_MODERATOR)
            .await?
            .unwrap_or(false);
        Ok(set_moderator)
    }
}
