use dioxus_logger::tracing;
use oauth2::{
    basic::BasicTokenType, AuthorizationCode, CsrfToken, EmptyExtraTokenFields, Scope,
    StandardTokenResponse, TokenResponse,
};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use url::Url;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{UpsertUserParam, User},
    state::OAuth2Client,
};

/// Identity provider user id, a string for Discord and a number for some other providers.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(untagged)]
enum ProviderUserId {
    Text(String),
    Number(u64),
}

/// Profile returned by the identity provider's user info endpoint.
#[derive(Debug, Deserialize)]
struct ProviderUser {
    id: ProviderUserId,
    #[serde(alias = "login")]
    username: String,
    /// Display name, preferred over `username` when present
    #[serde(default)]
    global_name: Option<String>,
}

impl ProviderUser {
    fn provider_id(&self) -> String {
        match &self.id {
            ProviderUserId::Text(id) => id.clone(),
            ProviderUserId::Number(id) => id.to_string(),
        }
    }

    fn display_name(&self) -> String {
        self.global_name
            .clone()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| self.username.clone())
    }
}

/// Service for the OAuth2 authorization-code login flow.
pub struct AuthService<'a> {
    pub db: &'a DatabaseConnection,
    /// HTTP client for identity provider requests.
    pub http_client: &'a reqwest::Client,
    pub oauth_client: &'a OAuth2Client,
    /// Endpoint returning the logged in user's profile.
    pub user_info_url: &'a str,
}

impl<'a> AuthService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        oauth_client: &'a OAuth2Client,
        user_info_url: &'a str,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            user_info_url,
        }
    }

    /// Generates the provider login URL with CSRF protection.
    ///
    /// # Arguments
    /// - `scopes` - Scopes to request from the provider
    ///
    /// # Returns
    /// - `(Url, CsrfToken)` - Authorization URL and the CSRF state to store in the session
    pub fn login_url(&self, scopes: &[String]) -> (Url, CsrfToken) {
        let (authorize_url, csrf_state) = self
            .oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scopes(scopes.iter().cloned().map(Scope::new))
            .url();

        (authorize_url, csrf_state)
    }

    /// Exchanges the authorization code and upserts the user.
    ///
    /// # Arguments
    /// - `authorization_code` - Code from the provider callback
    /// - `set_moderator` - Grant the moderator flag, set when a valid moderator code was used
    ///
    /// # Returns
    /// - `Ok(User)` - The logged in user
    /// - `Err(AppError::AuthErr(TokenExchange))` - Code exchange failed
    /// - `Err(AppError::ReqwestErr)` - Fetching the profile failed
    /// - `Err(AppError::DbErr)` - Upsert failed
    pub async fn callback(
        &self,
        authorization_code: String,
        set_moderator: bool,
    ) -> Result<User, AppError> {
        let token = self
            .oauth_client
            .exchange_code(AuthorizationCode::new(authorization_code))
            .request_async(self.http_client)
            .await
            .map_err(|e| AuthError::TokenExchange(e.to_string()))?;

        let provider_user = self.fetch_provider_user(&token).await?;

        let user = UserRepository::new(self.db)
            .upsert(UpsertUserParam {
                provider_id: provider_user.provider_id(),
                name: provider_user.display_name(),
                moderator: set_moderator.then_some(true),
            })
            .await?;

        if set_moderator {
            tracing::info!("User {} has been made a moderator", user.name);
        }

        Ok(user)
    }

    async fn fetch_provider_user(
        &self,
        token: &StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    ) -> Result<ProviderUser, AppError> {
        let user = self
            .http_client
            .get(self.user_info_url)
            .bearer_auth(token.access_token().secret())
            .header(reqwest::header::USER_AGENT, "storefront")
            .send()
            .await?
            .error_for_status()?
            .json::<ProviderUser>()
            .await?;

        Ok(user)
    }
}
