//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and cloned into each handler through
//! Axum's state extraction. Every field is cheap to clone: the database connection is a
//! pool handle, the HTTP and OAuth2 clients are reference counted internally, and the
//! photo storage sits behind an `Arc`.

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::{service::moderator_code::ModeratorCodeService, storage::PhotoStorage};

/// OAuth2 client with the authorization and token endpoints set.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: DatabaseConnection,

    /// HTTP client for identity provider requests.
    ///
    /// Configured without redirect following.
    pub http_client: reqwest::Client,

    /// OAuth2 client for the login flow.
    pub oauth_client: OAuth2Client,

    /// Identity provider endpoint returning the logged in user's profile.
    pub user_info_url: String,

    /// Scopes requested from the identity provider.
    pub oauth_scopes: Vec<String>,

    /// One-time codes granting the moderator flag on login.
    pub moderator_code_service: ModeratorCodeService,

    /// Backend storing uploaded product photos.
    pub photo_storage: Arc<dyn PhotoStorage>,

    /// Public base URL of the application.
    pub app_url: String,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        oauth_client: OAuth2Client,
        user_info_url: String,
        oauth_scopes: Vec<String>,
        moderator_code_service: ModeratorCodeService,
        photo_storage: Arc<dyn PhotoStorage>,
        app_url: String,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            user_info_url,
            oauth_scopes,
            moderator_code_service,
            photo_storage,
            app_url,
        }
    }
}
