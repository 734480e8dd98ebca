use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use dioxus_logger::tracing;
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, user::UserDto},
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, AppError},
        middleware::session::{AuthSession, CsrfSession, OAuthFlowSession},
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

#[derive(Deserialize)]
pub struct LoginParams {
    /// One-time code granting the moderator flag, logged at startup.
    pub moderator_code: Option<String>,
}

/// Query parameters for the OAuth callback endpoint.
///
/// # Fields
/// - `state` - CSRF protection token that must match the value stored in the session
/// - `code` - Authorization code used to exchange for access tokens
#[derive(Deserialize)]
pub struct CallbackParams {
    /// CSRF state token to be validated against the session value.
    pub state: String,
    /// Authorization code from the identity provider for token exchange.
    pub code: String,
}

/// Redirect to the identity provider's login page.
///
/// A valid `moderator_code` marks the login flow so the callback grants the moderator
/// flag. An invalid code is ignored and the login proceeds as a regular one.
#[utoipa::path(
    get,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    params(
        ("moderator_code" = Option<String>, Query, description = "One-time moderator code")
    ),
    responses(
        (status = 307, description = "Redirect to the identity provider"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<LoginParams>,
) -> Result<impl IntoResponse, AppError> {
    let set_moderator = match params.moderator_code {
        Some(code) => {
            let valid = state.moderator_code_service.validate_and_consume(&code).await;
            if !valid {
                tracing::warn!("Login attempted with an invalid or expired moderator code");
            }
            valid
        }
        None => false,
    };

    let auth_service = AuthService::new(
        &state.db,
        &state.http_client,
        &state.oauth_client,
        &state.user_info_url,
    );
    let (url, csrf_token) = auth_service.login_url(&state.oauth_scopes);

    CsrfSession::new(&session)
        .set_token(csrf_token.secret().clone())
        .await?;
    OAuthFlowSession::new(&session)
        .set_moderator_flag(set_moderator)
        .await?;

    Ok(Redirect::temporary(url.as_str()))
}

/// Handle the identity provider's redirect back to the application.
///
/// Validates the CSRF state, upserts the user, stores the user id in the session
/// and redirects to `/`.
#[utoipa::path(
    get,
    path = "/api/auth/callback",
    tag = AUTH_TAG,
    params(
        ("state" = String, Query, description = "CSRF state"),
        ("code" = String, Query, description = "Authorization code")
    ),
    responses(
        (status = 307, description = "Logged in, redirect to the home page"),
        (status = 400, description = "CSRF validation or token exchange failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<CallbackParams>,
) -> Result<impl IntoResponse, AppError> {
    validate_csrf(&session, &params.state).await?;

    let set_moderator = OAuthFlowSession::new(&session).take_moderator_flag().await?;

    let auth_service = AuthService::new(
        &state.db,
        &state.http_client,
        &state.oauth_client,
        &state.user_info_url,
    );
    let user = auth_service.callback(params.code, set_moderator).await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    tracing::debug!("User {} logged in", user.id);

    Ok(Redirect::temporary("/"))
}

/// Clear the session and redirect to `/`.
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Logged out, redirect to the home page"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await?;

    Ok(Redirect::temporary("/"))
}

/// Get the logged in user.
///
/// # Returns
/// - `200 OK` - The user
/// - `404 Not Found` - Not logged in, or the session's user no longer exists
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged in user", body = UserDto),
        (status = 404, description = "User not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let Some(user_id) = AuthSession::new(&session).get_user_id().await? else {
        return Err(AppError::NotFound("User not logged in".to_string()));
    };

    let Some(user) = UserRepository::new(&state.db).find_by_id(user_id).await? else {
        return Err(AppError::NotFound(format!("User {} not found", user_id)));
    };

    Ok((StatusCode::OK, Json(user.into_dto())))
}

async fn validate_csrf(session: &Session, csrf_state: &str) -> Result<(), AppError> {
    let stored_state = CsrfSession::new(session).take_token().await?;

    if let Some(state) = stored_state {
        if state == csrf_state {
            return Ok(());
        }
    }

    Err(AppError::AuthErr(AuthError::CsrfValidationFailed))
}
