use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use time::Duration;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config,
    data::user::UserRepository,
    error::{config::ConfigError, AppError},
    service::moderator_code::ModeratorCodeService,
    state::OAuth2Client,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the application's SQLite pool.
///
/// Sessions expire after 7 days of inactivity. Cookies are marked secure when the
/// application is served over HTTPS.
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer to attach to the API router
/// - `Err(AppError::SqlxErr)` - Failed to create the session table
pub async fn connect_to_session(
    db: &DatabaseConnection,
    config: &Config,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store.migrate().await?;

    let session = SessionManagerLayer::new(session_store)
        .with_secure(config.app_url.starts_with("https://"))
        .with_expiry(Expiry::OnInactivity(Duration::days(7)));

    Ok(session)
}

/// Builds the HTTP client used for identity provider requests.
///
/// Redirects are not followed.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

/// Builds the OAuth2 client from the configured provider endpoints.
///
/// # Returns
/// - `Ok(OAuth2Client)` - Client with authorization, token and redirect URLs set
/// - `Err(AppError::ConfigErr)` - One of the configured URLs is invalid
pub fn setup_oauth_client(config: &Config) -> Result<OAuth2Client, AppError> {
    use oauth2::{basic::BasicClient, AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};

    let invalid = |name: &str| {
        let name = name.to_string();
        move |e: url::ParseError| ConfigError::InvalidEnvVar {
            name,
            reason: e.to_string(),
        }
    };

    let client = BasicClient::new(ClientId::new(config.oauth_client_id.clone()))
        .set_client_secret(ClientSecret::new(config.oauth_client_secret.clone()))
        .set_auth_uri(
            AuthUrl::new(config.oauth_auth_url.clone()).map_err(invalid("OAUTH_AUTH_URL"))?,
        )
        .set_token_uri(
            TokenUrl::new(config.oauth_token_url.clone()).map_err(invalid("OAUTH_TOKEN_URL"))?,
        )
        .set_redirect_uri(
            RedirectUrl::new(config.oauth_redirect_url.clone())
                .map_err(invalid("OAUTH_REDIRECT_URL"))?,
        );

    Ok(client)
}

/// Generates a moderator login link when no moderator exists yet.
///
/// The link carries a one-time code and is written to the log; it stays valid for 60
/// seconds.
pub async fn check_for_moderator(
    db: &DatabaseConnection,
    config: &Config,
    moderator_code_service: &ModeratorCodeService,
) -> Result<(), AppError> {
    let user_repo = UserRepository::new(db);

    if user_repo.moderator_exists().await? {
        return Ok(());
    }

    let code = moderator_code_service.generate().await;
    let login_link = format!(
        "{}/api/auth/login?moderator_code={}",
        config.app_url.trim_end_matches('/'),
        code
    );

    tracing::info!(
        "No moderator found, log in within 60 seconds to become one: {}",
        login_link
    );

    Ok(())
}
