use crate::server::error::{config::ConfigError, AppError};

const DISCORD_AUTH_URL: &str = "https://discord.com/oauth2/authorize";
const DISCORD_TOKEN_URL: &str = "https://discord.com/api/oauth2/token";
const DISCORD_USER_INFO_URL: &str = "https://discord.com/api/users/@me";
const DISCORD_SCOPES: &str = "identify";

const DEFAULT_PHOTO_DIR: &str = "./photos";
const DEFAULT_PHOTO_BASE_URL: &str = "/photos";
const DEFAULT_MAX_PHOTO_BYTES: usize = 5 * 1024 * 1024;
const DEFAULT_BASKET_TTL_DAYS: i64 = 30;
const MAX_BASKET_TTL_DAYS: i64 = 3650;

pub struct Config {
    pub database_url: String,
    pub app_url: String,

    pub oauth_client_id: String,
    pub oauth_client_secret: String,
    pub oauth_redirect_url: String,

    pub oauth_auth_url: String,
    pub oauth_token_url: String,
    pub oauth_user_info_url: String,
    /// Space separated scopes requested during login
    pub oauth_scopes: String,

    /// Directory uploaded photos are written to
    pub photo_dir: String,
    /// URL prefix the photo directory is served under
    pub photo_base_url: String,
    pub max_photo_bytes: usize,

    /// Baskets untouched for longer than this are removed by the cleanup job
    pub basket_ttl_days: i64,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            app_url: required("APP_URL")?,
            oauth_client_id: required("OAUTH_CLIENT_ID")?,
            oauth_client_secret: required("OAUTH_CLIENT_SECRET")?,
            oauth_redirect_url: required("OAUTH_REDIRECT_URL")?,
            oauth_auth_url: optional("OAUTH_AUTH_URL", DISCORD_AUTH_URL),
            oauth_token_url: optional("OAUTH_TOKEN_URL", DISCORD_TOKEN_URL),
            oauth_user_info_url: optional("OAUTH_USER_INFO_URL", DISCORD_USER_INFO_URL),
            oauth_scopes: optional("OAUTH_SCOPES", DISCORD_SCOPES),
            photo_dir: optional("PHOTO_DIR", DEFAULT_PHOTO_DIR),
            photo_base_url: optional("PHOTO_BASE_URL", DEFAULT_PHOTO_BASE_URL)
                .trim_end_matches('/')
                .to_string(),
            max_photo_bytes: parsed("MAX_PHOTO_BYTES", DEFAULT_MAX_PHOTO_BYTES)?,
            basket_ttl_days: basket_ttl_days()?,
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn basket_ttl_days() -> Result<i64, ConfigError> {
    let days = parsed("BASKET_TTL_DAYS", DEFAULT_BASKET_TTL_DAYS)?;
    within("BASKET_TTL_DAYS", days, 1, MAX_BASKET_TTL_DAYS)
}

fn within(name: &str, value: i64, min: i64, max: i64) -> Result<i64, ConfigError> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: format!("{} is outside {}..={}", value, min, max),
        })
    }
}

fn parsed<T>(name: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(value) => value.parse::<T>().map_err(|e| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: e.to_string(),
        }),
        Err(_) => Ok(default),
    }
}
