//! One-time moderator codes for bootstrapping the first moderator.
//!
//! When the database has no moderator at startup, a code is generated and logged together
//! with a login link. The first user to log in through that link within the TTL is granted
//! the moderator flag. Codes live in memory only and are consumed on first successful use.

use rand::Rng;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// Time-to-live for moderator codes in seconds.
const MODERATOR_CODE_TTL_SECONDS: u64 = 60;

const CODE_LENGTH: usize = 32;

#[derive(Clone)]
struct ModeratorCode {
    code: String,
    expires_at: Instant,
}

impl ModeratorCode {
    fn new(code: String, ttl: Duration) -> Self {
        Self {
            code,
            expires_at: Instant::now() + ttl,
        }
    }

    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// Holds at most one active moderator code.
///
/// Cloning shares the underlying code, so the instance stored in `AppState` and the one
/// used at startup see the same state.
#[derive(Clone)]
pub struct ModeratorCodeService {
    code: Arc<RwLock<Option<ModeratorCode>>>,
    ttl: Duration,
}

impl ModeratorCodeService {
    /// Creates a service with no active code and the default 60 second TTL.
    pub fn new() -> Self {
        Self::with_ttl(Duration::from_secs(MODERATOR_CODE_TTL_SECONDS))
    }

    /// Creates a service whose codes expire after `ttl`.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            code: Arc::new(RwLock::new(None)),
            ttl,
        }
    }

    /// Generates a new random 32-character alphanumeric code, replacing any previous one.
    ///
    /// # Returns
    /// - `String` - The generated code
    pub async fn generate(&self) -> String {
        let code = Self::generate_random_code();
        *self.code.write().await = Some(ModeratorCode::new(code.clone(), self.ttl));
        code
    }

    /// Validates the provided code and consumes it on success.
    ///
    /// Expired codes are discarded and fail validation. A wrong code leaves the stored code
    /// untouched.
    ///
    /// # Returns
    /// - `true` - Code matched and had not expired
    /// - `false` - Code mismatch, expired, or no code exists
    pub async fn validate_and_consume(&self, input_code: &str) -> bool {
        let mut code = self.code.write().await;

        let Some(stored) = code.as_ref() else {
            return false;
        };

        if stored.is_expired() {
            *code = None;
            return false;
        }

        if stored.code == input_code {
            *code = None;
            return true;
        }

        false
    }

    fn generate_random_code() -> String {
        const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                                 abcdefghijklmnopqrstuvwxyz\
                                 0123456789";

        let mut rng = rand::rng();

        (0..CODE_LENGTH)
            .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
            .collect()
    }

    #[cfg(test)]
    pub async fn has_valid_code(&self) -> bool {
        let mut code = self.code.write().await;

        match code.as_ref() {
            Some(stored) if stored.is_expired() => {
                *code = None;
                false
            }
            Some(_) => true,
            None => false,
        }
    }
}

impl Default for ModeratorCodeService {
    fn default() -> Self {
        Self::new()
    }
}
