//! Session tokens and the session cookie.
//!
//! The cookie carries a random token; the store only ever sees its SHA-256
//! hex digest. The cookie has no `Max-Age`: expiry is enforced server-side
//! and slides forward on every gated request.

use axum::http::header::COOKIE;
use axum::http::HeaderMap;
use chrono::Utc;
use makerslab_core::session::{DEFAULT_SESSION_TTL_HOURS, SESSION_COOKIE_NAME};
use makerslab_core::types::Timestamp;
use sha2::{Digest, Sha256};
use uuid::Uuid;

use super::password::hash_password;

/// Longest accepted session lifetime (one year).
pub const MAX_SESSION_TTL_HOURS: i64 = 24 * 365;

/// Parse a session lifetime in hours, accepting `1..=MAX_SESSION_TTL_HOURS`.
pub fn parse_ttl_hours(raw: &str) -> Result<i64, String> {
    let hours: i64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("'{raw}' is not a whole number of hours"))?;
    if (1..=MAX_SESSION_TTL_HOURS).contains(&hours) {
        Ok(hours)
    } else {
        Err(format!("{hours} is out of range (1..={MAX_SESSION_TTL_HOURS})"))
    }
}

/// Admin credential and session cookie settings.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Argon2id PHC hash of the admin password.
    pub password_hash: String,
    /// Sliding session lifetime in hours.
    pub ttl_hours: i64,
    /// Whether the cookie carries the `Secure` attribute.
    pub cookie_secure: bool,
}

impl SessionConfig {
    /// | Env Var             | Default  |
    /// |---------------------|----------|
    /// | `ADMIN_PASSWORD`    | required |
    /// | `SESSION_TTL_HOURS` | `24`     |
    /// | `COOKIE_SECURE`     | `false`  |
    pub fn from_env() -> Self {
        let password = std::env::var("ADMIN_PASSWORD").expect("ADMIN_PASSWORD must be set");
        assert!(!password.is_empty(), "ADMIN_PASSWORD must not be empty");

        let ttl_hours = parse_ttl_hours(
            &std::env::var("SESSION_TTL_HOURS")
                .unwrap_or_else(|_| DEFAULT_SESSION_TTL_HOURS.to_string()),
        )
        .unwrap_or_else(|e| panic!("SESSION_TTL_HOURS: {e}"));

        let cookie_secure: bool = std::env::var("COOKIE_SECURE")
            .unwrap_or_else(|_| "false".into())
            .parse()
            .expect("COOKIE_SECURE must be true or false");

        let password_hash = hash_password(&password).expect("Failed to hash ADMIN_PASSWORD");

        Self {
            password_hash,
            ttl_hours,
            cookie_secure,
        }
    }

    /// Expiry for a session active right now.
    pub fn expires_at(&self) -> Timestamp {
        Utc::now() + chrono::Duration::hours(self.ttl_hours)
    }
}

/// Generate a session token, returning `(plaintext, sha256_hex_hash)`.
///
/// The plaintext goes into the cookie; only the hash is persisted.
pub fn generate_session_token() -> (String, String) {
    let plaintext = Uuid::new_v4().to_string();
    let hash = hash_session_token(&plaintext);
    (plaintext, hash)
}

/// Compute the SHA-256 hex digest of a session token.
pub fn hash_session_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// `Set-Cookie` value establishing a session.
pub fn session_cookie(token: &str, secure: bool) -> String {
    let mut cookie = format!("{SESSION_COOKIE_NAME}={token}; HttpOnly; SameSite=Lax; Path=/");
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// `Set-Cookie` value telling the browser to drop the session cookie.
pub fn clear_session_cookie(secure: bool) -> String {
    let mut cookie = format!(
        "{SESSION_COOKIE_NAME}=; HttpOnly; SameSite=Lax; Path=/; Max-Age=0; \
         Expires=Thu, 01 Jan 1970 00:00:00 GMT"
    );
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// The session token from the request's `Cookie` header(s), if any.
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE_NAME)
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
