//! Session configuration loaded from environment variables.

use std::env;

use crate::record::DEFAULT_TTL_SECONDS;

/// Session configuration.
///
/// # Environment Variables
///
/// - `SESSION_REDIS_URL`: Redis connection URL (default: `redis://127.0.0.1:6379`)
/// - `SESSION_TTL_SECONDS`: session lifetime in seconds (default: `86400`)
/// - `SESSION_COOKIE_NAME`: name of the session cookie (default: `facultydir_sid`)
/// - `SESSION_KEY_PREFIX`: prefix for store keys (default: `facultydir`)
///
/// `cookie_secure` is not read from the environment; the application sets it
/// from the deployment mode so only development issues the cookie without
/// `Secure`.
#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// Redis connection URL for the durable store.
    pub redis_url: String,

    /// Sliding session lifetime in seconds; also the cookie `Max-Age`.
    pub ttl_seconds: u64,

    /// Name of the session cookie.
    pub cookie_name: String,

    /// Prefix for store keys to avoid collisions with other users of the
    /// same Redis instance.
    pub key_prefix: String,

    /// Whether to set the `Secure` attribute on the session cookie.
    pub cookie_secure: bool,
}

impl SessionConfig {
    /// Load configuration from environment variables, with defaults.
    pub fn from_env() -> Self {
        Self {
            redis_url: env::var("SESSION_REDIS_URL")
                .unwrap_or_else(|_| "redis://127.0.0.1:6379".into()),
            ttl_seconds: env::var("SESSION_TTL_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TTL_SECONDS),
            cookie_name: env::var("SESSION_COOKIE_NAME")
                .unwrap_or_else(|_| "facultydir_sid".into()),
            key_prefix: env::var("SESSION_KEY_PREFIX").unwrap_or_else(|_| "facultydir".into()),
            cookie_secure: true,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            redis_url: "redis://127.0.0.1:6379".into(),
            ttl_seconds: DEFAULT_TTL_SECONDS,
            cookie_name: "facultydir_sid".into(),
            key_prefix: "facultydir".into(),
            cookie_secure: true,
        }
    }
}
