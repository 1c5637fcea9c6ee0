//! Session store interface and token allocation.

use async_trait::async_trait;
use rand::RngCore;

use crate::record::SessionRecord;

/// Error type for store operations.
#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    #[error("session backend error: {0}")]
    Backend(#[from] redis::RedisError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Uniform interface over the durable and volatile session backends.
///
/// `resolve` fails closed: missing, unknown, and expired tokens all come
/// back as `None`, and backend read errors are logged rather than surfaced.
/// Concurrent requests racing on one token are last-write-wins on `save`.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Look up the record for `token`, evicting it if expired.
    async fn resolve(&self, token: &str) -> Option<SessionRecord>;

    /// Persist the record under `token`.
    async fn save(&self, token: &str, record: &SessionRecord) -> Result<(), SessionStoreError>;

    /// Remove the record for `token` (logout).
    async fn destroy(&self, token: &str) -> Result<(), SessionStoreError>;
}

/// Allocate a new opaque session token: 32 bytes from the OS-seeded CSPRNG,
/// hex-encoded. The token is the only session data the client ever holds.
pub fn generate_token() -> String {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_hex_and_unique() {
        let token = generate_token();
        assert_eq!(token.len(), 64);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(token, generate_token());
    }
}
