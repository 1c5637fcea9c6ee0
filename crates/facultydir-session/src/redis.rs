//! Redis-backed durable session store.
//!
//! Records are stored as JSON under prefixed keys with a Redis-level TTL,
//! so session state survives process restarts and is shared across
//! instances. Read failures and undecodable records fail closed: the
//! request proceeds as if no session existed.

use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, error};

use crate::record::SessionRecord;
use crate::store::{SessionStore, SessionStoreError};

#[derive(Clone)]
pub struct RedisSessionStore {
    conn: ConnectionManager,
    key_prefix: String,
    ttl_seconds: u64,
}

impl std::fmt::Debug for RedisSessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisSessionStore")
            .field("key_prefix", &self.key_prefix)
            .field("ttl_seconds", &self.ttl_seconds)
            .finish_non_exhaustive()
    }
}

impl RedisSessionStore {
    /// Connects to Redis eagerly so an unreachable store is detected at
    /// startup, where the caller can fall back to the in-memory store.
    pub async fn new(
        redis_url: &str,
        key_prefix: &str,
        ttl_seconds: u64,
    ) -> Result<Self, SessionStoreError> {
        let client = Client::open(redis_url)?;
        let conn = ConnectionManager::new(client).await?;

        Ok(Self {
            conn,
            key_prefix: key_prefix.to_string(),
            ttl_seconds,
        })
    }

    fn key(&self, token: &str) -> String {
        format!("{}:session:{}", self.key_prefix, token)
    }
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn resolve(&self, token: &str) -> Option<SessionRecord> {
        let mut conn = self.conn.clone();
        let key = self.key(token);

        let json = match conn.get::<_, Option<String>>(&key).await {
            Ok(Some(json)) => json,
            Ok(None) => return None,
            Err(e) => {
                error!(error = %e, "Redis GET error resolving session");
                return None;
            }
        };

        let record = match serde_json::from_str::<SessionRecord>(&json) {
            Ok(record) => record,
            Err(e) => {
                error!(error = %e, "Undecodable session record, treating as no session");
                return None;
            }
        };

        // Redis expiry normally evicts first; the record's own clock wins
        // if the two disagree.
        if record.is_expired() {
            if let Err(e) = conn.del::<_, ()>(&key).await {
                error!(error = %e, "Redis DEL error evicting expired session");
            }
            debug!("Expired session evicted");
            return None;
        }

        Some(record)
    }

    async fn save(&self, token: &str, record: &SessionRecord) -> Result<(), SessionStoreError> {
        let mut conn = self.conn.clone();
        let json = serde_json::to_string(record)?;

        conn.set_ex::<_, _, ()>(self.key(token), json, self.ttl_seconds)
            .await?;

        debug!(ttl_secs = %self.ttl_seconds, "Session persisted");

        Ok(())
    }

    async fn destroy(&self, token: &str) -> Result<(), SessionStoreError> {
        let mut conn = self.conn.clone();

        conn.del::<_, ()>(self.key(token)).await?;

        debug!("Session destroyed");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::DEFAULT_TTL_SECONDS;
    use crate::store::generate_token;

    // Integration tests require a running Redis instance.

    #[tokio::test]
    #[ignore = "requires Redis"]
    async fn save_resolve_destroy_round_trip() {
        let store = RedisSessionStore::new("redis://localhost:6379", "facultydir-test", 60)
            .await
            .unwrap();
        let token = generate_token();

        let mut record = SessionRecord::new(DEFAULT_TTL_SECONDS);
        record.push_flash("error", "User not found");
        store.save(&token, &record).await.unwrap();

        let resolved = store.resolve(&token).await.expect("record should resolve");
        assert_eq!(
            resolved.flash.get("error"),
            Some(&vec!["User not found".to_string()])
        );

        store.destroy(&token).await.unwrap();
        assert!(store.resolve(&token).await.is_none());
    }
}
