//! Volatile in-memory session store.
//!
//! The development default, and the degraded fallback when the durable
//! store is unreachable at startup. Sessions do not survive a process
//! restart and are not shared across instances.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use tracing::debug;

use crate::record::SessionRecord;
use crate::store::{SessionStore, SessionStoreError};

#[derive(Debug, Default)]
pub struct MemorySessionStore {
    sessions: RwLock<HashMap<String, SessionRecord>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live (possibly expired, not yet evicted) sessions.
    pub fn len(&self) -> usize {
        self.sessions
            .read()
            .expect("session table lock poisoned")
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn resolve(&self, token: &str) -> Option<SessionRecord> {
        let record = {
            let sessions = self.sessions.read().expect("session table lock poisoned");
            sessions.get(token).cloned()
        }?;

        if record.is_expired() {
            let mut sessions = self.sessions.write().expect("session table lock poisoned");
            sessions.remove(token);
            debug!("Expired session evicted");
            return None;
        }

        Some(record)
    }

    async fn save(&self, token: &str, record: &SessionRecord) -> Result<(), SessionStoreError> {
        let mut sessions = self.sessions.write().expect("session table lock poisoned");
        sessions.insert(token.to_string(), record.clone());
        Ok(())
    }

    async fn destroy(&self, token: &str) -> Result<(), SessionStoreError> {
        let mut sessions = self.sessions.write().expect("session table lock poisoned");
        sessions.remove(token);
        Ok(())
    }
}
