//! Session state shared between the store, the middleware, and the handlers.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Default session lifetime: 24 hours.
pub const DEFAULT_TTL_SECONDS: u64 = 86_400;

/// The authenticated identity stored in a session after login.
///
/// Built exactly once by the login step and read by the gates afterwards.
/// The role is a flat string compared by exact, case-sensitive equality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedPrincipal {
    pub username: String,
    pub display_name: String,
    /// Defaults to the empty string when absent from a stored record, so a
    /// malformed principal can never satisfy a role check.
    #[serde(default)]
    pub role_name: String,
}

/// Server-side session state, stored as JSON keyed by the opaque token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    pub user: Option<AuthenticatedPrincipal>,
    /// One-shot messages: written by one request, drained by the next render.
    #[serde(default)]
    pub flash: BTreeMap<String, Vec<String>>,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl SessionRecord {
    pub fn new(ttl_seconds: u64) -> Self {
        let now = Utc::now();
        Self {
            user: None,
            flash: BTreeMap::new(),
            created_at: now,
            expires_at: now + Duration::seconds(ttl_seconds as i64),
        }
    }

    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// Slide the expiry forward. Called whenever the record is persisted.
    pub fn touch(&mut self, ttl_seconds: u64) {
        self.expires_at = Utc::now() + Duration::seconds(ttl_seconds as i64);
    }

    /// Append a flash message under `category`, creating the category on
    /// first use.
    pub fn push_flash(&mut self, category: &str, message: &str) {
        self.flash
            .entry(category.to_string())
            .or_default()
            .push(message.to_string());
    }

    /// Return the full flash mapping and clear it in one step.
    pub fn take_flash(&mut self) -> BTreeMap<String, Vec<String>> {
        std::mem::take(&mut self.flash)
    }
}
