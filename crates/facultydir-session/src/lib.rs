//! # facultydir-session
//!
//! Session management for the faculty directory application.
//!
//! This crate provides:
//! - Session records holding the authenticated principal and one-shot
//!   flash messages
//! - A uniform store interface with a Redis-backed durable implementation
//!   and a volatile in-memory implementation
//! - Session configuration from environment variables
//! - Axum middleware that resolves, attaches, and persists the session and
//!   issues the session cookie
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use facultydir_session::{MemorySessionStore, SessionConfig, SessionManager};
//!
//! let manager = SessionManager::new(
//!     Arc::new(MemorySessionStore::new()),
//!     SessionConfig::from_env(),
//! );
//!
//! let app = axum::Router::new()
//!     // ... routes ...
//!     .layer(axum::middleware::from_fn_with_state(
//!         state,
//!         facultydir_session::middleware::session_middleware,
//!     ));
//! ```

pub mod config;
pub mod memory;
pub mod middleware;
pub mod record;
pub mod redis;
pub mod store;

pub use config::SessionConfig;
pub use memory::MemorySessionStore;
pub use middleware::{Session, SessionManager, session_middleware};
pub use record::{AuthenticatedPrincipal, DEFAULT_TTL_SECONDS, SessionRecord};
pub use redis::RedisSessionStore;
pub use store::{SessionStore, SessionStoreError, generate_token};
