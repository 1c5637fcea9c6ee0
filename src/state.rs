use std::sync::Arc;

use axum::extract::FromRef;
use facultydir_session::{
    MemorySessionStore, RedisSessionStore, SessionConfig, SessionManager, SessionStore,
};
use tracing::{info, warn};

use crate::config::server::ServerConfig;
use crate::modules::auth::model::AccountRegistry;
use crate::modules::faculty::model::FacultyDirectory;

#[derive(Clone)]
pub struct AppState {
    pub server_config: ServerConfig,
    pub sessions: SessionManager,
    pub faculty: FacultyDirectory,
    pub accounts: AccountRegistry,
}

impl FromRef<AppState> for SessionManager {
    fn from_ref(state: &AppState) -> Self {
        state.sessions.clone()
    }
}

pub async fn init_app_state() -> AppState {
    let server_config = ServerConfig::from_env();
    let mut session_config = SessionConfig::from_env();
    session_config.cookie_secure = server_config.environment.is_production();

    let store = init_session_store(&server_config, &session_config).await;

    AppState {
        sessions: SessionManager::new(store, session_config),
        faculty: FacultyDirectory::seeded(),
        accounts: AccountRegistry::seeded(),
        server_config,
    }
}

/// Select the session backend for this deployment.
///
/// An unreachable durable store degrades to the volatile in-memory store
/// instead of failing startup; sessions then do not survive restarts and
/// are not shared across instances.
async fn init_session_store(
    server_config: &ServerConfig,
    session_config: &SessionConfig,
) -> Arc<dyn SessionStore> {
    if server_config.durable_sessions {
        match RedisSessionStore::new(
            &session_config.redis_url,
            &session_config.key_prefix,
            session_config.ttl_seconds,
        )
        .await
        {
            Ok(store) => {
                info!(redis_url = %session_config.redis_url, "Using Redis session store");
                return Arc::new(store);
            }
            Err(err) => {
                warn!(
                    error = %err,
                    "Session store unreachable, falling back to in-memory sessions"
                );
            }
        }
    }

    Arc::new(MemorySessionStore::new())
}
