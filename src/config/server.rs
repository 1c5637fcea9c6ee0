use std::env;

/// Deployment mode, read once at startup.
///
/// Development relaxes the cookie `Secure` attribute and defaults to the
/// volatile session store; production requires the durable store (with a
/// degraded in-memory fallback when it is unreachable).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn from_env() -> Self {
        match env::var("APP_ENV").as_deref() {
            Ok("production") => Environment::Production,
            _ => Environment::Development,
        }
    }

    pub fn is_production(self) -> bool {
        matches!(self, Environment::Production)
    }
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    /// Whether to use the durable session store. `SESSION_STORE` overrides
    /// the mode default (`redis` in production, `memory` in development).
    pub durable_sessions: bool,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        let durable_sessions = match env::var("SESSION_STORE").as_deref() {
            Ok("redis") => true,
            Ok("memory") => false,
            _ => environment.is_production(),
        };

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(3000),
            environment,
            durable_sessions,
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
