//! Axum integration: the session middleware and the request-scoped handle.
//!
//! The middleware resolves (or creates) the session before the rest of the
//! chain runs, exposes it through request extensions as a cloneable
//! [`Session`] handle, and persists whatever the chain did to it when the
//! response is finalized. The cookie carries nothing but the opaque token.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{StatusCode, request::Parts},
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use tracing::error;

use crate::config::SessionConfig;
use crate::record::{AuthenticatedPrincipal, SessionRecord};
use crate::store::{SessionStore, generate_token};

/// Cloneable bundle of store and config, injected via application state
/// rather than held as a global.
#[derive(Clone)]
pub struct SessionManager {
    store: Arc<dyn SessionStore>,
    config: SessionConfig,
}

impl SessionManager {
    pub fn new(store: Arc<dyn SessionStore>, config: SessionConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn store(&self) -> Arc<dyn SessionStore> {
        self.store.clone()
    }

    fn issue_cookie(&self, token: &str) -> Cookie<'static> {
        Cookie::build((self.config.cookie_name.clone(), token.to_string()))
            .path("/")
            .http_only(true)
            .secure(self.config.cookie_secure)
            .same_site(SameSite::Lax)
            .max_age(time::Duration::seconds(self.config.ttl_seconds as i64))
            .build()
    }

    fn removal_cookie(&self) -> Cookie<'static> {
        Cookie::build((self.config.cookie_name.clone(), ""))
            .path("/")
            .build()
    }
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[derive(Debug)]
struct SessionInner {
    record: SessionRecord,
    destroyed: bool,
}

/// Request-scoped handle to the session, shared by the middleware and
/// everything downstream of it.
///
/// All mutations go through the handle's lock, which is only ever held for
/// synchronous sections; in particular [`Session::take_flash`] returns and
/// clears the flash mapping in one locked step, so no reader can observe a
/// partially drained state.
#[derive(Clone)]
pub struct Session {
    token: String,
    inner: Arc<Mutex<SessionInner>>,
}

impl Session {
    pub(crate) fn new(token: String, record: SessionRecord) -> Self {
        Self {
            token,
            inner: Arc::new(Mutex::new(SessionInner {
                record,
                destroyed: false,
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, SessionInner> {
        self.inner.lock().expect("session lock poisoned")
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn principal(&self) -> Option<AuthenticatedPrincipal> {
        self.lock().record.user.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.lock().record.user.is_some()
    }

    /// Store the principal established by the login step.
    pub fn login(&self, principal: AuthenticatedPrincipal) {
        self.lock().record.user = Some(principal);
    }

    /// Mark the session for destruction; when the response is finalized the
    /// middleware removes the record from the store and drops the cookie.
    pub fn invalidate(&self) {
        let mut inner = self.lock();
        inner.record.user = None;
        inner.destroyed = true;
    }

    /// Queue a one-shot message for the next rendered page.
    pub fn flash(&self, category: &str, message: &str) {
        self.lock().record.push_flash(category, message);
    }

    /// Drain the flash mapping: the one consuming read.
    pub fn take_flash(&self) -> BTreeMap<String, Vec<String>> {
        self.lock().record.take_flash()
    }

    fn snapshot(&self) -> (SessionRecord, bool) {
        let inner = self.lock();
        (inner.record.clone(), inner.destroyed)
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session").finish_non_exhaustive()
    }
}

/// Rejection for handlers asking for a [`Session`] on a route the session
/// middleware does not cover. Always a programming error, never user error.
#[derive(Debug)]
pub struct SessionLayerMissing;

impl IntoResponse for SessionLayerMissing {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "session middleware not installed",
        )
            .into_response()
    }
}

impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
{
    type Rejection = SessionLayerMissing;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Session>()
            .cloned()
            .ok_or(SessionLayerMissing)
    }
}

/// Resolve-or-create the session for this request, expose it to the rest of
/// the chain, then persist it and refresh the cookie on the way out.
///
/// Nothing from the client is trusted beyond the opaque token: an unknown,
/// expired, or undecodable token starts a fresh anonymous session.
pub async fn session_middleware(
    State(manager): State<SessionManager>,
    jar: CookieJar,
    mut req: Request,
    next: Next,
) -> Response {
    let resolved = match jar.get(&manager.config.cookie_name) {
        Some(cookie) => {
            let token = cookie.value().to_string();
            manager
                .store
                .resolve(&token)
                .await
                .map(|record| (token, record))
        }
        None => None,
    };

    let (token, record) = match resolved {
        Some(found) => found,
        None => (
            generate_token(),
            SessionRecord::new(manager.config.ttl_seconds),
        ),
    };

    let session = Session::new(token, record);
    req.extensions_mut().insert(session.clone());

    let response = next.run(req).await;

    let (mut record, destroyed) = session.snapshot();

    if destroyed {
        if let Err(err) = manager.store.destroy(session.token()).await {
            error!(error = %err, "Failed to destroy session");
        }
        return (jar.remove(manager.removal_cookie()), response).into_response();
    }

    record.touch(manager.config.ttl_seconds);
    if let Err(err) = manager.store.save(session.token(), &record).await {
        // Degraded: the response still goes out, the session just does not
        // stick. Auth failures never travel this path.
        error!(error = %err, "Failed to persist session");
    }

    (jar.add(manager.issue_cookie(session.token())), response).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::DEFAULT_TTL_SECONDS;

    fn test_session() -> Session {
        Session::new(generate_token(), SessionRecord::new(DEFAULT_TTL_SECONDS))
    }

    #[test]
    fn login_sets_the_principal() {
        let session = test_session();
        assert!(!session.is_authenticated());

        session.login(AuthenticatedPrincipal {
            username: "amara.okafor".into(),
            display_name: "Amara Okafor".into(),
            role_name: "admin".into(),
        });

        assert!(session.is_authenticated());
        assert_eq!(
            session.principal().map(|p| p.role_name),
            Some("admin".to_string())
        );
    }

    #[test]
    fn invalidate_clears_the_principal() {
        let session = test_session();
        session.login(AuthenticatedPrincipal {
            username: "amara.okafor".into(),
            display_name: "Amara Okafor".into(),
            role_name: "admin".into(),
        });

        session.invalidate();

        assert!(!session.is_authenticated());
        let (_, destroyed) = session.snapshot();
        assert!(destroyed);
    }

    #[test]
    fn flash_is_read_once_through_the_handle() {
        let session = test_session();
        session.flash("error", "User not found");

        let drained = session.take_flash();
        assert_eq!(
            drained.get("error"),
            Some(&vec!["User not found".to_string()])
        );
        assert!(session.take_flash().is_empty());
    }

    #[test]
    fn clones_share_state() {
        let session = test_session();
        let other = session.clone();

        other.flash("success", "saved");

        assert_eq!(
            session.take_flash().get("success"),
            Some(&vec!["saved".to_string()])
        );
    }
}
