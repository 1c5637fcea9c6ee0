use axum::{
    extract::{FromRequestParts, Request},
    http::{StatusCode, request::Parts},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use facultydir_session::{AuthenticatedPrincipal, Session};

/// The authenticated principal for the current request.
///
/// Inserted into request extensions by [`require_login`]; its presence is
/// the is-authenticated signal for everything downstream of the gate, and
/// handlers can take it as an extractor.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub AuthenticatedPrincipal);

impl CurrentUser {
    pub fn display_name(&self) -> &str {
        &self.0.display_name
    }

    pub fn role_name(&self) -> &str {
        &self.0.role_name
    }
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<CurrentUser>().cloned().ok_or((
            StatusCode::INTERNAL_SERVER_ERROR,
            "route is missing the login gate",
        ))
    }
}

/// Admit the request only when the session carries a principal.
///
/// Anonymous requests are redirected to the login page without a flash
/// message; the downstream handler is never called.
pub async fn require_login(session: Session, mut req: Request, next: Next) -> Response {
    match session.principal() {
        Some(principal) => {
            req.extensions_mut().insert(CurrentUser(principal));
            next.run(req).await
        }
        None => Redirect::to("/login").into_response(),
    }
}
