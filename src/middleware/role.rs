//! Role-based authorization middleware.
//!
//! Role names are flat strings compared by exact, case-sensitive equality;
//! there is no hierarchy or inheritance. Failures never surface as HTTP
//! error statuses: the gate queues a flash message and redirects, keeping
//! the user inside the normal navigation flow.

use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use facultydir_session::Session;

/// Roles known to the directory.
pub mod roles {
    pub const ADMIN: &str = "admin";
    pub const USER: &str = "user";
}

/// Admit the request only when the session's principal carries exactly
/// `role_name`.
///
/// One of three mutually exclusive outcomes per request:
///
/// 1. No principal: flash "User not found" and redirect to the login page
/// 2. Role mismatch, including a missing or empty stored role: flash a
///    permission message and redirect to the site root
/// 3. Match: run the downstream handler
///
/// # Usage with axum::middleware::from_fn
///
/// ```rust,ignore
/// let admin_routes = Router::new()
///     .route("/", get(admin_handler))
///     .route_layer(middleware::from_fn(require_admin));
/// ```
pub async fn require_role(
    session: Session,
    req: Request,
    next: Next,
    role_name: &'static str,
) -> Response {
    let Some(principal) = session.principal() else {
        session.flash("error", "User not found");
        return Redirect::to("/login").into_response();
    };

    if principal.role_name != role_name {
        session.flash("error", "You do not have permission to access this page.");
        return Redirect::to("/").into_response();
    }

    next.run(req).await
}

/// Route layer for admin-only routes.
pub async fn require_admin(session: Session, req: Request, next: Next) -> Response {
    require_role(session, req, next, roles::ADMIN).await
}
