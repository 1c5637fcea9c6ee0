use axum::{Router, middleware};
use tower_http::services::ServeDir;

use crate::logging::logging_middleware;
use crate::middleware::auth::require_login;
use crate::middleware::role::require_admin;
use crate::modules::admin::router::init_admin_router;
use crate::modules::auth::router::init_auth_router;
use crate::modules::faculty::router::init_faculty_router;
use crate::state::AppState;
use facultydir_session::middleware::session_middleware;

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .merge(init_faculty_router().route_layer(middleware::from_fn(require_login)))
        .nest(
            "/admin",
            // The role gate checks the session itself, so an anonymous
            // request here gets the flash-annotated redirect rather than
            // the login gate's bare one.
            init_admin_router().route_layer(middleware::from_fn(require_admin)),
        )
        .merge(init_auth_router())
        .nest_service("/static", ServeDir::new("public"))
        .with_state(state.clone())
        .layer(middleware::from_fn_with_state(state, session_middleware))
        .layer(middleware::from_fn(logging_middleware))
}
