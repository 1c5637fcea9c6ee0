use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::admin_dashboard;

pub fn init_admin_router() -> Router<AppState> {
    Router::new().route("/", get(admin_dashboard))
}
