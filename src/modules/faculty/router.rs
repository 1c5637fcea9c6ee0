use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{faculty_detail, faculty_list};

pub fn init_faculty_router() -> Router<AppState> {
    Router::new()
        .route("/", get(faculty_list))
        .route("/faculty/{faculty_id}", get(faculty_detail))
}
