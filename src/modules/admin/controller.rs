use std::collections::BTreeMap;

use axum::{extract::State, response::Html};
use facultydir_session::Session;
use tracing::instrument;

use crate::state::AppState;
use crate::view::{self, PageContext, html_escape};

/// Directory statistics for administrators.
///
/// The route is admitted by the role gate, so the session always carries a
/// principal here; the display below still reads it defensively.
#[instrument(skip(state, session))]
pub async fn admin_dashboard(State(state): State<AppState>, session: Session) -> Html<String> {
    let mut by_department: BTreeMap<&str, usize> = BTreeMap::new();
    for member in state.faculty.members() {
        *by_department.entry(member.department.as_str()).or_default() += 1;
    }

    let mut body = String::from("<h1>Admin dashboard</h1>\n");
    if let Some(principal) = session.principal() {
        body.push_str(&format!(
            "<p class=\"viewer\">Signed in as {}</p>\n",
            html_escape(&principal.display_name),
        ));
    }
    body.push_str(&format!(
        "<p>{} faculty members across {} departments.</p>\n",
        state.faculty.members().len(),
        by_department.len(),
    ));
    body.push_str("<ul class=\"departments\">\n");
    for (department, count) in &by_department {
        body.push_str(&format!(
            "<li>{}: {}</li>\n",
            html_escape(department),
            count,
        ));
    }
    body.push_str("</ul>\n");

    let ctx = PageContext::build("Admin", &session);
    view::page(&ctx, &body)
}
