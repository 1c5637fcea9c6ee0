use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Html,
};
use facultydir_session::Session;
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::CurrentUser;
use crate::state::AppState;
use crate::view::{self, PageContext, html_escape};

use super::model::{ListParams, SortKey};
use super::service::FacultyService;

/// Show the list of all faculty, ordered by the `sortBy` query parameter.
#[instrument(skip(state, session, user))]
pub async fn faculty_list(
    State(state): State<AppState>,
    session: Session,
    user: CurrentUser,
    Query(params): Query<ListParams>,
) -> Html<String> {
    let sort_by = SortKey::parse(params.sort_by.as_deref());
    let members = FacultyService::list_sorted(&state.faculty, sort_by);

    let mut body = String::from("<h1>Faculty Directory</h1>\n");
    body.push_str(&format!(
        "<p class=\"viewer\">Browsing as {}</p>\n",
        html_escape(user.display_name()),
    ));
    body.push_str(
        "<p class=\"sort\">Sort by: <a href=\"/?sortBy=department\">department</a> \
         <a href=\"/?sortBy=name\">name</a> <a href=\"/?sortBy=title\">title</a></p>\n",
    );
    body.push_str("<ul class=\"faculty\">\n");
    for member in &members {
        body.push_str(&format!(
            "<li><a href=\"/faculty/{id}\">{name}</a>, {title}, {department}</li>\n",
            id = member.id,
            name = html_escape(&member.name),
            title = html_escape(&member.title),
            department = html_escape(&member.department),
        ));
    }
    body.push_str("</ul>\n");

    let ctx = PageContext::build("Faculty Directory", &session);
    view::page(&ctx, &body)
}

/// Show the detail page for a single faculty member.
///
/// Unknown and malformed ids both render the 404 page; neither is an error.
#[instrument(skip(state, session))]
pub async fn faculty_detail(
    State(state): State<AppState>,
    session: Session,
    Path(faculty_id): Path<String>,
) -> Result<Html<String>, (StatusCode, Html<String>)> {
    let member = Uuid::parse_str(&faculty_id)
        .ok()
        .and_then(|id| FacultyService::get(&state.faculty, id));

    let Some(member) = member else {
        let ctx = PageContext::build("Not Found", &session);
        return Err((
            StatusCode::NOT_FOUND,
            view::page(&ctx, "<h1>Faculty member not found</h1>"),
        ));
    };

    let body = format!(
        "<h1>{name}</h1>\n<p class=\"title\">{title}, {department}</p>\n\
         <p class=\"contact\">{email} &middot; Office {office}</p>\n<p class=\"bio\">{bio}</p>\n",
        name = html_escape(&member.name),
        title = html_escape(&member.title),
        department = html_escape(&member.department),
        email = html_escape(&member.email),
        office = html_escape(&member.office),
        bio = html_escape(&member.bio),
    );

    let ctx = PageContext::build(member.name.clone(), &session);
    Ok(view::page(&ctx, &body))
}
