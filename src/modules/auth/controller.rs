use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
};
use facultydir_session::Session;
use tracing::instrument;

use crate::state::AppState;
use crate::validator::ValidatedForm;
use crate::view::{self, PageContext};

use super::model::LoginRequest;
use super::service::AuthService;

const LOGIN_FORM: &str = r#"<h1>Sign in</h1>
<form method="post" action="/login">
<label for="username">Username</label>
<input id="username" name="username" type="text" autocomplete="username">
<button type="submit">Sign in</button>
</form>"#;

/// Render the login page, including any flash queued by a gate redirect.
#[instrument(skip(session))]
pub async fn login_page(session: Session) -> Html<String> {
    let ctx = PageContext::build("Sign in", &session);
    view::page(&ctx, LOGIN_FORM)
}

/// Establish the session principal from a directory account.
#[instrument(skip(state, session, form))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    ValidatedForm(form): ValidatedForm<LoginRequest>,
) -> Response {
    match AuthService::authenticate(&state.accounts, &form.username) {
        Some(principal) => {
            session.flash(
                "success",
                &format!("Signed in as {}", principal.display_name),
            );
            session.login(principal);
            Redirect::to("/").into_response()
        }
        None => {
            session.flash("error", "User not found");
            Redirect::to("/login").into_response()
        }
    }
}

/// Destroy the session and drop the cookie.
#[instrument(skip(session))]
pub async fn logout(session: Session) -> Redirect {
    session.invalidate();
    Redirect::to("/login")
}
