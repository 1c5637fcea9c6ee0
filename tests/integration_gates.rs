mod common;

use axum::http::StatusCode;
use common::{body_text, get, get_with_cookie, location, login_as, session_cookie, test_app};

const PERMISSION_MESSAGE: &str = "You do not have permission to access this page.";

#[tokio::test]
async fn admin_reaches_dashboard_without_flash() {
    let app = test_app();
    let cookie = login_as(&app, "amara.okafor").await;

    let response = get_with_cookie(&app, "/admin", &cookie).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("Admin dashboard"));
    assert!(body.contains("Signed in as Amara Okafor"));

    // The gate queued nothing: the next render carries no flash at all.
    let body = body_text(get_with_cookie(&app, "/", &cookie).await).await;
    assert!(!body.contains("class=\"flash"));
}

#[tokio::test]
async fn wrong_role_is_redirected_home_with_permission_flash() {
    let app = test_app();
    let cookie = login_as(&app, "noor.haddad").await;

    let response = get_with_cookie(&app, "/admin", &cookie).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");
    let body = body_text(response).await;
    assert!(!body.contains("Admin dashboard"));

    let body = body_text(get_with_cookie(&app, "/", &cookie).await).await;
    assert_eq!(body.matches(PERMISSION_MESSAGE).count(), 1);

    // Read-once: the message is gone on the following render.
    let body = body_text(get_with_cookie(&app, "/", &cookie).await).await;
    assert!(!body.contains(PERMISSION_MESSAGE));
}

#[tokio::test]
async fn role_comparison_is_exact_with_no_hierarchy() {
    let app = test_app();

    // "user" does not satisfy the admin gate any more than "editor" does.
    for username in ["liam.ferris", "noor.haddad"] {
        let cookie = login_as(&app, username).await;
        let response = get_with_cookie(&app, "/admin", &cookie).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/");
    }
}

#[tokio::test]
async fn anonymous_role_gated_request_flashes_user_not_found() {
    let app = test_app();

    let response = get(&app, "/admin").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");
    let cookie = session_cookie(&response);

    let body = body_text(get_with_cookie(&app, "/login", &cookie).await).await;
    assert_eq!(
        body.matches("<div class=\"flash flash-error\">User not found</div>")
            .count(),
        1
    );

    let body = body_text(get_with_cookie(&app, "/login", &cookie).await).await;
    assert!(!body.contains("User not found"));
}

#[tokio::test]
async fn matching_role_runs_downstream_exactly_once() {
    let app = test_app();
    let cookie = login_as(&app, "amara.okafor").await;

    let response = get_with_cookie(&app, "/admin", &cookie).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert_eq!(body.matches("<h1>Admin dashboard</h1>").count(), 1);
}
