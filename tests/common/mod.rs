use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode, header};
use facultydir::config::server::{Environment, ServerConfig};
use facultydir::modules::auth::model::AccountRegistry;
use facultydir::modules::faculty::model::FacultyDirectory;
use facultydir::router::init_router;
use facultydir::state::AppState;
use facultydir_session::{MemorySessionStore, SessionConfig, SessionManager};
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Application state backed by the in-memory session store, in development
/// mode (no `Secure` cookie attribute).
pub fn test_state() -> AppState {
    let server_config = ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        environment: Environment::Development,
        durable_sessions: false,
    };

    let session_config = SessionConfig {
        cookie_secure: false,
        ..SessionConfig::default()
    };

    AppState {
        sessions: SessionManager::new(Arc::new(MemorySessionStore::new()), session_config),
        faculty: FacultyDirectory::seeded(),
        accounts: AccountRegistry::seeded(),
        server_config,
    }
}

#[allow(dead_code)]
pub fn test_app() -> Router {
    init_router(test_state())
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

#[allow(dead_code)]
pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    send(
        app,
        Request::builder().uri(uri).body(Body::empty()).unwrap(),
    )
    .await
}

#[allow(dead_code)]
pub async fn get_with_cookie(app: &Router, uri: &str, cookie: &str) -> Response<Body> {
    send(
        app,
        Request::builder()
            .uri(uri)
            .header(header::COOKIE, cookie)
            .body(Body::empty())
            .unwrap(),
    )
    .await
}

#[allow(dead_code)]
pub async fn post_form(app: &Router, uri: &str, body: &str) -> Response<Body> {
    send(
        app,
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

#[allow(dead_code)]
pub async fn post_with_cookie(app: &Router, uri: &str, cookie: &str) -> Response<Body> {
    send(
        app,
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::COOKIE, cookie)
            .body(Body::empty())
            .unwrap(),
    )
    .await
}

/// The `name=value` pair of the session cookie set on `response`.
pub fn session_cookie(response: &Response<Body>) -> String {
    response
        .headers()
        .get(header::SET_COOKIE)
        .expect("response should set the session cookie")
        .to_str()
        .unwrap()
        .split(';')
        .next()
        .unwrap()
        .to_string()
}

#[allow(dead_code)]
pub fn location(response: &Response<Body>) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .expect("redirect should carry a Location header")
        .to_str()
        .unwrap()
}

#[allow(dead_code)]
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Log in as a seeded account and return the session cookie to replay.
#[allow(dead_code)]
pub async fn login_as(app: &Router, username: &str) -> String {
    let response = post_form(app, "/login", &format!("username={username}")).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    session_cookie(&response)
}
