use anyhow::Error;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::view::html_escape;

/// Application error: an HTTP status plus the underlying fault.
///
/// Reserved for genuine faults (store connectivity, programming errors,
/// invalid request bodies). Authentication and authorization failures are
/// control flow, handled by the gates with redirects and flash messages,
/// and never travel this path.
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub error: Error,
}

impl AppError {
    pub fn new<E>(status: StatusCode, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            status,
            error: err.into(),
        }
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err)
    }

    pub fn bad_request<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::BAD_REQUEST, err)
    }

    pub fn unprocessable<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Html(format!(
            "<!doctype html>\n<html>\n<head><meta charset=\"utf-8\"><title>{status}</title></head>\n<body>\n<h1>{status}</h1>\n<p>{message}</p>\n</body>\n</html>\n",
            status = self.status,
            message = html_escape(&self.error.to_string()),
        ));

        (self.status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<Error>,
{
    fn from(err: E) -> Self {
        AppError::internal(err)
    }
}
