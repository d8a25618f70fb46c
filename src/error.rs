use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

/// Crate-wide error type. Every handler forwards failures here; rendering
/// happens in exactly one place, like the terminal error middleware of a
/// classic server-rendered app.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("template error: {0}")]
    Template(#[from] askama::Error),
}

#[derive(Template)]
#[template(path = "error.html")]
struct ErrorTemplate {
    status: u16,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound(msg) => {
                tracing::debug!("not found: {msg}");
                (StatusCode::NOT_FOUND, msg)
            }
            other => {
                // Full detail stays server-side; the user gets a fixed message.
                tracing::error!("request failed: {other}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Server encountered a problem..!".to_string(),
                )
            }
        };

        let page = ErrorTemplate {
            status: status.as_u16(),
            message,
        };
        match page.render() {
            Ok(body) => (status, Html(body)).into_response(),
            Err(err) => {
                tracing::error!("error page render failed: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Server encountered a problem..!",
                )
                    .into_response()
            }
        }
    }
}
