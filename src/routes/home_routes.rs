use askama::Template;
use axum::{response::IntoResponse, routing::get, Router};
use axum_extra::extract::SignedCookieJar;

use crate::error::AppError;
use crate::flash::{self, Notice};
use crate::models::AppState;
use crate::routes::render;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(index))
}

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    notice: Option<Notice>,
}

pub async fn index(jar: SignedCookieJar) -> Result<impl IntoResponse, AppError> {
    let (jar, notice) = flash::take(jar);
    Ok((jar, render(IndexTemplate { notice })?))
}
