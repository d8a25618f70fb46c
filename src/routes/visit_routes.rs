// src/routes/visit_routes.rs

use askama::Template;
use axum::{extract::State, response::IntoResponse, routing::get, Router};
use axum_extra::extract::SignedCookieJar;

use crate::db;
use crate::error::AppError;
use crate::flash::{self, Notice};
use crate::models::{AppState, VisitRow};
use crate::routes::render;

pub fn router() -> Router<AppState> {
    Router::new().route("/view-patient-visits", get(list_visits))
}

#[derive(Template)]
#[template(path = "visits.html")]
struct VisitsTemplate {
    notice: Option<Notice>,
    visits: Vec<VisitRow>,
}

pub async fn list_visits(
    State(state): State<AppState>,
    jar: SignedCookieJar,
) -> Result<impl IntoResponse, AppError> {
    let (jar, notice) = flash::take(jar);
    let visits = db::list_visits(&state.db).await?;
    Ok((jar, render(VisitsTemplate { notice, visits })?))
}
