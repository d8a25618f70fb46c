mod config;
mod db;
mod error;
mod flash;
mod middleware;
mod models;
mod routes;

use crate::{config::Config, models::AppState};

use axum::{extract::Request, ServiceExt};
use axum_extra::extract::cookie::Key;
use tower::Layer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cfg = Config::from_env()?;

    // No listener until the database answers.
    let pool = db::connect_pg(&cfg.database_url).await?;
    tracing::info!("DB connection successful");

    let cookie_key = match cfg.session_secret.as_deref() {
        Some(secret) => Key::derive_from(secret.as_bytes()),
        None => {
            tracing::warn!("SESSION_SECRET not set; flash cookies will not survive a restart");
            Key::generate()
        }
    };

    let state = AppState {
        db: pool,
        cookie_key,
        flash_ttl_minutes: cfg.session_ttl_minutes,
    };

    let app = routes::router(state).layer(TraceLayer::new_for_http());
    // the form method override has to run ahead of routing
    let app = axum::middleware::from_fn(middleware::method_override::rewrite).layer(app);

    tracing::info!("Listening on http://{}", cfg.bind_addr);
    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr).await?;
    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;
    Ok(())
}
