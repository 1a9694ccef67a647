mod catalog;
mod charts;
mod config;
mod db;
mod errors;
mod matching;
mod models;
mod routes;
mod state;

use anyhow::Result;
use chrono::{Datelike, Utc};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::schema::apply_schema;
use crate::catalog::seed::{generate_salary_series, seed_catalog};
use crate::catalog::SqliteCatalog;
use crate::config::Config;
use crate::db::create_pool;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Careers API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize SQLite and the catalog tables
    let db = create_pool(&config.database_url, config.db_max_connections).await?;
    apply_schema(&db).await?;

    // Seeding must finish before the listener accepts requests
    if config.seed_on_startup {
        let series = generate_salary_series(Utc::now().year(), &mut rand::rng());
        seed_catalog(&db, &series).await?;
    } else {
        info!("SEED_ON_STARTUP disabled; serving catalog as-is");
    }

    let state = AppState::new(Arc::new(SqliteCatalog::new(db)));

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
