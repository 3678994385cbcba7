//! HTTP server initialization and runtime setup.
//!
//! Handles the database pool, migrations, the visit flush task and the Axum
//! server lifecycle.

use crate::config::Config;
use crate::domain::flush_worker::run_flush_worker;
use crate::infrastructure::persistence;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - SQLite connection pool
/// - Schema migrations
/// - Background visit flush task
/// - Axum HTTP server
///
/// Visits recorded after the last flush are not written on exit.
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = persistence::connect(&config)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    persistence::migrate(&pool)
        .await
        .context("Failed to run migrations")?;

    let state = AppState::new(Arc::new(pool), &config)?;

    tokio::spawn(run_flush_worker(
        state.visit_counter.clone(),
        config.flush_interval(),
    ));
    tracing::info!(
        "Visit flush worker started (every {}s)",
        config.flush_interval_seconds
    );

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
