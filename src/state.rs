//! Shared application state injected into every handler.

use anyhow::Result;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::application::services::{LinkService, StatsService};
use crate::config::Config;
use crate::domain::visit_counter::VisitCounter;
use crate::infrastructure::persistence::{SqliteLinkRepository, SqliteStatsRepository};

/// Handles to the services built once at startup.
///
/// Cloning is cheap; every field is reference counted.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<SqliteLinkRepository>>,
    pub stats_service: Arc<StatsService<SqliteStatsRepository>>,
    pub visit_counter: Arc<VisitCounter<SqliteLinkRepository>>,
    pub pool: Arc<SqlitePool>,
}

impl AppState {
    /// Wires repositories, services and the visit counter over `pool`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured short code alphabet is invalid.
    pub fn new(pool: Arc<SqlitePool>, config: &Config) -> Result<Self> {
        let link_repository = Arc::new(SqliteLinkRepository::new(pool.clone()));
        let stats_repository = Arc::new(SqliteStatsRepository::new(pool.clone()));

        let link_service = LinkService::new(
            link_repository.clone(),
            config.code_alphabet()?,
            config.max_code_attempts,
            config.base_url.clone(),
        );

        Ok(Self {
            link_service: Arc::new(link_service),
            stats_service: Arc::new(StatsService::new(stats_repository)),
            visit_counter: Arc::new(VisitCounter::new(link_repository)),
            pool,
        })
    }
}
