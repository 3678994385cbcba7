//! # shorty
//!
//! A small URL shortener built with Axum and SQLite.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities, repository traits and the visit counter
//! - **Application Layer** ([`application`]) - Code minting, lookup and statistics
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite repositories and migrations
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs and middleware
//!
//! ## Visit counting
//!
//! Redirects never write to the database. Each hit bumps an in-memory tally
//! ([`domain::visit_counter::VisitCounter`]) that a background task flushes
//! on a fixed interval, so the table sees one `UPDATE` per active code per
//! interval rather than one per request.
//!
//! ## Quick Start
//!
//! ```bash
//! export DATABASE_URL="sqlite://shorty.db?mode=rwc"
//! export BASE_URL="https://s.example.com"
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod routes;
pub mod server;
pub mod state;
pub mod utils;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
pub mod prelude {
    pub use crate::application::services::{LinkService, StatsService, StatsSummary};
    pub use crate::domain::entities::{Link, NewLink};
    pub use crate::domain::visit_counter::{FlushReport, VisitCounter};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
