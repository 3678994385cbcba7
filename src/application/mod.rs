//! Application layer services implementing business logic.
//!
//! Services consume repository traits and give HTTP handlers a small API:
//!
//! - [`services::link_service::LinkService`] - Short code minting and lookup
//! - [`services::stats_service::StatsService`] - Aggregate statistics

pub mod services;
