//! Repository trait definitions for the domain layer.
//!
//! Traits define the data access contract; SQLite implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for unit tests.
//!
//! - [`LinkRepository`] - Mapping lookups, inserts and visit count updates
//! - [`StatsRepository`] - Aggregate queries over all mappings
//!
//! Integration tests against a real database live in `tests/repository_*.rs`.

pub mod link_repository;
pub mod stats_repository;

pub use link_repository::LinkRepository;
pub use stats_repository::StatsRepository;

#[cfg(test)]
pub use link_repository::MockLinkRepository;
#[cfg(test)]
pub use stats_repository::MockStatsRepository;
