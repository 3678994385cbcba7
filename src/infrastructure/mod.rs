//! Infrastructure layer for external integrations.
//!
//! - [`persistence`] - SQLite repository implementations, pool and migrations

pub mod persistence;
