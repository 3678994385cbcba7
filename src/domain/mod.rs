//! Domain layer containing entities, repository contracts and visit counting.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Data access trait definitions
//! - [`visit_counter`] - In-memory visit tally with write-back
//! - [`flush_worker`] - Periodic task draining the tally
//!
//! # Visit Counting Flow
//!
//! 1. Redirect handler resolves the short code
//! 2. [`visit_counter::VisitCounter::record_visit`] bumps the in-memory tally
//! 3. [`flush_worker::run_flush_worker`] calls [`visit_counter::VisitCounter::flush`] on a fixed interval
//! 4. Pending counts are added to `visit_count` via [`repositories::LinkRepository::add_visits`]

pub mod entities;
pub mod flush_worker;
pub mod repositories;
pub mod visit_counter;
