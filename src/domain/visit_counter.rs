//! In-memory visit tally with periodic write-back.
//!
//! Redirect handlers call [`VisitCounter::record_visit`] on every hit; the
//! background task in [`crate::domain::flush_worker`] periodically calls
//! [`VisitCounter::flush`], which turns the pending counts into one additive
//! `UPDATE` per short code.
//!
//! # Guarantees
//!
//! - `record_visit` never touches storage.
//! - A failed update keeps its pending count for the next cycle.
//! - A successful update subtracts exactly the flushed amount, so hits that
//!   arrive while the update is in flight stay pending.
//!
//! # Known limitations
//!
//! - An update that affects zero rows (the code was removed out-of-band)
//!   still clears the pending count. Those visits are dropped with a warning.
//! - Nothing flushes on shutdown; hits recorded since the last cycle are lost
//!   if the process exits.

use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

use crate::domain::repositories::LinkRepository;

/// Outcome of a single flush cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlushReport {
    /// Codes whose update succeeded.
    pub flushed_codes: usize,
    /// Total visits written.
    pub flushed_visits: u64,
    /// Codes whose update failed and remain pending.
    pub failed_codes: usize,
}

impl FlushReport {
    pub fn is_empty(&self) -> bool {
        self.flushed_codes == 0 && self.failed_codes == 0
    }
}

/// Pending visit counts keyed by short code.
pub struct VisitCounter<R: LinkRepository> {
    repository: Arc<R>,
    pending: DashMap<String, u64>,
    flush_lock: Mutex<()>,
}

impl<R: LinkRepository> VisitCounter<R> {
    /// Creates an empty counter writing back through `repository`.
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            pending: DashMap::new(),
            flush_lock: Mutex::new(()),
        }
    }

    /// Records one visit for `code`.
    pub fn record_visit(&self, code: &str) {
        if let Some(mut count) = self.pending.get_mut(code) {
            *count += 1;
            return;
        }
        *self.pending.entry(code.to_string()).or_insert(0) += 1;
    }

    /// Returns the pending (unflushed) visits for `code`.
    pub fn pending(&self, code: &str) -> u64 {
        self.pending.get(code).map(|count| *count).unwrap_or(0)
    }

    /// Returns the sum of all pending visits.
    pub fn pending_total(&self) -> u64 {
        self.pending.iter().map(|entry| *entry.value()).sum()
    }

    /// Returns the number of codes the tally tracks, including those at zero.
    pub fn tracked_codes(&self) -> usize {
        self.pending.len()
    }

    /// Writes all non-zero pending counts to storage.
    ///
    /// Each code is updated independently; one failure does not stop the
    /// others. Concurrent calls are serialized so a count is never written
    /// twice.
    pub async fn flush(&self) -> FlushReport {
        let _guard = self.flush_lock.lock().await;

        let snapshot: Vec<(String, u64)> = self
            .pending
            .iter()
            .filter(|entry| *entry.value() > 0)
            .map(|entry| (entry.key().clone(), *entry.value()))
            .collect();

        if snapshot.is_empty() {
            debug!("No pending visits to flush");
            return FlushReport::default();
        }

        let mut report = FlushReport::default();

        for (code, visits) in snapshot {
            match self.repository.add_visits(&code, visits).await {
                Ok(rows) => {
                    if rows == 0 {
                        warn!(code = %code, visits, "Dropped visits for unknown short code");
                    }
                    if let Some(mut count) = self.pending.get_mut(&code) {
                        *count = count.saturating_sub(visits);
                    }
                    report.flushed_codes += 1;
                    report.flushed_visits += visits;
                }
                Err(e) => {
                    error!(code = %code, visits, error = %e, "Failed to flush visits, keeping them pending");
                    report.failed_codes += 1;
                }
            }
        }

        metrics::counter!("shorty_visits_flushed_total").increment(report.flushed_visits);
        metrics::counter!("shorty_flush_failures_total").increment(report.failed_codes as u64);

        info!(
            flushed_codes = report.flushed_codes,
            flushed_visits = report.flushed_visits,
            failed_codes = report.failed_codes,
            "Flushed visit counts"
        );

        report
    }

    #[cfg(test)]
    fn set_pending(&self, code: &str, visits: u64) {
        self.pending.insert(code.to_string(), visits);
    }
}
