//! Background task draining the visit tally into storage.

use std::sync::Arc;
use std::time::Duration;
use tokio::time::{self, MissedTickBehavior};
use tracing::debug;

use crate::domain::repositories::LinkRepository;
use crate::domain::visit_counter::VisitCounter;

/// Flushes `counter` every `period` for the lifetime of the process.
///
/// The first flush happens one full period after start. A slow flush delays
/// the next tick instead of triggering a burst of catch-up flushes.
pub async fn run_flush_worker<R>(counter: Arc<VisitCounter<R>>, period: Duration)
where
    R: LinkRepository + 'static,
{
    let mut ticker = time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    // interval() completes its first tick immediately
    ticker.tick().await;

    loop {
        ticker.tick().await;
        debug!("Flush interval elapsed");
        counter.flush().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockLinkRepository;

    #[tokio::test(start_paused = true)]
    async fn test_worker_flushes_on_interval() {
        let mut repo = MockLinkRepository::new();
        repo.expect_add_visits()
            .withf(|code, visits| code == "abc1" && *visits == 3)
            .times(1)
            .returning(|_, _| Ok(1));
        let counter = Arc::new(VisitCounter::new(Arc::new(repo)));

        for _ in 0..3 {
            counter.record_visit("abc1");
        }

        let worker = tokio::spawn(run_flush_worker(counter.clone(), Duration::from_secs(60)));

        time::sleep(Duration::from_secs(30)).await;
        assert_eq!(counter.pending("abc1"), 3);

        time::sleep(Duration::from_secs(31)).await;
        assert_eq!(counter.pending("abc1"), 0);

        worker.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn test_worker_keeps_running_across_cycles() {
        let mut repo = MockLinkRepository::new();
        repo.expect_add_visits().times(2).returning(|_, _| Ok(1));
        let counter = Arc::new(VisitCounter::new(Arc::new(repo)));

        let worker = tokio::spawn(run_flush_worker(counter.clone(), Duration::from_secs(10)));

        counter.record_visit("first");
        time::sleep(Duration::from_secs(11)).await;
        assert_eq!(counter.pending("first"), 0);

        counter.record_visit("second");
        time::sleep(Duration::from_secs(10)).await;
        assert_eq!(counter.pending("second"), 0);

        worker.abort();
    }
}
