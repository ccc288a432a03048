//! Fixed-interval driver for the reconciler.

use std::future::Future;
use std::time::Duration;

use lab_portal::ResultLookup;
use tokio::time::MissedTickBehavior;

use crate::error::SyncError;
use crate::reconciler::Reconciler;

/// Runs a pass immediately, then one per interval, on a single task.
///
/// Passes never overlap: a pass that outlasts the interval delays the next
/// tick instead of stacking up missed ones.
pub struct Scheduler<P> {
    reconciler: Reconciler<P>,
    interval: Duration,
}

impl<P: ResultLookup> Scheduler<P> {
    pub const fn new(reconciler: Reconciler<P>, interval: Duration) -> Self {
        Self {
            reconciler,
            interval,
        }
    }

    /// Run until a fatal error.
    ///
    /// # Errors
    ///
    /// Returns the fatal [`SyncError`] that stopped the loop.
    pub async fn run(self) -> Result<u64, SyncError> {
        self.run_until(std::future::pending()).await
    }

    /// Run until `shutdown` resolves or a fatal error occurs.
    ///
    /// `shutdown` is only observed between passes. Returns the number of
    /// passes started.
    ///
    /// # Errors
    ///
    /// Returns the fatal [`SyncError`] that stopped the loop. Non-fatal pass
    /// errors are logged and the loop waits for the next tick.
    pub async fn run_until<F>(self, shutdown: F) -> Result<u64, SyncError>
    where
        F: Future<Output = ()>,
    {
        let mut ticker = tokio::time::interval(self.interval.max(Duration::from_millis(1)));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tokio::pin!(shutdown);

        let mut passes = 0_u64;
        loop {
            tokio::select! {
                biased;
                () = &mut shutdown => {
                    tracing::info!(passes, "scheduler shutting down");
                    return Ok(passes);
                }
                _ = ticker.tick() => {}
            }

            passes += 1;
            tracing::debug!(pass = passes, "scheduler running");
            match self.reconciler.run_pass().await {
                Ok(report) => {
                    tracing::debug!(pass = passes, resolved = report.resolved, "pass finished");
                }
                Err(error) if error.is_fatal() => {
                    tracing::error!(pass = passes, %error, "stopping scheduler");
                    return Err(error);
                }
                Err(error) => {
                    tracing::warn!(pass = passes, %error, "pass failed; retrying next interval");
                }
            }
            tracing::debug!(next_in_secs = self.interval.as_secs(), "scheduler idle");
        }
    }
}
