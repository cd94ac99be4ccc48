//! Periodic refresh timer.

use super::error::SchedulerError;
use super::RefreshOrchestrator;
use crate::config::MAX_INTERVAL_SECONDS;
use crate::store::DashboardStore;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

struct RunningTimer {
    period: Duration,
    token: CancellationToken,
    handle: JoinHandle<()>,
}

/// Runs `refresh_all` on a fixed interval.
///
/// At most one timer exists at a time: restarting cancels the previous timer
/// and spawns the new one while holding the same lock. A pass already in
/// progress when the old timer is cancelled runs to completion, but that
/// timer never ticks again.
pub struct RefreshScheduler {
    orchestrator: Arc<RefreshOrchestrator>,
    store: Arc<DashboardStore>,
    shutdown: CancellationToken,
    timer: Mutex<Option<RunningTimer>>,
}

impl RefreshScheduler {
    pub fn new(
        orchestrator: Arc<RefreshOrchestrator>,
        store: Arc<DashboardStore>,
        shutdown: CancellationToken,
    ) -> Self {
        Self {
            orchestrator,
            store,
            shutdown,
            timer: Mutex::new(None),
        }
    }

    /// Start the timer using the stored interval. The first pass runs
    /// immediately.
    pub fn start(&self) -> Result<(), SchedulerError> {
        let seconds = self.store.settings().refresh_interval;
        let period = validate_interval(seconds)?;
        let mut timer = self.lock_timer();
        Self::cancel(&mut timer);
        *timer = Some(self.spawn(period, Instant::now()));
        Ok(())
    }

    /// Change the interval and persist it.
    ///
    /// A running timer is restarted and its next pass runs one full new
    /// period from now. When no timer is running the interval is only
    /// stored, to be picked up by the next `start`.
    pub fn set_interval(&self, seconds: u64) -> Result<(), SchedulerError> {
        let period = validate_interval(seconds)?;
        let first_tick = Instant::now()
            .checked_add(period)
            .ok_or(SchedulerError::InvalidInterval(seconds))?;

        let mut timer = self.lock_timer();
        self.store
            .update_settings(|s| s.refresh_interval = seconds);

        if timer.as_ref().is_some_and(|t| !t.handle.is_finished()) {
            Self::cancel(&mut timer);
            *timer = Some(self.spawn(period, first_tick));
            tracing::info!(interval_seconds = seconds, "Refresh interval changed");
        } else {
            *timer = None;
            tracing::info!(
                interval_seconds = seconds,
                "Refresh interval stored, timer not running"
            );
        }
        Ok(())
    }

    /// Period of the running timer, if any.
    pub fn interval(&self) -> Option<Duration> {
        self.lock_timer().as_ref().map(|t| t.period)
    }

    pub fn is_running(&self) -> bool {
        self.lock_timer()
            .as_ref()
            .is_some_and(|t| !t.handle.is_finished())
    }

    /// Cancel the timer and wait for its task to exit.
    pub async fn stop(&self) {
        let running = self.lock_timer().take();
        if let Some(running) = running {
            running.token.cancel();
            if let Err(e) = running.handle.await {
                tracing::warn!(error = %e, "Refresh timer task ended abnormally");
            }
        }
    }

    fn spawn(&self, period: Duration, first_tick: Instant) -> RunningTimer {
        let token = self.shutdown.child_token();
        let task_token = token.clone();
        let orchestrator = Arc::clone(&self.orchestrator);

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(first_tick, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

            tracing::info!(interval_seconds = period.as_secs(), "Refresh timer started");

            loop {
                tokio::select! {
                    biased;
                    _ = task_token.cancelled() => {
                        tracing::debug!("Refresh timer stopped");
                        break;
                    }
                    _ = interval.tick() => {
                        let summary = orchestrator.refresh_all().await;
                        tracing::debug!(
                            sources_refreshed = summary.outcomes.len(),
                            "Scheduled refresh completed"
                        );
                    }
                }
            }
        });

        RunningTimer {
            period,
            token,
            handle,
        }
    }

    fn cancel(timer: &mut Option<RunningTimer>) {
        if let Some(old) = timer.take() {
            old.token.cancel();
        }
    }

    fn lock_timer(&self) -> MutexGuard<'_, Option<RunningTimer>> {
        self.timer.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn validate_interval(seconds: u64) -> Result<Duration, SchedulerError> {
    if !(1..=MAX_INTERVAL_SECONDS).contains(&seconds) {
        return Err(SchedulerError::InvalidInterval(seconds));
    }
    Ok(Duration::from_secs(seconds))
}
