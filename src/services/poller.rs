//! Poll loops: one self-rescheduling task per backend endpoint.
//!
//! DESIGN
//! ======
//! Each endpoint gets its own spawned task driving a `PollTask`. A tick
//! issues exactly one request; success replaces the endpoint's snapshot in
//! the `OverlayStore`, failure is logged at debug and changes nothing. Either
//! way the task sleeps one interval and ticks again, so a slow or dead
//! endpoint only delays itself.
//!
//! The shutdown signal races both the in-flight request and the pending
//! sleep, and is checked once more before every reschedule. A stopped loop
//! never registers another tick.

#[cfg(test)]
#[path = "poller_test.rs"]
mod poller_test;

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::debug;

use crate::net::{Endpoint, SnapshotSource};
use crate::shell::ShutdownSignal;
use crate::state::OverlayStore;

// =============================================================================
// INTERVALS
// =============================================================================

/// Reschedule delay per endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollIntervals {
    pub pick: Duration,
    pub augment: Duration,
    pub build: Duration,
}

impl Default for PollIntervals {
    fn default() -> Self {
        Self {
            pick: Duration::from_millis(1000),
            augment: Duration::from_millis(500),
            build: Duration::from_millis(1000),
        }
    }
}

impl PollIntervals {
    #[must_use]
    pub fn for_endpoint(&self, endpoint: Endpoint) -> Duration {
        match endpoint {
            Endpoint::ChampSelect => self.pick,
            Endpoint::Augments => self.augment,
            Endpoint::Build => self.build,
        }
    }
}

// =============================================================================
// POLL TASK
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollPhase {
    /// Not started, or stopped.
    Idle,
    /// A request is outstanding.
    InFlight,
    /// Waiting out the interval before the next tick.
    Scheduled,
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The snapshot was applied; `changed` is false when it was identical.
    Applied { changed: bool },
    Failed,
}

#[derive(Debug)]
pub struct PollTask {
    endpoint: Endpoint,
    interval: Duration,
    phase: PollPhase,
}

impl PollTask {
    #[must_use]
    pub fn new(endpoint: Endpoint, interval: Duration) -> Self {
        Self { endpoint, interval, phase: PollPhase::Idle }
    }

    #[must_use]
    pub fn endpoint(&self) -> Endpoint {
        self.endpoint
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    #[must_use]
    pub fn phase(&self) -> PollPhase {
        self.phase
    }

    /// Issue one request and apply the result. Always leaves the task
    /// `Scheduled` for exactly one follow-up tick.
    pub async fn tick<S>(&mut self, source: &S, store: &OverlayStore) -> TickOutcome
    where
        S: SnapshotSource + ?Sized,
    {
        self.phase = PollPhase::InFlight;
        let endpoint = self.endpoint;
        let result = match endpoint {
            Endpoint::ChampSelect => source
                .champ_select()
                .await
                .map(|snap| store.update(endpoint, |state| state.apply_pick(snap))),
            Endpoint::Augments => source
                .augments()
                .await
                .map(|snap| store.update(endpoint, |state| state.apply_augment(snap))),
            Endpoint::Build => source
                .build()
                .await
                .map(|resp| store.update(endpoint, |state| state.apply_build(resp))),
        };
        self.phase = PollPhase::Scheduled;

        match result {
            Ok(changed) => TickOutcome::Applied { changed },
            Err(e) => {
                debug!(endpoint = endpoint.name(), error = %e, retryable = e.retryable(), "poll failed");
                TickOutcome::Failed
            }
        }
    }

    fn stop(&mut self) {
        self.phase = PollPhase::Idle;
    }
}

// =============================================================================
// LOOPS
// =============================================================================

/// Spawn the loop for one endpoint. The first tick fires immediately.
pub fn spawn_poll_loop<S>(
    mut task: PollTask,
    source: Arc<S>,
    store: Arc<OverlayStore>,
    shutdown: ShutdownSignal,
) -> JoinHandle<()>
where
    S: SnapshotSource + ?Sized + 'static,
{
    tokio::spawn(async move {
        let endpoint = task.endpoint().name();
        debug!(endpoint, interval = ?task.interval(), "poll loop started");
        loop {
            tokio::select! {
                biased;
                () = shutdown.cancelled() => break,
                _ = task.tick(&*source, &store) => {}
            }
            if shutdown.is_triggered() {
                break;
            }
            tokio::select! {
                biased;
                () = shutdown.cancelled() => break,
                () = tokio::time::sleep(task.interval()) => {}
            }
        }
        task.stop();
        debug!(endpoint, "poll loop stopped");
    })
}

/// Spawn one loop per endpoint.
pub fn spawn_poll_loops<S>(
    intervals: PollIntervals,
    source: &Arc<S>,
    store: &Arc<OverlayStore>,
    shutdown: &ShutdownSignal,
) -> Vec<JoinHandle<()>>
where
    S: SnapshotSource + ?Sized + 'static,
{
    Endpoint::ALL
        .into_iter()
        .map(|endpoint| {
            let task = PollTask::new(endpoint, intervals.for_endpoint(endpoint));
            spawn_poll_loop(task, Arc::clone(source), Arc::clone(store), shutdown.clone())
        })
        .collect()
}
