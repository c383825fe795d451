//! Host shell interface.
//!
//! DESIGN
//! ======
//! The window, tray icon and backend process belong to the host shell, which
//! lives outside this crate. What crosses the boundary is modelled here:
//!
//! - `PointerFeed`: host → renderer, absolute pointer samples at a fixed
//!   cadence. Subscribers unsubscribe by dropping their `PointerSubscription`.
//! - `HostCommand`: renderer → host, one-way instructions (click-through
//!   mode, scene presentation).
//! - `ShutdownSignal`: shared teardown flag every spawned loop selects on.

#[cfg(test)]
#[path = "shell_test.rs"]
mod shell_test;

use std::sync::Arc;
use std::time::Duration;

use layout::geometry::Point;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast::error::RecvError;
use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::debug;

use crate::render::Scene;

const DEFAULT_POINTER_FEED_CAPACITY: usize = 16;

// =============================================================================
// SHUTDOWN
// =============================================================================

/// Cloneable teardown flag. Once triggered it stays triggered.
#[derive(Clone, Debug)]
pub struct ShutdownSignal {
    tx: Arc<watch::Sender<bool>>,
    rx: watch::Receiver<bool>,
}

impl Default for ShutdownSignal {
    fn default() -> Self {
        Self::new()
    }
}

impl ShutdownSignal {
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = watch::channel(false);
        Self { tx: Arc::new(tx), rx }
    }

    pub fn trigger(&self) {
        self.tx.send_replace(true);
    }

    #[must_use]
    pub fn is_triggered(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolve once the signal is triggered.
    pub async fn cancelled(&self) {
        let mut rx = self.rx.clone();
        while !*rx.borrow_and_update() {
            // The sender lives as long as `self`; an error means it is gone.
            if rx.changed().await.is_err() {
                return;
            }
        }
    }
}

// =============================================================================
// POINTER FEED
// =============================================================================

/// Absolute screen coordinate of the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerSample {
    pub x: f64,
    pub y: f64,
}

impl PointerSample {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn point(self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Host-side publisher of pointer samples.
#[derive(Clone, Debug)]
pub struct PointerFeed {
    tx: broadcast::Sender<PointerSample>,
}

impl Default for PointerFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl PointerFeed {
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = broadcast::channel(DEFAULT_POINTER_FEED_CAPACITY);
        Self { tx }
    }

    /// Push a sample to every subscriber. Returns how many received it.
    pub fn publish(&self, sample: PointerSample) -> usize {
        self.tx.send(sample).unwrap_or(0)
    }

    #[must_use]
    pub fn subscribe(&self) -> PointerSubscription {
        PointerSubscription { rx: self.tx.subscribe() }
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

/// A live subscription. Dropping it unsubscribes.
#[derive(Debug)]
pub struct PointerSubscription {
    rx: broadcast::Receiver<PointerSample>,
}

impl PointerSubscription {
    /// Next sample, or `None` once the feed is gone. Samples missed while
    /// the subscriber lagged are skipped.
    pub async fn next(&mut self) -> Option<PointerSample> {
        loop {
            match self.rx.recv().await {
                Ok(sample) => return Some(sample),
                Err(RecvError::Lagged(skipped)) => debug!(skipped, "pointer samples dropped"),
                Err(RecvError::Closed) => return None,
            }
        }
    }
}

/// Where a host reads the pointer position from.
pub trait PointerSource: Send + 'static {
    /// Current position, or `None` when it cannot be read.
    fn position(&mut self) -> Option<PointerSample>;
}

/// Sample `source` every `every` and publish to `feed` until shutdown.
pub fn spawn_pointer_sampler<P: PointerSource>(
    mut source: P,
    feed: PointerFeed,
    every: Duration,
    shutdown: ShutdownSignal,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            tokio::select! {
                biased;
                () = shutdown.cancelled() => break,
                _ = ticker.tick() => {
                    if let Some(sample) = source.position() {
                        feed.publish(sample);
                    }
                }
            }
        }
        debug!("pointer sampler stopped");
    })
}

// =============================================================================
// HOST COMMANDS
// =============================================================================

/// Renderer → host instructions.
#[derive(Debug, Clone, PartialEq)]
pub enum HostCommand {
    /// Let clicks fall through to the game (`ignore`) while still forwarding
    /// pointer movement to the overlay (`forward`).
    SetIgnoreMouseEvents { ignore: bool, forward: bool },
    /// Draw this scene, replacing the previous one.
    Present(Scene),
}
