//! Application context: owns every long-lived task and tears them down.
//!
//! DESIGN
//! ======
//! `AppContext` is built once in `main` and replaces process-wide globals.
//! `start` spawns the three poll loops and the render task; every handle is
//! tracked so `shutdown` can trigger the shared signal and wait for each
//! task to finish before the process exits.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::config::OverlayConfig;
use crate::net::items::fetch_catalog;
use crate::net::{HttpTimeouts, ItemCatalog, SnapshotSource};
use crate::render::{Renderer, RendererChannels, spawn_renderer};
use crate::services::spawn_poll_loops;
use crate::shell::{HostCommand, PointerFeed, ShutdownSignal};
use crate::state::OverlayStore;

const HOST_CHANNEL_CAPACITY: usize = 32;

pub struct AppContext {
    config: OverlayConfig,
    store: Arc<OverlayStore>,
    pointer: PointerFeed,
    shutdown: ShutdownSignal,
    handles: Vec<JoinHandle<()>>,
}

impl AppContext {
    #[must_use]
    pub fn new(config: OverlayConfig) -> Self {
        Self {
            config,
            store: Arc::new(OverlayStore::new()),
            pointer: PointerFeed::new(),
            shutdown: ShutdownSignal::new(),
            handles: Vec::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    #[must_use]
    pub fn store(&self) -> &Arc<OverlayStore> {
        &self.store
    }

    /// Feed a host publishes pointer samples into.
    #[must_use]
    pub fn pointer(&self) -> &PointerFeed {
        &self.pointer
    }

    #[must_use]
    pub fn shutdown_signal(&self) -> &ShutdownSignal {
        &self.shutdown
    }

    #[must_use]
    pub fn task_count(&self) -> usize {
        self.handles.len()
    }

    /// Track an externally spawned task so `shutdown` waits for it.
    pub fn track(&mut self, handle: JoinHandle<()>) {
        self.handles.push(handle);
    }

    /// Spawn the poll loops and the render task. Returns the stream of
    /// commands for the host.
    pub fn start<S>(&mut self, source: Arc<S>, catalog: oneshot::Receiver<ItemCatalog>) -> mpsc::Receiver<HostCommand>
    where
        S: SnapshotSource + ?Sized + 'static,
    {
        let polls = spawn_poll_loops(self.config.poll_intervals(), &source, &self.store, &self.shutdown);
        self.handles.extend(polls);

        let (host_tx, host_rx) = mpsc::channel(HOST_CHANNEL_CAPACITY);
        let channels = RendererChannels {
            state: self.store.subscribe(),
            pointer: self.pointer.subscribe(),
            catalog,
            host: host_tx,
        };
        let renderer = Renderer::new(self.config.screen(), self.config.ddragon_version.clone());
        let render = spawn_renderer(renderer, channels, self.config.click_through_delay(), self.shutdown.clone());
        self.handles.push(render);

        info!(backend = %self.config.backend_url, tasks = self.handles.len(), "overlay started");
        host_rx
    }

    /// Trigger the shutdown signal and wait for every tracked task.
    pub async fn shutdown(self) {
        self.shutdown.trigger();
        for handle in self.handles {
            if let Err(e) = handle.await {
                warn!(error = %e, "task ended abnormally");
            }
        }
        info!("overlay stopped");
    }
}

/// Fetch the item dataset once in the background. A failed fetch delivers an
/// empty catalog, so the overlay runs without tooltips.
pub fn spawn_catalog_fetch(
    url: String,
    timeouts: HttpTimeouts,
    shutdown: ShutdownSignal,
) -> (JoinHandle<()>, oneshot::Receiver<ItemCatalog>) {
    let (tx, rx) = oneshot::channel();
    let handle = tokio::spawn(async move {
        let catalog = tokio::select! {
            biased;
            () = shutdown.cancelled() => return,
            result = fetch_catalog(&url, timeouts) => match result {
                Ok(catalog) => catalog,
                Err(e) => {
                    warn!(error = %e, %url, "item dataset unavailable; tooltips disabled");
                    ItemCatalog::new()
                }
            },
        };
        if tx.send(catalog).is_err() {
            debug!("renderer gone before item dataset arrived");
        }
    });
    (handle, rx)
}
