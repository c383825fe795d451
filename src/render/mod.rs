//! Annotation renderer and pointer hit-testing.
//!
//! DESIGN
//! ======
//! `Renderer` owns everything that only the render task touches: the current
//! scene, the hit index of drawn item cards, the tooltip tracker and the
//! item dataset. `spawn_renderer` drives it from three inputs (state
//! changes, pointer samples, the one-shot dataset delivery) and forwards
//! every visible change to the host as a `HostCommand`.
//!
//! Hit-testing goes through `layout::hit::HitIndex`, so the tooltip logic
//! never asks a visual tree what lies under the pointer.

pub mod scene;
pub mod tooltip;

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::time::Duration;

use layout::geometry::{Point, Rect, Resolution};
use layout::hit::HitIndex;
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info};

pub use scene::{Scene, compose};
pub use tooltip::{Tooltip, TooltipTracker, TooltipTransition};

use crate::net::ItemCatalog;
use crate::shell::{HostCommand, PointerSample, PointerSubscription, ShutdownSignal};
use crate::state::OverlayState;

/// Gap between a hovered card and its tooltip, in screen pixels.
const TOOLTIP_OFFSET_Y: f64 = 6.0;

// =============================================================================
// RENDERER
// =============================================================================

pub struct Renderer {
    screen: Resolution,
    ddragon_version: String,
    catalog: ItemCatalog,
    hits: HitIndex<String>,
    tooltip: TooltipTracker,
    scene: Scene,
    /// Bumped on every change to `scene`.
    revision: u64,
    last_pointer: Option<Point>,
}

impl Renderer {
    #[must_use]
    pub fn new(screen: Resolution, ddragon_version: impl Into<String>) -> Self {
        Self {
            screen,
            ddragon_version: ddragon_version.into(),
            catalog: ItemCatalog::new(),
            hits: HitIndex::new(),
            tooltip: TooltipTracker::new(),
            scene: Scene::Empty,
            revision: 0,
            last_pointer: None,
        }
    }

    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Counter that moves whenever the scene changes, including tooltip
    /// moves that are not a [`TooltipTransition`].
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    #[must_use]
    pub fn hits(&self) -> &HitIndex<String> {
        &self.hits
    }

    #[must_use]
    pub fn tooltip(&self) -> Option<&Tooltip> {
        self.tooltip.active()
    }

    /// Install the item dataset. Tooltips only appear for items it knows.
    pub fn set_catalog(&mut self, catalog: ItemCatalog) {
        self.catalog = catalog;
    }

    /// Recompose the scene from `state` and rebuild the hit index. An active
    /// tooltip survives only while its card is still drawn, and is re-anchored
    /// below that card's current rectangle. Returns whether the scene changed.
    pub fn render(&mut self, state: &OverlayState) -> bool {
        let mut next = compose(state, self.screen, &self.ddragon_version);

        self.hits.clear();
        if let Scene::Build(build) = &next {
            for card in &build.cards {
                self.hits.insert(card.item_id.clone(), card.rect, 0);
            }
        }

        if let Some(rect) = self.drawn_rect_of_active() {
            self.tooltip.reanchor(anchor_below(&rect));
        } else {
            self.tooltip.clear();
        }
        if let Scene::Build(build) = &mut next {
            build.tooltip = self.tooltip.active().cloned();
        }

        if next == self.scene {
            return false;
        }
        self.scene = next;
        self.revision += 1;
        true
    }

    /// Hit-test one pointer sample. The topmost card with dataset metadata
    /// gets the tooltip; anything else clears it.
    ///
    /// The returned transition concerns the item id only. Moving onto
    /// another card with the same id is `Unchanged` even though the tooltip
    /// follows it; watch [`Renderer::revision`] for that.
    pub fn on_pointer(&mut self, sample: PointerSample) -> TooltipTransition {
        let point = sample.point();
        self.last_pointer = Some(point);
        let before = self.tooltip.active().map(|t| t.anchor);

        let hovered = self.hits.topmost_at(point).and_then(|region| {
            let info = self.catalog.get(&region.key)?;
            Some((region.key.as_str(), info, anchor_below(&region.rect)))
        });
        let transition = match hovered {
            Some((id, info, anchor)) => self.tooltip.hover(id, anchor, |at| Tooltip::for_item(id, info, at)),
            None => self.tooltip.clear(),
        };

        let moved = self.tooltip.active().map(|t| t.anchor) != before;
        if transition != TooltipTransition::Unchanged || moved {
            if let Scene::Build(build) = &mut self.scene {
                build.tooltip = self.tooltip.active().cloned();
                self.revision += 1;
            }
        }
        transition
    }

    /// Rectangle of the card the active tooltip belongs to. The card under
    /// the last pointer sample wins when the id is drawn more than once.
    fn drawn_rect_of_active(&self) -> Option<Rect> {
        let id = self.tooltip.active_id()?;
        self.last_pointer
            .and_then(|pt| self.hits.topmost_at(pt))
            .filter(|region| region.key == id)
            .or_else(|| self.hits.regions().find(|region| region.key == id))
            .map(|region| region.rect)
    }
}

fn anchor_below(rect: &Rect) -> Point {
    Point::new(rect.x1, rect.y2 + TOOLTIP_OFFSET_Y)
}

// =============================================================================
// RENDER TASK
// =============================================================================

/// Inputs and output of the render task.
pub struct RendererChannels {
    pub state: watch::Receiver<OverlayState>,
    pub pointer: PointerSubscription,
    pub catalog: oneshot::Receiver<ItemCatalog>,
    pub host: mpsc::Sender<HostCommand>,
}

/// Spawn the render task. It asks the host for click-through mode once
/// `click_through_delay` has elapsed, then presents a scene on every change
/// until shutdown or until the host stops listening.
pub fn spawn_renderer(
    mut renderer: Renderer,
    channels: RendererChannels,
    click_through_delay: Duration,
    shutdown: ShutdownSignal,
) -> JoinHandle<()> {
    let RendererChannels { state: mut state_rx, mut pointer, catalog: mut catalog_rx, host } = channels;

    tokio::spawn(async move {
        let click_through = tokio::time::sleep(click_through_delay);
        tokio::pin!(click_through);
        let mut click_through_sent = false;
        let mut catalog_pending = true;
        let mut pointer_open = true;

        let initial = state_rx.borrow_and_update().clone();
        if renderer.render(&initial) && !present(&host, &renderer).await {
            return;
        }

        loop {
            tokio::select! {
                biased;
                () = shutdown.cancelled() => break,
                () = &mut click_through, if !click_through_sent => {
                    click_through_sent = true;
                    let command = HostCommand::SetIgnoreMouseEvents { ignore: true, forward: true };
                    if host.send(command).await.is_err() {
                        break;
                    }
                    info!("click-through requested");
                }
                changed = state_rx.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    let state = state_rx.borrow_and_update().clone();
                    if renderer.render(&state) && !present(&host, &renderer).await {
                        break;
                    }
                }
                sample = pointer.next(), if pointer_open => match sample {
                    Some(sample) => {
                        let revision = renderer.revision();
                        let transition = renderer.on_pointer(sample);
                        if transition != TooltipTransition::Unchanged {
                            debug!(?transition, "tooltip");
                        }
                        if renderer.revision() != revision && !present(&host, &renderer).await {
                            break;
                        }
                    }
                    None => pointer_open = false,
                },
                catalog = &mut catalog_rx, if catalog_pending => {
                    catalog_pending = false;
                    match catalog {
                        Ok(catalog) => {
                            info!(items = catalog.len(), "item dataset installed");
                            renderer.set_catalog(catalog);
                        }
                        Err(_) => debug!("item dataset never delivered"),
                    }
                }
            }
        }
        debug!("renderer stopped");
    })
}

/// Send the current scene. Returns false once the host has gone away.
async fn present(host: &mpsc::Sender<HostCommand>, renderer: &Renderer) -> bool {
    host.send(HostCommand::Present(renderer.scene().clone())).await.is_ok()
}
