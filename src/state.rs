//! Overlay state: latest snapshots and the derived display mode.
//!
//! DESIGN
//! ======
//! `OverlayState` holds the most recent successful payload of each polled
//! endpoint. Snapshots are replaced wholesale, never merged, and a failed
//! poll never touches them, so a network hiccup only makes the overlay stale
//! rather than blank. The display mode is not stored; it is derived from the
//! snapshots every time it is asked for.
//!
//! `OverlayStore` publishes the state through a `tokio::sync::watch` channel.
//! Only the poll loops write to it. A write that leaves the state unchanged
//! does not wake subscribers.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use tokio::sync::watch;
use tracing::info;

use crate::net::types::{AugmentSnapshot, BuildData, BuildResponse, ChampSelectSnapshot, Endpoint, WindowRect};

// =============================================================================
// DISPLAY MODE
// =============================================================================

/// The single overlay variant on screen. Modes never overlap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DisplayMode {
    #[default]
    None,
    /// Champion select: teammate and bench badges.
    Pick,
    /// Augment draft: labels above the three cards.
    Augment,
    /// Shop open: recommended build panel with item tooltips.
    Build,
}

// =============================================================================
// OVERLAY STATE
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverlayState {
    pub pick: Option<ChampSelectSnapshot>,
    /// Last game-client window rectangle reported with a pick snapshot.
    pub window_rect: Option<WindowRect>,
    pub augment: Option<AugmentSnapshot>,
    pub build: Option<BuildData>,
    pub shop_open: bool,
}

impl OverlayState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the pick snapshot. A reported window rectangle is captured;
    /// an absent one keeps the previous rectangle. Returns whether anything changed.
    pub fn apply_pick(&mut self, snap: ChampSelectSnapshot) -> bool {
        let mut changed = false;
        if let Some(rect) = snap.window_rect {
            if self.window_rect != Some(rect) {
                self.window_rect = Some(rect);
                changed = true;
            }
        }
        if self.pick.as_ref() != Some(&snap) {
            self.pick = Some(snap);
            changed = true;
        }
        changed
    }

    /// Replace the augment snapshot. Returns whether anything changed.
    pub fn apply_augment(&mut self, snap: AugmentSnapshot) -> bool {
        if self.augment.as_ref() == Some(&snap) {
            return false;
        }
        self.augment = Some(snap);
        true
    }

    /// Apply a build response. Responses with `ok: false` carry no usable
    /// state and are ignored. Returns whether anything changed.
    pub fn apply_build(&mut self, resp: BuildResponse) -> bool {
        if !resp.ok {
            return false;
        }
        if self.shop_open == resp.shop_open && self.build == resp.data {
            return false;
        }
        self.shop_open = resp.shop_open;
        self.build = resp.data;
        true
    }

    /// The active display mode. Build outranks Augment, which outranks Pick.
    #[must_use]
    pub fn display_mode(&self) -> DisplayMode {
        if self.shows_build() {
            DisplayMode::Build
        } else if self.shows_augment() {
            DisplayMode::Augment
        } else if self.shows_pick() {
            DisplayMode::Pick
        } else {
            DisplayMode::None
        }
    }

    fn shows_build(&self) -> bool {
        self.shop_open && self.build.as_ref().is_some_and(|b| !b.is_empty())
    }

    fn shows_augment(&self) -> bool {
        self.augment.as_ref().is_some_and(|a| a.active && !a.augments.is_empty())
    }

    fn shows_pick(&self) -> bool {
        self.pick.as_ref().is_some_and(|p| !p.team.is_empty())
    }
}

// =============================================================================
// STORE
// =============================================================================

/// Watch-backed owner of the overlay state.
pub struct OverlayStore {
    tx: watch::Sender<OverlayState>,
}

impl Default for OverlayStore {
    fn default() -> Self {
        Self::new()
    }
}

impl OverlayStore {
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(OverlayState::default());
        Self { tx }
    }

    /// A receiver that wakes on every effective state change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<OverlayState> {
        self.tx.subscribe()
    }

    /// Clone of the current state.
    #[must_use]
    pub fn snapshot(&self) -> OverlayState {
        self.tx.borrow().clone()
    }

    #[must_use]
    pub fn display_mode(&self) -> DisplayMode {
        self.tx.borrow().display_mode()
    }

    /// Mutate the state on behalf of `endpoint`. `apply` returns whether it
    /// changed anything; subscribers are only notified when it did.
    pub fn update(&self, endpoint: Endpoint, apply: impl FnOnce(&mut OverlayState) -> bool) -> bool {
        let mut transition = None;
        let changed = self.tx.send_if_modified(|state| {
            let before = state.display_mode();
            let changed = apply(state);
            let after = state.display_mode();
            if before != after {
                transition = Some((before, after));
            }
            changed
        });
        if let Some((from, to)) = transition {
            info!(endpoint = endpoint.name(), ?from, ?to, "display mode changed");
        }
        changed
    }
}
