//! Single-tooltip tracking keyed by item id.

#[cfg(test)]
#[path = "tooltip_test.rs"]
mod tooltip_test;

use layout::geometry::Point;
use serde::Serialize;

use crate::net::ItemInfo;

/// An item tooltip as drawn.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tooltip {
    pub item_id: String,
    pub name: String,
    pub gold_total: u32,
    pub description: String,
    /// Top-left corner, just below the hovered card.
    pub anchor: Point,
}

impl Tooltip {
    #[must_use]
    pub fn for_item(item_id: &str, info: &ItemInfo, anchor: Point) -> Self {
        Self {
            item_id: item_id.to_owned(),
            name: info.name.clone(),
            gold_total: info.gold_total,
            description: info.description.clone(),
            anchor,
        }
    }
}

/// Result of feeding one hit-test result to the tracker. Transitions are
/// decided by item id alone; a tooltip that only moved is `Unchanged`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TooltipTransition {
    Unchanged,
    Shown(String),
    Cleared,
}

/// Holds at most one active tooltip.
#[derive(Debug, Default)]
pub struct TooltipTracker {
    active: Option<Tooltip>,
}

impl TooltipTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn active(&self) -> Option<&Tooltip> {
        self.active.as_ref()
    }

    #[must_use]
    pub fn active_id(&self) -> Option<&str> {
        self.active.as_ref().map(|t| t.item_id.as_str())
    }

    /// Show the tooltip for `item_id` at `anchor`. Hovering the item that is
    /// already shown is not a transition: `make` is not called, but the
    /// anchor follows the card under the pointer.
    pub fn hover(&mut self, item_id: &str, anchor: Point, make: impl FnOnce(Point) -> Tooltip) -> TooltipTransition {
        if self.active_id() == Some(item_id) {
            self.reanchor(anchor);
            return TooltipTransition::Unchanged;
        }
        self.active = Some(make(anchor));
        TooltipTransition::Shown(item_id.to_owned())
    }

    /// Move the active tooltip. Returns whether its anchor changed.
    pub fn reanchor(&mut self, anchor: Point) -> bool {
        match &mut self.active {
            Some(tooltip) if tooltip.anchor != anchor => {
                tooltip.anchor = anchor;
                true
            }
            _ => false,
        }
    }

    pub fn clear(&mut self) -> TooltipTransition {
        match self.active.take() {
            Some(_) => TooltipTransition::Cleared,
            None => TooltipTransition::Unchanged,
        }
    }
}
