//! Anchor positions for pick-phase and augment-draft annotations.
//!
//! Each function is a pure map of `(actual width, actual height, index)` to
//! an exact screen point. None of them fail: out-of-range augment indices
//! resolve to the centre card instead.

#[cfg(test)]
#[path = "anchors_test.rs"]
mod anchors_test;

use crate::consts::{
    AUGMENT_CARDS, AUGMENT_FALLBACK_INDEX, AUGMENT_TOP_GAP, BASE_HUD, BASE_PICK, BENCH_BELOW_PADDING, BENCH_SLOT_0,
    BENCH_STEP, TEAMMATE_ANCHOR_X, TEAMMATE_START_Y, TEAMMATE_STEP_Y,
};
use crate::geometry::{Point, Rect, Scale};

/// Base-frame box of bench slot `i`.
#[must_use]
pub fn bench_slot_box(i: usize) -> Rect {
    BENCH_SLOT_0.shift_x(i as f64 * BENCH_STEP)
}

/// Badge point centred just below bench slot `i`.
#[must_use]
pub fn bench_slot_position(w: f64, h: f64, i: usize) -> Point {
    let scale = Scale::to_size(BASE_PICK, w, h);
    let slot = bench_slot_box(i);
    scale.project(Point::new(slot.center_x(), slot.y2 + BENCH_BELOW_PADDING))
}

/// Badge point for teammate row `index`.
///
/// Rows are not clamped; the caller supplies `0..5`.
#[must_use]
pub fn teammate_slot_position(w: f64, h: f64, index: usize) -> Point {
    let scale = Scale::to_size(BASE_PICK, w, h);
    scale.project(Point::new(TEAMMATE_ANCHOR_X, TEAMMATE_START_Y + index as f64 * TEAMMATE_STEP_Y))
}

/// Base-frame box of augment card `i`, falling back to the centre card.
#[must_use]
pub fn augment_card_box(i: usize) -> Rect {
    AUGMENT_CARDS.get(i).copied().unwrap_or(AUGMENT_CARDS[AUGMENT_FALLBACK_INDEX])
}

/// Label point centred just above augment card `i`.
#[must_use]
pub fn augment_card_position(w: f64, h: f64, i: usize) -> Point {
    let scale = Scale::to_size(BASE_HUD, w, h);
    let card = augment_card_box(i);
    scale.project(Point::new(card.center_x(), card.y1 - AUGMENT_TOP_GAP))
}
