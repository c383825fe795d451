//! Base frames and anchor boxes, in base-resolution pixels.

use crate::geometry::{Rect, Resolution};

// ── Base frames ─────────────────────────────────────────────────

/// Design frame of the client lobby (champion select).
pub const BASE_PICK: Resolution = Resolution::new(1280, 720);

/// Design frame of the in-game HUD (augment draft, shop).
pub const BASE_HUD: Resolution = Resolution::new(1920, 1080);

// ── Champion select ─────────────────────────────────────────────

/// Bench slot 0. Later slots are translated along x by [`BENCH_STEP`].
pub const BENCH_SLOT_0: Rect = Rect::new(353.0, 11.0, 401.0, 60.0);

/// Horizontal distance between bench slots.
pub const BENCH_STEP: f64 = 60.0;

/// Gap between the bottom of a bench slot and its badge.
pub const BENCH_BELOW_PADDING: f64 = 10.0;

/// Teammate badge column.
pub const TEAMMATE_ANCHOR_X: f64 = 260.0;

/// Teammate 0 row.
pub const TEAMMATE_START_Y: f64 = 137.0;

/// Vertical distance between teammate rows.
pub const TEAMMATE_STEP_Y: f64 = 80.0;

// ── Augment draft ───────────────────────────────────────────────

/// The three augment cards, left to right.
pub const AUGMENT_CARDS: [Rect; 3] = [
    Rect::new(449.0, 188.0, 760.0, 702.0),
    Rect::new(806.0, 187.0, 1108.0, 701.0),
    Rect::new(1160.0, 187.0, 1462.0, 704.0),
];

/// Card used when the reported augment index has no box.
pub const AUGMENT_FALLBACK_INDEX: usize = 1;

/// Gap between an augment label and the top of its card.
pub const AUGMENT_TOP_GAP: f64 = 20.0;

// ── Shop build panel ────────────────────────────────────────────

/// Panel origin, as fractions of the HUD frame.
pub const PANEL_ORIGIN_X_RATIO: f64 = 0.01;
pub const PANEL_ORIGIN_Y_RATIO: f64 = 0.01;

/// Section title row above each card row.
pub const PANEL_HEADER_HEIGHT: f64 = 18.0;

/// Side of a full-size item card.
pub const CARD_NORMAL: f64 = 40.0;

/// Side of an option card.
pub const CARD_SMALL: f64 = 28.0;

/// Space taken by the `+` / `▶` glyph between consecutive cards.
pub const CARD_JOINER: f64 = 14.0;

/// Space between option cards in one row.
pub const CARD_GAP: f64 = 4.0;

/// Space taken by a vertical divider between sections.
pub const SECTION_GAP: f64 = 24.0;

/// Width of the `4` / `5` / `6` label before an option row.
pub const OPTION_LABEL_WIDTH: f64 = 12.0;

/// Space taken by the divider between option rows.
pub const OPTION_GAP: f64 = 10.0;

/// Option rows show at most this many items.
pub const OPTION_ROW_MAX: usize = 3;
