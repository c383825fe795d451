//! Item card placement for the shop build panel.
//!
//! DESIGN
//! ======
//! The panel is a single horizontal strip anchored near the top-left of the
//! HUD: starting items joined by `+`, the core build joined by `▶`, then up to
//! three option rows (4th/5th/6th item) of small cards. Placement is computed
//! in the 1920×1080 HUD frame and projected per axis to the actual screen, so
//! the rectangles returned here are the exact hit boxes of the drawn cards.

#[cfg(test)]
#[path = "build_panel_test.rs"]
mod build_panel_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    BASE_HUD, CARD_GAP, CARD_JOINER, CARD_NORMAL, CARD_SMALL, OPTION_GAP, OPTION_LABEL_WIDTH, OPTION_ROW_MAX,
    PANEL_HEADER_HEIGHT, PANEL_ORIGIN_X_RATIO, PANEL_ORIGIN_Y_RATIO, SECTION_GAP,
};
use crate::geometry::{Point, Rect, Resolution, Scale};

/// Which group of the build a card belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PanelSection {
    Starting,
    Core,
    /// Option row for the 4th, 5th or 6th item slot.
    Option(u8),
}

/// Section title drawn above a card row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PanelHeading {
    Starting,
    Core,
    Options,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardSize {
    Normal,
    Small,
}

/// Number of items in each group of the build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PanelCounts {
    pub starting: usize,
    pub core: usize,
    /// Item counts of the 4th, 5th and 6th slot rows.
    pub options: [usize; 3],
}

/// One card's screen rectangle. `index` is the item's position within its
/// section's source list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CardPlacement {
    pub section: PanelSection,
    pub index: usize,
    pub size: CardSize,
    pub rect: Rect,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PanelLayout {
    pub cards: Vec<CardPlacement>,
    pub headings: Vec<(PanelHeading, Point)>,
    pub bounds: Rect,
}

/// Lay out the build panel for `screen`.
///
/// Option rows are truncated to [`OPTION_ROW_MAX`] items; empty option rows
/// take no space.
#[must_use]
pub fn build_panel_layout(screen: Resolution, counts: PanelCounts) -> PanelLayout {
    let origin_x = f64::from(BASE_HUD.width) * PANEL_ORIGIN_X_RATIO;
    let origin_y = f64::from(BASE_HUD.height) * PANEL_ORIGIN_Y_RATIO;
    let row_y = origin_y + PANEL_HEADER_HEIGHT;

    let mut cards = Vec::new();
    let mut headings = Vec::new();
    let mut x = origin_x;

    headings.push((PanelHeading::Starting, Point::new(x, origin_y)));
    x = joined_row(&mut cards, PanelSection::Starting, counts.starting, x, row_y);
    x += SECTION_GAP;

    headings.push((PanelHeading::Core, Point::new(x, origin_y)));
    x = joined_row(&mut cards, PanelSection::Core, counts.core, x, row_y);
    x += SECTION_GAP;

    headings.push((PanelHeading::Options, Point::new(x, origin_y)));
    let mut first_row = true;
    for (slot, &count) in (4u8..).zip(counts.options.iter()) {
        if count == 0 {
            continue;
        }
        if !first_row {
            x += OPTION_GAP;
        }
        first_row = false;
        x += OPTION_LABEL_WIDTH;
        for index in 0..count.min(OPTION_ROW_MAX) {
            if index > 0 {
                x += CARD_GAP;
            }
            cards.push(CardPlacement {
                section: PanelSection::Option(slot),
                index,
                size: CardSize::Small,
                rect: Rect::from_origin(x, row_y, CARD_SMALL, CARD_SMALL),
            });
            x += CARD_SMALL;
        }
    }

    let bounds = Rect::new(origin_x, origin_y, x, row_y + CARD_NORMAL);

    let scale = Scale::between(BASE_HUD, screen);
    for card in &mut cards {
        card.rect = scale.project_rect(card.rect);
    }
    for (_, anchor) in &mut headings {
        *anchor = scale.project(*anchor);
    }

    PanelLayout { cards, headings, bounds: scale.project_rect(bounds) }
}

/// Full-size cards separated by a joiner glyph. Returns the x after the row.
fn joined_row(cards: &mut Vec<CardPlacement>, section: PanelSection, count: usize, mut x: f64, y: f64) -> f64 {
    for index in 0..count {
        if index > 0 {
            x += CARD_JOINER;
        }
        cards.push(CardPlacement {
            section,
            index,
            size: CardSize::Normal,
            rect: Rect::from_origin(x, y, CARD_NORMAL, CARD_NORMAL),
        });
        x += CARD_NORMAL;
    }
    x
}
