//! Scene composition: what the overlay draws for each display mode.
//!
//! DESIGN
//! ======
//! A `Scene` is a plain description of the overlay's contents in absolute
//! screen coordinates. Composing one is pure: the same state, screen and
//! dataset version always yield the same scene, which keeps the renderer
//! task down to diffing scenes and forwarding them to the host.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use layout::anchors::{augment_card_position, bench_slot_position, teammate_slot_position};
use layout::build_panel::{CardSize, PanelCounts, PanelHeading, PanelSection, build_panel_layout};
use layout::geometry::{Point, Rect, Resolution};
use serde::Serialize;

use super::tooltip::Tooltip;
use crate::net::items::item_icon_url;
use crate::net::types::{AugmentSnapshot, BuildData, BuildItem, ChampSelectSnapshot, WindowRect};
use crate::state::{DisplayMode, OverlayState};

// =============================================================================
// TYPES
// =============================================================================

/// Everything the overlay draws. Exactly one variant is on screen.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Scene {
    #[default]
    Empty,
    Pick(PickScene),
    Augment(AugmentScene),
    Build(BuildScene),
}

impl Scene {
    #[must_use]
    pub fn mode(&self) -> DisplayMode {
        match self {
            Self::Empty => DisplayMode::None,
            Self::Pick(_) => DisplayMode::Pick,
            Self::Augment(_) => DisplayMode::Augment,
            Self::Build(_) => DisplayMode::Build,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeSize {
    Small,
    Normal,
    Large,
}

/// A tier letter and the colour it is drawn in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierTag {
    pub tier: String,
    pub color: &'static str,
}

impl TierTag {
    /// Unknown tiers render as `?`.
    #[must_use]
    pub fn new(tier: Option<&str>) -> Self {
        Self { tier: tier.unwrap_or("?").to_owned(), color: tier_color(tier) }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Badge {
    pub champion: String,
    pub tag: TierTag,
    pub size: BadgeSize,
    pub anchor: Point,
    pub score: Option<String>,
    pub win_rate: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PickScene {
    /// Area the badges were projected into: the game window, or the screen.
    pub frame: Rect,
    pub badges: Vec<Badge>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AugmentLabel {
    pub name: String,
    pub anchor: Point,
    /// Tier for the current champion.
    pub champion_tier: TierTag,
    pub global_tier: TierTag,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AugmentScene {
    pub labels: Vec<AugmentLabel>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionHeader {
    pub heading: PanelHeading,
    pub anchor: Point,
    /// Set win rate in percent, shown next to the title.
    pub win_rate: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemCard {
    pub item_id: String,
    pub section: PanelSection,
    pub size: CardSize,
    pub rect: Rect,
    pub icon_url: String,
    /// Per-item win rate; only option cards carry one.
    pub win_rate: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildScene {
    pub bounds: Rect,
    pub headers: Vec<SectionHeader>,
    pub cards: Vec<ItemCard>,
    pub tooltip: Option<Tooltip>,
}

// =============================================================================
// TIER COLOURS
// =============================================================================

pub const TIER_GOLD: &str = "#ffcc00";
pub const TIER_CYAN: &str = "#00ccff";
pub const TIER_GREY: &str = "#cccccc";
pub const TIER_WHITE: &str = "#ffffff";

#[must_use]
pub fn tier_color(tier: Option<&str>) -> &'static str {
    match tier {
        Some("S+" | "S") => TIER_GOLD,
        Some("A") => TIER_CYAN,
        Some("B") => TIER_GREY,
        _ => TIER_WHITE,
    }
}

// =============================================================================
// COMPOSITION
// =============================================================================

/// Compose the scene for the state's current display mode.
#[must_use]
pub fn compose(state: &OverlayState, screen: Resolution, ddragon_version: &str) -> Scene {
    match state.display_mode() {
        DisplayMode::None => Scene::Empty,
        DisplayMode::Pick => state
            .pick
            .as_ref()
            .map_or(Scene::Empty, |snap| Scene::Pick(compose_pick(snap, state.window_rect, screen))),
        DisplayMode::Augment => {
            state.augment.as_ref().map_or(Scene::Empty, |snap| Scene::Augment(compose_augment(snap, screen)))
        }
        DisplayMode::Build => state
            .build
            .as_ref()
            .map_or(Scene::Empty, |data| Scene::Build(compose_build(data, screen, ddragon_version))),
    }
}

/// Teammate and bench badges, projected into the game window when one was
/// reported and into the full screen otherwise.
#[must_use]
pub fn compose_pick(snap: &ChampSelectSnapshot, window: Option<WindowRect>, screen: Resolution) -> PickScene {
    let frame = window.map_or_else(
        || Rect::from_origin(0.0, 0.0, f64::from(screen.width), f64::from(screen.height)),
        |r| Rect::from_origin(r.x, r.y, r.w, r.h),
    );
    let (w, h) = (frame.width(), frame.height());

    let team = snap.team.iter().enumerate().map(|(i, member)| Badge {
        champion: member.name.clone(),
        tag: TierTag::new(member.tier.as_deref()),
        size: if member.is_me { BadgeSize::Large } else { BadgeSize::Normal },
        anchor: teammate_slot_position(w, h, i).offset(frame.x1, frame.y1),
        score: member.score.clone(),
        win_rate: member.win_rate.clone(),
    });
    let bench = snap.bench.iter().enumerate().map(|(i, champ)| Badge {
        champion: champ.name.clone(),
        tag: TierTag::new(champ.tier.as_deref()),
        size: BadgeSize::Small,
        anchor: bench_slot_position(w, h, i).offset(frame.x1, frame.y1),
        score: None,
        win_rate: None,
    });

    PickScene { frame, badges: team.chain(bench).collect() }
}

/// One label above each offered augment card.
#[must_use]
pub fn compose_augment(snap: &AugmentSnapshot, screen: Resolution) -> AugmentScene {
    let (w, h) = (f64::from(screen.width), f64::from(screen.height));
    let labels = snap
        .augments
        .iter()
        .enumerate()
        .map(|(i, aug)| AugmentLabel {
            name: aug.name_ko.clone(),
            anchor: augment_card_position(w, h, i),
            champion_tier: TierTag::new(aug.tier_champ.as_deref()),
            global_tier: TierTag::new(aug.tier_global.as_deref()),
        })
        .collect();
    AugmentScene { labels }
}

/// Item cards for the shop panel. Items without an id are not drawn.
#[must_use]
pub fn compose_build(data: &BuildData, screen: Resolution, ddragon_version: &str) -> BuildScene {
    let starting = with_ids(&data.starting);
    let core = with_ids(&data.core);
    let options = data.option_rows().map(with_ids);

    let counts = PanelCounts {
        starting: starting.len(),
        core: core.len(),
        options: [options[0].len(), options[1].len(), options[2].len()],
    };
    let layout = build_panel_layout(screen, counts);

    let cards = layout
        .cards
        .iter()
        .filter_map(|placement| {
            let (id, item) = match placement.section {
                PanelSection::Starting => starting.get(placement.index),
                PanelSection::Core => core.get(placement.index),
                PanelSection::Option(slot) => options.get(usize::from(slot).checked_sub(4)?)?.get(placement.index),
            }
            .copied()?;
            Some(ItemCard {
                item_id: id.to_owned(),
                section: placement.section,
                size: placement.size,
                rect: placement.rect,
                icon_url: item_icon_url(ddragon_version, id),
                win_rate: match placement.section {
                    PanelSection::Option(_) => item.win.clone(),
                    PanelSection::Starting | PanelSection::Core => None,
                },
            })
        })
        .collect();

    let headers = layout
        .headings
        .iter()
        .map(|&(heading, anchor)| SectionHeader { heading, anchor, win_rate: set_win_rate(data, heading) })
        .collect();

    BuildScene { bounds: layout.bounds, headers, cards, tooltip: None }
}

/// Items that carry an id, paired with it.
fn with_ids(items: &[BuildItem]) -> Vec<(&str, &BuildItem)> {
    items.iter().filter_map(|item| item.id.as_deref().map(|id| (id, item))).collect()
}

/// The starting set's rate rides on its first item; the core set's on its
/// second.
fn set_win_rate(data: &BuildData, heading: PanelHeading) -> Option<String> {
    match heading {
        PanelHeading::Starting => data.starting.first().and_then(|i| i.win.clone()),
        PanelHeading::Core => data.core.get(1).and_then(|i| i.win.clone()),
        PanelHeading::Options => None,
    }
}
