use super::*;
use crate::net::types::{AugmentEntry, BenchChampion, BuildResponse, TeamMember};

const FHD: Resolution = Resolution::new(1920, 1080);

fn item(id: &str, win: &str) -> BuildItem {
    BuildItem { id: Some(id.into()), win: Some(win.into()), games: None }
}

fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.x1 < b.x2 && b.x1 < a.x2 && a.y1 < b.y2 && b.y1 < a.y2
}

fn lobby() -> ChampSelectSnapshot {
    ChampSelectSnapshot {
        team: vec![
            TeamMember { name: "Ahri".into(), tier: Some("A".into()), ..Default::default() },
            TeamMember { name: "Lux".into(), ..Default::default() },
            TeamMember {
                name: "Jinx".into(),
                is_me: true,
                tier: Some("S+".into()),
                score: Some("62.1".into()),
                win_rate: Some("53.2%".into()),
                ..Default::default()
            },
        ],
        bench: vec![BenchChampion { name: "Garen".into(), tier: Some("B".into()), score: None }],
        ..Default::default()
    }
}

// =============================================================================
// Tier colours
// =============================================================================

#[test]
fn tier_colours() {
    assert_eq!(tier_color(Some("S+")), TIER_GOLD);
    assert_eq!(tier_color(Some("S")), TIER_GOLD);
    assert_eq!(tier_color(Some("A")), TIER_CYAN);
    assert_eq!(tier_color(Some("B")), TIER_GREY);
    assert_eq!(tier_color(Some("C")), TIER_WHITE);
    assert_eq!(tier_color(None), TIER_WHITE);
}

#[test]
fn missing_tier_renders_question_mark() {
    let tag = TierTag::new(None);
    assert_eq!(tag.tier, "?");
    assert_eq!(tag.color, TIER_WHITE);
}

// =============================================================================
// Pick
// =============================================================================

#[test]
fn pick_without_window_uses_full_screen() {
    let scene = compose_pick(&lobby(), None, FHD);
    assert_eq!(scene.frame, Rect::new(0.0, 0.0, 1920.0, 1080.0));
    let jinx = &scene.badges[2];
    assert_eq!(jinx.anchor, Point::new(390.0, 445.5));
    assert_eq!(jinx.anchor.to_pixels(), (390, 445));
}

#[test]
fn pick_projects_into_window_rect() {
    let window = WindowRect { x: 100.0, y: 50.0, w: 1280.0, h: 720.0 };
    let scene = compose_pick(&lobby(), Some(window), FHD);
    assert_eq!(scene.frame, Rect::new(100.0, 50.0, 1380.0, 770.0));
    assert_eq!(scene.badges[0].anchor, Point::new(360.0, 187.0));
    assert_eq!(scene.badges[1].anchor, Point::new(360.0, 267.0));
}

#[test]
fn pick_badge_sizes_and_stats() {
    let scene = compose_pick(&lobby(), None, FHD);
    let sizes: Vec<_> = scene.badges.iter().map(|b| b.size).collect();
    assert_eq!(sizes, vec![BadgeSize::Normal, BadgeSize::Normal, BadgeSize::Large, BadgeSize::Small]);

    let jinx = &scene.badges[2];
    assert_eq!(jinx.tag, TierTag { tier: "S+".into(), color: TIER_GOLD });
    assert_eq!(jinx.score.as_deref(), Some("62.1"));
    assert_eq!(jinx.win_rate.as_deref(), Some("53.2%"));
}

#[test]
fn bench_badge_sits_below_slot() {
    let window = WindowRect { x: 0.0, y: 0.0, w: 1280.0, h: 720.0 };
    let scene = compose_pick(&lobby(), Some(window), FHD);
    let garen = &scene.badges[3];
    assert_eq!(garen.champion, "Garen");
    assert_eq!(garen.anchor, Point::new(377.0, 70.0));
    assert_eq!(garen.tag.color, TIER_GREY);
}

// =============================================================================
// Augment
// =============================================================================

#[test]
fn augment_labels_sit_above_cards() {
    let snap = AugmentSnapshot {
        active: true,
        augments: vec![
            AugmentEntry { name_ko: "첫째".into(), tier_champ: Some("S".into()), tier_global: Some("A".into()), ..Default::default() },
            AugmentEntry { name_ko: "둘째".into(), ..Default::default() },
            AugmentEntry { name_ko: "셋째".into(), ..Default::default() },
            AugmentEntry { name_ko: "넷째".into(), ..Default::default() },
        ],
    };
    let scene = compose_augment(&snap, FHD);
    assert_eq!(scene.labels.len(), 4);
    assert_eq!(scene.labels[0].anchor, Point::new(604.5, 168.0));
    assert_eq!(scene.labels[0].champion_tier.color, TIER_GOLD);
    assert_eq!(scene.labels[0].global_tier.color, TIER_CYAN);
    // Out-of-range slots fall back to the centre card.
    assert_eq!(scene.labels[3].anchor, scene.labels[1].anchor);
}

// =============================================================================
// Build
// =============================================================================

fn build_data() -> BuildData {
    BuildData {
        starting: vec![item("1055", "51.2"), item("2003", "50.0")],
        core: vec![item("3006", "49.0"), item("3031", "55.5"), BuildItem::default()],
        item4: vec![item("3036", "58.1"), item("3072", "57.0"), item("3094", "56.0"), item("3046", "55.0")],
        item5: vec![],
        item6: vec![item("3026", "60.2")],
    }
}

#[test]
fn build_skips_items_without_id_and_caps_options() {
    let scene = compose_build(&build_data(), FHD, "16.1.1");
    let ids: Vec<_> = scene.cards.iter().map(|c| c.item_id.as_str()).collect();
    assert_eq!(ids, vec!["1055", "2003", "3006", "3031", "3036", "3072", "3094", "3026"]);
}

#[test]
fn build_cards_carry_icons_and_option_win_rates() {
    let scene = compose_build(&build_data(), FHD, "16.1.1");
    let boots = scene.cards.iter().find(|c| c.item_id == "3006").unwrap();
    assert_eq!(boots.icon_url, "https://ddragon.leagueoflegends.com/cdn/16.1.1/img/item/3006.png");
    assert_eq!(boots.win_rate, None);
    assert_eq!(boots.size, CardSize::Normal);

    let option = scene.cards.iter().find(|c| c.item_id == "3026").unwrap();
    assert_eq!(option.section, PanelSection::Option(6));
    assert_eq!(option.win_rate.as_deref(), Some("60.2"));
    assert_eq!(option.size, CardSize::Small);
}

#[test]
fn build_headers_show_set_win_rates() {
    let scene = compose_build(&build_data(), FHD, "16.1.1");
    let rates: Vec<_> = scene.headers.iter().map(|h| (h.heading, h.win_rate.as_deref())).collect();
    assert_eq!(
        rates,
        vec![(PanelHeading::Starting, Some("51.2")), (PanelHeading::Core, Some("55.5")), (PanelHeading::Options, None)]
    );
}

#[test]
fn build_cards_do_not_overlap() {
    let scene = compose_build(&build_data(), Resolution::new(2560, 1440), "16.1.1");
    for (i, a) in scene.cards.iter().enumerate() {
        for b in &scene.cards[i + 1..] {
            assert!(!overlaps(&a.rect, &b.rect), "{} overlaps {}", a.item_id, b.item_id);
        }
    }
}

// =============================================================================
// compose
// =============================================================================

#[test]
fn compose_follows_display_mode() {
    let mut state = OverlayState::new();
    assert_eq!(compose(&state, FHD, "16.1.1"), Scene::Empty);

    state.apply_pick(lobby());
    assert_eq!(compose(&state, FHD, "16.1.1").mode(), DisplayMode::Pick);

    state.apply_build(BuildResponse { ok: true, shop_open: true, data: Some(build_data()) });
    assert_eq!(compose(&state, FHD, "16.1.1").mode(), DisplayMode::Build);
}

#[test]
fn scene_serializes_with_mode_tag() {
    let json = serde_json::to_value(Scene::Empty).unwrap();
    assert_eq!(json, serde_json::json!({ "mode": "empty" }));
}
