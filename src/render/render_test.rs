use super::*;
use layout::build_panel::PanelSection;

use crate::net::ItemInfo;
use crate::net::types::{AugmentSnapshot, BuildData, BuildItem, BuildResponse};
use crate::shell::PointerFeed;
use crate::state::{DisplayMode, OverlayStore};

const FHD: Resolution = Resolution::new(1920, 1080);

// =============================================================================
// Fixtures
// =============================================================================

fn item(id: &str) -> BuildItem {
    BuildItem { id: Some(id.into()), ..Default::default() }
}

fn state_with(data: BuildData) -> OverlayState {
    let mut state = OverlayState::new();
    state.apply_build(BuildResponse { ok: true, shop_open: true, data: Some(data) });
    state
}

fn build_state() -> OverlayState {
    state_with(BuildData { starting: vec![item("1001")], core: vec![item("3006"), item("9999")], ..Default::default() })
}

/// Boots recommended both in the core build and as a 4th item option.
fn shared_id_state() -> OverlayState {
    state_with(BuildData {
        starting: vec![item("1001")],
        core: vec![item("3006"), item("9999")],
        item4: vec![item("3006")],
        ..Default::default()
    })
}

fn catalog() -> ItemCatalog {
    let mut catalog = ItemCatalog::new();
    catalog.insert("1001", ItemInfo { name: "장화".into(), gold_total: 300, description: "이동 속도".into() });
    catalog.insert("3006", ItemInfo { name: "광전사의 군화".into(), gold_total: 1100, description: String::new() });
    catalog
}

fn renderer() -> Renderer {
    let mut renderer = Renderer::new(FHD, "16.1.1");
    renderer.set_catalog(catalog());
    renderer
}

/// Centre of the drawn card for `item_id`.
fn card_centre(renderer: &Renderer, item_id: &str) -> PointerSample {
    let Scene::Build(build) = renderer.scene() else { panic!("not in build mode") };
    let card = build.cards.iter().find(|c| c.item_id == item_id).unwrap();
    PointerSample::new((card.rect.x1 + card.rect.x2) / 2.0, (card.rect.y1 + card.rect.y2) / 2.0)
}

fn card_rect(renderer: &Renderer, section: PanelSection, item_id: &str) -> Rect {
    let Scene::Build(build) = renderer.scene() else { panic!("not in build mode") };
    build.cards.iter().find(|c| c.section == section && c.item_id == item_id).unwrap().rect
}

fn centre_of(rect: Rect) -> PointerSample {
    PointerSample::new((rect.x1 + rect.x2) / 2.0, (rect.y1 + rect.y2) / 2.0)
}

fn scene_anchor(renderer: &Renderer) -> Option<Point> {
    match renderer.scene() {
        Scene::Build(build) => build.tooltip.as_ref().map(|t| t.anchor),
        _ => None,
    }
}

fn scene_tooltip(renderer: &Renderer) -> Option<&str> {
    match renderer.scene() {
        Scene::Build(build) => build.tooltip.as_ref().map(|t| t.item_id.as_str()),
        _ => None,
    }
}

// =============================================================================
// render
// =============================================================================

#[test]
fn build_scene_registers_every_card() {
    let mut renderer = renderer();
    assert!(renderer.render(&build_state()));
    assert_eq!(renderer.scene().mode(), DisplayMode::Build);
    let keys: Vec<_> = renderer.hits().regions().map(|r| r.key.as_str()).collect();
    assert_eq!(keys, vec!["1001", "3006", "9999"]);
}

#[test]
fn identical_state_does_not_change_scene() {
    let mut renderer = renderer();
    renderer.render(&build_state());
    assert!(!renderer.render(&build_state()));
}

#[test]
fn other_modes_register_no_targets() {
    let mut renderer = renderer();
    let mut state = OverlayState::new();
    state.apply_augment(AugmentSnapshot { active: true, augments: vec![Default::default()] });
    renderer.render(&state);
    assert_eq!(renderer.scene().mode(), DisplayMode::Augment);
    assert!(renderer.hits().is_empty());
}

// =============================================================================
// on_pointer
// =============================================================================

#[test]
fn hovering_a_card_shows_its_tooltip_once() {
    let mut renderer = renderer();
    renderer.render(&build_state());
    let over = card_centre(&renderer, "1001");

    assert_eq!(renderer.on_pointer(over), TooltipTransition::Shown("1001".into()));
    assert_eq!(renderer.on_pointer(over), TooltipTransition::Unchanged);
    assert_eq!(renderer.tooltip().map(|t| t.gold_total), Some(300));
    assert_eq!(scene_tooltip(&renderer), Some("1001"));
}

#[test]
fn moving_within_the_same_card_is_unchanged() {
    let mut renderer = renderer();
    renderer.render(&build_state());
    let over = card_centre(&renderer, "1001");
    renderer.on_pointer(over);
    let nudged = PointerSample::new(over.x + 1.0, over.y - 1.0);
    assert_eq!(renderer.on_pointer(nudged), TooltipTransition::Unchanged);
}

#[test]
fn tooltip_anchors_below_card() {
    let mut renderer = renderer();
    renderer.render(&build_state());
    renderer.on_pointer(card_centre(&renderer, "3006"));
    let Scene::Build(build) = renderer.scene() else { panic!("not in build mode") };
    let card = build.cards.iter().find(|c| c.item_id == "3006").unwrap();
    let tooltip = renderer.tooltip().unwrap();
    assert_eq!(tooltip.anchor, Point::new(card.rect.x1, card.rect.y2 + TOOLTIP_OFFSET_Y));
}

#[test]
fn card_without_metadata_clears_tooltip() {
    let mut renderer = renderer();
    renderer.render(&build_state());
    renderer.on_pointer(card_centre(&renderer, "1001"));
    assert_eq!(renderer.on_pointer(card_centre(&renderer, "9999")), TooltipTransition::Cleared);
    assert_eq!(scene_tooltip(&renderer), None);
}

#[test]
fn empty_space_clears_tooltip() {
    let mut renderer = renderer();
    renderer.render(&build_state());
    renderer.on_pointer(card_centre(&renderer, "1001"));
    assert_eq!(renderer.on_pointer(PointerSample::new(1900.0, 1000.0)), TooltipTransition::Cleared);
    assert_eq!(renderer.on_pointer(PointerSample::new(1900.0, 1000.0)), TooltipTransition::Unchanged);
}

#[test]
fn no_tooltip_before_dataset_arrives() {
    let mut renderer = Renderer::new(FHD, "16.1.1");
    renderer.render(&build_state());
    assert_eq!(renderer.on_pointer(card_centre(&renderer, "1001")), TooltipTransition::Unchanged);
    assert!(renderer.tooltip().is_none());
}

#[test]
fn leaving_build_mode_drops_tooltip() {
    let mut renderer = renderer();
    let mut state = build_state();
    renderer.render(&state);
    renderer.on_pointer(card_centre(&renderer, "1001"));

    state.apply_build(BuildResponse { ok: true, shop_open: false, data: state.build.clone() });
    assert!(renderer.render(&state));
    assert!(renderer.tooltip().is_none());
    assert!(renderer.hits().is_empty());
}

#[test]
fn tooltip_survives_rerender_while_card_is_drawn() {
    let mut renderer = renderer();
    renderer.render(&build_state());
    renderer.on_pointer(card_centre(&renderer, "1001"));
    assert!(!renderer.render(&build_state()));
    assert_eq!(scene_tooltip(&renderer), Some("1001"));

    renderer.on_pointer(card_centre(&renderer, "3006"));
    let before = card_rect(&renderer, PanelSection::Core, "3006");

    let wider = state_with(BuildData {
        starting: vec![item("1001"), item("2003")],
        core: vec![item("3006"), item("9999")],
        ..Default::default()
    });
    assert!(renderer.render(&wider));
    let after = card_rect(&renderer, PanelSection::Core, "3006");
    assert!(after.x1 > before.x1);

    let expected = Point::new(after.x1, after.y2 + TOOLTIP_OFFSET_Y);
    assert_eq!(renderer.tooltip().map(|t| t.anchor), Some(expected));
    assert_eq!(scene_anchor(&renderer), Some(expected));

    assert_eq!(renderer.on_pointer(centre_of(after)), TooltipTransition::Unchanged);
    assert_eq!(scene_anchor(&renderer), Some(expected));
}

#[test]
fn same_item_in_two_sections_moves_tooltip_between_cards() {
    let mut renderer = renderer();
    renderer.render(&shared_id_state());
    let core = card_rect(&renderer, PanelSection::Core, "3006");
    let option = card_rect(&renderer, PanelSection::Option(4), "3006");

    assert_eq!(renderer.on_pointer(centre_of(core)), TooltipTransition::Shown("3006".into()));
    let revision = renderer.revision();

    assert_eq!(renderer.on_pointer(centre_of(option)), TooltipTransition::Unchanged);
    let expected = Point::new(option.x1, option.y2 + TOOLTIP_OFFSET_Y);
    assert_eq!(renderer.tooltip().map(|t| t.anchor), Some(expected));
    assert_eq!(scene_anchor(&renderer), Some(expected));
    assert!(renderer.revision() > revision);

    let revision = renderer.revision();
    renderer.on_pointer(centre_of(option));
    assert_eq!(renderer.revision(), revision);
}

#[test]
fn rerender_keeps_tooltip_on_the_card_under_the_pointer() {
    let mut renderer = renderer();
    renderer.render(&shared_id_state());
    let option = card_rect(&renderer, PanelSection::Option(4), "3006");
    renderer.on_pointer(centre_of(option));

    assert!(!renderer.render(&shared_id_state()));
    assert_eq!(scene_anchor(&renderer), Some(Point::new(option.x1, option.y2 + TOOLTIP_OFFSET_Y)));
}

// =============================================================================
// spawn_renderer
// =============================================================================

struct Harness {
    store: OverlayStore,
    feed: PointerFeed,
    catalog_tx: oneshot::Sender<ItemCatalog>,
    host_rx: mpsc::Receiver<HostCommand>,
    shutdown: ShutdownSignal,
    handle: JoinHandle<()>,
}

fn start(delay: Duration) -> Harness {
    let store = OverlayStore::new();
    let feed = PointerFeed::new();
    let (catalog_tx, catalog_rx) = oneshot::channel();
    let (host_tx, host_rx) = mpsc::channel(16);
    let shutdown = ShutdownSignal::new();
    let channels = RendererChannels { state: store.subscribe(), pointer: feed.subscribe(), catalog: catalog_rx, host: host_tx };
    let handle = spawn_renderer(Renderer::new(FHD, "16.1.1"), channels, delay, shutdown.clone());
    Harness { store, feed, catalog_tx, host_rx, shutdown, handle }
}

#[tokio::test(start_paused = true)]
async fn click_through_is_requested_once_after_delay() {
    let mut h = start(Duration::from_millis(1000));

    tokio::time::sleep(Duration::from_millis(999)).await;
    assert!(h.host_rx.try_recv().is_err());

    let command = h.host_rx.recv().await.unwrap();
    assert_eq!(command, HostCommand::SetIgnoreMouseEvents { ignore: true, forward: true });

    tokio::time::sleep(Duration::from_secs(5)).await;
    assert!(h.host_rx.try_recv().is_err());

    h.shutdown.trigger();
    h.handle.await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn state_change_presents_scene_and_pointer_drives_tooltip() {
    let mut h = start(Duration::from_secs(3600));
    h.catalog_tx.send(catalog()).unwrap();
    tokio::task::yield_now().await;

    h.store.update(crate::net::Endpoint::Build, |s| {
        *s = build_state();
        true
    });
    let HostCommand::Present(scene) = h.host_rx.recv().await.unwrap() else { panic!("expected a scene") };
    let Scene::Build(build) = &scene else { panic!("expected build scene") };
    let card = build.cards.iter().find(|c| c.item_id == "1001").unwrap();

    h.feed.publish(PointerSample::new(card.rect.x1 + 1.0, card.rect.y1 + 1.0));
    let HostCommand::Present(Scene::Build(with_tooltip)) = h.host_rx.recv().await.unwrap() else {
        panic!("expected a build scene")
    };
    assert_eq!(with_tooltip.tooltip.map(|t| t.item_id), Some("1001".to_owned()));

    h.shutdown.trigger();
    h.handle.await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn tooltip_move_between_same_item_cards_is_presented() {
    let mut h = start(Duration::from_secs(3600));
    h.catalog_tx.send(catalog()).unwrap();
    tokio::task::yield_now().await;

    h.store.update(crate::net::Endpoint::Build, |s| {
        *s = shared_id_state();
        true
    });
    let HostCommand::Present(Scene::Build(build)) = h.host_rx.recv().await.unwrap() else {
        panic!("expected a build scene")
    };
    let rect_in =
        |section: PanelSection| build.cards.iter().find(|c| c.section == section && c.item_id == "3006").unwrap().rect;
    let (core, option) = (rect_in(PanelSection::Core), rect_in(PanelSection::Option(4)));

    h.feed.publish(centre_of(core));
    let HostCommand::Present(Scene::Build(shown)) = h.host_rx.recv().await.unwrap() else {
        panic!("expected a build scene")
    };
    assert_eq!(shown.tooltip.map(|t| t.anchor.x), Some(core.x1));

    h.feed.publish(centre_of(option));
    let HostCommand::Present(Scene::Build(moved)) = h.host_rx.recv().await.unwrap() else {
        panic!("expected a build scene")
    };
    assert_eq!(moved.tooltip.map(|t| t.anchor.x), Some(option.x1));

    h.shutdown.trigger();
    h.handle.await.unwrap();
}

#[tokio::test]
async fn renderer_stops_when_host_goes_away() {
    let h = start(Duration::from_millis(0));
    drop(h.host_rx);
    h.handle.await.unwrap();
}
