use sidenav_autoclose::prelude::*;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A docs page sidebar: three sections, the second one without children
fn docs_sidebar() -> Vec<ItemSource> {
    vec![
        ItemSource::header("https://docs.example/guide/#getting-started"),
        ItemSource::leaf("https://docs.example/guide/#install"),
        ItemSource::leaf("https://docs.example/guide/#first-run"),
        ItemSource::header("https://docs.example/guide/#faq"),
        ItemSource::header("https://docs.example/guide/#reference"),
        ItemSource::leaf("https://docs.example/guide/#config?v=2"),
        ItemSource::bare_leaf(),
        ItemSource::leaf("https://docs.example/guide/#cli"),
    ]
}

fn leaves(nav: &Collapser) -> Vec<usize> {
    nav.items()
        .iter()
        .enumerate()
        .filter(|(_, item)| !item.is_header())
        .map(|(index, _)| index)
        .collect()
}

/// Exactly one header selected, and exactly its leaves visible
fn assert_only_section_open(nav: &Collapser, header: usize) {
    let selected: Vec<usize> = nav
        .items()
        .iter()
        .enumerate()
        .filter(|(_, item)| item.is_selected())
        .map(|(index, _)| index)
        .collect();
    assert_eq!(selected, vec![header]);

    let end = nav.items()[header + 1..]
        .iter()
        .position(NavItem::is_header)
        .map_or(nav.len(), |offset| header + 1 + offset);
    let expected: Vec<usize> = (header + 1..end).collect();
    assert_eq!(nav.visible_leaves(), expected);
}

#[test]
fn test_startup_hides_all_leaves() {
    init_logging();
    let mut nav = Collapser::new(&docs_sidebar());
    assert_eq!(nav.visible_leaves(), leaves(&nav));

    nav.start(Some("https://docs.example/guide/"));
    assert!(nav.visible_leaves().is_empty());
    assert_eq!(nav.selected_header(), None);
}

#[test]
fn test_startup_opens_section_of_location() {
    init_logging();
    let mut nav = Collapser::new(&docs_sidebar());
    nav.start(Some("https://docs.example/guide/#config"));
    assert_only_section_open(&nav, 4);
}

#[test]
fn test_every_header_opens_exactly_its_section() {
    init_logging();
    let mut nav = Collapser::new(&docs_sidebar());
    nav.start(None);
    for header in [0, 3, 4] {
        nav.header_activated(header).unwrap();
        assert_only_section_open(&nav, header);
    }
}

#[test]
fn test_reactivating_header_collapses_everything() {
    init_logging();
    let mut nav = Collapser::new(&docs_sidebar());
    nav.start(None);
    nav.header_activated(0).unwrap();
    nav.header_activated(0).unwrap();
    assert!(nav.visible_leaves().is_empty());
    assert_eq!(nav.selected_header(), None);
}

#[test]
fn test_content_links() {
    init_logging();
    let mut nav = Collapser::new(&docs_sidebar());
    nav.start(None);

    nav.content_link_followed("https://docs.example/guide/#cli");
    assert_only_section_open(&nav, 4);

    nav.content_link_followed("https://docs.example/guide/#first-run");
    assert_only_section_open(&nav, 0);

    // a link without a fragment collapses the sidebar
    nav.content_link_followed("https://docs.example/changelog/");
    assert!(nav.visible_leaves().is_empty());
    assert_eq!(nav.selected_header(), None);
}

#[test]
fn test_scroll_follows_active_marker() {
    init_logging();
    let mut nav = Collapser::new(&docs_sidebar());
    nav.start(None);
    nav.seed_active(None);

    assert!(nav.active_changed(Some(2)));
    assert_only_section_open(&nav, 0);

    assert!(!nav.active_changed(Some(2)));

    // a leaf without a link resolves to nothing
    assert!(nav.active_changed(Some(6)));
    assert!(nav.visible_leaves().is_empty());

    assert!(nav.active_changed(Some(3)));
    assert_only_section_open(&nav, 3);
}

#[test]
fn test_flush_mirrors_state_on_surface() {
    init_logging();
    let mut nav = Collapser::new(&docs_sidebar());
    let mut surface = RecordingSurface::new();

    nav.start(Some("https://docs.example/guide/#install"));
    nav.flush(&mut surface);
    let writes = surface.take();
    assert!(writes.contains(&SurfaceWrite::Selected(0, true)));
    assert!(writes.contains(&SurfaceWrite::Visibility(5, Visibility::Hidden)));
    // leaves of the open section never left the default state
    assert!(!writes.iter().any(|write| matches!(write, SurfaceWrite::Visibility(1 | 2, _))));

    // nothing changed, nothing written
    nav.close_all();
    nav.open(0).unwrap();
    assert_eq!(nav.flush(&mut surface), 0);
}

#[test]
fn test_item_states_serialize() {
    let mut nav = Collapser::new(&docs_sidebar()[..2]);
    nav.start(None);
    let json = serde_json::to_value(nav.items()).unwrap();
    assert_eq!(json[0]["kind"], "section_header");
    assert_eq!(json[1]["visibility"], "hidden");
    assert_eq!(json[1]["fragment"], "#install");
}
