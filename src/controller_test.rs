#![allow(clippy::float_cmp)]

use super::*;
use crate::storage::MemoryStore;

// =============================================================
// Helpers
// =============================================================

type TestCore = PageCore<MemoryStore, &'static str>;

fn core() -> TestCore {
    PageCore::new(PageConfig::default(), MemoryStore::new())
}

fn sections() -> Vec<Section> {
    vec![Section::new("home", 0.0), Section::new("about", 800.0), Section::new("work", 1600.0)]
}

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_restored_from_store() {
    let core: TestCore = PageCore::new(PageConfig::default(), MemoryStore::with_entry("theme", "dark"));
    assert_eq!(core.theme(), Theme::Dark);
}

#[test]
fn double_toggle_round_trips_visual_and_persisted_state() {
    let mut core = core();
    assert_eq!(core.toggle_theme(), Theme::Dark);
    assert_eq!(core.theme_store().get("theme"), Some("dark"));
    assert_eq!(core.toggle_theme(), Theme::Light);
    assert_eq!(core.theme_store().get("theme"), Some("light"));
}

#[test]
fn toggle_survives_storage_failure() {
    let mut core: TestCore = PageCore::new(PageConfig::default(), MemoryStore::read_only());
    assert_eq!(core.toggle_theme(), Theme::Dark);
    assert_eq!(core.theme(), Theme::Dark);
}

// =============================================================
// Menu
// =============================================================

#[test]
fn menu_open_then_nav_link_closes() {
    let mut core = core();
    assert!(core.hamburger_clicked());
    assert!(core.menu_open());
    assert!(!core.nav_link_clicked());
    assert!(!core.menu_open());
}

#[test]
fn menu_closes_on_outside_click_only() {
    let mut core = core();
    core.hamburger_clicked();
    assert!(core.document_clicked(true));
    assert!(!core.document_clicked(false));
}

// =============================================================
// Scroll
// =============================================================

#[test]
fn scroll_frame_combines_effects() {
    let mut core = core();
    assert!(core.scroll_requested());
    let frame = core.scroll_frame(ScrollMetrics::new(900.0, 2600.0, 800.0), &sections());
    assert_eq!(frame.progress.get("width"), Some("50%"));
    assert_eq!(frame.navbar, NavbarStyle::Scrolled);
    assert_eq!(frame.current_section.as_deref(), Some("about"));
}

#[test]
fn scroll_events_coalesce_until_frame_runs() {
    let mut core = core();
    assert!(core.scroll_requested());
    assert!(!core.scroll_requested());
    core.scroll_frame_started();
    assert!(core.scroll_requested());
}

#[test]
fn computing_a_frame_leaves_the_gate_alone() {
    let mut core = core();
    assert!(core.scroll_requested());
    let frame = core.scroll_frame(ScrollMetrics::new(0.0, 800.0, 800.0), &[]);
    assert_eq!(frame.navbar, NavbarStyle::Top);
    assert!(!core.scroll_requested());
    core.scroll_frame_started();
    assert!(core.scroll_requested());
}

#[test]
fn scroll_at_top_uses_top_navbar() {
    let core = core();
    let frame = core.scroll_frame(ScrollMetrics::new(10.0, 2600.0, 800.0), &sections());
    assert_eq!(frame.navbar, NavbarStyle::Top);
    assert_eq!(frame.current_section.as_deref(), Some("home"));
}

#[test]
fn custom_lookahead_is_honored() {
    let config = PageConfig { section_lookahead_px: 0.0, ..PageConfig::default() };
    let core: TestCore = PageCore::new(config, MemoryStore::new());
    let frame = core.scroll_frame(ScrollMetrics::new(700.0, 2600.0, 800.0), &sections());
    assert_eq!(frame.current_section.as_deref(), Some("home"));
}

// =============================================================
// Reveal
// =============================================================

#[test]
fn reveal_hides_then_reveals_once() {
    let mut core = core();
    let hidden = core.watch_reveal("card").expect("newly watched");
    assert_eq!(hidden.get("opacity"), Some("0"));

    let shown = core.reveal_visible(&"card").expect("first sighting");
    assert_eq!(shown.get("opacity"), Some("1"));
    assert!(core.reveal_visible(&"card").is_none());
    assert_eq!(core.pending_reveals(), 0);
}

#[test]
fn rewatching_is_a_noop() {
    let mut core = core();
    core.watch_reveal("card");
    assert!(core.watch_reveal("card").is_none());
    assert_eq!(core.pending_reveals(), 1);
}

// =============================================================
// Lazy images
// =============================================================

#[test]
fn image_loads_exactly_once() {
    let mut core = core();
    assert!(core.watch_image("img"));
    let load = core.image_visible(&"img", Some("real.jpg"), "").expect("first sighting");
    assert_eq!(load.src, "real.jpg");
    assert_eq!(load.class, "loaded");
    assert!(core.image_visible(&"img", Some("real.jpg"), "real.jpg").is_none());
    assert_eq!(core.pending_images(), 0);
}

#[test]
fn unwatched_image_is_ignored() {
    let mut core = core();
    assert!(core.image_visible(&"img", Some("real.jpg"), "").is_none());
}

// =============================================================
// Pointer
// =============================================================

#[test]
fn magnetic_uses_configured_strength() {
    let core = core();
    let t = core.magnetic(Point::new(30.0, 10.0), Rect::new(0.0, 0.0, 20.0, 20.0));
    assert_eq!(t.to_string(), "translate(2px, 0px) scale(1.02)");
}

#[test]
fn parallax_uses_configured_factors() {
    let core = core();
    let transforms = core.parallax(Point::new(1000.0, 500.0), 1000.0, 500.0, 2);
    // Full-window travel: 30 * 8 * 0.5 = 120 for the first shape.
    assert_eq!(transforms[0].translate_x, 120.0);
    assert_eq!(transforms[1].translate_y, 240.0);
}
