use super::*;

fn three_sections() -> Vec<Section> {
    vec![Section::new("home", 0.0), Section::new("about", 800.0), Section::new("work", 1600.0)]
}

// =============================================================
// active_section
// =============================================================

#[test]
fn offset_900_resolves_to_second_section() {
    let sections = three_sections();
    assert_eq!(active_section(&sections, 900.0, 150.0), Some("about"));
}

#[test]
fn top_of_page_resolves_to_first_section() {
    let sections = three_sections();
    assert_eq!(active_section(&sections, 0.0, 150.0), Some("home"));
}

#[test]
fn lookahead_activates_section_early() {
    let sections = three_sections();
    assert_eq!(active_section(&sections, 649.0, 150.0), Some("home"));
    assert_eq!(active_section(&sections, 650.0, 150.0), Some("about"));
    assert_eq!(active_section(&sections, 1450.0, 150.0), Some("work"));
}

#[test]
fn no_section_qualifies_above_first_threshold() {
    let sections = vec![Section::new("intro", 500.0)];
    assert_eq!(active_section(&sections, 100.0, 150.0), None);
}

#[test]
fn later_section_wins_when_both_qualify() {
    // Out-of-order tops: document order decides, not the larger top.
    let sections = vec![Section::new("a", 300.0), Section::new("b", 100.0)];
    assert_eq!(active_section(&sections, 1000.0, 150.0), Some("b"));
}

#[test]
fn trailing_section_without_id_clears_current() {
    let sections = vec![Section::new("contact", 0.0), Section::new("", 400.0)];
    assert_eq!(active_section(&sections, 1000.0, 150.0), None);
    // Before the id-less section qualifies, the earlier one is still current.
    assert_eq!(active_section(&sections, 200.0, 150.0), Some("contact"));
}

#[test]
fn empty_section_list() {
    assert_eq!(active_section(&[], 0.0, 150.0), None);
}

// =============================================================
// Links
// =============================================================

#[test]
fn link_target_strips_hash() {
    assert_eq!(link_target("#about"), "about");
    assert_eq!(link_target("about"), "about");
    assert_eq!(link_target("#"), "");
}

#[test]
fn placeholder_detection() {
    assert!(is_placeholder_href("#"));
    assert!(!is_placeholder_href("#about"));
    assert!(!is_placeholder_href("https://example.com"));
}

#[test]
fn link_style_marks_matching_link_active() {
    assert_eq!(link_style("#about", Some("about")).get("color"), Some("var(--accent)"));
    assert_eq!(link_style("#work", Some("about")).get("color"), Some("var(--text-dark)"));
}

#[test]
fn placeholder_link_never_active() {
    assert_eq!(link_style("#", None).get("color"), Some("var(--text-dark)"));
    assert_eq!(link_style("#", Some("about")).get("color"), Some("var(--text-dark)"));
}

// =============================================================
// MenuState
// =============================================================

#[test]
fn menu_starts_closed() {
    assert!(!MenuState::default().is_open());
}

#[test]
fn hamburger_click_toggles() {
    let mut menu = MenuState::default();
    assert!(menu.toggle());
    assert!(!menu.toggle());
}

#[test]
fn open_then_link_click_closes() {
    let mut menu = MenuState::default();
    menu.toggle();
    assert!(!menu.link_clicked());
    assert!(!menu.is_open());
}

#[test]
fn outside_click_closes() {
    let mut menu = MenuState::default();
    menu.toggle();
    assert!(!menu.document_clicked(false));
}

#[test]
fn inside_click_keeps_menu_open() {
    let mut menu = MenuState::default();
    menu.toggle();
    assert!(menu.document_clicked(true));
}

#[test]
fn link_click_on_closed_menu_stays_closed() {
    let mut menu = MenuState::default();
    assert!(!menu.link_clicked());
}
