use super::*;

fn sections() -> Vec<SectionBounds> {
    vec![
        SectionBounds { id: "home".to_owned(), top: 0.0, height: 800.0 },
        SectionBounds { id: "about".to_owned(), top: 800.0, height: 600.0 },
        SectionBounds { id: "menu".to_owned(), top: 1400.0, height: 1000.0 },
    ]
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn ui_state_default_shows_preloader_and_locks_scroll() {
    let state = UiState::default();
    assert!(state.preloader_visible);
    assert!(!state.menu_open);
    assert!(!state.header_scrolled);
    assert_eq!(state.active_section, None);
    assert!(state.scroll_locked(false));
}

#[test]
fn finish_loading_releases_scroll() {
    let mut state = UiState::default();
    state.finish_loading();
    assert!(!state.preloader_visible);
    assert!(!state.scroll_locked(false));
}

// =============================================================
// Mobile menu
// =============================================================

#[test]
fn toggle_menu_flips_and_locks_scroll() {
    let mut state = UiState { preloader_visible: false, ..UiState::default() };
    state.toggle_menu();
    assert!(state.menu_open);
    assert!(state.scroll_locked(false));
    state.toggle_menu();
    assert!(!state.menu_open);
    assert!(!state.scroll_locked(false));
}

#[test]
fn close_menu_is_idempotent() {
    let mut state = UiState { preloader_visible: false, menu_open: true, ..UiState::default() };
    state.close_menu();
    state.close_menu();
    assert!(!state.menu_open);
}

#[test]
fn lightbox_alone_locks_scroll() {
    let state = UiState { preloader_visible: false, ..UiState::default() };
    assert!(state.scroll_locked(true));
}

// =============================================================
// Scroll
// =============================================================

#[test]
fn header_scrolled_after_threshold() {
    let mut state = UiState::default();
    state.on_scroll(50.0, &[]);
    assert!(!state.header_scrolled);
    state.on_scroll(50.5, &[]);
    assert!(state.header_scrolled);
    state.on_scroll(0.0, &[]);
    assert!(!state.header_scrolled);
}

#[test]
fn active_section_uses_lead_offset() {
    let s = sections();
    // About starts at 800, so it becomes active just past 700.
    assert_eq!(active_section(700.0, &s), Some("home"));
    assert_eq!(active_section(700.1, &s), Some("about"));
    assert_eq!(active_section(1300.0, &s), Some("about"));
    assert_eq!(active_section(1300.5, &s), Some("menu"));
}

#[test]
fn active_section_none_outside_all_bands() {
    let s = sections();
    // The first band starts at -100 exclusive, the last ends at 2300.
    assert_eq!(active_section(-100.0, &s), None);
    assert_eq!(active_section(2300.5, &s), None);
    assert_eq!(active_section(10.0, &[]), None);
}

#[test]
fn on_scroll_tracks_active_section() {
    let mut state = UiState::default();
    state.on_scroll(900.0, &sections());
    assert!(state.is_active("about"));
    assert!(!state.is_active("menu"));
    state.on_scroll(5000.0, &sections());
    assert_eq!(state.active_section, None);
}

// =============================================================
// Anchors
// =============================================================

#[test]
fn anchor_target_extracts_fragment() {
    assert_eq!(anchor_target("#menu"), Some("menu"));
    assert_eq!(anchor_target("#"), None);
    assert_eq!(anchor_target("/reservierung"), None);
    assert_eq!(anchor_target(""), None);
}

#[test]
fn anchor_scroll_top_subtracts_header() {
    assert!((anchor_scroll_top(300.0, 1000.0) - 1220.0).abs() < f64::EPSILON);
    assert!((anchor_scroll_top(-200.0, 1000.0) - 720.0).abs() < f64::EPSILON);
}
