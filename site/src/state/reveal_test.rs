use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn visible_ratio_fully_inside() {
    assert!(approx(visible_ratio(100.0, 200.0, 800.0), 1.0));
}

#[test]
fn visible_ratio_partially_below_fold() {
    // 50 of 200 px are on screen.
    assert!(approx(visible_ratio(750.0, 200.0, 800.0), 0.25));
}

#[test]
fn visible_ratio_partially_above_top() {
    assert!(approx(visible_ratio(-150.0, 200.0, 800.0), 0.25));
}

#[test]
fn visible_ratio_offscreen_is_zero() {
    assert!(approx(visible_ratio(900.0, 200.0, 800.0), 0.0));
    assert!(approx(visible_ratio(-300.0, 200.0, 800.0), 0.0));
}

#[test]
fn visible_ratio_taller_than_viewport() {
    assert!(approx(visible_ratio(-100.0, 2000.0, 800.0), 0.4));
}

#[test]
fn visible_ratio_zero_height() {
    assert!(approx(visible_ratio(10.0, 0.0, 800.0), 1.0));
    assert!(approx(visible_ratio(900.0, 0.0, 800.0), 0.0));
}

#[test]
fn observe_reveals_at_threshold() {
    let mut state = RevealState::default();
    assert!(!state.observe("dish-1", 0.05));
    assert!(!state.is_revealed("dish-1"));
    assert!(state.observe("dish-1", REVEAL_THRESHOLD));
    assert!(state.is_revealed("dish-1"));
}

#[test]
fn observe_is_one_shot() {
    let mut state = RevealState::default();
    assert!(state.observe("title", 0.5));
    assert!(!state.observe("title", 1.0));
    // Scrolling away does not hide it again.
    assert!(!state.observe("title", 0.0));
    assert!(state.is_revealed("title"));
    assert_eq!(state.len(), 1);
}

#[test]
fn observe_tracks_elements_independently() {
    let mut state = RevealState::default();
    assert!(state.is_empty());
    state.observe("a", 0.2);
    state.observe("b", 0.0);
    assert!(state.is_revealed("a"));
    assert!(!state.is_revealed("b"));
}
