use super::*;

const THUMB: &str = "https://images.unsplash.com/photo-1414235077428?w=600&q=80";

#[test]
fn enlarge_src_upgrades_known_widths() {
    assert_eq!(
        enlarge_src(THUMB),
        "https://images.unsplash.com/photo-1414235077428?w=1200&q=80"
    );
    assert_eq!(enlarge_src("/img/a.jpg?w=800"), "/img/a.jpg?w=1600");
}

#[test]
fn enlarge_src_leaves_other_urls_alone() {
    assert_eq!(enlarge_src("/img/a.jpg?w=400"), "/img/a.jpg?w=400");
    assert_eq!(enlarge_src("/img/a.jpg"), "/img/a.jpg");
}

#[test]
fn enlarge_src_does_not_double_upgrade() {
    // w=600 becomes w=1200, which must not then be treated as anything else.
    assert_eq!(enlarge_src("x?w=600"), "x?w=1200");
}

#[test]
fn open_close_lifecycle() {
    let mut lb = LightboxState::default();
    assert!(!lb.is_mounted());
    assert_eq!(lb.src(), None);

    lb.open(THUMB, "Dessert");
    assert!(lb.is_shown());
    assert!(lb.is_mounted());
    assert_eq!(lb.alt(), "Dessert");
    assert!(lb.src().unwrap().contains("w=1200"));

    assert!(lb.begin_close());
    assert!(!lb.is_shown());
    assert!(lb.is_mounted(), "stays mounted while fading");
    assert!(lb.src().unwrap().contains("w=1200"));

    lb.finish_close();
    assert_eq!(lb, LightboxState::Closed);
}

#[test]
fn begin_close_only_once() {
    let mut lb = LightboxState::default();
    assert!(!lb.begin_close());
    lb.open(THUMB, "");
    assert!(lb.begin_close());
    assert!(!lb.begin_close());
    assert!(matches!(lb, LightboxState::Closing { .. }));
}

#[test]
fn finish_close_ignores_reopened_overlay() {
    let mut lb = LightboxState::default();
    lb.open(THUMB, "a");
    lb.begin_close();
    lb.open("/img/b.jpg?w=800", "b");
    // Stale removal timer from the first close.
    lb.finish_close();
    assert!(lb.is_shown());
    assert_eq!(lb.src(), Some("/img/b.jpg?w=1600"));
}
