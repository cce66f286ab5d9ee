#![cfg(feature = "ssr")]

use super::*;

fn render() -> String {
    Owner::new().with(|| view! { <ReservationWidget/> }.to_html())
}

#[test]
fn step_indicator_starts_on_guests_with_nothing_done() {
    let html = render();
    assert_eq!(html.matches("booking-steps__item--active").count(), 1, "{html}");
    assert!(!html.contains("booking-steps__item--done"), "{html}");
    for step in Step::NAVIGABLE {
        assert!(html.contains(step.title()), "missing {:?}", step);
    }
}

#[test]
fn only_the_guests_panel_is_shown_initially() {
    let html = render();
    assert_eq!(html.matches("booking-panel--active").count(), 1);
    assert!(html.contains("Wie viele Gäste?"));
}

#[test]
fn date_step_renders_the_whole_booking_window() {
    let html = render();
    let policy = BookingPolicy::default();
    assert_eq!(html.matches("booking-date__day").count(), policy.window_days as usize);
    assert!(html.contains("booking-date--closed"));
}

#[test]
fn time_step_offers_every_slot() {
    let html = render();
    for slot in BookingPolicy::default().time_slots {
        assert!(html.contains(&slot.to_string()), "missing {slot}");
    }
}
