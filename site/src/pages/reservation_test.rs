#![cfg(feature = "ssr")]

use super::*;

fn render() -> String {
    Owner::new().with(|| view! { <ReservationPage/> }.to_html())
}

#[test]
fn time_select_lists_each_slot_as_value_and_label() {
    let html = render();
    for slot in BookingPolicy::default().time_slots {
        let label = slot.to_string();
        assert!(html.contains(&format!("value=\"{label}\"")), "missing value {label}");
        assert!(html.matches(label.as_str()).count() >= 2, "missing label {label}");
    }
}

#[test]
fn date_input_is_bounded_by_the_rendered_day() {
    let html = render();
    let (min, max) = BookingPolicy::default().form_date_range(calendar::rendered_today());
    assert!(html.contains(&format!("min=\"{}\"", min.format("%Y-%m-%d"))), "{html}");
    assert!(html.contains(&format!("max=\"{}\"", max.format("%Y-%m-%d"))), "{html}");
}

#[test]
fn form_starts_editable_with_submit_label() {
    let html = render();
    assert!(html.contains(crate::state::reservation_form::SUBMIT_LABEL));
    assert!(!html.contains("Reservierungsnummer"));
}
