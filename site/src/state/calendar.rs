//! Rolling booking calendar and German date labels.

#[cfg(test)]
#[path = "calendar_test.rs"]
mod calendar_test;

use chrono::{Datelike, Days, NaiveDate, Weekday};

use super::policy::BookingPolicy;

/// One selectable (or closed) day in the widget's date step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    /// Rendered but not selectable.
    pub closed: bool,
}

impl CalendarDay {
    #[must_use]
    pub fn weekday_label(&self) -> &'static str {
        weekday_short(self.date.weekday())
    }

    #[must_use]
    pub fn month_label(&self) -> &'static str {
        month_short(self.date.month())
    }

    #[must_use]
    pub fn day_of_month(&self) -> u32 {
        self.date.day()
    }
}

/// Today's date in the visitor's local time zone.
#[must_use]
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// `today()` as the server rendered it. While hydrating, the browser takes
/// the date serialized into the page instead of reading its own clock, so
/// every date button selects the day its label shows.
#[must_use]
pub fn rendered_today() -> NaiveDate {
    leptos::prelude::SharedValue::new(today).into_inner()
}

/// The next `policy.window_days` dates starting at `today`, closed days tagged.
#[must_use]
pub fn booking_window(today: NaiveDate, policy: &BookingPolicy) -> Vec<CalendarDay> {
    (0..u64::from(policy.window_days))
        .filter_map(|offset| today.checked_add_days(Days::new(offset)))
        .map(|date| CalendarDay { date, closed: policy.is_closed(date) })
        .collect()
}

/// Short label such as `"Di, 20. Okt"`.
#[must_use]
pub fn format_short(date: NaiveDate) -> String {
    format!(
        "{}, {}. {}",
        weekday_short(date.weekday()),
        date.day(),
        month_short(date.month())
    )
}

#[must_use]
pub fn weekday_short(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Mo",
        Weekday::Tue => "Di",
        Weekday::Wed => "Mi",
        Weekday::Thu => "Do",
        Weekday::Fri => "Fr",
        Weekday::Sat => "Sa",
        Weekday::Sun => "So",
    }
}

#[must_use]
pub fn weekday_long(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Montag",
        Weekday::Tue => "Dienstag",
        Weekday::Wed => "Mittwoch",
        Weekday::Thu => "Donnerstag",
        Weekday::Fri => "Freitag",
        Weekday::Sat => "Samstag",
        Weekday::Sun => "Sonntag",
    }
}

#[must_use]
pub fn month_short(month: u32) -> &'static str {
    const MONTHS: [&str; 12] = [
        "Jan", "Feb", "Mär", "Apr", "Mai", "Jun", "Jul", "Aug", "Sep", "Okt", "Nov", "Dez",
    ];
    month
        .checked_sub(1)
        .and_then(|i| MONTHS.get(i as usize))
        .copied()
        .unwrap_or("")
}
