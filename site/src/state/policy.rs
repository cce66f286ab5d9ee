//! Fixed booking rules shared by the reservation widget and form.
//!
//! DESIGN
//! ======
//! The restaurant's opening rules are plain data so both reservation
//! surfaces validate against the same values and tests can tighten them.

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Milliseconds between an auto-advancing selection and the step change.
pub const AUTO_ADVANCE_MS: u32 = 400;

/// Number of bookable days (today inclusive) offered by the widget.
pub const WINDOW_DAYS: u32 = 21;

/// Offered seating time, `HH:MM`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeSlot {
    pub hour: u8,
    pub minute: u8,
}

impl TimeSlot {
    #[must_use]
    pub const fn new(hour: u8, minute: u8) -> Self {
        Self { hour, minute }
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid time slot: {0:?}")]
pub struct ParseTimeSlotError(pub String);

impl FromStr for TimeSlot {
    type Err = ParseTimeSlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseTimeSlotError(s.to_owned());
        let (h, m) = s.trim().split_once(':').ok_or_else(invalid)?;
        let hour: u8 = h.parse().map_err(|_| invalid())?;
        let minute: u8 = m.parse().map_err(|_| invalid())?;
        if hour > 23 || minute > 59 || m.len() != 2 {
            return Err(invalid());
        }
        Ok(Self { hour, minute })
    }
}

impl TryFrom<String> for TimeSlot {
    type Error = ParseTimeSlotError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeSlot> for String {
    fn from(slot: TimeSlot) -> Self {
        slot.to_string()
    }
}

/// Restaurant rules for what can be booked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookingPolicy {
    /// Party sizes offered as options, ascending.
    pub guest_options: Vec<u8>,
    /// Party size preselected when the widget is created.
    pub default_guests: u8,
    /// Seating times offered, ascending.
    pub time_slots: Vec<TimeSlot>,
    /// Days of the week without service.
    pub closed_weekdays: Vec<Weekday>,
    /// Length of the widget's rolling date window.
    pub window_days: u32,
    /// Delay before an auto-advancing selection moves to the next step.
    pub auto_advance_ms: u32,
    /// How far ahead the standalone form accepts dates.
    pub form_horizon_months: u32,
}

impl Default for BookingPolicy {
    fn default() -> Self {
        Self {
            guest_options: (1..=8).collect(),
            default_guests: 2,
            time_slots: vec![
                TimeSlot::new(17, 30),
                TimeSlot::new(18, 0),
                TimeSlot::new(18, 30),
                TimeSlot::new(19, 0),
                TimeSlot::new(19, 30),
                TimeSlot::new(20, 0),
                TimeSlot::new(20, 30),
                TimeSlot::new(21, 0),
            ],
            closed_weekdays: vec![Weekday::Sun, Weekday::Mon],
            window_days: WINDOW_DAYS,
            auto_advance_ms: AUTO_ADVANCE_MS,
            form_horizon_months: 3,
        }
    }
}

impl BookingPolicy {
    #[must_use]
    pub fn is_closed(&self, date: NaiveDate) -> bool {
        self.closed_weekdays.contains(&date.weekday())
    }

    #[must_use]
    pub fn offers_guests(&self, guests: u8) -> bool {
        self.guest_options.contains(&guests)
    }

    #[must_use]
    pub fn offers_slot(&self, slot: TimeSlot) -> bool {
        self.time_slots.contains(&slot)
    }

    /// Inclusive `(min, max)` date bounds for the standalone form:
    /// tomorrow through `form_horizon_months` from today.
    #[must_use]
    pub fn form_date_range(&self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        let min = today.checked_add_days(Days::new(1)).unwrap_or(today);
        let max = today
            .checked_add_months(Months::new(self.form_horizon_months))
            .unwrap_or(min);
        (min, max)
    }

    /// German phrase naming the closed days, e.g. `"Sonntag und Montag"`.
    #[must_use]
    pub fn closed_days_phrase(&self) -> String {
        let mut days = self.closed_weekdays.clone();
        // Week starts on Sunday for display, matching the site's copy.
        days.sort_by_key(Weekday::num_days_from_sunday);
        let names: Vec<&str> = days.into_iter().map(super::calendar::weekday_long).collect();
        match names.split_last() {
            None => String::new(),
            Some((last, [])) => (*last).to_owned(),
            Some((last, rest)) => format!("{} und {last}", rest.join(", ")),
        }
    }
}
