//! Multi-step reservation widget state.
//!
//! DESIGN
//! ======
//! The widget walks guests -> date -> time -> contact details -> submitted.
//! Every user action is a `ReservationEvent` fed to `ReservationState::apply`,
//! which either mutates the state and reports a follow-up `Effect`, or
//! rejects the event without touching anything. Components only render this
//! state and run the effects (timers), so the whole flow is testable without
//! a browser.
//!
//! Auto-advance after a guest or date selection is deferred. Each deferral
//! gets a fresh sequence number; the timer replays it as
//! `AdvanceElapsed { seq }` and only the newest pending advance may move the
//! step. Later selections and manual step clicks supersede older ones.

#[cfg(test)]
#[path = "reservation_test.rs"]
mod reservation_test;

use chrono::NaiveDate;
use serde::Serialize;

use super::calendar::{self, CalendarDay};
use super::policy::{BookingPolicy, TimeSlot};

/// Panels of the step widget, in display order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step {
    #[default]
    Guests,
    Date,
    Time,
    Details,
    /// Terminal: the widget is replaced by the confirmation panel.
    Submitted,
}

impl Step {
    /// Steps reachable through the step indicators.
    pub const NAVIGABLE: [Step; 4] = [Step::Guests, Step::Date, Step::Time, Step::Details];

    /// 1-based indicator number.
    #[must_use]
    pub fn number(self) -> u8 {
        match self {
            Step::Guests => 1,
            Step::Date => 2,
            Step::Time => 3,
            Step::Details => 4,
            Step::Submitted => 5,
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Step::Guests => "Gäste",
            Step::Date => "Datum",
            Step::Time => "Uhrzeit",
            Step::Details => "Kontakt",
            Step::Submitted => "Bestätigt",
        }
    }
}

/// Free-text contact inputs of the details step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Phone,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl ContactDetails {
    #[must_use]
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
        }
    }

    fn get_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Phone => &mut self.phone,
        }
    }

    /// All three fields hold something other than whitespace.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.phone]
            .iter()
            .all(|v| !v.trim().is_empty())
    }
}

/// A deferred step change waiting for its timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingAdvance {
    pub seq: u64,
    pub to: Step,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReservationEvent {
    SelectGuests(u8),
    SelectDate(NaiveDate),
    SelectTime(TimeSlot),
    /// Step indicator click; no gating on earlier steps.
    GoToStep(Step),
    /// Timer for a previously scheduled advance fired.
    AdvanceElapsed { seq: u64 },
    Input { field: ContactField, value: String },
    /// Submit with a freshly generated confirmation code.
    Submit { confirmation: String },
}

/// Follow-up work the caller must perform after a successful `apply`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Replay `AdvanceElapsed { seq }` after `after_ms`.
    ScheduleAdvance { seq: u64, after_ms: u32 },
    /// The reservation was accepted; show the confirmation panel.
    Submitted,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ReservationError {
    #[error("Für {0} Gäste nehmen wir online keine Reservierung an.")]
    UnsupportedGuestCount(u8),
    #[error("Wir sind {closed} geschlossen. Bitte wählen Sie einen anderen Tag.")]
    ClosedDay { date: NaiveDate, closed: String },
    #[error("Der {0} liegt außerhalb des buchbaren Zeitraums.")]
    OutsideWindow(NaiveDate),
    #[error("Die Uhrzeit {0} wird nicht angeboten.")]
    UnknownTimeSlot(TimeSlot),
    #[error("Dieser Schritt kann nicht direkt gewählt werden.")]
    StepNotNavigable(Step),
    #[error("Bitte füllen Sie alle Pflichtfelder aus.")]
    Incomplete,
    #[error("Die Reservierung wurde bereits abgeschickt.")]
    AlreadySubmitted,
}

/// What a submitted reservation looks like when logged for inspection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ReservationRequest {
    pub confirmation: String,
    pub guests: u8,
    pub date: NaiveDate,
    pub time: TimeSlot,
    pub contact: ContactDetails,
}

#[derive(Clone, Debug)]
pub struct ReservationState {
    pub policy: BookingPolicy,
    /// Rolling window rendered in the date step.
    pub days: Vec<CalendarDay>,
    pub step: Step,
    pub guests: Option<u8>,
    pub date: Option<NaiveDate>,
    pub time: Option<TimeSlot>,
    pub contact: ContactDetails,
    pub pending_advance: Option<PendingAdvance>,
    pub confirmation: Option<String>,
    advance_seq: u64,
}

impl ReservationState {
    /// Fresh widget state for a page load on `today`.
    #[must_use]
    pub fn new(today: NaiveDate, policy: BookingPolicy) -> Self {
        let days = calendar::booking_window(today, &policy);
        let guests = policy
            .offers_guests(policy.default_guests)
            .then_some(policy.default_guests);
        Self {
            policy,
            days,
            step: Step::Guests,
            guests,
            date: None,
            time: None,
            contact: ContactDetails::default(),
            pending_advance: None,
            confirmation: None,
            advance_seq: 0,
        }
    }

    /// The window entry for `date`, if it is offered at all.
    #[must_use]
    pub fn day(&self, date: NaiveDate) -> Option<&CalendarDay> {
        self.days.iter().find(|d| d.date == date)
    }

    /// True once every required field is set; gates the submit button.
    #[must_use]
    pub fn is_submittable(&self) -> bool {
        self.step != Step::Submitted
            && self.guests.is_some()
            && self.date.is_some()
            && self.time.is_some()
            && self.contact.is_complete()
    }

    /// Apply one event. On `Err` the state is unchanged.
    ///
    /// # Errors
    ///
    /// Returns a `ReservationError` for options the policy does not offer,
    /// closed or out-of-window dates, premature submits, and any event after
    /// submission.
    pub fn apply(&mut self, event: ReservationEvent) -> Result<Effect, ReservationError> {
        if self.step == Step::Submitted && !matches!(event, ReservationEvent::AdvanceElapsed { .. }) {
            return Err(ReservationError::AlreadySubmitted);
        }

        match event {
            ReservationEvent::SelectGuests(n) => {
                if !self.policy.offers_guests(n) {
                    return Err(ReservationError::UnsupportedGuestCount(n));
                }
                self.guests = Some(n);
                Ok(self.schedule_advance(Step::Date))
            }
            ReservationEvent::SelectDate(date) => {
                self.check_date(date)?;
                self.date = Some(date);
                Ok(self.schedule_advance(Step::Time))
            }
            ReservationEvent::SelectTime(slot) => {
                if !self.policy.offers_slot(slot) {
                    return Err(ReservationError::UnknownTimeSlot(slot));
                }
                self.time = Some(slot);
                self.pending_advance = None;
                Ok(Effect::None)
            }
            ReservationEvent::GoToStep(step) => {
                if step == Step::Submitted {
                    return Err(ReservationError::StepNotNavigable(step));
                }
                self.step = step;
                self.pending_advance = None;
                Ok(Effect::None)
            }
            ReservationEvent::AdvanceElapsed { seq } => {
                if let Some(pending) = self.pending_advance
                    && pending.seq == seq
                {
                    self.step = pending.to;
                    self.pending_advance = None;
                }
                Ok(Effect::None)
            }
            ReservationEvent::Input { field, value } => {
                *self.contact.get_mut(field) = value;
                Ok(Effect::None)
            }
            ReservationEvent::Submit { confirmation } => {
                if !self.is_submittable() {
                    return Err(ReservationError::Incomplete);
                }
                if let Some(date) = self.date {
                    self.check_date(date)?;
                }
                self.step = Step::Submitted;
                self.pending_advance = None;
                self.confirmation = Some(confirmation);
                Ok(Effect::Submitted)
            }
        }
    }

    /// Snapshot of the accepted reservation, once submitted.
    #[must_use]
    pub fn request(&self) -> Option<ReservationRequest> {
        Some(ReservationRequest {
            confirmation: self.confirmation.clone()?,
            guests: self.guests?,
            date: self.date?,
            time: self.time?,
            contact: self.contact.clone(),
        })
    }

    /// One-line readout of the current selections.
    #[must_use]
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();
        if let Some(n) = self.guests {
            parts.push(if n == 1 { "1 Gast".to_owned() } else { format!("{n} Gäste") });
        }
        if let Some(date) = self.date {
            parts.push(calendar::format_short(date));
        }
        if let Some(time) = self.time {
            parts.push(format!("{time} Uhr"));
        }
        if parts.is_empty() {
            return "Noch keine Auswahl".to_owned();
        }
        parts.join(" · ")
    }

    fn check_date(&self, date: NaiveDate) -> Result<(), ReservationError> {
        let day = self.day(date).ok_or(ReservationError::OutsideWindow(date))?;
        if day.closed || self.policy.is_closed(date) {
            return Err(ReservationError::ClosedDay {
                date,
                closed: self.policy.closed_days_phrase(),
            });
        }
        Ok(())
    }

    fn schedule_advance(&mut self, to: Step) -> Effect {
        self.advance_seq += 1;
        self.pending_advance = Some(PendingAdvance { seq: self.advance_seq, to });
        Effect::ScheduleAdvance {
            seq: self.advance_seq,
            after_ms: self.policy.auto_advance_ms,
        }
    }
}
