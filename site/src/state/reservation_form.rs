//! Standalone full-page reservation form.
//!
//! SYSTEM CONTEXT
//! ==============
//! The `/reservierung` page collects the same booking as the step widget in
//! one form. Submission is simulated: a validated form shows a short
//! "sending" phase, then a confirmation code. Validation runs at submit time
//! even though the date input already carries `min`/`max` bounds.

#[cfg(test)]
#[path = "reservation_form_test.rs"]
mod reservation_form_test;

use chrono::NaiveDate;
use serde::Serialize;

use super::policy::{BookingPolicy, TimeSlot};

/// Milliseconds the submit button shows its sending label.
pub const SEND_DELAY_MS: u32 = 1500;

pub const SUBMIT_LABEL: &str = "Reservierung anfragen";
pub const SENDING_LABEL: &str = "Wird gesendet...";

/// Raw input values, exactly as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReservationForm {
    pub date: String,
    pub time: String,
    pub guests: String,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub phone: String,
    pub occasion: String,
    pub message: String,
}

/// A form that passed validation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ValidatedReservation {
    pub date: NaiveDate,
    pub time: TimeSlot,
    pub guests: u8,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occasion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Bitte füllen Sie alle Pflichtfelder aus.")]
    MissingRequired,
    #[error("Bitte geben Sie ein gültiges Datum ein.")]
    InvalidDate,
    #[error("Wir sind {closed} geschlossen. Bitte wählen Sie einen anderen Tag.")]
    ClosedDay { date: NaiveDate, closed: String },
    #[error("Reservierungen sind vom {min} bis {max} möglich.")]
    OutOfRange { min: NaiveDate, max: NaiveDate },
    #[error("Bitte wählen Sie eine angebotene Uhrzeit.")]
    InvalidTime,
    #[error("Bitte wählen Sie eine gültige Personenzahl.")]
    InvalidGuests,
}

/// Input controls on the form page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Date,
    Time,
    Guests,
    Firstname,
    Lastname,
    Email,
    Phone,
    Occasion,
    Message,
}

impl ReservationForm {
    #[must_use]
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Date => &self.date,
            FormField::Time => &self.time,
            FormField::Guests => &self.guests,
            FormField::Firstname => &self.firstname,
            FormField::Lastname => &self.lastname,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::Occasion => &self.occasion,
            FormField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::Date => &mut self.date,
            FormField::Time => &mut self.time,
            FormField::Guests => &mut self.guests,
            FormField::Firstname => &mut self.firstname,
            FormField::Lastname => &mut self.lastname,
            FormField::Email => &mut self.email,
            FormField::Phone => &mut self.phone,
            FormField::Occasion => &mut self.occasion,
            FormField::Message => &mut self.message,
        };
        *slot = value;
    }

    /// Check the form as of `today`.
    ///
    /// # Errors
    ///
    /// Returns the first failing rule: missing required fields, then the
    /// date (parse, closed weekday, range), then time and party size.
    pub fn validate(&self, today: NaiveDate, policy: &BookingPolicy) -> Result<ValidatedReservation, FormError> {
        let required = [
            &self.date,
            &self.time,
            &self.guests,
            &self.firstname,
            &self.lastname,
            &self.email,
            &self.phone,
        ];
        if required.iter().any(|v| v.trim().is_empty()) {
            return Err(FormError::MissingRequired);
        }

        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").map_err(|_| FormError::InvalidDate)?;
        if policy.is_closed(date) {
            return Err(FormError::ClosedDay {
                date,
                closed: policy.closed_days_phrase(),
            });
        }
        let (min, max) = policy.form_date_range(today);
        if date < min || date > max {
            return Err(FormError::OutOfRange { min, max });
        }

        let time: TimeSlot = self.time.parse().map_err(|_| FormError::InvalidTime)?;
        if !policy.offers_slot(time) {
            return Err(FormError::InvalidTime);
        }
        let guests = parse_guests(&self.guests).ok_or(FormError::InvalidGuests)?;
        if !policy.offers_guests(guests) {
            return Err(FormError::InvalidGuests);
        }

        Ok(ValidatedReservation {
            date,
            time,
            guests,
            firstname: self.firstname.trim().to_owned(),
            lastname: self.lastname.trim().to_owned(),
            email: self.email.trim().to_owned(),
            phone: self.phone.trim().to_owned(),
            occasion: non_empty(&self.occasion),
            message: non_empty(&self.message),
        })
    }
}

/// Party-size select values look like `"4"` or `"8+"`; the plus is ignored.
fn parse_guests(raw: &str) -> Option<u8> {
    raw.trim().trim_end_matches('+').parse().ok()
}

fn non_empty(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// Submission lifecycle of the form page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Editing,
    /// Button disabled; confirmation pending for `SEND_DELAY_MS`.
    Sending(ValidatedReservation),
    /// Form hidden, success panel shown.
    Confirmed { code: String, reservation: ValidatedReservation },
}

/// Form page state: inputs plus submission status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub form: ReservationForm,
    pub status: FormStatus,
}

impl FormState {
    /// Start a submission. Returns `Ok(true)` when a send began and the
    /// confirmation timer should start, `Ok(false)` when one is already in
    /// flight or finished. On `Err` nothing changes and the message is shown.
    ///
    /// # Errors
    ///
    /// Propagates the `FormError` from validation.
    pub fn submit(&mut self, today: NaiveDate, policy: &BookingPolicy) -> Result<bool, FormError> {
        if !matches!(self.status, FormStatus::Editing) {
            return Ok(false);
        }
        let reservation = self.form.validate(today, policy)?;
        self.status = FormStatus::Sending(reservation);
        Ok(true)
    }

    /// Finish the simulated send with a generated code. Returns the accepted
    /// reservation, or `None` if no send was in flight.
    pub fn confirm(&mut self, code: String) -> Option<&ValidatedReservation> {
        let FormStatus::Sending(reservation) = &self.status else {
            return None;
        };
        self.status = FormStatus::Confirmed { code, reservation: reservation.clone() };
        match &self.status {
            FormStatus::Confirmed { reservation, .. } => Some(reservation),
            _ => None,
        }
    }

    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        match self.status {
            FormStatus::Sending(_) => SENDING_LABEL,
            _ => SUBMIT_LABEL,
        }
    }

    #[must_use]
    pub fn is_sending(&self) -> bool {
        matches!(self.status, FormStatus::Sending(_))
    }

    #[must_use]
    pub fn confirmation_code(&self) -> Option<&str> {
        match &self.status {
            FormStatus::Confirmed { code, .. } => Some(code),
            _ => None,
        }
    }
}
