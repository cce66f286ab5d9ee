use super::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// Monday 2026-10-19.
fn today() -> NaiveDate {
    date(2026, 10, 19)
}

fn filled() -> ReservationForm {
    ReservationForm {
        date: "2026-10-20".to_owned(),
        time: "19:00".to_owned(),
        guests: "2".to_owned(),
        firstname: "Jane".to_owned(),
        lastname: "Doe".to_owned(),
        email: "jane@example.com".to_owned(),
        phone: "555-1234".to_owned(),
        occasion: String::new(),
        message: String::new(),
    }
}

#[test]
fn set_then_get_targets_one_field() {
    let mut form = ReservationForm::default();
    form.set(FormField::Occasion, "jahrestag".to_owned());
    assert_eq!(form.get(FormField::Occasion), "jahrestag");
    assert_eq!(form.get(FormField::Message), "");
    assert_eq!(form.occasion, "jahrestag");
}

// =============================================================
// Validation
// =============================================================

#[test]
fn validate_accepts_complete_form() {
    let ok = filled().validate(today(), &BookingPolicy::default()).unwrap();
    assert_eq!(ok.date, date(2026, 10, 20));
    assert_eq!(ok.time, TimeSlot::new(19, 0));
    assert_eq!(ok.guests, 2);
    assert_eq!(ok.occasion, None);
    assert_eq!(ok.message, None);
}

#[test]
fn validate_requires_every_mandatory_field() {
    let clears: [fn(&mut ReservationForm); 7] = [
        |f| f.date.clear(),
        |f| f.time.clear(),
        |f| f.guests.clear(),
        |f| f.firstname.clear(),
        |f| f.lastname.clear(),
        |f| f.email = "  ".to_owned(),
        |f| f.phone.clear(),
    ];
    for clear in clears {
        let mut form = filled();
        clear(&mut form);
        assert_eq!(
            form.validate(today(), &BookingPolicy::default()),
            Err(FormError::MissingRequired)
        );
    }
}

#[test]
fn missing_field_message_matches_site_copy() {
    assert_eq!(
        FormError::MissingRequired.to_string(),
        "Bitte füllen Sie alle Pflichtfelder aus."
    );
}

#[test]
fn validate_rejects_closed_weekday() {
    let form = ReservationForm { date: "2026-10-25".to_owned(), ..filled() };
    let err = form.validate(today(), &BookingPolicy::default()).unwrap_err();
    assert!(matches!(err, FormError::ClosedDay { date: d, .. } if d == date(2026, 10, 25)));
    assert_eq!(
        err.to_string(),
        "Wir sind Sonntag und Montag geschlossen. Bitte wählen Sie einen anderen Tag."
    );
}

#[test]
fn validate_rejects_dates_outside_booking_range() {
    let policy = BookingPolicy::default();
    // Today is not bookable on the form; tomorrow is the minimum.
    for raw in ["2026-10-14", "2027-01-20", "2027-02-02"] {
        let form = ReservationForm { date: raw.to_owned(), ..filled() };
        assert_eq!(
            form.validate(today(), &policy),
            Err(FormError::OutOfRange { min: date(2026, 10, 20), max: date(2027, 1, 19) }),
            "{raw}"
        );
    }
    let last = ReservationForm { date: "2027-01-19".to_owned(), ..filled() };
    assert!(last.validate(today(), &policy).is_ok());
}

#[test]
fn validate_rejects_unparseable_date() {
    let form = ReservationForm { date: "20.10.2026".to_owned(), ..filled() };
    assert_eq!(
        form.validate(today(), &BookingPolicy::default()),
        Err(FormError::InvalidDate)
    );
}

#[test]
fn validate_rejects_unknown_time_and_guests() {
    let policy = BookingPolicy::default();
    let form = ReservationForm { time: "12:00".to_owned(), ..filled() };
    assert_eq!(form.validate(today(), &policy), Err(FormError::InvalidTime));
    let form = ReservationForm { time: "late".to_owned(), ..filled() };
    assert_eq!(form.validate(today(), &policy), Err(FormError::InvalidTime));
    let form = ReservationForm { guests: "0".to_owned(), ..filled() };
    assert_eq!(form.validate(today(), &policy), Err(FormError::InvalidGuests));
    let form = ReservationForm { guests: "viele".to_owned(), ..filled() };
    assert_eq!(form.validate(today(), &policy), Err(FormError::InvalidGuests));
}

#[test]
fn validate_accepts_open_ended_party_size() {
    let form = ReservationForm { guests: "8+".to_owned(), ..filled() };
    assert_eq!(form.validate(today(), &BookingPolicy::default()).unwrap().guests, 8);
}

#[test]
fn validate_trims_and_keeps_optional_fields() {
    let form = ReservationForm {
        firstname: "  Jane ".to_owned(),
        occasion: "Geburtstag".to_owned(),
        message: "  Fensterplatz bitte ".to_owned(),
        ..filled()
    };
    let ok = form.validate(today(), &BookingPolicy::default()).unwrap();
    assert_eq!(ok.firstname, "Jane");
    assert_eq!(ok.occasion.as_deref(), Some("Geburtstag"));
    assert_eq!(ok.message.as_deref(), Some("Fensterplatz bitte"));
}

// =============================================================
// Submission lifecycle
// =============================================================

#[test]
fn submit_closed_weekday_is_blocked_without_confirmation() {
    let mut state = FormState {
        form: ReservationForm { date: "2026-10-26".to_owned(), ..filled() },
        ..FormState::default()
    };
    let err = state.submit(today(), &BookingPolicy::default()).unwrap_err();
    assert!(matches!(err, FormError::ClosedDay { .. }));
    assert_eq!(state.status, FormStatus::Editing);
    assert_eq!(state.confirm("MD-1-AAAA".to_owned()), None);
    assert_eq!(state.confirmation_code(), None);
}

#[test]
fn submit_then_confirm_shows_code() {
    let mut state = FormState { form: filled(), ..FormState::default() };
    assert_eq!(state.submit_label(), SUBMIT_LABEL);

    assert_eq!(state.submit(today(), &BookingPolicy::default()), Ok(true));
    assert!(state.is_sending());
    assert_eq!(state.submit_label(), SENDING_LABEL);
    assert_eq!(state.confirmation_code(), None);

    let accepted = state.confirm("MD-ABC-1234".to_owned()).cloned().unwrap();
    assert_eq!(accepted.email, "jane@example.com");
    assert_eq!(state.confirmation_code(), Some("MD-ABC-1234"));
    assert!(!state.is_sending());
}

#[test]
fn repeated_submit_while_sending_is_ignored() {
    let mut state = FormState { form: filled(), ..FormState::default() };
    state.submit(today(), &BookingPolicy::default()).unwrap();
    state.form.date.clear();
    assert_eq!(state.submit(today(), &BookingPolicy::default()), Ok(false));
    assert!(state.is_sending());
}

#[test]
fn submit_after_confirmation_starts_no_new_send() {
    let mut state = FormState { form: filled(), ..FormState::default() };
    state.submit(today(), &BookingPolicy::default()).unwrap();
    state.confirm("MD-A-0001".to_owned());
    assert_eq!(state.submit(today(), &BookingPolicy::default()), Ok(false));
    assert_eq!(state.confirmation_code(), Some("MD-A-0001"));
}

#[test]
fn confirm_twice_keeps_first_code() {
    let mut state = FormState { form: filled(), ..FormState::default() };
    state.submit(today(), &BookingPolicy::default()).unwrap();
    state.confirm("MD-A-0001".to_owned());
    assert_eq!(state.confirm("MD-B-0002".to_owned()), None);
    assert_eq!(state.confirmation_code(), Some("MD-A-0001"));
}

#[test]
fn validated_reservation_serializes_without_empty_optionals() {
    let ok = filled().validate(today(), &BookingPolicy::default()).unwrap();
    let json = serde_json::to_value(&ok).unwrap();
    assert_eq!(json["date"], "2026-10-20");
    assert_eq!(json["time"], "19:00");
    assert!(json.get("occasion").is_none());
}
