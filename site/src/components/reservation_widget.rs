//! Multi-step reservation widget on the home page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders `ReservationState` and feeds every click and keystroke back
//! through `ReservationState::apply`. The only side effects live in
//! `dispatch`: deferred auto-advance timers, the inline notice, and logging
//! the simulated submission.

#[cfg(test)]
#[path = "reservation_widget_test.rs"]
mod reservation_widget_test;

use leptos::prelude::*;

use crate::state::calendar;
use crate::state::policy::BookingPolicy;
use crate::state::reservation::{ContactField, Effect, ReservationEvent, ReservationState, Step};
use crate::util::{confirmation, timer};

/// Run one event through the state machine and perform its effect.
fn dispatch(state: RwSignal<ReservationState>, notice: RwSignal<Option<String>>, event: ReservationEvent) {
    let mut outcome = Ok(Effect::None);
    state.update(|s| outcome = s.apply(event));
    match outcome {
        Ok(effect) => {
            notice.set(None);
            match effect {
                Effect::ScheduleAdvance { seq, after_ms } => {
                    timer::after(after_ms, move || {
                        dispatch(state, notice, ReservationEvent::AdvanceElapsed { seq });
                    });
                }
                Effect::Submitted => {
                    if let Some(request) = state.with_untracked(ReservationState::request) {
                        let json = serde_json::to_string(&request).unwrap_or_default();
                        leptos::logging::log!("reservation submitted (not transmitted): {json}");
                    }
                }
                Effect::None => {}
            }
        }
        Err(err) => notice.set(Some(err.to_string())),
    }
}

#[component]
pub fn ReservationWidget() -> impl IntoView {
    let state = RwSignal::new(ReservationState::new(calendar::rendered_today(), BookingPolicy::default()));
    let notice = RwSignal::new(None::<String>);
    let send = move |event: ReservationEvent| dispatch(state, notice, event);

    let step = move || state.with(|s| s.step);
    let submitted = move || step() == Step::Submitted;

    view! {
        <div class="booking-widget">
            <Show when=move || !submitted() fallback=move || view! { <Confirmation state/> }>
                <ol class="booking-steps">
                    {Step::NAVIGABLE
                        .iter()
                        .map(|&s| {
                            let active = move || step() == s;
                            let done = move || s < step();
                            view! {
                                <li>
                                    <button
                                        type="button"
                                        class="booking-steps__item"
                                        class:booking-steps__item--active=active
                                        class:booking-steps__item--done=done
                                        on:click=move |_| send(ReservationEvent::GoToStep(s))
                                    >
                                        <span class="booking-steps__number">{s.number()}</span>
                                        <span class="booking-steps__title">{s.title()}</span>
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>

                <p class="booking-summary">{move || state.with(ReservationState::summary)}</p>

                <Show when=move || notice.with(Option::is_some)>
                    <p class="booking-notice" role="alert">{move || notice.get().unwrap_or_default()}</p>
                </Show>

                <GuestsPanel state notice/>
                <DatePanel state notice/>
                <TimePanel state notice/>
                <DetailsPanel state notice/>
            </Show>
        </div>
    }
}

#[component]
fn GuestsPanel(state: RwSignal<ReservationState>, notice: RwSignal<Option<String>>) -> impl IntoView {
    let send = move |event: ReservationEvent| dispatch(state, notice, event);
    let options = state.with_untracked(|s| s.policy.guest_options.clone());
    view! {
        <div class="booking-panel" class:booking-panel--active=move || state.with(|s| s.step == Step::Guests)>
            <h3>"Wie viele Gäste?"</h3>
            <div class="booking-options">
                {options
                    .into_iter()
                    .map(|n| {
                        view! {
                            <button
                                type="button"
                                class="booking-option"
                                class:booking-option--selected=move || state.with(|s| s.guests == Some(n))
                                on:click=move |_| send(ReservationEvent::SelectGuests(n))
                            >
                                {n}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn DatePanel(state: RwSignal<ReservationState>, notice: RwSignal<Option<String>>) -> impl IntoView {
    let send = move |event: ReservationEvent| dispatch(state, notice, event);
    let days = state.with_untracked(|s| s.days.clone());
    view! {
        <div class="booking-panel" class:booking-panel--active=move || state.with(|s| s.step == Step::Date)>
            <h3>"Wählen Sie ein Datum"</h3>
            <div class="booking-dates">
                {days
                    .into_iter()
                    .map(|day| {
                        let date = day.date;
                        view! {
                            <button
                                type="button"
                                class="booking-date"
                                class:booking-date--closed=day.closed
                                class:booking-date--selected=move || state.with(|s| s.date == Some(date))
                                disabled=day.closed
                                title=if day.closed { "Ruhetag" } else { "" }
                                on:click=move |_| send(ReservationEvent::SelectDate(date))
                            >
                                <span class="booking-date__weekday">{day.weekday_label()}</span>
                                <span class="booking-date__day">{day.day_of_month()}</span>
                                <span class="booking-date__month">{day.month_label()}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn TimePanel(state: RwSignal<ReservationState>, notice: RwSignal<Option<String>>) -> impl IntoView {
    let send = move |event: ReservationEvent| dispatch(state, notice, event);
    let slots = state.with_untracked(|s| s.policy.time_slots.clone());
    view! {
        <div class="booking-panel" class:booking-panel--active=move || state.with(|s| s.step == Step::Time)>
            <h3>"Zu welcher Uhrzeit?"</h3>
            <div class="booking-options">
                {slots
                    .into_iter()
                    .map(|slot| {
                        view! {
                            <button
                                type="button"
                                class="booking-option"
                                class:booking-option--selected=move || state.with(|s| s.time == Some(slot))
                                on:click=move |_| send(ReservationEvent::SelectTime(slot))
                            >
                                {slot.to_string()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <button type="button" class="booking-next" on:click=move |_| send(ReservationEvent::GoToStep(Step::Details))>
                "Weiter zu Ihren Kontaktdaten"
            </button>
        </div>
    }
}

#[component]
fn DetailsPanel(state: RwSignal<ReservationState>, notice: RwSignal<Option<String>>) -> impl IntoView {
    let send = move |event: ReservationEvent| dispatch(state, notice, event);
    let field = move |field: ContactField, label: &'static str, kind: &'static str, autocomplete: &'static str| {
        view! {
            <label class="booking-field">
                <span>{label}</span>
                <input
                    type=kind
                    autocomplete=autocomplete
                    required
                    prop:value=move || state.with(|s| s.contact.get(field).to_owned())
                    on:input=move |ev| send(ReservationEvent::Input { field, value: event_target_value(&ev) })
                />
            </label>
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !state.with_untracked(ReservationState::is_submittable) {
            return;
        }
        send(ReservationEvent::Submit { confirmation: confirmation::generate() });
    };

    view! {
        <form class="booking-panel" class:booking-panel--active=move || state.with(|s| s.step == Step::Details) on:submit=on_submit>
            <h3>"Ihre Kontaktdaten"</h3>
            {field(ContactField::Name, "Name", "text", "name")}
            {field(ContactField::Email, "E-Mail", "email", "email")}
            {field(ContactField::Phone, "Telefon", "tel", "tel")}
            <button
                type="submit"
                class="booking-submit"
                disabled=move || !state.with(ReservationState::is_submittable)
            >
                "Reservierung abschließen"
            </button>
        </form>
    }
}

#[component]
fn Confirmation(state: RwSignal<ReservationState>) -> impl IntoView {
    let code = move || state.with(|s| s.confirmation.clone().unwrap_or_default());
    view! {
        <div class="booking-confirmation" role="status">
            <h3>"Vielen Dank für Ihre Reservierung!"</h3>
            <p>{move || state.with(ReservationState::summary)}</p>
            <p>
                "Ihre Reservierungsnummer: "
                <strong class="booking-confirmation__code">{code}</strong>
            </p>
            <p>"Sie erhalten in Kürze eine Bestätigung per E-Mail."</p>
        </div>
    }
}
