//! Standalone reservation form at `/reservierung`.

#[cfg(test)]
#[path = "reservation_test.rs"]
mod reservation_test;

use leptos::prelude::*;

use crate::state::calendar;
use crate::state::policy::BookingPolicy;
use crate::state::reservation_form::{FormField, FormState, SEND_DELAY_MS};
use crate::util::{browser, confirmation, timer};

#[component]
pub fn ReservationPage() -> impl IntoView {
    let policy = BookingPolicy::default();
    let today = calendar::rendered_today();
    let (min_date, max_date) = policy.form_date_range(today);
    let state = RwSignal::new(FormState::default());
    let error = RwSignal::new(None::<String>);

    let bind = move |field: FormField| {
        let value = move || state.with(|s| s.form.get(field).to_owned());
        let on_input = move |ev: leptos::ev::Event| {
            let text = event_target_value(&ev);
            state.update(|s| s.form.set(field, text));
        };
        (value, on_input)
    };

    let on_submit = {
        let policy = policy.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let mut outcome = Ok(false);
            state.update(|s| outcome = s.submit(today, &policy));
            let started = match outcome {
                Ok(started) => started,
                Err(err) => {
                    let message = err.to_string();
                    browser::alert(&message);
                    error.set(Some(message));
                    return;
                }
            };
            error.set(None);
            if !started {
                return;
            }
            timer::after(SEND_DELAY_MS, move || {
                let mut json = None;
                state.update(|s| {
                    json = s.confirm(confirmation::generate()).and_then(|r| serde_json::to_string(r).ok());
                });
                if let Some(json) = json {
                    leptos::logging::log!("reservation request (not transmitted): {json}");
                }
            });
        }
    };

    let (date, on_date) = bind(FormField::Date);
    let (time, on_time) = bind(FormField::Time);
    let (guests, on_guests) = bind(FormField::Guests);
    let (firstname, on_firstname) = bind(FormField::Firstname);
    let (lastname, on_lastname) = bind(FormField::Lastname);
    let (email, on_email) = bind(FormField::Email);
    let (phone, on_phone) = bind(FormField::Phone);
    let (occasion, on_occasion) = bind(FormField::Occasion);
    let (message, on_message) = bind(FormField::Message);

    let confirmed = move || state.with(|s| s.confirmation_code().is_some());
    let guest_options = policy.guest_options.clone();
    let time_slots = policy.time_slots.clone();
    let closed = policy.closed_days_phrase();

    view! {
        <section id="reservation-form" class="reservation-page">
            <h1 class="section-title">"Tisch reservieren"</h1>
            <p class="section-subtitle">{format!("Wir sind {closed} geschlossen.")}</p>

            <Show
                when=move || !confirmed()
                fallback=move || {
                    view! {
                        <div class="success-message" role="status">
                            <h2>"Vielen Dank!"</h2>
                            <p>"Ihre Reservierungsanfrage ist eingegangen. Wir bestätigen sie in Kürze per E-Mail."</p>
                            <p>
                                "Reservierungsnummer: "
                                <strong>{move || state.with(|s| s.confirmation_code().unwrap_or_default().to_owned())}</strong>
                            </p>
                        </div>
                    }
                }
            >
                <form class="reservation-form" on:submit=on_submit.clone() novalidate>
                    <div class="form-row">
                        <label>
                            "Datum *"
                            <input
                                type="date"
                                min=min_date.format("%Y-%m-%d").to_string()
                                max=max_date.format("%Y-%m-%d").to_string()
                                prop:value=date
                                on:input=on_date
                            />
                        </label>
                        <label>
                            "Uhrzeit *"
                            <select prop:value=time on:change=on_time>
                                <option value="">"Bitte wählen"</option>
                                {time_slots
                                    .iter()
                                    .map(|slot| {
                                        let label = slot.to_string();
                                        let value = label.clone();
                                        view! { <option value=value>{label}</option> }
                                    })
                                    .collect_view()}
                            </select>
                        </label>
                        <label>
                            "Personen *"
                            <select prop:value=guests on:change=on_guests>
                                <option value="">"Bitte wählen"</option>
                                {guest_options
                                    .iter()
                                    .map(|n| view! { <option value=n.to_string()>{n.to_string()}</option> })
                                    .collect_view()}
                                <option value="8+">"Mehr als 8"</option>
                            </select>
                        </label>
                    </div>
                    <div class="form-row">
                        <label>
                            "Vorname *"
                            <input type="text" autocomplete="given-name" prop:value=firstname on:input=on_firstname/>
                        </label>
                        <label>
                            "Nachname *"
                            <input type="text" autocomplete="family-name" prop:value=lastname on:input=on_lastname/>
                        </label>
                    </div>
                    <div class="form-row">
                        <label>
                            "E-Mail *"
                            <input type="email" autocomplete="email" prop:value=email on:input=on_email/>
                        </label>
                        <label>
                            "Telefon *"
                            <input type="tel" autocomplete="tel" prop:value=phone on:input=on_phone/>
                        </label>
                    </div>
                    <label>
                        "Anlass"
                        <select prop:value=occasion on:change=on_occasion>
                            <option value="">"Kein besonderer Anlass"</option>
                            <option value="geburtstag">"Geburtstag"</option>
                            <option value="jahrestag">"Jahrestag"</option>
                            <option value="geschaeftlich">"Geschäftsessen"</option>
                            <option value="antrag">"Heiratsantrag"</option>
                        </select>
                    </label>
                    <label>
                        "Nachricht"
                        <textarea rows="4" prop:value=message on:input=on_message></textarea>
                    </label>

                    <Show when=move || error.with(Option::is_some)>
                        <p class="form-error" role="alert">{move || error.get().unwrap_or_default()}</p>
                    </Show>

                    <button type="submit" class="btn btn--gold" disabled=move || state.with(FormState::is_sending)>
                        {move || state.with(FormState::submit_label)}
                    </button>
                </form>
            </Show>
        </section>
    }
}
