//! Page footer: address, opening hours, and the newsletter sign-up.

use leptos::prelude::*;

use crate::state::newsletter::{NewsletterState, THANKS_DURATION_MS};
use crate::state::policy::BookingPolicy;
use crate::util::timer;

#[component]
pub fn SiteFooter() -> impl IntoView {
    let closed = BookingPolicy::default().closed_days_phrase();

    view! {
        <footer id="contact" class="footer">
            <div class="footer__grid">
                <div class="footer__col">
                    <h4>"Maison Doré"</h4>
                    <p>"Goldgasse 12" <br/> "10117 Berlin"</p>
                    <p>
                        <a href="tel:+49301234567">"+49 30 123 45 67"</a>
                        <br/>
                        <a href="mailto:reservierung@maison-dore.de">"reservierung@maison-dore.de"</a>
                    </p>
                </div>
                <div class="footer__col">
                    <h4>"Öffnungszeiten"</h4>
                    <p>"Dienstag – Samstag: 17:30 – 23:00"</p>
                    <p>{format!("{closed}: Ruhetag")}</p>
                </div>
                <div class="footer__col">
                    <h4>"Newsletter"</h4>
                    <p>"Saisonale Menüs und Veranstaltungen direkt in Ihr Postfach."</p>
                    <NewsletterForm/>
                </div>
            </div>
            <p class="footer__bottom">"© Maison Doré"</p>
        </footer>
    }
}

#[component]
fn NewsletterForm() -> impl IntoView {
    let state = RwSignal::new(NewsletterState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut start_reset = false;
        state.update(|s| start_reset = s.submit());
        if start_reset {
            timer::after(THANKS_DURATION_MS, move || state.update(NewsletterState::reset));
        }
    };

    view! {
        <form class="footer-form" on:submit=on_submit>
            <input
                type="email"
                placeholder="Ihre E-Mail-Adresse"
                required
                prop:value=move || state.with(|s| s.email.clone())
                on:input=move |ev| state.update(|s| s.email = event_target_value(&ev))
            />
            <button
                type="submit"
                class="footer-submit"
                class:footer-submit--thanked=move || state.with(|s| s.thanked)
            >
                {move || state.with(NewsletterState::button_label)}
            </button>
        </form>
    }
}
