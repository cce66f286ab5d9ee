//! Full-screen loading overlay shown until the page has settled.

use leptos::prelude::*;

use crate::state::ui::UiState;

#[component]
pub fn Preloader() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let hidden = move || !ui.with(|u| u.preloader_visible);

    view! {
        <div id="preloader" class="preloader" class:preloader--hidden=hidden aria-hidden="true">
            <div class="preloader__logo">"Maison Doré"</div>
            <div class="preloader__bar"></div>
        </div>
    }
}
