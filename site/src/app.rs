//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{preloader::Preloader, site_footer::SiteFooter, site_header::SiteHeader};
use crate::pages::{home::HomePage, reservation::ReservationPage};
use crate::state::{lightbox::LightboxState, reveal::RevealState, ui::UiState};
#[cfg(feature = "hydrate")]
use crate::state::ui::PRELOADER_DELAY_MS;
use crate::util::browser;
#[cfg(feature = "hydrate")]
use crate::util::timer;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="de">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the page chrome contexts, wires scroll tracking and the body
/// scroll lock, and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    let reveal = RwSignal::new(RevealState::default());
    let lightbox = RwSignal::new(LightboxState::default());

    provide_context(ui);
    provide_context(reveal);
    provide_context(lightbox);

    // Preloader, mobile menu and lightbox all freeze the page behind them.
    Effect::new(move || {
        let locked = ui.with(|u| u.scroll_locked(lightbox.with(LightboxState::is_mounted)));
        browser::set_scroll_lock(locked);
    });

    #[cfg(feature = "hydrate")]
    {
        timer::after(PRELOADER_DELAY_MS, move || ui.update(UiState::finish_loading));

        let on_scroll = window_event_listener(leptos::ev::scroll, move |_| {
            let scroll_y = browser::page_y();
            let sections = browser::section_bounds();
            ui.update(|u| u.on_scroll(scroll_y, &sections));
        });
        on_cleanup(move || on_scroll.remove());
    }

    view! {
        <Stylesheet id="site" href="/style.css"/>
        <Title text="Maison Doré | Fine Dining"/>
        <Meta name="description" content="Maison Doré – französische Spitzenküche. Reservieren Sie Ihren Tisch online."/>

        <Router>
            <Preloader/>
            <SiteHeader/>
            <main>
                <Routes fallback=|| "Seite nicht gefunden.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("reservierung") view=ReservationPage/>
                </Routes>
            </main>
            <SiteFooter/>
        </Router>
    }
}
