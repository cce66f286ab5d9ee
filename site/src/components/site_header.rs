//! Fixed site header with section navigation and the mobile menu.
//!
//! DESIGN
//! ======
//! Links point at `/#section` so they also work from the form page; on the
//! home page the click is intercepted and smooth-scrolled below the header.

use leptos::prelude::*;

use crate::state::ui::{UiState, anchor_scroll_top, anchor_target};
use crate::util::browser;

/// `(section id, label)` pairs in page order.
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("home", "Startseite"),
    ("about", "Über uns"),
    ("menu", "Menü"),
    ("gallery", "Galerie"),
    ("reservation", "Reservierung"),
    ("contact", "Kontakt"),
];

/// Smooth-scroll to an in-page `#fragment` when its target is on this page.
///
/// Leaves the click alone (normal navigation) for a bare `#`, non-fragment
/// links, or targets that are not rendered here.
pub fn follow_anchor(ev: &leptos::ev::MouseEvent, fragment: &str) {
    let Some(id) = anchor_target(fragment) else {
        return;
    };
    let Some((top, _)) = browser::element_rect(id) else {
        return;
    };
    ev.prevent_default();
    browser::smooth_scroll_to(anchor_scroll_top(top, browser::page_y()));
}

#[component]
pub fn SiteHeader() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let scrolled = move || ui.with(|u| u.header_scrolled);
    let menu_open = move || ui.with(|u| u.menu_open);

    view! {
        <header id="header" class="header" class:header--scrolled=scrolled>
            <nav class="nav">
                <a href="/" class="nav__logo">"Maison Doré"</a>
                <ul id="nav-menu" class="nav__menu" class:nav__menu--active=menu_open>
                    {NAV_LINKS
                        .iter()
                        .map(|&(id, label)| {
                            let fragment = format!("#{id}");
                            let href = format!("/{fragment}");
                            view! {
                                <li>
                                    <a
                                        class="nav-link"
                                        class:nav-link--active=move || ui.with(|u| u.is_active(id))
                                        href=href
                                        on:click=move |ev: leptos::ev::MouseEvent| {
                                            ui.update(UiState::close_menu);
                                            follow_anchor(&ev, &fragment);
                                        }
                                    >
                                        {label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                    <li>
                        <a
                            class="nav-link nav-link--cta"
                            href="/reservierung"
                            on:click=move |_| ui.update(UiState::close_menu)
                        >
                            "Tisch reservieren"
                        </a>
                    </li>
                </ul>
                <button
                    id="nav-toggle"
                    class="nav__toggle"
                    class:nav__toggle--active=menu_open
                    aria-label="Menü öffnen"
                    aria-expanded=move || menu_open().to_string()
                    on:click=move |_| ui.update(UiState::toggle_menu)
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </nav>
        </header>
    }
}
