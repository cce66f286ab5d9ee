//! Wrapper that fades its children in the first time they scroll into view.

use leptos::prelude::*;

use crate::state::reveal::RevealState;
#[cfg(feature = "hydrate")]
use crate::state::reveal::{REVEAL_THRESHOLD, visible_ratio};
#[cfg(feature = "hydrate")]
use crate::util::browser;

/// `id` must be unique on the page; it keys the one-shot reveal.
#[component]
pub fn Reveal(id: &'static str, #[prop(optional)] class: &'static str, children: Children) -> impl IntoView {
    let reveal = expect_context::<RwSignal<RevealState>>();
    let revealed = move || reveal.with(|r| r.is_revealed(id));

    #[cfg(feature = "hydrate")]
    {
        let measure = move || {
            if reveal.with_untracked(|r| r.is_revealed(id)) {
                return;
            }
            let Some((top, height)) = browser::element_rect(id) else {
                return;
            };
            let ratio = visible_ratio(top, height, browser::viewport_height());
            if ratio >= REVEAL_THRESHOLD {
                reveal.update(|r| {
                    r.observe(id, ratio);
                });
            }
        };
        // Elements already on screen at load reveal immediately.
        Effect::new(move || measure());
        let on_scroll = window_event_listener(leptos::ev::scroll, move |_| measure());
        on_cleanup(move || on_scroll.remove());
    }

    view! {
        <div id=id class=format!("reveal {class}") class:reveal--visible=revealed>
            {children()}
        </div>
    }
}
