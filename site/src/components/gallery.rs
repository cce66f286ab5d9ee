//! Photo gallery grid and its lightbox overlay.

use leptos::prelude::*;

use crate::state::lightbox::{CLOSE_DELAY_MS, LightboxState};
use crate::util::timer;

#[derive(Clone, Copy)]
struct GalleryImage {
    src: &'static str,
    alt: &'static str,
}

const IMAGES: &[GalleryImage] = &[
    GalleryImage {
        src: "https://images.unsplash.com/photo-1414235077428-338989a2e8c0?w=800&q=80",
        alt: "Gedeckter Tisch im Speisesaal",
    },
    GalleryImage {
        src: "https://images.unsplash.com/photo-1551218808-94e220e084d2?w=600&q=80",
        alt: "Küchenchef beim Anrichten",
    },
    GalleryImage {
        src: "https://images.unsplash.com/photo-1559339352-11d035aa65de?w=600&q=80",
        alt: "Weinkeller",
    },
    GalleryImage {
        src: "https://images.unsplash.com/photo-1565299624946-b28f40a0ae38?w=600&q=80",
        alt: "Hauptgang",
    },
    GalleryImage {
        src: "https://images.unsplash.com/photo-1488477181946-6428a0291777?w=600&q=80",
        alt: "Dessert",
    },
    GalleryImage {
        src: "https://images.unsplash.com/photo-1517248135467-4c7edcad34c4?w=800&q=80",
        alt: "Terrasse am Abend",
    },
];

/// Start the fade-out and remove the overlay once it has finished.
fn close(lightbox: RwSignal<LightboxState>) {
    let mut started = false;
    lightbox.update(|lb| started = lb.begin_close());
    if started {
        timer::after(CLOSE_DELAY_MS, move || lightbox.update(LightboxState::finish_close));
    }
}

#[component]
pub fn Gallery() -> impl IntoView {
    let lightbox = expect_context::<RwSignal<LightboxState>>();

    view! {
        <div class="gallery">
            {IMAGES
                .iter()
                .map(|&image| {
                    view! {
                        <figure class="gallery-item">
                            <img
                                src=image.src
                                alt=image.alt
                                loading="lazy"
                                on:click=move |_| lightbox.update(|lb| lb.open(image.src, image.alt))
                            />
                        </figure>
                    }
                })
                .collect_view()}
        </div>
        <Lightbox/>
    }
}

/// Overlay showing the high-resolution image; click or Escape closes it.
#[component]
fn Lightbox() -> impl IntoView {
    let lightbox = expect_context::<RwSignal<LightboxState>>();
    let mounted = move || lightbox.with(LightboxState::is_mounted);
    let shown = move || lightbox.with(LightboxState::is_shown);

    #[cfg(feature = "hydrate")]
    {
        let on_key = window_event_listener(leptos::ev::keydown, move |ev| {
            if ev.key() == "Escape" && lightbox.with_untracked(LightboxState::is_shown) {
                close(lightbox);
            }
        });
        on_cleanup(move || on_key.remove());
    }

    view! {
        <Show when=mounted>
            <div
                class="lightbox"
                class:lightbox--visible=shown
                role="dialog"
                aria-modal="true"
                on:click=move |_| close(lightbox)
            >
                <img
                    class="lightbox__image"
                    src=move || lightbox.with(|lb| lb.src().unwrap_or_default().to_owned())
                    alt=move || lightbox.with(|lb| lb.alt().to_owned())
                />
            </div>
        </Show>
    }
}
