//! Home page: hero, story, menu highlights, gallery, testimonials, and the
//! reservation widget.

use leptos::prelude::*;

use crate::components::gallery::Gallery;
use crate::components::reservation_widget::ReservationWidget;
use crate::components::reveal::Reveal;
use crate::components::site_header::follow_anchor;

#[derive(Clone, Copy)]
struct Dish {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    price: &'static str,
}

const DISHES: &[Dish] = &[
    Dish {
        id: "dish-1",
        name: "Jakobsmuscheln",
        description: "Blumenkohlpüree, brauner Butter, Haselnuss",
        price: "28 €",
    },
    Dish {
        id: "dish-2",
        name: "Bretonischer Hummer",
        description: "Safran-Beurre-blanc, junger Lauch",
        price: "54 €",
    },
    Dish {
        id: "dish-3",
        name: "Rehrücken",
        description: "Sellerie, Wacholderjus, Preiselbeeren",
        price: "46 €",
    },
    Dish {
        id: "dish-4",
        name: "Soufflé au Grand Marnier",
        description: "Vanilleeis, Orangenzeste",
        price: "18 €",
    },
];

const TESTIMONIALS: &[(&str, &str, &str)] = &[
    ("testimonial-1", "Ein Abend, den wir nicht vergessen werden. Jeder Gang eine Überraschung.", "Claudia M."),
    ("testimonial-2", "Perfekter Service und die beste Weinbegleitung der Stadt.", "Thomas R."),
    ("testimonial-3", "Das Soufflé allein ist die Reise wert.", "Aylin K."),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section id="home" class="hero">
            <div class="hero-image"></div>
            <div class="hero__content">
                <p class="hero__eyebrow">"Französische Spitzenküche"</p>
                <h1 class="hero__title">"Maison Doré"</h1>
                <a
                    href="#reservation"
                    class="btn btn--gold"
                    on:click=move |ev: leptos::ev::MouseEvent| follow_anchor(&ev, "#reservation")
                >
                    "Tisch reservieren"
                </a>
            </div>
        </section>

        <section id="about" class="about">
            <Reveal id="about-title" class="section-title">
                <h2>"Unsere Geschichte"</h2>
            </Reveal>
            <Reveal id="about-text" class="section-subtitle">
                <p>
                    "Seit 1998 verbinden wir klassische französische Technik mit den besten "
                    "Produkten der Region. Küchenchef Étienne Laurent kocht saisonal, "
                    "präzise und mit Leidenschaft."
                </p>
            </Reveal>
            <Reveal id="about-image" class="about-image">
                <img src="https://images.unsplash.com/photo-1600565193348-f74bd3c7ccdf?w=800&q=80" alt="Küchenchef" loading="lazy"/>
            </Reveal>
        </section>

        <section id="menu" class="menu">
            <Reveal id="menu-title" class="section-title">
                <h2>"Aus unserer Karte"</h2>
            </Reveal>
            <div class="menu__grid">
                {DISHES
                    .iter()
                    .map(|dish| {
                        view! {
                            <Reveal id=dish.id class="dish-card">
                                <h3>{dish.name}</h3>
                                <p>{dish.description}</p>
                                <span class="dish-card__price">{dish.price}</span>
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </div>
        </section>

        <section id="gallery" class="gallery-section">
            <Reveal id="gallery-title" class="section-title">
                <h2>"Impressionen"</h2>
            </Reveal>
            <Gallery/>
        </section>

        <section id="testimonials" class="testimonials">
            {TESTIMONIALS
                .iter()
                .map(|&(id, quote, author)| {
                    view! {
                        <Reveal id=id class="testimonial-card">
                            <blockquote>{quote}</blockquote>
                            <cite>{author}</cite>
                        </Reveal>
                    }
                })
                .collect_view()}
        </section>

        <section id="reservation" class="reservation">
            <Reveal id="reservation-title" class="section-title">
                <h2>"Reservierung"</h2>
            </Reveal>
            <ReservationWidget/>
            <p class="reservation__alt">
                "Lieber alles auf einer Seite? "
                <a href="/reservierung">"Zum Reservierungsformular"</a>
            </p>
        </section>
    }
}
