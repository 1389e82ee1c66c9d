use leptos::prelude::*;

use super::navbar::NavLink;
use crate::interactions::typing;

const HERO_TITLE: &str = "Hi, I'm Ashwin Kumar";

/// Landing section. On load the heading types itself out while the rest of
/// the content fades in; the server renders the full text so the page reads
/// fine before hydration.
#[component]
pub fn Hero() -> impl IntoView {
    let (title, set_title) = signal(HERO_TITLE.to_string());
    let (loaded, set_loaded) = signal(false);

    Effect::new(move |_| {
        set_loaded.set(true);
        typing::start(set_title, HERO_TITLE, typing::DEFAULT_DELAY_MS);
    });

    view! {
        <section id="home" class="hero">
            <div class="hero-content" class:loaded=move || loaded.get()>
                <h1>{title}</h1>
                <p class="subtitle">
                    "Software engineer building digital trust infrastructure: PKI, "
                    "certificates, and the services that keep signatures honest."
                </p>
                <NavLink href="#contact" label="Get in touch" class="cta-button" />
            </div>
        </section>
    }
}
