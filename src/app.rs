use leptos::prelude::*;

use crate::components::decode::DecodeSection;
use crate::components::encode::EncodeSection;

#[component]
pub fn App() -> impl IntoView {
    // One overlay for the whole page; each form section layers its own
    // disabled flag on top of it through BusyState.
    let overlay = RwSignal::new(false);

    view! {
        <main class="shell">
            <header class="hero">
                <p class="eyebrow">"Audio steganography"</p>
                <h1>"GhostLink"</h1>
            </header>

            <section class="grid">
                <EncodeSection overlay />
                <DecodeSection overlay />
            </section>

            <div
                id="loading-overlay"
                class="overlay"
                style:display=move || if overlay.get() { "flex" } else { "none" }
            >
                <div class="spinner"></div>
                <p>"Working..."</p>
            </div>
        </main>
    }
}
