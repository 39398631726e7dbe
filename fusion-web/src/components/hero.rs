use leptos::prelude::*;

/// Decorative animated header
///
/// Floating circles and the title fade-in are pure CSS; nothing here feeds
/// into the generation flow, so the banner can be swapped freely.
#[component]
pub fn Hero() -> impl IntoView {
    let circles = (0..12)
        .map(|i| view! { <div class=format!("circle circle-{i}")></div> })
        .collect_view();

    view! {
        <header class="hero">
            <div class="hero-circles">{circles}</div>
            <h1 class="hero-title">"Flavour Fusion 🍲"</h1>
            <p class="hero-subtitle">"AI Powered Recipe Experience"</p>
        </header>
    }
}
