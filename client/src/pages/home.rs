//! Landing page: headline, call to action, and three feature cards.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::layout::CHAPTERS;

/// Feature cards under the call to action, in display order.
pub const FEATURES: [(&str, &str); 3] = [
    ("Interactive", "Manipulate shapes in real-time"),
    ("Visual", "See concepts come to life"),
    ("Comprehensive", "Covering key geometry topics"),
];

/// Fade-in delay of the first feature card; each next card waits 100ms more.
const FEATURE_DELAY_MS: usize = 200;

#[component]
pub fn HomePage() -> impl IntoView {
    let start = CHAPTERS[0].path;
    view! {
        <div class="home">
            <div class="home__hero">
                <h1 class="home__title">"Master Geometry" <br/> "Visually"</h1>
                <p class="home__intro">
                    "Explore interactive lessons on parallel lines, triangles, and more. Drag, play, and understand concepts intuitively."
                </p>
                <A href=start attr:class="home__cta">
                    "Start Learning →"
                </A>
            </div>
            <div class="home__features">
                {FEATURES
                    .iter()
                    .enumerate()
                    .map(|(i, &(title, text))| {
                        view! {
                            <div
                                class="home__feature"
                                style=format!("animation-delay: {}ms;", FEATURE_DELAY_MS + i * 100)
                            >
                                <h3 class="home__feature-title">{title}</h3>
                                <p class="home__feature-text">{text}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
