//! In-diagram notice shown instead of a triangle whose angles do not fit.

use leptos::prelude::*;

pub const INVALID_TRIANGLE_MESSAGE: &str = "Invalid triangle (angles must sum to 180°)";

/// Centered SVG text at (`x`, `y`), normally the middle of the scene.
#[component]
pub fn InvalidNotice(x: f64, y: f64) -> impl IntoView {
    view! {
        <text class="diagram__invalid" x=x y=y fill="red" text-anchor="middle" font-size="16">
            {INVALID_TRIANGLE_MESSAGE}
        </text>
    }
}
