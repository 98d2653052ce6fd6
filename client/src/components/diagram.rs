//! SVG scene card and small marks drawn inside it.

use geometry::Point;
use leptos::prelude::*;

const TICK_SPACING: f64 = 5.0;
const TICK_HALF_LENGTH: f64 = 6.0;

/// SVG scene with a fixed `view_box`, scaled to the card width.
#[component]
pub fn Diagram(view_box: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="diagram">
            <svg class="diagram__svg" viewBox=view_box>
                {children()}
            </svg>
        </div>
    }
}

/// Slider strip rendered under a [`Diagram`].
#[component]
pub fn Controls(children: Children) -> impl IntoView {
    view! { <div class="diagram__controls">{children()}</div> }
}

/// `count` short strokes across the middle of `from`–`to`, marking equal sides.
#[component]
pub fn TickMarks(
    from: Point,
    to: Point,
    color: &'static str,
    #[prop(default = 1)] count: u8,
) -> impl IntoView {
    let length = from.distance_to(to);
    if length < f64::EPSILON {
        return ().into_any();
    }
    let (ux, uy) = ((to.x - from.x) / length, (to.y - from.y) / length);
    let mid = from.midpoint(to);
    let first = -f64::from(count.saturating_sub(1)) / 2.0;
    (0..count)
        .map(|i| {
            let shift = (first + f64::from(i)) * TICK_SPACING;
            let center = mid.translate(ux * shift, uy * shift);
            let (start, end) = (
                center.translate(uy * TICK_HALF_LENGTH, -ux * TICK_HALF_LENGTH),
                center.translate(-uy * TICK_HALF_LENGTH, ux * TICK_HALF_LENGTH),
            );
            view! { <line x1=start.x y1=start.y x2=end.x y2=end.y stroke=color stroke-width="2"/> }
        })
        .collect_view()
        .into_any()
}
