//! Labeled `<input type="range">` bound to a [`SliderRange`].
//!
//! The slider never writes out-of-range values: raw input goes through
//! [`SliderRange::parse`] and unparseable text is dropped.

use leptos::prelude::*;

use crate::state::slider::SliderRange;
use crate::util::format::whole;

#[component]
pub fn RangeSlider(
    label: &'static str,
    range: SliderRange,
    #[prop(into)] value: Signal<f64>,
    on_change: Callback<f64>,
    /// Appended to the displayed value, e.g. `°`.
    #[prop(optional)]
    unit: &'static str,
) -> impl IntoView {
    let on_input = move |ev: leptos::ev::Event| {
        if let Some(v) = range.parse(&event_target_value(&ev)) {
            on_change.run(v);
        }
    };

    view! {
        <label class="range-slider">
            <span class="range-slider__label">
                {label} ": " {move || whole(value.get())} {unit}
            </span>
            <input
                class="range-slider__input"
                type="range"
                min=range.min
                max=range.max
                step=range.step
                prop:value=move || value.get().to_string()
                on:input=on_input
            />
        </label>
    }
}
