//! Row of mutually exclusive tab buttons over a small enum.

use leptos::prelude::*;

/// One button per option; the active one gets `tab-bar__tab--active`.
///
/// `color`, when given, paints the active tab's background with the
/// option's own color (used by the triangle-centers selector).
#[component]
pub fn TabBar<T>(
    options: &'static [T],
    #[prop(into)] active: Signal<T>,
    label: fn(T) -> &'static str,
    on_select: Callback<T>,
    #[prop(optional)] color: Option<fn(T) -> &'static str>,
    #[prop(optional)] secondary: bool,
) -> impl IntoView
where
    T: Copy + PartialEq + Send + Sync + 'static,
{
    view! {
        <div class="tab-bar" class:tab-bar--secondary=secondary>
            {options
                .iter()
                .map(|&option| {
                    let is_active = move || active.get() == option;
                    let style = move || match color {
                        Some(color) if is_active() => format!("background-color: {};", color(option)),
                        _ => String::new(),
                    };
                    view! {
                        <button
                            class="tab-bar__tab"
                            class:tab-bar__tab--active=is_active
                            style=style
                            on:click=move |_| on_select.run(option)
                        >
                            {label(option)}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
