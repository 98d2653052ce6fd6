//! Text card with a colored heading.
//!
//! Cards are the right-hand column of every chapter section. `tone` selects a
//! modifier class (`concept-card--accent`, `concept-card--note`, ...) and
//! `accent` colors the heading.

use leptos::prelude::*;

#[component]
pub fn ConceptCard(
    title: &'static str,
    #[prop(optional)] accent: Option<&'static str>,
    #[prop(optional)] tone: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let class = match tone {
        Some(tone) => format!("concept-card concept-card--{tone}"),
        None => "concept-card".to_owned(),
    };
    view! {
        <div class=class>
            <h3 class="concept-card__title" style=accent.map(|color| format!("color: {color};"))>
                {title}
            </h3>
            {children()}
        </div>
    }
}

/// Monospace line under a card, e.g. a theorem in symbols.
#[component]
pub fn Formula(children: Children) -> impl IntoView {
    view! { <div class="concept-card__formula">{children()}</div> }
}
