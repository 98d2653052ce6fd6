//! Title block at the top of every chapter page.

use leptos::prelude::*;

#[component]
pub fn PageHeader(title: &'static str, intro: &'static str) -> impl IntoView {
    view! {
        <header class="page-header">
            <h1 class="page-header__title">{title}</h1>
            <p class="page-header__intro">{intro}</p>
        </header>
    }
}
