//! Root application component with routing and the navigation shell.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::layout::{APP_NAME, Layout};
use crate::pages::{
    chapter1::Chapter1Page, chapter2::Chapter2Page, chapter3::Chapter3Page, chapter4::Chapter4Page,
    home::HomePage,
};

/// Paths served by [`App`]; anything else redirects to `/`.
pub const ROUTE_PATHS: [&str; 5] = ["/", "/chapter1", "/chapter2", "/chapter3", "/chapter4"];

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Page state is scoped to each page component, so navigating away and
/// back starts the chapter from its defaults.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/geolearn.css"/>
        <Title text=APP_NAME/>

        <Router>
            <Layout>
                <Routes fallback=|| view! { <Redirect path="/"/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("chapter1") view=Chapter1Page/>
                    <Route path=StaticSegment("chapter2") view=Chapter2Page/>
                    <Route path=StaticSegment("chapter3") view=Chapter3Page/>
                    <Route path=StaticSegment("chapter4") view=Chapter4Page/>
                </Routes>
            </Layout>
        </Router>
    }
}
