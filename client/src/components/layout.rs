//! Application frame: sidebar navigation plus the routed page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The navigation shell carries no logic of its own. Chapter links come from
//! [`CHAPTERS`]; the router marks the current one with `aria-current="page"`,
//! which the stylesheet uses for the active state.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use leptos::prelude::*;
use leptos_router::components::A;

pub const APP_NAME: &str = "GeoLearn";
pub const APP_TAGLINE: &str = "Interactive Geometry Learning";
pub const APP_VERSION: &str = "v1.0.0";

/// One entry in the sidebar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChapterLink {
    pub path: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
}

pub const CHAPTERS: [ChapterLink; 4] = [
    ChapterLink { path: "/chapter1", title: "1. Parallel Lines & Angles", icon: "📏" },
    ChapterLink { path: "/chapter2", title: "2. Congruent Triangles", icon: "△" },
    ChapterLink { path: "/chapter3", title: "3. Isosceles & Equilateral", icon: "⬡" },
    ChapterLink { path: "/chapter4", title: "4. Right Triangles", icon: "◺" },
];

/// Sidebar on the left, scrollable page content on the right.
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="layout">
            <Sidebar/>
            <main class="layout__main">
                <div class="layout__content">{children()}</div>
            </main>
        </div>
    }
}

#[component]
fn Sidebar() -> impl IntoView {
    view! {
        <nav class="sidebar">
            <A href="/" attr:class="sidebar__brand">
                <span class="sidebar__logo">"📖"</span>
                <span class="sidebar__name">{APP_NAME}</span>
            </A>
            <div class="sidebar__links">
                {CHAPTERS
                    .iter()
                    .map(|&chapter| {
                        view! {
                            <A href=chapter.path attr:class="sidebar__link">
                                <span class="sidebar__icon">{chapter.icon}</span>
                                <span class="sidebar__title">{chapter.title}</span>
                            </A>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="sidebar__footer">
                <p>{APP_TAGLINE}</p>
                <p>{APP_VERSION}</p>
            </div>
        </nav>
    }
}
