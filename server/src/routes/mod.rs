//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves the whole site: Leptos SSR for the page routes, the
//! compiled WASM/CSS bundle under `/pkg`, and a `/healthz` probe. Any other
//! path redirects to the home page, matching the client router's fallback.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Leptos SSR frontend plus static assets and the health probe.
pub fn app(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // Compiled bundle from `cargo leptos`: <site_root>/<site_pkg_dir>.
    let pkg_path = PathBuf::from(leptos_options.site_root.as_ref()).join(leptos_options.site_pkg_dir.as_ref());

    Router::new()
        .route("/healthz", get(healthz))
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(pkg_path))
        .fallback(redirect_home)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

async fn redirect_home() -> Redirect {
    Redirect::to("/")
}
