use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;

use super::*;

fn test_options() -> LeptosOptions {
    LeptosOptions::builder().output_name("geolearn").site_root("target/site").build()
}

async fn get_status(uri: &str) -> (StatusCode, Option<String>) {
    let response = app(test_options())
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let location = response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    (response.status(), location)
}

// =============================================================================
// HEALTH
// =============================================================================

#[tokio::test]
async fn healthz_returns_ok() {
    let (status, _) = get_status("/healthz").await;
    assert_eq!(status, StatusCode::OK);
}

// =============================================================================
// STATIC BUNDLE
// =============================================================================

#[tokio::test]
async fn missing_pkg_asset_is_not_found() {
    let (status, _) = get_status("/pkg/does-not-exist.wasm").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// FALLBACK
// =============================================================================

#[tokio::test]
async fn unknown_path_redirects_home() {
    let (status, location) = get_status("/chapter9").await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(location.as_deref(), Some("/"));
}

// =============================================================================
// PAGE ROUTES
// =============================================================================

#[test]
fn route_list_covers_home_and_chapters() {
    let routes = generate_route_list(client::app::App);
    let paths: Vec<&str> = routes.iter().map(leptos_axum::AxumRouteListing::path).collect();
    for expected in client::app::ROUTE_PATHS {
        assert!(paths.contains(&expected), "missing route {expected}; have {paths:?}");
    }
}
