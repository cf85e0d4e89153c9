//! Home page, category listings and locale routing.

mod common;

use axum::http::StatusCode;
use common::{StubCatalog, body_text, build_test_app, get};

#[tokio::test]
async fn home_lists_categories_and_sections() {
    let app = build_test_app(StubCatalog::healthy());
    let response = get(app, "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains(r#"<html lang="en" dir="ltr">"#));
    assert!(html.contains("Vehicles"));
    assert!(html.contains("Toyota Corolla 2018"));
    assert!(html.contains("$12,500"));
    assert!(html.contains(r#"href="/ads/cars-for-sale""#));
    assert!(html.contains(r#"href="/ar""#));
}

#[tokio::test]
async fn arabic_prefix_switches_language_and_direction() {
    let app = build_test_app(StubCatalog::healthy());
    let response = get(app, "/ar").await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains(r#"<html lang="ar" dir="rtl">"#));
    assert!(html.contains("مركبات"));
    assert!(html.contains(r#"href="/ar/ads/cars-for-sale""#));
    assert!(html.contains(r#"href="/ar/post-ad""#));
}

#[tokio::test]
async fn home_falls_back_to_built_in_ads() {
    let app = build_test_app(StubCatalog::unreachable());
    let response = get(app, "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Categories are unavailable right now"));
    assert!(html.contains("Cars for Sale"));
    assert!(html.contains("Nissan Pathfinder 2006"));
}

#[tokio::test]
async fn category_page_has_breadcrumb_and_ads() {
    let app = build_test_app(StubCatalog::healthy());
    let response = get(app, "/ads/cars-for-sale").await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains(r#"<nav class="breadcrumb">"#));
    assert!(html.contains(r#"<a href="/ads/vehicles">Vehicles</a>"#));
    assert!(html.contains("<h1>Cars for Sale</h1>"));
    assert!(html.contains("Toyota Corolla 2018"));
    assert!(!html.contains("iPhone 13"));
}

#[tokio::test]
async fn category_page_without_tree_entry_uses_ad_category() {
    let app = build_test_app(StubCatalog::healthy());
    let response = get(app, "/ads/mobile-phones").await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("<h1>Mobile Phones</h1>"));
    assert!(html.contains("iPhone 13"));
}

#[tokio::test]
async fn unknown_category_is_not_found() {
    let app = build_test_app(StubCatalog::healthy());
    let response = get(app, "/ads/space-shuttles").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_text(response).await.contains(r#"class="not-found""#));
}

#[tokio::test]
async fn unknown_route_renders_not_found_page() {
    let app = build_test_app(StubCatalog::healthy());
    let response = get(app, "/no/such/page").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_text(response).await.contains(r#"class="not-found""#));
}
