//! # Catalog Web
//!
//! HTML form server over the in-memory item store.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Catalog Web Server                              │
//! │                                                                         │
//! │  Browser ───► axum Router (8080) ───► Handlers ───► ItemStore           │
//! │                   │                      │                              │
//! │              TraceLayer                  ▼                              │
//! │                                     ViewEngine                          │
//! │                                    (handlebars)                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `CATALOG_HOST` - IP address to bind (default: 0.0.0.0)
//! - `CATALOG_PORT` - HTTP port (default: 8080)
//! - `CATALOG_SEED_DATA` - Insert the two sample items at startup (default: true)
//! - `RUST_LOG` - Log filter (default: `info,catalog=debug,tower_http=info`)

pub mod config;
pub mod error;
pub mod handlers;
pub mod state;
pub mod views;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{health, items};

// Re-exports
pub use config::{ConfigError, WebConfig};
pub use error::{ApiError, ErrorCode};
pub use state::AppState;

/// Builds the application router.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/items", get(items::list_items))
        .route("/items/add", get(items::add_form).post(items::add_item))
        .route("/items/{id}", get(items::item_detail))
        .route(
            "/items/{id}/edit",
            get(items::edit_form).post(items::edit_item),
        )
        .route("/health", get(health::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, Response, StatusCode};
    use catalog_core::{Item, ItemId};
    use catalog_store::{seed_items, ItemStore};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn seeded_state() -> Arc<AppState> {
        let store = ItemStore::new();
        seed_items(&store);
        AppState::new(store).unwrap()
    }

    async fn get_page(app: Router, uri: &str) -> Response<Body> {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn post_form(app: Router, uri: &str, body: &'static str) -> Response<Body> {
        app.oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap()
    }

    async fn body_text(response: Response<Body>) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    async fn body_json(response: Response<Body>) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn location(response: &Response<Body>) -> &str {
        response.headers()[header::LOCATION].to_str().unwrap()
    }

    // =========================================================================
    // Listing and detail
    // =========================================================================

    #[tokio::test]
    async fn test_list_shows_seed_items() {
        let app = build_router(seeded_state());

        let response = get_page(app, "/items").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_text(response).await;
        assert!(body.contains("testA"));
        assert!(body.contains("testB"));
        assert!(body.contains(r#"href="/items/2""#));
    }

    #[tokio::test]
    async fn test_detail_without_status_has_no_banner() {
        let app = build_router(seeded_state());

        let response = get_page(app, "/items/1").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_text(response).await;
        assert!(body.contains(r#"<dd id="item-name">testA</dd>"#));
        assert!(!body.contains("Saved."));
    }

    #[tokio::test]
    async fn test_repeated_status_renders_without_banner() {
        let app = build_router(seeded_state());

        let response = get_page(app, "/items/1?status=true&status=false").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_text(response).await;
        assert!(body.contains(r#"<dd id="item-name">testA</dd>"#));
        assert!(!body.contains("Saved."));
    }

    #[tokio::test]
    async fn test_unknown_id_is_404_json() {
        let app = build_router(seeded_state());

        let response = get_page(app, "/items/42").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json = body_json(response).await;
        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json["message"], "Item not found: 42");
    }

    #[tokio::test]
    async fn test_non_numeric_id_is_400() {
        let app = build_router(seeded_state());

        let response = get_page(app, "/items/abc").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["code"], "BAD_REQUEST");
    }

    // =========================================================================
    // Add flow
    // =========================================================================

    #[tokio::test]
    async fn test_add_form_is_blank() {
        let app = build_router(seeded_state());

        let response = get_page(app, "/items/add").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_text(response).await;
        assert!(body.contains(r#"action="/items/add""#));
        assert!(body.contains(r#"name="name" value="""#));
    }

    #[tokio::test]
    async fn test_add_redirects_to_saved_detail() {
        let state = seeded_state();
        let app = build_router(state.clone());

        let response = post_form(
            app.clone(),
            "/items/add",
            "name=testC&price=30000&quantity=30",
        )
        .await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/items/3?status=true");

        assert_eq!(
            state.store.find_by_id(ItemId::new(3)),
            Some(Item::new("testC", Some(30000), Some(30)).with_id(ItemId::new(3)))
        );

        let body = body_text(get_page(app, "/items/3?status=true").await).await;
        assert!(body.contains("Saved."));
        assert!(body.contains("testC"));
    }

    #[tokio::test]
    async fn test_add_with_garbage_numbers_stores_none() {
        let state = seeded_state();
        let app = build_router(state.clone());

        let response = post_form(app, "/items/add", "name=testD&price=abc&quantity=").await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let item = state.store.find_by_id(ItemId::new(3)).unwrap();
        assert_eq!(item.name, "testD");
        assert_eq!(item.price, None);
        assert_eq!(item.quantity, None);
    }

    #[tokio::test]
    async fn test_add_accepts_item_name_alias() {
        let state = seeded_state();
        let app = build_router(state.clone());

        post_form(app, "/items/add", "itemName=testE&price=1&quantity=2").await;

        let item = state.store.find_by_id(ItemId::new(3)).unwrap();
        assert_eq!(item.name, "testE");
    }

    #[tokio::test]
    async fn test_add_without_content_type_is_400_json() {
        let state = seeded_state();
        let app = build_router(state.clone());

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/items/add")
                    .body(Body::from("name=testF"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["code"], "BAD_REQUEST");
        assert_eq!(state.store.len(), 2);
    }

    #[tokio::test]
    async fn test_add_with_name_and_alias_is_400_json() {
        let state = seeded_state();
        let app = build_router(state.clone());

        let response = post_form(app, "/items/add", "name=testG&itemName=testH").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["code"], "BAD_REQUEST");
        assert_eq!(state.store.len(), 2);
    }

    // =========================================================================
    // Edit flow
    // =========================================================================

    #[tokio::test]
    async fn test_edit_form_is_prefilled() {
        let app = build_router(seeded_state());

        let response = get_page(app, "/items/2/edit").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_text(response).await;
        assert!(body.contains(r#"action="/items/2/edit""#));
        assert!(body.contains(r#"name="name" value="testB""#));
        assert!(body.contains(r#"name="price" value="20000""#));
    }

    #[tokio::test]
    async fn test_edit_updates_and_redirects() {
        let state = seeded_state();
        let app = build_router(state.clone());

        let response = post_form(
            app,
            "/items/1/edit",
            "id=1&name=itemA2&price=11000&quantity=11",
        )
        .await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/items/1");

        let item = state.store.find_by_id(ItemId::new(1)).unwrap();
        assert_eq!(
            item,
            Item::new("itemA2", Some(11000), Some(11)).with_id(ItemId::new(1))
        );
        assert_eq!(state.store.len(), 2);
    }

    #[tokio::test]
    async fn test_edit_missing_item_is_404() {
        let state = seeded_state();
        let app = build_router(state.clone());

        let response = post_form(app, "/items/99/edit", "name=ghost").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(state.store.len(), 2);
    }

    #[tokio::test]
    async fn test_edit_with_undecodable_body_is_400_json() {
        let state = seeded_state();
        let app = build_router(state.clone());

        let response = post_form(app, "/items/1/edit", "name=a&itemName=b").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["code"], "BAD_REQUEST");
        assert_eq!(state.store.find_by_id(ItemId::new(1)).unwrap().name, "testA");
    }

    #[tokio::test]
    async fn test_edit_form_missing_item_is_404() {
        let app = build_router(seeded_state());

        let response = get_page(app, "/items/99/edit").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    // =========================================================================
    // Health
    // =========================================================================

    #[tokio::test]
    async fn test_health_reports_item_count() {
        let app = build_router(seeded_state());

        let response = get_page(app, "/health").await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["status"], "ok");
        assert_eq!(json["items"], 2);
        assert_eq!(json["lastId"], 2);
    }

    #[tokio::test]
    async fn test_health_tracks_sequence_after_clear() {
        let state = seeded_state();
        let app = build_router(state.clone());
        state.store.clear();

        let json = body_json(get_page(app, "/health").await).await;
        assert_eq!(json["items"], 0);
        assert_eq!(json["lastId"], 2);
    }

    #[tokio::test]
    async fn test_health_on_empty_store() {
        let app = build_router(AppState::new(ItemStore::new()).unwrap());

        let json = body_json(get_page(app, "/health").await).await;
        assert_eq!(json["items"], 0);
        assert!(json["lastId"].is_null());
    }
}
