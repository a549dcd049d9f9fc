//! Shared harness for API integration tests.
//!
//! Builds the real application router (same middleware stack as
//! production via `router::build_app_router`) on top of the per-test
//! database provided by `#[sqlx::test]`, plus request/response helpers
//! and catalog seeding functions.

// Each test binary compiles its own copy; not every binary uses every helper.
#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use galleria_api::cache::ResponseCache;
use galleria_api::config::ServerConfig;
use galleria_api::counters::ViewCounter;
use galleria_api::middleware::rate_limit::FixedWindowLimiter;
use galleria_api::router::build_app_router;
use galleria_api::state::AppState;

use galleria_core::types::EntityId;
use galleria_db::models::collection::{Collection, CreateCollection, ProductionType};
use galleria_db::models::media::{CreateMedia, Media, MediaType};
use galleria_db::repositories::{CollectionRepo, MediaRepo};

/// Build a test `ServerConfig` with safe defaults.
///
/// The cache TTL is zero so repeated requests in view-count and
/// pagination tests always reach the handlers; cache behaviour itself is
/// exercised through [`build_test_app_with`] with a real TTL. The rate
/// limit is high enough that ordinary tests never trip it.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        cache_ttl_secs: 0,
        rate_limit_window_secs: 900,
        rate_limit_max_requests: 10_000,
        view_flush_interval_secs: 3600,
        store_sweep_interval_secs: 300,
    }
}

/// Build the application router with the default test config.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with(pool, test_config()).0
}

/// Build the application router with a custom config, returning the state
/// so tests can reach the counter and cache handles.
pub fn build_test_app_with(pool: PgPool, config: ServerConfig) -> (Router, AppState) {
    let state = AppState {
        pool,
        response_cache: Arc::new(ResponseCache::new(Duration::from_secs(
            config.cache_ttl_secs,
        ))),
        view_counter: Arc::new(ViewCounter::new()),
        rate_limiter: Arc::new(FixedWindowLimiter::new(
            Duration::from_secs(config.rate_limit_window_secs),
            config.rate_limit_max_requests,
        )),
        config: Arc::new(config.clone()),
    };

    (build_app_router(state.clone(), &config), state)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Issue a GET request against a clone of the app.
pub async fn get(app: &Router, uri: &str) -> Response {
    app.clone()
        .oneshot(
            Request::builder()
                .uri(uri)
                .body(Body::empty())
                .expect("request build failed"),
        )
        .await
        .expect("request failed")
}

/// Issue a POST request with a JSON body against a clone of the app.
pub async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .expect("request build failed"),
        )
        .await
        .expect("request failed")
}

/// Collect a response body into raw bytes.
pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .expect("body collection failed")
        .to_bytes()
        .to_vec()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).expect("body is not valid JSON")
}

/// GET a URI and parse the body, asserting the expected status first.
pub async fn get_json(app: &Router, uri: &str, expected: StatusCode) -> serde_json::Value {
    let response = get(app, uri).await;
    assert_eq!(response.status(), expected, "unexpected status for {uri}");
    body_json(response).await
}

// ---------------------------------------------------------------------------
// Seeding helpers
// ---------------------------------------------------------------------------

/// Insert a collection with the given slug/title and production type.
pub async fn seed_collection(
    pool: &PgPool,
    slug: &str,
    title: Option<&str>,
    production_type: ProductionType,
) -> Collection {
    CollectionRepo::create(
        pool,
        &CreateCollection {
            slug: slug.to_string(),
            title: title.map(str::to_string),
            description: None,
            image_url: Some(format!("https://cdn.test/{slug}.jpg")),
            total_items: None,
            content_rating: None,
            production_type,
            is_public: None,
            is_premium: None,
            social_links: None,
        },
    )
    .await
    .expect("collection insert failed")
}

/// Insert `count` image media rows into a collection.
pub async fn seed_media(pool: &PgPool, collection_id: EntityId, count: usize) -> Vec<Media> {
    let mut rows = Vec::with_capacity(count);
    for i in 0..count {
        rows.push(
            MediaRepo::create(
                pool,
                &CreateMedia {
                    collection_id,
                    title: Some(format!("item {i}")),
                    description: None,
                    media_type: MediaType::Image,
                    media_url: format!("https://cdn.test/full/{i}.jpg"),
                    preview_url: format!("https://cdn.test/prev/{i}.jpg"),
                    file_hash: format!("{i:064}"),
                    duration_secs: None,
                    width: None,
                    height: None,
                    tags: None,
                },
            )
            .await
            .expect("media insert failed"),
        );
    }
    rows
}

/// Set the durable view counter of a collection directly.
pub async fn set_collection_views(pool: &PgPool, id: EntityId, views: i64) {
    sqlx::query("UPDATE collections SET views = $2 WHERE id = $1")
        .bind(id)
        .bind(views)
        .execute(pool)
        .await
        .expect("views update failed");
}

/// Set the durable view counter of a media row directly.
pub async fn set_media_views(pool: &PgPool, id: EntityId, views: i64) {
    sqlx::query("UPDATE media SET views = $2 WHERE id = $1")
        .bind(id)
        .bind(views)
        .execute(pool)
        .await
        .expect("views update failed");
}
