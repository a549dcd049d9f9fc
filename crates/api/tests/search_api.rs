mod common;

use axum::http::StatusCode;
use galleria_db::models::collection::ProductionType;
use serde_json::json;
use sqlx::PgPool;

use common::{body_json, build_test_app, post_json, seed_collection, set_collection_views};

async fn seed_sky_catalog(pool: &PgPool) {
    for (slug, title, views) in [
        ("sunset", "Sunset Walks", 300),
        ("sunrise", "Sunrise Runs", 100),
        ("moonlight", "Moonlight Drives", 500),
    ] {
        let c = seed_collection(pool, slug, Some(title), ProductionType::Real).await;
        set_collection_views(pool, c.id, views).await;
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn search_matches_substrings_ranked_by_views(pool: PgPool) {
    seed_sky_catalog(&pool).await;
    let app = build_test_app(pool);

    let response = post_json(&app, "/api/search", json!({"query": "sun"})).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let titles: Vec<_> = body["collections"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["title"].as_str().unwrap().to_string())
        .collect();

    assert_eq!(titles, ["Sunset Walks", "Sunrise Runs"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn search_is_case_insensitive(pool: PgPool) {
    seed_sky_catalog(&pool).await;
    let app = build_test_app(pool);

    let response = post_json(&app, "/api/search", json!({"query": "MOON"})).await;
    let body = body_json(response).await;

    assert_eq!(body["collections"][0]["slug"], "moonlight");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_query_is_a_bad_request(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(&app, "/api/search", json!({})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Search query is required");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn malformed_json_bodies_get_the_error_envelope(pool: PgPool) {
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    let app = build_test_app(pool);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/search")
                .header("content-type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "application/json"
    );
    let body = body_json(response).await;
    assert!(body["error"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_content_type_gets_the_error_envelope(pool: PgPool) {
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    let app = build_test_app(pool);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/search")
                .body(Body::from(r#"{"query": "sun"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["error"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn blank_query_returns_an_empty_list_without_matching(pool: PgPool) {
    seed_sky_catalog(&pool).await;
    let app = build_test_app(pool);

    for blank in ["", "   ", "\t\n"] {
        let response = post_json(&app, "/api/search", json!({"query": blank})).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["collections"].as_array().unwrap().len(), 0);
        assert!(body.get("error").is_none());
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn no_matches_is_an_empty_list_not_an_error(pool: PgPool) {
    seed_sky_catalog(&pool).await;
    let app = build_test_app(pool);

    let response = post_json(&app, "/api/search", json!({"query": "nebula"})).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["collections"].as_array().unwrap().len(), 0);
    assert!(body.get("error").is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn like_wildcards_in_the_query_are_literal(pool: PgPool) {
    seed_collection(&pool, "percent", Some("100% Candid"), ProductionType::Real).await;
    seed_collection(&pool, "thousand", Some("1000 Frames"), ProductionType::Real).await;

    let app = build_test_app(pool);

    // "0%" must match the literal text, not "0 followed by anything".
    let response = post_json(&app, "/api/search", json!({"query": "0%"})).await;
    let body = body_json(response).await;

    let results = body["collections"].as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["slug"], "percent");

    // An underscore is a literal too, not a single-character wildcard.
    let response = post_json(&app, "/api/search", json!({"query": "100_"})).await;
    let body = body_json(response).await;
    assert_eq!(body["collections"].as_array().unwrap().len(), 0);
}
