mod common;

use axum::http::StatusCode;
use sqlx::PgPool;

use common::{body_json, build_test_app_with, get};

fn strict_config(max_requests: u32) -> galleria_api::config::ServerConfig {
    let mut config = common::test_config();
    config.rate_limit_max_requests = max_requests;
    config
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn requests_over_the_window_budget_are_rejected(pool: PgPool) {
    let (app, _) = build_test_app_with(pool, strict_config(3));

    // Without a peer address every test request shares one bucket.
    for _ in 0..3 {
        let response = get(&app, "/api/top-groups").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let rejected = get(&app, "/api/top-groups").await;
    assert_eq!(rejected.status(), StatusCode::TOO_MANY_REQUESTS);

    let retry_after = rejected
        .headers()
        .get("retry-after")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    assert_eq!(retry_after.as_deref(), Some("900"));

    let body = body_json(rejected).await;
    assert_eq!(body["error"], "Too many requests, please try again later.");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn forwarded_clients_have_independent_budgets(pool: PgPool) {
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    let (app, _) = build_test_app_with(pool, strict_config(1));

    for ip in ["203.0.113.1", "203.0.113.2"] {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/api/top-groups")
                    .header("x-forwarded-for", ip)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    // A repeat from the first client is over budget.
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/top-groups")
                .header("x-forwarded-for", "203.0.113.1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
}
