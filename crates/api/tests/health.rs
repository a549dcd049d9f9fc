mod common;

use axum::http::StatusCode;
use sqlx::PgPool;

use common::{build_test_app, get_json};

#[sqlx::test(migrations = "../../db/migrations")]
async fn health_reports_ok_with_reachable_database(pool: PgPool) {
    let app = build_test_app(pool);

    let body = get_json(&app, "/health", StatusCode::OK).await;

    assert_eq!(body["status"], "ok");
    assert_eq!(body["db_healthy"], true);
    assert!(body["version"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn health_is_not_rate_limited(pool: PgPool) {
    // /health sits outside the /api tree and its admission control.
    let mut config = common::test_config();
    config.rate_limit_max_requests = 1;
    let (app, _) = common::build_test_app_with(pool, config);

    for _ in 0..5 {
        let body = get_json(&app, "/health", StatusCode::OK).await;
        assert_eq!(body["status"], "ok");
    }
}
