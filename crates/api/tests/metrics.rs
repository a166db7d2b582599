//! Integration tests for the application metrics endpoint.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn metrics_report_version_pool_and_timestamp(pool: PgPool) {
    let max_connections = pool.options().get_max_connections();
    let app = common::build_test_app(pool);
    let response = get(app, "/debug/vars").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert!(json["tasks"].is_u64());

    let db = &json["database"];
    assert_eq!(db["max_connections"], max_connections);
    let open = db["open_connections"].as_u64().unwrap();
    let idle = db["idle"].as_u64().unwrap();
    let in_use = db["in_use"].as_u64().unwrap();
    assert!(idle <= open);
    assert_eq!(in_use, open - idle);

    let timestamp = json["timestamp"].as_i64().unwrap();
    assert!(timestamp > 1_700_000_000);
}
