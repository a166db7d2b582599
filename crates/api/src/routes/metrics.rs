//! Application metrics, published as a single JSON document.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct MetricsResponse {
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Tasks currently alive on the tokio runtime.
    pub tasks: usize,
    pub database: PoolStats,
    /// Unix seconds at which the snapshot was taken.
    pub timestamp: i64,
}

#[derive(Serialize)]
pub struct PoolStats {
    pub max_connections: u32,
    /// Open connections, idle or in use.
    pub open_connections: u32,
    pub idle: usize,
    pub in_use: u32,
}

/// GET /debug/vars
async fn metrics(State(state): State<AppState>) -> Json<MetricsResponse> {
    let pool = &state.pool;
    let open = pool.size();
    let idle = pool.num_idle();

    Json(MetricsResponse {
        version: env!("CARGO_PKG_VERSION"),
        tasks: tokio::runtime::Handle::current().metrics().num_alive_tasks(),
        database: PoolStats {
            max_connections: pool.options().get_max_connections(),
            open_connections: open,
            idle,
            in_use: open.saturating_sub(u32::try_from(idle).unwrap_or(u32::MAX)),
        },
        timestamp: chrono::Utc::now().timestamp(),
    })
}

/// Mount the metrics route (root level, alongside `/health`).
pub fn router() -> Router<AppState> {
    Router::new().route("/debug/vars", get(metrics))
}
