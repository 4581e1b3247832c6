use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;
use std::time::SystemTime;

use crate::{extractors::ApiKeyAuth, AppState};

#[derive(Serialize)]
pub struct DebugInfo {
    pub version: String,
    pub uptime_seconds: u64,
    pub database_status: String,
    pub database_connections: u32,
    pub entry_count: Option<i64>,
    pub stats_key_configured: bool,
}

/// Global start time for uptime calculation
static START_TIME: once_cell::sync::Lazy<SystemTime> =
    once_cell::sync::Lazy::new(SystemTime::now);

/// Handler for the /debug endpoint, guarded by the same key as /api/stats
pub async fn debug_info(
    _auth: ApiKeyAuth,
    State(state): State<Arc<AppState>>,
) -> Json<DebugInfo> {
    let database_status = match sqlx::query("SELECT 1").fetch_one(&state.db).await {
        Ok(_) => "connected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    let entry_count: Option<i64> = sqlx::query_scalar("SELECT COUNT(*) FROM diary_entries")
        .fetch_one(&state.db)
        .await
        .ok();

    let info = DebugInfo {
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: START_TIME.elapsed().unwrap_or_default().as_secs(),
        database_status,
        database_connections: state.db.size(),
        entry_count,
        stats_key_configured: state.config.stats_api_key.is_some(),
    };

    Json(info)
}
