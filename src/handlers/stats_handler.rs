use axum::{extract::State, Json};
use chrono::Utc;
use std::sync::Arc;

use crate::{
    extractors::ApiKeyAuth,
    models::{ApiResponse, DiaryStats},
    stats, AppError, AppResult, AppState,
};

/// GET /api/stats - writing streak and activity metrics
///
/// The access check runs in the extractor, so an invalid key is rejected
/// before anything is fetched. The engine sees every row, hidden ones
/// included, and recomputes from scratch on each call.
#[utoipa::path(
    get,
    path = "/api/stats",
    params(
        ("api_key" = Option<String>, Query, description = "Access key, also accepted as Bearer token or X-API-Key header")
    ),
    responses(
        (status = 200, description = "Diary statistics", body = DiaryStats),
        (status = 401, description = "Invalid api key"),
        (status = 500, description = "Entry store unavailable")
    ),
    security(("api_key" = [])),
    tag = "stats"
)]
pub async fn get_stats(
    _auth: ApiKeyAuth,
    State(state): State<Arc<AppState>>,
) -> AppResult<Json<ApiResponse<DiaryStats>>> {
    let stamps: Vec<Option<String>> = sqlx::query_scalar("SELECT created_at FROM diary_entries")
        .fetch_all(&state.db)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "entry fetch for statistics failed");
            AppError::StoreUnavailable(e.to_string())
        })?;

    let today = Utc::now().date_naive();
    let stats = stats::compute_stats(stamps.iter().map(Option::as_deref), today);

    Ok(Json(ApiResponse::ok(stats)))
}
