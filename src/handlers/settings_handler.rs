use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::BTreeMap;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::{models::ApiResponse, AppError, AppResult, AppState};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SetSettingInput {
    pub value: String,
}

/// GET /api/settings - every key/value pair
#[utoipa::path(
    get,
    path = "/api/settings",
    responses(
        (status = 200, description = "All settings as one object")
    ),
    tag = "settings"
)]
pub async fn get_settings(
    State(state): State<Arc<AppState>>,
) -> AppResult<Json<ApiResponse<BTreeMap<String, String>>>> {
    let rows: Vec<(String, String)> =
        sqlx::query_as("SELECT setting_key, setting_value FROM app_settings")
            .fetch_all(&state.db)
            .await?;

    Ok(Json(ApiResponse::ok(rows.into_iter().collect())))
}

/// GET /api/settings/{key}
#[utoipa::path(
    get,
    path = "/api/settings/{key}",
    params(
        ("key" = String, Path, description = "Setting key")
    ),
    responses(
        (status = 200, description = "The requested setting"),
        (status = 404, description = "Setting not found")
    ),
    tag = "settings"
)]
pub async fn get_setting(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let value: Option<String> =
        sqlx::query_scalar("SELECT setting_value FROM app_settings WHERE setting_key = ?")
            .bind(&key)
            .fetch_optional(&state.db)
            .await?;

    let value = value.ok_or_else(|| AppError::NotFound("setting not found".to_string()))?;

    Ok(Json(ApiResponse::ok(json!({ key: value }))))
}

/// PUT /api/settings/{key} - Upsert one setting
#[utoipa::path(
    put,
    path = "/api/settings/{key}",
    params(
        ("key" = String, Path, description = "Setting key")
    ),
    request_body = SetSettingInput,
    responses(
        (status = 200, description = "Setting stored")
    ),
    tag = "settings"
)]
pub async fn put_setting(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
    Json(input): Json<SetSettingInput>,
) -> AppResult<Json<ApiResponse<()>>> {
    sqlx::query(
        r#"
        INSERT INTO app_settings (setting_key, setting_value, updated_at)
        VALUES (?, ?, CURRENT_TIMESTAMP)
        ON CONFLICT(setting_key) DO UPDATE SET
            setting_value = excluded.setting_value,
            updated_at = CURRENT_TIMESTAMP
        "#,
    )
    .bind(&key)
    .bind(&input.value)
    .execute(&state.db)
    .await?;

    Ok(Json(ApiResponse::message("setting updated")))
}

/// DELETE /api/settings/{key} - Idempotent delete
#[utoipa::path(
    delete,
    path = "/api/settings/{key}",
    params(
        ("key" = String, Path, description = "Setting key")
    ),
    responses(
        (status = 200, description = "Setting removed")
    ),
    tag = "settings"
)]
pub async fn delete_setting(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
) -> AppResult<Json<ApiResponse<()>>> {
    sqlx::query("DELETE FROM app_settings WHERE setting_key = ?")
        .bind(&key)
        .execute(&state.db)
        .await?;

    Ok(Json(ApiResponse::message("setting deleted")))
}
