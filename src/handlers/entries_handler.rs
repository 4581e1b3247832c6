use axum::{
    extract::{Path, State},
    Json,
};
use sqlx::types::Json as DbJson;
use std::sync::Arc;

use crate::{
    models::{ApiResponse, BatchImportInput, CreateEntryInput, DiaryEntry, UpdateEntryInput},
    AppError, AppResult, AppState,
};

/// GET /api/entries - every entry, newest first (hidden ones included)
#[utoipa::path(
    get,
    path = "/api/entries",
    responses(
        (status = 200, description = "List of diary entries", body = Vec<DiaryEntry>)
    ),
    tag = "entries"
)]
pub async fn list_entries(
    State(state): State<Arc<AppState>>,
) -> AppResult<Json<ApiResponse<Vec<DiaryEntry>>>> {
    let entries = sqlx::query_as::<_, DiaryEntry>(
        "SELECT * FROM diary_entries ORDER BY created_at DESC",
    )
    .fetch_all(&state.db)
    .await?;

    Ok(Json(ApiResponse::ok(entries)))
}

/// GET /api/entries/{id}
#[utoipa::path(
    get,
    path = "/api/entries/{id}",
    params(
        ("id" = i64, Path, description = "Entry ID")
    ),
    responses(
        (status = 200, description = "The requested entry", body = DiaryEntry),
        (status = 404, description = "Entry not found")
    ),
    tag = "entries"
)]
pub async fn get_entry(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<DiaryEntry>>> {
    let entry = sqlx::query_as::<_, DiaryEntry>("SELECT * FROM diary_entries WHERE id = ?")
        .bind(id)
        .fetch_optional(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("entry not found".to_string()))?;

    Ok(Json(ApiResponse::ok(entry)))
}

/// POST /api/entries - Create a new diary entry
#[utoipa::path(
    post,
    path = "/api/entries",
    request_body = CreateEntryInput,
    responses(
        (status = 200, description = "Entry created", body = DiaryEntry)
    ),
    tag = "entries"
)]
pub async fn create_entry(
    State(state): State<Arc<AppState>>,
    Json(input): Json<CreateEntryInput>,
) -> AppResult<Json<ApiResponse<DiaryEntry>>> {
    let entry = sqlx::query_as::<_, DiaryEntry>(
        r#"
        INSERT INTO diary_entries (
            title, content, content_type, mood, weather, images, location, tags, hidden
        )
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        RETURNING *
        "#,
    )
    .bind(&input.title)
    .bind(&input.content)
    .bind(input.content_type.as_deref().unwrap_or("markdown"))
    .bind(input.mood.as_deref().unwrap_or("neutral"))
    .bind(input.weather.as_deref().unwrap_or("unknown"))
    .bind(DbJson(input.images.unwrap_or_default()))
    .bind(input.location.map(DbJson))
    .bind(DbJson(input.tags.unwrap_or_default()))
    .bind(input.hidden.unwrap_or(false))
    .fetch_one(&state.db)
    .await?;

    Ok(Json(ApiResponse::ok_with_message(entry, "entry created")))
}

/// PUT /api/entries/{id} - Partial update; absent fields keep their values
#[utoipa::path(
    put,
    path = "/api/entries/{id}",
    params(
        ("id" = i64, Path, description = "Entry ID")
    ),
    request_body = UpdateEntryInput,
    responses(
        (status = 200, description = "Entry updated", body = DiaryEntry),
        (status = 404, description = "Entry not found")
    ),
    tag = "entries"
)]
pub async fn update_entry(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(input): Json<UpdateEntryInput>,
) -> AppResult<Json<ApiResponse<DiaryEntry>>> {
    let entry = sqlx::query_as::<_, DiaryEntry>(
        r#"
        UPDATE diary_entries
        SET title = COALESCE(?, title),
            content = COALESCE(?, content),
            content_type = COALESCE(?, content_type),
            mood = COALESCE(?, mood),
            weather = COALESCE(?, weather),
            images = COALESCE(?, images),
            location = COALESCE(?, location),
            tags = COALESCE(?, tags),
            hidden = COALESCE(?, hidden),
            updated_at = CURRENT_TIMESTAMP
        WHERE id = ?
        RETURNING *
        "#,
    )
    .bind(input.title)
    .bind(input.content)
    .bind(input.content_type)
    .bind(input.mood)
    .bind(input.weather)
    .bind(input.images.map(DbJson))
    .bind(input.location.map(DbJson))
    .bind(input.tags.map(DbJson))
    .bind(input.hidden)
    .bind(id)
    .fetch_optional(&state.db)
    .await?
    .ok_or_else(|| AppError::NotFound("entry not found".to_string()))?;

    Ok(Json(ApiResponse::ok_with_message(entry, "entry updated")))
}

/// DELETE /api/entries/{id}
#[utoipa::path(
    delete,
    path = "/api/entries/{id}",
    params(
        ("id" = i64, Path, description = "Entry ID")
    ),
    responses(
        (status = 200, description = "Entry deleted"),
        (status = 404, description = "Entry not found")
    ),
    tag = "entries"
)]
pub async fn delete_entry(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<()>>> {
    let result = sqlx::query("DELETE FROM diary_entries WHERE id = ?")
        .bind(id)
        .execute(&state.db)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("entry not found".to_string()));
    }

    Ok(Json(ApiResponse::message("entry deleted")))
}

/// POST /api/entries/{id}/toggle-visibility - Flip the hidden flag
#[utoipa::path(
    post,
    path = "/api/entries/{id}/toggle-visibility",
    params(
        ("id" = i64, Path, description = "Entry ID")
    ),
    responses(
        (status = 200, description = "Updated entry", body = DiaryEntry),
        (status = 404, description = "Entry not found")
    ),
    tag = "entries"
)]
pub async fn toggle_visibility(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<DiaryEntry>>> {
    let entry = sqlx::query_as::<_, DiaryEntry>(
        r#"
        UPDATE diary_entries
        SET hidden = NOT hidden, updated_at = CURRENT_TIMESTAMP
        WHERE id = ?
        RETURNING *
        "#,
    )
    .bind(id)
    .fetch_optional(&state.db)
    .await?
    .ok_or_else(|| AppError::NotFound("entry not found".to_string()))?;

    tracing::info!(id, hidden = entry.hidden, "entry visibility toggled");

    let message = if entry.hidden { "entry hidden" } else { "entry visible" };
    Ok(Json(ApiResponse::ok_with_message(entry, message)))
}

/// POST /api/entries/batch - Replace the whole diary with an imported set
#[utoipa::path(
    post,
    path = "/api/entries/batch",
    request_body = BatchImportInput,
    responses(
        (status = 200, description = "Imported entries", body = Vec<DiaryEntry>),
        (status = 400, description = "Empty import payload")
    ),
    tag = "entries"
)]
pub async fn batch_import(
    State(state): State<Arc<AppState>>,
    Json(input): Json<BatchImportInput>,
) -> AppResult<Json<ApiResponse<Vec<DiaryEntry>>>> {
    // Replaces the whole table; an empty payload would wipe the diary.
    if input.entries.is_empty() {
        return Err(AppError::BadRequest("no entries to import".to_string()));
    }

    // Destructive replace: everything runs in one transaction so a failed
    // import can't leave the diary half-emptied.
    let mut tx = state.db.begin().await?;

    sqlx::query("DELETE FROM diary_entries").execute(&mut *tx).await?;

    let mut imported = Vec::with_capacity(input.entries.len());
    for entry in input.entries {
        let row = sqlx::query_as::<_, DiaryEntry>(
            r#"
            INSERT INTO diary_entries (
                title, content, content_type, mood, weather, images, location,
                created_at, updated_at, tags, hidden
            )
            VALUES (?, ?, ?, ?, ?, ?, ?,
                    COALESCE(?, CURRENT_TIMESTAMP), COALESCE(?, CURRENT_TIMESTAMP), ?, ?)
            RETURNING *
            "#,
        )
        .bind(entry.title.unwrap_or_default())
        .bind(&entry.content)
        .bind(entry.content_type.as_deref().unwrap_or("markdown"))
        .bind(entry.mood)
        .bind(entry.weather)
        .bind(DbJson(entry.images.unwrap_or_default()))
        .bind(entry.location.map(DbJson))
        .bind(entry.created_at)
        .bind(entry.updated_at)
        .bind(DbJson(entry.tags.unwrap_or_default()))
        .bind(entry.hidden.unwrap_or(false))
        .fetch_one(&mut *tx)
        .await?;

        imported.push(row);
    }

    tx.commit().await?;

    tracing::info!(count = imported.len(), "diary replaced by batch import");

    Ok(Json(ApiResponse::ok_with_message(imported, "entries imported")))
}
