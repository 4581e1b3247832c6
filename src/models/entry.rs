use serde::Serialize;
use sqlx::types::Json;
use sqlx::FromRow;
use utoipa::ToSchema;

/// A diary entry as stored in `diary_entries`.
///
/// `created_at`/`updated_at` stay in the store's own string form: the
/// statistics engine parses them itself and the API echoes them back
/// untouched. Rows imported from old backups can carry missing or malformed
/// stamps, which is why they are optional here.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct DiaryEntry {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub content_type: String,
    pub mood: Option<String>,
    pub weather: Option<String>,
    #[schema(value_type = Vec<String>)]
    pub images: Json<Vec<String>>,
    #[schema(value_type = Option<Object>)]
    pub location: Option<Json<serde_json::Value>>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    #[schema(value_type = Vec<String>)]
    pub tags: Json<Vec<String>>,
    pub hidden: bool,
}
