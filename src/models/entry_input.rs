use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Input for creating a diary entry
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateEntryInput {
    pub title: String,
    pub content: String,
    pub content_type: Option<String>,
    pub mood: Option<String>,
    pub weather: Option<String>,
    pub images: Option<Vec<String>>,
    #[schema(value_type = Option<Object>)]
    pub location: Option<serde_json::Value>,
    pub tags: Option<Vec<String>>,
    pub hidden: Option<bool>,
}

/// Partial update for an existing entry; absent fields are left unchanged
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateEntryInput {
    pub title: Option<String>,
    pub content: Option<String>,
    pub content_type: Option<String>,
    pub mood: Option<String>,
    pub weather: Option<String>,
    pub images: Option<Vec<String>>,
    #[schema(value_type = Option<Object>)]
    pub location: Option<serde_json::Value>,
    pub tags: Option<Vec<String>>,
    pub hidden: Option<bool>,
}

/// Full-table import payload; replaces every existing entry
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BatchImportInput {
    pub entries: Vec<BatchEntryInput>,
}

/// One imported entry. Backup files may carry their own timestamps, which
/// are preserved; entries without them get the current time.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BatchEntryInput {
    pub title: Option<String>,
    pub content: String,
    pub content_type: Option<String>,
    pub mood: Option<String>,
    pub weather: Option<String>,
    pub images: Option<Vec<String>>,
    #[schema(value_type = Option<Object>)]
    pub location: Option<serde_json::Value>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub tags: Option<Vec<String>>,
    pub hidden: Option<bool>,
}
