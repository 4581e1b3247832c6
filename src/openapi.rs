use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::Modify;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Diary API",
        version = "1.0.0",
        description = "Backend API for a personal diary with writing statistics"
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server"),
    ),
    paths(
        // Health
        crate::handlers::health::health_check,

        // Entries
        crate::handlers::entries_handler::list_entries,
        crate::handlers::entries_handler::get_entry,
        crate::handlers::entries_handler::create_entry,
        crate::handlers::entries_handler::update_entry,
        crate::handlers::entries_handler::delete_entry,
        crate::handlers::entries_handler::toggle_visibility,
        crate::handlers::entries_handler::batch_import,

        // Settings
        crate::handlers::settings_handler::get_settings,
        crate::handlers::settings_handler::get_setting,
        crate::handlers::settings_handler::put_setting,
        crate::handlers::settings_handler::delete_setting,

        // Statistics
        crate::handlers::stats_handler::get_stats,
    ),
    components(
        schemas(
            crate::models::DiaryEntry,
            crate::models::DiaryStats,
            crate::models::CreateEntryInput,
            crate::models::UpdateEntryInput,
            crate::models::BatchImportInput,
            crate::models::BatchEntryInput,
            crate::handlers::settings_handler::SetSettingInput,
        )
    ),
    tags(
        (name = "health", description = "Health check"),
        (name = "entries", description = "Diary entry management"),
        (name = "settings", description = "Application settings"),
        (name = "stats", description = "Writing streak and activity statistics"),
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "api_key",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new("X-API-Key"))),
            )
        }
    }
}
