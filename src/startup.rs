use axum::{
    response::Html,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::{handlers, middleware, openapi::ApiDoc};

pub fn build_router(state: Arc<crate::AppState>) -> Router {
    // The diary frontend can be served from anywhere, so every response
    // carries Access-Control-Allow-Origin: * and preflights are answered
    // by the layer.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Entry routes
    let entry_routes = Router::new()
        .route(
            "/",
            get(handlers::entries_handler::list_entries)
                .post(handlers::entries_handler::create_entry),
        )
        .route("/batch", post(handlers::entries_handler::batch_import))
        .route(
            "/{id}",
            get(handlers::entries_handler::get_entry)
                .put(handlers::entries_handler::update_entry)
                .delete(handlers::entries_handler::delete_entry),
        )
        .route(
            "/{id}/toggle-visibility",
            post(handlers::entries_handler::toggle_visibility),
        );

    // Settings routes
    let settings_routes = Router::new()
        .route("/", get(handlers::settings_handler::get_settings))
        .route(
            "/{key}",
            get(handlers::settings_handler::get_setting)
                .put(handlers::settings_handler::put_setting)
                .delete(handlers::settings_handler::delete_setting),
        );

    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/metrics", get(handlers::metrics_handler))
        .route("/debug", get(handlers::debug::debug_info))
        .nest("/api/entries", entry_routes)
        .nest("/api/settings", settings_routes)
        .route("/api/stats", get(handlers::stats_handler::get_stats))
        .route("/api-docs/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
        .route("/swagger-ui", get(swagger_ui))
        .layer(axum::middleware::from_fn(middleware::metrics_middleware))
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn swagger_ui() -> Html<&'static str> {
    Html(r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Diary API Documentation</title>
    <link rel="stylesheet" type="text/css" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css" />
</head>
<body>
    <div id="swagger-ui"></div>
    <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
    <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-standalone-preset.js"></script>
    <script>
        window.onload = () => {
            window.ui = SwaggerUIBundle({
                url: '/api-docs/openapi.json',
                dom_id: '#swagger-ui',
                presets: [
                    SwaggerUIBundle.presets.apis,
                    SwaggerUIStandalonePreset
                ],
                layout: "StandaloneLayout"
            });
        };
    </script>
</body>
</html>
    "#)
}
