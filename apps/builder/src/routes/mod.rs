pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::builder::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Form Editor
        .route("/api/v1/resume", get(handlers::handle_get_document))
        .route("/api/v1/resume/edits", post(handlers::handle_apply_edit))
        .route(
            "/api/v1/resume/skill-input",
            put(handlers::handle_set_skill_input),
        )
        .route(
            "/api/v1/resume/skill-input/commit",
            post(handlers::handle_commit_skill_input),
        )
        .route("/api/v1/form/schema", get(handlers::handle_form_schema))
        // Preview Renderer
        .route("/preview", get(handlers::handle_preview_html))
        .route("/api/v1/preview", get(handlers::handle_preview_tree))
        .route("/api/v1/preview/text", get(handlers::handle_preview_text))
        .route(
            "/api/v1/preview/surface",
            put(handlers::handle_mount_preview).delete(handlers::handle_unmount_preview),
        )
        // Export + notifications
        .route(
            "/api/v1/export",
            get(handlers::handle_export_status).post(handlers::handle_export),
        )
        .route(
            "/api/v1/notifications",
            get(handlers::handle_drain_notifications),
        )
        .with_state(state)
}
