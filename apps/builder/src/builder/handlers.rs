//! Axum route handlers for the builder session.

use axum::{extract::State, http::StatusCode, response::Html, Json};
use serde::{Deserialize, Serialize};

use crate::editor::schema::{describe_form, missing_required, MissingField, SchemaSection};
use crate::editor::Edit;
use crate::errors::AppError;
use crate::export::ExportReceipt;
use crate::models::resume::ResumeDocument;
use crate::notify::Notification;
use crate::preview::{render_html_document, render_text, Preview};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct EditResponse {
    pub changed: bool,
    pub document: ResumeDocument,
}

#[derive(Debug, Deserialize)]
pub struct SkillInputRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct SkillInputResponse {
    pub skill_input: String,
}

#[derive(Debug, Serialize)]
pub struct SkillCommitResponse {
    pub changed: bool,
    pub skill_input: String,
    pub document: ResumeDocument,
}

#[derive(Debug, Serialize)]
pub struct FormSchemaResponse {
    pub sections: Vec<SchemaSection>,
    pub missing: Vec<MissingField>,
}

#[derive(Debug, Serialize)]
pub struct ExportStatusResponse {
    pub enabled: bool,
    pub file_name: String,
    pub preview_mounted: bool,
}

// ────────────────────────────────────────────────────────────────────────────
// Form Editor
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/resume
pub async fn handle_get_document(State(state): State<AppState>) -> Json<ResumeDocument> {
    Json(state.builder.lock().await.document())
}

/// POST /api/v1/resume/edits
///
/// Rejected edits are not errors: the response reports `changed: false`
/// with the unchanged document.
pub async fn handle_apply_edit(
    State(state): State<AppState>,
    Json(edit): Json<Edit>,
) -> Json<EditResponse> {
    let mut builder = state.builder.lock().await;
    let changed = builder.dispatch(edit);
    Json(EditResponse {
        changed,
        document: builder.document(),
    })
}

/// PUT /api/v1/resume/skill-input
pub async fn handle_set_skill_input(
    State(state): State<AppState>,
    Json(req): Json<SkillInputRequest>,
) -> Json<SkillInputResponse> {
    let mut builder = state.builder.lock().await;
    builder.set_skill_input(req.text);
    Json(SkillInputResponse {
        skill_input: builder.skill_input().to_string(),
    })
}

/// POST /api/v1/resume/skill-input/commit
pub async fn handle_commit_skill_input(
    State(state): State<AppState>,
) -> Json<SkillCommitResponse> {
    let mut builder = state.builder.lock().await;
    let changed = builder.commit_skill_input();
    Json(SkillCommitResponse {
        changed,
        skill_input: builder.skill_input().to_string(),
        document: builder.document(),
    })
}

/// GET /api/v1/form/schema
pub async fn handle_form_schema(State(state): State<AppState>) -> Json<FormSchemaResponse> {
    let document = state.builder.lock().await.document();
    Json(FormSchemaResponse {
        sections: describe_form(),
        missing: missing_required(&document),
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Preview Renderer
// ────────────────────────────────────────────────────────────────────────────

/// GET /preview
pub async fn handle_preview_html(
    State(state): State<AppState>,
) -> Result<Html<String>, AppError> {
    let builder = state.builder.lock().await;
    let surface = builder.preview().ok_or(AppError::PreviewMissing)?;
    Ok(Html(render_html_document(&surface.render())))
}

/// GET /api/v1/preview
pub async fn handle_preview_tree(State(state): State<AppState>) -> Result<Json<Preview>, AppError> {
    let builder = state.builder.lock().await;
    let surface = builder.preview().ok_or(AppError::PreviewMissing)?;
    Ok(Json(surface.render()))
}

/// GET /api/v1/preview/text
pub async fn handle_preview_text(State(state): State<AppState>) -> Result<String, AppError> {
    let builder = state.builder.lock().await;
    let surface = builder.preview().ok_or(AppError::PreviewMissing)?;
    Ok(render_text(&surface.render()))
}

/// PUT /api/v1/preview/surface
pub async fn handle_mount_preview(State(state): State<AppState>) -> StatusCode {
    state.builder.lock().await.mount_preview();
    StatusCode::NO_CONTENT
}

/// DELETE /api/v1/preview/surface
pub async fn handle_unmount_preview(State(state): State<AppState>) -> StatusCode {
    state.builder.lock().await.unmount_preview();
    StatusCode::NO_CONTENT
}

// ────────────────────────────────────────────────────────────────────────────
// Export + notifications
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/export
pub async fn handle_export_status(State(state): State<AppState>) -> Json<ExportStatusResponse> {
    let builder = state.builder.lock().await;
    Json(ExportStatusResponse {
        enabled: builder.can_export(),
        file_name: builder.export_options().file_name,
        preview_mounted: builder.preview().is_some(),
    })
}

/// POST /api/v1/export
///
/// Holds the session lock for the whole export so no edit lands mid-render.
pub async fn handle_export(
    State(state): State<AppState>,
) -> Result<Json<ExportReceipt>, AppError> {
    let builder = state.builder.lock().await;
    let receipt = builder.export().await?;
    Ok(Json(receipt))
}

/// GET /api/v1/notifications
pub async fn handle_drain_notifications(
    State(state): State<AppState>,
) -> Json<Vec<Notification>> {
    Json(state.toasts.drain())
}
