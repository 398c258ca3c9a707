use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::handlers::lookup;
use crate::document::{EditOp, ResumeDocument};
use crate::errors::AppError;
use crate::export::{content_disposition, run_export};
use crate::session::SessionView;
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionRequest {
    pub template_id: u32,
}

#[derive(Serialize)]
pub struct EditResponse {
    pub revision: u64,
    pub changed: bool,
    pub document: Arc<ResumeDocument>,
}

fn session_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Session {id} not found"))
}

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
    body: Result<Json<CreateSessionRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SessionView>), AppError> {
    let Json(req) = body.map_err(|e| AppError::Validation(e.body_text()))?;
    let template = lookup(req.template_id)?;
    let view = state.sessions.create(template, state.page);
    Ok((StatusCode::CREATED, Json(view)))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    state
        .sessions
        .with_session(id, |s| Json(s.view()))
        .ok_or_else(|| session_not_found(id))
}

/// DELETE /api/v1/sessions/:id
pub async fn handle_delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if state.sessions.remove(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(session_not_found(id))
    }
}

/// PATCH /api/v1/sessions/:id/document
/// Out-of-range indices are not errors: the response reports `changed: false`.
pub async fn handle_edit_document(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    body: Result<Json<EditOp>, JsonRejection>,
) -> Result<Json<EditResponse>, AppError> {
    let Json(op) = body.map_err(|e| AppError::Validation(e.body_text()))?;
    state
        .sessions
        .with_session(id, |s| {
            let changed = s.apply(&op);
            Json(EditResponse {
                revision: s.revision(),
                changed,
                document: s.document(),
            })
        })
        .ok_or_else(|| session_not_found(id))
}

/// GET /api/v1/sessions/:id/preview
pub async fn handle_session_preview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let surface = state
        .sessions
        .with_session(id, |s| s.surface())
        .ok_or_else(|| session_not_found(id))?;
    Ok(([(header::CONTENT_TYPE, "image/svg+xml")], surface.to_svg()))
}

/// POST /api/v1/sessions/:id/export
/// Responds with the PDF itself. The session lock is not held while exporting.
pub async fn handle_export(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    let (surface, full_name, tracker) = state
        .sessions
        .with_session(id, |s| {
            (s.surface(), s.document().full_name.clone(), s.export_tracker())
        })
        .ok_or_else(|| session_not_found(id))?;

    let artifact = run_export(
        state.exporter.as_ref(),
        &tracker,
        surface,
        &full_name,
        state.config.export_dir.as_deref(),
    )
    .await?;

    let disposition = content_disposition(&artifact.file_name);
    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf"),
            (header::CONTENT_DISPOSITION, disposition.as_str()),
        ],
        artifact.bytes,
    )
        .into_response())
}
