use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{Document, DocumentKind};
use crate::print_host::{run_print_job, PrintError, PrintOutcome};
use crate::render::{self, Node, PrintOptions};
use crate::routes::render::{browser_print_options, PreviewResponse};
use crate::state::AppState;
use crate::workspace::Collection;

#[derive(Deserialize)]
pub struct CreateDocumentRequest {
    pub kind: DocumentKind,
}

#[derive(Serialize)]
pub struct DocumentResponse {
    pub id: Uuid,
    pub document: Document,
}

#[derive(Deserialize)]
pub struct TemplateQuery {
    pub template: String,
}

/// POST /api/v1/documents
pub async fn handle_create_document(
    State(state): State<AppState>,
    Json(req): Json<CreateDocumentRequest>,
) -> (StatusCode, Json<DocumentResponse>) {
    let (id, document) = state.workspace.create(req.kind).await;
    (StatusCode::CREATED, Json(DocumentResponse { id, document }))
}

/// GET /api/v1/documents/:id
pub async fn handle_get_document(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DocumentResponse>, AppError> {
    let document = state.workspace.get(id).await?;
    Ok(Json(DocumentResponse { id, document }))
}

/// PUT /api/v1/documents/:id
pub async fn handle_replace_document(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(document): Json<Document>,
) -> Result<Json<DocumentResponse>, AppError> {
    let document = state.workspace.replace(id, document).await?;
    Ok(Json(DocumentResponse { id, document }))
}

/// PATCH /api/v1/documents/:id
pub async fn handle_patch_document(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(patch): Json<Value>,
) -> Result<Json<DocumentResponse>, AppError> {
    let document = state.workspace.patch(id, &patch).await?;
    Ok(Json(DocumentResponse { id, document }))
}

/// DELETE /api/v1/documents/:id
pub async fn handle_delete_document(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.workspace.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/documents/:id/entries/:collection
pub async fn handle_append_entry(
    State(state): State<AppState>,
    Path((id, collection)): Path<(Uuid, Collection)>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let entry = state.workspace.append_entry(id, collection).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

/// PATCH /api/v1/documents/:id/entries/:collection/:entry_id
pub async fn handle_update_entry(
    State(state): State<AppState>,
    Path((id, collection, entry_id)): Path<(Uuid, Collection, String)>,
    Json(patch): Json<Value>,
) -> Result<Json<Value>, AppError> {
    let entry = state
        .workspace
        .update_entry(id, collection, &entry_id, &patch)
        .await?;
    Ok(Json(entry))
}

/// DELETE /api/v1/documents/:id/entries/:collection/:entry_id
pub async fn handle_remove_entry(
    State(state): State<AppState>,
    Path((id, collection, entry_id)): Path<(Uuid, Collection, String)>,
) -> Result<StatusCode, AppError> {
    state
        .workspace
        .remove_entry(id, collection, &entry_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/documents/:id/preview?template=
pub async fn handle_document_preview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<TemplateQuery>,
) -> Result<Json<PreviewResponse>, AppError> {
    let document = state.workspace.get(id).await?;
    let tree: Option<Node> = render::render_preview(&document, &query.template);
    Ok(Json(PreviewResponse { tree }))
}

/// GET /api/v1/documents/:id/print?template=
pub async fn handle_document_print_html(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<TemplateQuery>,
) -> Result<Html<String>, AppError> {
    let document = state.workspace.get(id).await?;
    let html = render::render_print(&document, &query.template, &browser_print_options(&state))
        .unwrap_or_default();
    Ok(Html(html))
}

/// POST /api/v1/documents/:id/print?template=
///
/// Runs the server-side print flow on the current snapshot. A blocked print
/// context, or a template id that renders nothing, is a silent no-op (204).
pub async fn handle_document_print(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<TemplateQuery>,
) -> Result<Response, AppError> {
    let document = state.workspace.get(id).await?;

    // The host drives load → settle → print itself, so no embedded script.
    let options = PrintOptions {
        auto_print: false,
        settle_delay_ms: 0,
    };
    let Some(html) = render::render_print(&document, &query.template, &options) else {
        return Ok(StatusCode::NO_CONTENT.into_response());
    };

    info!(%id, template = %query.template, "Starting print job");
    match run_print_job(state.print_host.as_ref(), &html, state.print_timing()).await {
        Ok(outcome) => Ok(Json::<PrintOutcome>(outcome).into_response()),
        Err(PrintError::Blocked) => {
            warn!(%id, "Print blocked, nothing printed");
            Ok(StatusCode::NO_CONTENT.into_response())
        }
        Err(e) => Err(e.into()),
    }
}
