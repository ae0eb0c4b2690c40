use axum::{
    extract::{Path, State},
    response::Html,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::models::{Document, DocumentKind};
use crate::render::{self, Node, PrintOptions};
use crate::state::AppState;
use crate::templates::{registry, TemplateInfo};

#[derive(Deserialize)]
pub struct RenderRequest {
    pub template: String,
    pub document: Document,
}

#[derive(Serialize)]
pub struct PreviewResponse {
    /// `None` when the template id is not recognised.
    pub tree: Option<Node>,
}

/// Auto-print options for browser-facing print documents.
pub fn browser_print_options(state: &AppState) -> PrintOptions {
    PrintOptions {
        auto_print: true,
        settle_delay_ms: state.config.print_settle_delay_ms,
    }
}

fn checked(kind: DocumentKind, req: &RenderRequest) -> Result<(), AppError> {
    if req.document.kind() != kind {
        return Err(AppError::Validation(format!(
            "expected a {} document, got a {}",
            kind.as_str(),
            req.document.kind().as_str()
        )));
    }
    Ok(())
}

/// GET /api/v1/templates/:kind
pub async fn handle_list_templates(Path(kind): Path<DocumentKind>) -> Json<Vec<TemplateInfo>> {
    Json(registry(kind))
}

/// POST /api/v1/render/:kind/preview
pub async fn handle_render_preview(
    Path(kind): Path<DocumentKind>,
    Json(req): Json<RenderRequest>,
) -> Result<Json<PreviewResponse>, AppError> {
    checked(kind, &req)?;
    info!(kind = kind.as_str(), template = %req.template, "Rendering preview");
    Ok(Json(PreviewResponse {
        tree: render::render_preview(&req.document, &req.template),
    }))
}

/// POST /api/v1/render/:kind/preview.html
pub async fn handle_render_preview_html(
    Path(kind): Path<DocumentKind>,
    Json(req): Json<RenderRequest>,
) -> Result<Html<String>, AppError> {
    checked(kind, &req)?;
    info!(kind = kind.as_str(), template = %req.template, "Rendering preview fragment");
    let html = render::render_preview(&req.document, &req.template)
        .map(|tree| tree.to_html())
        .unwrap_or_default();
    Ok(Html(html))
}

/// POST /api/v1/render/:kind/print
pub async fn handle_render_print(
    State(state): State<AppState>,
    Path(kind): Path<DocumentKind>,
    Json(req): Json<RenderRequest>,
) -> Result<Html<String>, AppError> {
    checked(kind, &req)?;
    info!(kind = kind.as_str(), template = %req.template, "Rendering print document");
    let html = render::render_print(&req.document, &req.template, &browser_print_options(&state))
        .unwrap_or_default();
    Ok(Html(html))
}
