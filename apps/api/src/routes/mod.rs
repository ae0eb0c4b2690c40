pub mod health;
pub mod render;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::state::AppState;
use crate::workspace::handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Template registry
        .route("/api/v1/templates/:kind", get(render::handle_list_templates))
        // Stateless rendering
        .route(
            "/api/v1/render/:kind/preview",
            post(render::handle_render_preview),
        )
        .route(
            "/api/v1/render/:kind/preview.html",
            post(render::handle_render_preview_html),
        )
        .route("/api/v1/render/:kind/print", post(render::handle_render_print))
        // Workspace
        .route("/api/v1/documents", post(handlers::handle_create_document))
        .route(
            "/api/v1/documents/:id",
            get(handlers::handle_get_document)
                .put(handlers::handle_replace_document)
                .patch(handlers::handle_patch_document)
                .delete(handlers::handle_delete_document),
        )
        .route(
            "/api/v1/documents/:id/entries/:collection",
            post(handlers::handle_append_entry),
        )
        .route(
            "/api/v1/documents/:id/entries/:collection/:entry_id",
            patch(handlers::handle_update_entry).delete(handlers::handle_remove_entry),
        )
        .route(
            "/api/v1/documents/:id/preview",
            get(handlers::handle_document_preview),
        )
        .route(
            "/api/v1/documents/:id/print",
            get(handlers::handle_document_print_html).post(handlers::handle_document_print),
        )
        .with_state(state)
}
