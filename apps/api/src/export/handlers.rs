//! Axum route handlers for the preview and both exports.

use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::export::clipboard::{clipboard_payload, ClipboardPayload};
use crate::export::pdf::{export_pdf, PdfOptions};
use crate::export::ExportError;
use crate::generation::assembler::RpmResult;
use crate::layout::MarginOverrides;
use crate::render::render;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct DocumentRequest {
    pub result: RpmResult,
}

#[derive(Debug, Deserialize)]
pub struct PdfRequest {
    pub result: RpmResult,
    /// Sides left out fall back to the configured default margins.
    #[serde(default)]
    pub margins: Option<MarginOverrides>,
}

/// POST /api/v1/rpm/render
pub async fn handle_render(Json(request): Json<DocumentRequest>) -> Html<String> {
    Html(render(&request.result).to_html())
}

/// POST /api/v1/rpm/export/clipboard
pub async fn handle_clipboard(Json(request): Json<DocumentRequest>) -> Json<ClipboardPayload> {
    Json(clipboard_payload(&render(&request.result)))
}

/// POST /api/v1/rpm/export/pdf
///
/// Layout and PDF writing are CPU-bound and run on the blocking pool.
pub async fn handle_pdf(
    State(state): State<AppState>,
    Json(request): Json<PdfRequest>,
) -> Result<Response, AppError> {
    let options = PdfOptions {
        margins: request
            .margins
            .unwrap_or_default()
            .over(state.pdf_defaults.margins),
    };
    let result = request.result;
    let assets = state.pdf_assets.clone();

    let export = tokio::task::spawn_blocking(move || export_pdf(&result, &options, &assets))
        .await
        .map_err(ExportError::from)??;

    info!(
        "PDF export ready: {} ({} pages)",
        export.filename, export.page_count
    );

    let disposition = format!("attachment; filename=\"{}\"", export.filename);
    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        Bytes::from(export.bytes),
    )
        .into_response())
}
