use std::sync::Arc;

use crate::access::AccessGate;
use crate::config::Config;
use crate::export::assets::PdfAssets;
use crate::export::pdf::PdfOptions;
use crate::llm_client::{ContentProvider, GeminiClient};

/// Shared application state injected into all route handlers via Axum extractors.
/// Immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Transport for suggestion and content requests. Direct or relay, per `LLM_BACKEND`.
    pub provider: Arc<dyn ContentProvider>,
    /// Always-direct client behind the relay endpoint.
    pub gemini: GeminiClient,
    pub gate: AccessGate,
    pub pdf_defaults: PdfOptions,
    /// Logos and signature for the PDF; empty slots are left blank.
    pub pdf_assets: PdfAssets,
}

impl AppState {
    /// The caller's key when present, else the server-side key, else empty.
    pub fn resolve_api_key(&self, supplied: Option<&str>) -> String {
        supplied
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_string)
            .or_else(|| self.config.gemini_api_key.clone())
            .unwrap_or_default()
    }
}
