//! Axum route handlers for the Generation API.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::Local;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{error, info};

use crate::curriculum::form::{check_invariants, SuggestionField};
use crate::curriculum::models::FormData;
use crate::errors::AppError;
use crate::generation::assembler::{assemble, RpmResult};
use crate::generation::content::generate_content;
use crate::generation::suggestions::suggest;
use crate::llm_client::relay::RelayPayload;
use crate::llm_client::ContentProvider;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionsRequest {
    pub field: SuggestionField,
    pub form: FormData,
    #[serde(default)]
    pub api_key: Option<String>,
    /// Overrides the context derived from the form.
    #[serde(default)]
    pub context: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SuggestionsResponse {
    pub options: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub form: FormData,
    #[serde(default)]
    pub api_key: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelayRequest {
    #[serde(default)]
    pub api_key: Option<String>,
    pub payload: RelayPayload,
}

/// Context sent with a suggestion request when the caller supplies none.
pub fn default_context(field: SuggestionField, form: &FormData) -> String {
    match field {
        SuggestionField::Cp => String::new(),
        SuggestionField::Tp => form.cp.clone(),
        SuggestionField::Materi => format!("CP: {}. TP: {}", form.cp, form.tp),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/suggestions
///
/// Always 200: failures come back as a one-item placeholder list.
pub async fn handle_suggestions(
    State(state): State<AppState>,
    Json(request): Json<SuggestionsRequest>,
) -> Json<SuggestionsResponse> {
    let api_key = state.resolve_api_key(request.api_key.as_deref());
    let context = request
        .context
        .unwrap_or_else(|| default_context(request.field, &request.form));

    let options = suggest(
        state.provider.as_ref(),
        request.field,
        request.form.subject,
        request.form.class_level,
        &api_key,
        &context,
    )
    .await;

    Json(SuggestionsResponse { options })
}

/// POST /api/v1/rpm/generate
///
/// Full pipeline: invariant check → content request → assembly.
/// The signature date is fixed here so later renders of the same result agree.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<RpmResult>, AppError> {
    check_invariants(&request.form)?;

    let api_key = state.resolve_api_key(request.api_key.as_deref());
    let content = generate_content(state.provider.as_ref(), &request.form, &api_key).await?;

    let result = assemble(request.form, content, Local::now().date_naive());
    info!(
        "RPM assembled: subject={}, class={}",
        result.form.subject, result.form.class_level
    );
    Ok(Json(result))
}

/// POST /api/v1/generate-rpm
///
/// Relay for deployments where the browser must not reach the provider itself.
/// Forwards the prompt and schema unchanged and returns the raw model text.
pub async fn handle_relay(
    State(state): State<AppState>,
    Json(request): Json<RelayRequest>,
) -> impl IntoResponse {
    let api_key = match request.api_key.as_deref().map(str::trim) {
        Some(key) if !key.is_empty() => key.to_string(),
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "API key is required" })),
            )
        }
    };

    let payload = request.payload;
    match state
        .gemini
        .complete_json(&api_key, &payload.prompt, &payload.response_schema)
        .await
    {
        Ok(data) => (
            StatusCode::OK,
            Json(json!({ "success": true, "data": data })),
        ),
        Err(e) => {
            error!("Relay call failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "success": false,
                    "message": "Gemini API failed",
                    "detail": e.to_string(),
                })),
            )
        }
    }
}
