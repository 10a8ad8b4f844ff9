use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::curriculum::form::FormError;
use crate::export::ExportError;
use crate::generation::content::GenerationError;

pub const LLM_ERROR_MESSAGE: &str = "Terjadi kesalahan saat menghubungi AI. Pastikan Kunci API \
    Anda benar atau kuota Anda masih tersedia.";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Missing API key")]
    MissingCredential,

    #[error("Unauthorized")]
    Unauthorized,

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Malformed model response: {0}")]
    MalformedResponse(String),

    #[error("Export error: {0}")]
    Export(String),
}

impl From<GenerationError> for AppError {
    fn from(e: GenerationError) -> Self {
        match e {
            GenerationError::MissingCredential => AppError::MissingCredential,
            GenerationError::Provider(e) => AppError::Llm(e.to_string()),
            GenerationError::Malformed(e) => AppError::MalformedResponse(e.to_string()),
        }
    }
}

impl From<FormError> for AppError {
    fn from(e: FormError) -> Self {
        AppError::Validation(e.to_string())
    }
}

impl From<ExportError> for AppError {
    fn from(e: ExportError) -> Self {
        match e {
            ExportError::InvalidMargins(_) => AppError::Validation(e.to_string()),
            other => AppError::Export(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::MissingCredential => (
                StatusCode::BAD_REQUEST,
                "MISSING_API_KEY",
                "API Key wajib diisi.".to_string(),
            ),
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
                "Kata sandi salah.".to_string(),
            ),
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "LLM_ERROR",
                    LLM_ERROR_MESSAGE.to_string(),
                )
            }
            AppError::MalformedResponse(msg) => {
                tracing::error!("Malformed model response: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "MALFORMED_RESPONSE",
                    LLM_ERROR_MESSAGE.to_string(),
                )
            }
            AppError::Export(msg) => {
                tracing::error!("Export error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "EXPORT_ERROR",
                    "Gagal mengekspor dokumen RPM.".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::LlmError;

    #[test]
    fn test_generation_errors_map_to_distinct_kinds() {
        assert!(matches!(
            AppError::from(GenerationError::MissingCredential),
            AppError::MissingCredential
        ));
        assert!(matches!(
            AppError::from(GenerationError::Provider(LlmError::EmptyContent)),
            AppError::Llm(_)
        ));
        let parse_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(matches!(
            AppError::from(GenerationError::Malformed(parse_error)),
            AppError::MalformedResponse(_)
        ));
    }

    #[test]
    fn test_status_codes() {
        let cases = [
            (AppError::MissingCredential, StatusCode::BAD_REQUEST),
            (AppError::Unauthorized, StatusCode::UNAUTHORIZED),
            (AppError::Llm("quota".into()), StatusCode::BAD_GATEWAY),
            (AppError::Export("io".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (AppError::Validation("x".into()), StatusCode::BAD_REQUEST),
        ];
        for (error, status) in cases {
            assert_eq!(error.into_response().status(), status);
        }
    }
}
