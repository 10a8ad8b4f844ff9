use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};

use crate::llm_client::DEFAULT_API_BASE;

/// Which transport carries model calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LlmBackend {
    /// This service calls the provider itself.
    Direct,
    /// Calls are posted to a relay endpoint that holds the provider SDK.
    Relay,
}

impl LlmBackend {
    fn parse(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "direct" => Ok(LlmBackend::Direct),
            "relay" => Ok(LlmBackend::Relay),
            other => bail!("LLM_BACKEND must be 'direct' or 'relay', got '{other}'"),
        }
    }
}

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub access_secret: String,
    /// Server-side credential used when a request carries no `apiKey`.
    pub gemini_api_key: Option<String>,
    pub gemini_api_base: String,
    pub llm_backend: LlmBackend,
    pub relay_url: Option<String>,
    pub llm_timeout: Duration,
    pub pdf_margin_mm: f32,
    /// Local copies of the PDF logos and signature; fetched from their URLs when unset.
    pub pdf_asset_dir: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let llm_backend = LlmBackend::parse(&env_or("LLM_BACKEND", "direct"))?;
        let relay_url = optional_env("RELAY_URL");
        if llm_backend == LlmBackend::Relay && relay_url.is_none() {
            bail!("RELAY_URL is required when LLM_BACKEND=relay");
        }

        Ok(Config {
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            access_secret: require_env("ACCESS_SECRET")?,
            gemini_api_key: optional_env("GEMINI_API_KEY"),
            gemini_api_base: env_or("GEMINI_API_BASE", DEFAULT_API_BASE),
            llm_backend,
            relay_url,
            llm_timeout: Duration::from_secs(
                env_or("LLM_TIMEOUT_SECS", "120")
                    .parse::<u64>()
                    .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            pdf_margin_mm: env_or("PDF_MARGIN_MM", "10")
                .parse::<f32>()
                .context("PDF_MARGIN_MM must be a number")?,
            pdf_asset_dir: optional_env("PDF_ASSET_DIR").map(PathBuf::from),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_parse() {
        assert_eq!(LlmBackend::parse("direct").unwrap(), LlmBackend::Direct);
        assert_eq!(LlmBackend::parse(" Relay ").unwrap(), LlmBackend::Relay);
        assert!(LlmBackend::parse("grpc").is_err());
    }
}
