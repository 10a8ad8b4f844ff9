mod access;
mod config;
mod curriculum;
mod errors;
mod export;
mod generation;
mod layout;
mod llm_client;
mod render;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::access::AccessGate;
use crate::config::{Config, LlmBackend};
use crate::export::assets::PdfAssets;
use crate::export::pdf::PdfOptions;
use crate::layout::Margins;
use crate::llm_client::{ContentProvider, GeminiClient, RelayProvider};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting RPM API v{}", env!("CARGO_PKG_VERSION"));

    let gemini = GeminiClient::new(config.gemini_api_base.as_str(), config.llm_timeout)?;

    let provider: Arc<dyn ContentProvider> = match config.llm_backend {
        LlmBackend::Direct => Arc::new(gemini.clone()),
        LlmBackend::Relay => {
            let endpoint = config
                .relay_url
                .clone()
                .context("RELAY_URL is required when LLM_BACKEND=relay")?;
            Arc::new(RelayProvider::new(endpoint, config.llm_timeout)?)
        }
    };
    info!(
        "LLM provider initialized (backend: {}, model: {})",
        provider.backend(),
        llm_client::MODEL
    );

    let margins = Margins::uniform(config.pdf_margin_mm);
    if !margins.is_valid() {
        anyhow::bail!("PDF_MARGIN_MM leaves no room for content");
    }

    let asset_client = reqwest::Client::builder()
        .timeout(config.llm_timeout)
        .build()
        .context("Failed to build asset HTTP client")?;
    let pdf_assets = PdfAssets::load(&asset_client, config.pdf_asset_dir.as_deref()).await;

    let state = AppState {
        gate: AccessGate::new(config.access_secret.as_str()),
        pdf_defaults: PdfOptions { margins },
        pdf_assets,
        provider,
        gemini,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
