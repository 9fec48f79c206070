mod config;
mod draft;
mod errors;
mod llm_client;
mod mailer;
mod routes;
mod session;
mod state;
mod storage;
mod views;
mod workflow;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::draft::LlmDraftGenerator;
use crate::llm_client::LlmClient;
use crate::mailer::SmtpMailer;
use crate::routes::build_router;
use crate::state::AppState;
use crate::storage::UploadStore;
use crate::workflow::WorkflowStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Applymail API v{}", env!("CARGO_PKG_VERSION"));

    if config.using_default_session_secret() {
        warn!("SESSION_SECRET not set; using the insecure local-preview default");
    }

    // Initialize the resume upload store
    let uploads = UploadStore::new(&config.upload_dir).await?;
    info!("Upload store ready at {}", config.upload_dir);

    // Initialize LLM client
    let llm = LlmClient::new(config.anthropic_api_key.clone());
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    // Initialize the SMTP transport
    let smtp = SmtpMailer::from_config(&config)?;
    info!("SMTP transport initialized (relay: {})", mailer::SMTP_RELAY);

    // Build app state
    let state = AppState {
        config: config.clone(),
        generator: Arc::new(LlmDraftGenerator::new(llm)),
        mailer: Arc::new(smtp),
        uploads,
        workflows: WorkflowStore::default(),
    };

    // Build router
    let app = build_router(state).layer(TraceLayer::new_for_http());

    // Single-user local tool: bind loopback only
    let addr: SocketAddr = format!("127.0.0.1:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
