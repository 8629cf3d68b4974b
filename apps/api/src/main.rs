mod config;
mod consultation;
mod errors;
mod llm_client;
mod models;
mod profile;
mod recommendation;
mod roadmap;
mod routes;
mod session;
mod skills;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::session::SessionStore;
use crate::skills::gap::{CatalogGapAnalyzer, GapAnalyzer, LlmGapAnalyzer};
use crate::state::AppState;

/// How often idle sessions are swept.
const PURGE_INTERVAL_SECS: u64 = 60;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first; a missing GEMINI_API_KEY aborts startup here.
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("compass_api={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Compass API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the model gateway
    let llm = Arc::new(LlmClient::new(config.gemini_api_key.clone()));
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    // Initialize the gap analyzer (CatalogGapAnalyzer by default)
    let gap_analyzer: Arc<dyn GapAnalyzer> = if config.enable_llm_gap_analysis {
        info!("Gap analyzer: llm");
        Arc::new(LlmGapAnalyzer(llm.clone()))
    } else {
        info!("Gap analyzer: catalog");
        Arc::new(CatalogGapAnalyzer)
    };

    // Initialize the session store and its purge sweep
    let sessions = SessionStore::new(Duration::from_secs(config.session_ttl_secs));
    {
        let sessions = sessions.clone();
        tokio::spawn(async move {
            let mut tick =
                tokio::time::interval(Duration::from_secs(PURGE_INTERVAL_SECS));
            loop {
                tick.tick().await;
                let removed = sessions.purge_expired().await;
                if removed > 0 {
                    info!("Purged {removed} idle sessions");
                }
            }
        });
    }

    // Build app state
    let state = AppState {
        sessions,
        model: llm,
        gap_analyzer,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
