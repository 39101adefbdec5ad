mod config;
mod errors;
mod generation;
mod llm_client;
mod metrics;
mod routes;
mod scheduler;
mod state;
mod storage;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::metrics::MockSeoProvider;
use crate::routes::build_router;
use crate::scheduler::JobTracker;
use crate::state::AppState;
use crate::storage::PostStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let crate_name = env!("CARGO_PKG_NAME").replace('-', "_");
            EnvFilter::new(format!("{}={}", crate_name, &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Blogsmith API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize post store (creates the output directory if absent)
    let posts = Arc::new(PostStore::new(&config.posts_dir));
    posts.init().await?;
    info!("Post store ready at {}/", config.posts_dir);

    // Initialize metrics provider (MockSeoProvider by default — swap via AppState)
    let seo = Arc::new(MockSeoProvider::new());

    // Initialize LLM client. A missing key only fails generation calls,
    // not startup.
    if config.openai_api_key.is_none() {
        warn!("OPENAI_API_KEY is not set — generation requests will fail until it is provided");
    }
    let llm = LlmClient::new(config.openai_api_key.clone());
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    // Build app state
    let state = AppState {
        seo,
        llm,
        posts,
        daily_job: JobTracker::new(),
    };

    // Start the daily generation job
    scheduler::spawn_daily_job(state.clone());

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
