use std::sync::Arc;

use crate::llm_client::LlmClient;
use crate::metrics::SeoProvider;
use crate::scheduler::JobTracker;
use crate::storage::PostStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable metrics source. Default: `MockSeoProvider` (static table
    /// plus bounded-random fallback).
    pub seo: Arc<dyn SeoProvider>,
    pub llm: LlmClient,
    pub posts: Arc<PostStore>,
    /// Outcome of the most recent scheduled run, served at GET /jobs/daily.
    pub daily_job: JobTracker,
}
