//! Axum route handlers for the generation API.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::generation::generator::run_pipeline;
use crate::metrics::KeywordMetrics;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateParams {
    pub keyword: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub status: String,
    pub keyword: String,
    pub seo_data: KeywordMetrics,
    pub file_saved: String,
}

/// GET /generate?keyword=<string>
///
/// Full pipeline: metrics lookup → LLM generation → post store.
/// 400 if the keyword parameter is absent or empty; 500 with the raw error
/// message on any pipeline fault.
pub async fn handle_generate(
    State(state): State<AppState>,
    Query(params): Query<GenerateParams>,
) -> Result<Json<GenerateResponse>, AppError> {
    let keyword = params
        .keyword
        .as_deref()
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .ok_or_else(|| AppError::Validation("Keyword parameter is required".to_string()))?
        .to_string();

    let outcome = run_pipeline(&state, &keyword).await?;

    Ok(Json(GenerateResponse {
        status: "success".to_string(),
        keyword: outcome.keyword,
        seo_data: outcome.seo_data,
        file_saved: outcome.file_saved,
    }))
}

/// GET /jobs/daily
///
/// Returns the outcome of the most recent scheduled run, or
/// `{"status": "never_run"}` before the first firing.
pub async fn handle_daily_job_status(State(state): State<AppState>) -> Json<Value> {
    match state.daily_job.last().await {
        Some(outcome) => Json(
            serde_json::to_value(&outcome).unwrap_or_else(|_| json!({ "status": "unknown" })),
        ),
        None => Json(json!({ "status": "never_run" })),
    }
}
