//! Blog post generation — orchestrates the full pipeline.
//!
//! Flow: metrics lookup → prompt build → LLM call → placeholder validation →
//!       affiliate link substitution → post store.
//!
//! The same `run_pipeline` is driven by GET /generate and by the daily
//! scheduled job; no file is written unless generation succeeded.

use serde::Serialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::generation::prompts::{BLOG_POST_PROMPT_TEMPLATE, SEO_WRITER_SYSTEM};
use crate::llm_client::{LlmClient, LlmError};
use crate::metrics::KeywordMetrics;
use crate::state::AppState;

/// Placeholder identifiers and their affiliate destination URLs.
/// Read-only after initialization; substitution is exact-token replacement.
pub const AFFILIATE_LINKS: [(&str, &str); 3] = [
    ("AFF_LINK_1", "https://amazon.com/affiliate/smart-home-hub"),
    ("AFF_LINK_2", "https://bestbuy.com/affiliate/smart-lights"),
    ("AFF_LINK_3", "https://walmart.com/affiliate/smart-thermostat"),
];

/// Max LLM retries when the output is missing affiliate placeholders.
const MAX_GENERATION_RETRIES: u32 = 1;

/// Result of one full pipeline run, shared by the HTTP handler and the
/// daily scheduled job.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineOutcome {
    pub keyword: String,
    pub seo_data: KeywordMetrics,
    pub file_saved: String,
}

/// Runs keyword → metrics → content → saved path.
pub async fn run_pipeline(state: &AppState, keyword: &str) -> Result<PipelineOutcome, AppError> {
    let seo_data = state.seo.get_metrics(keyword).await;
    info!(
        "Metrics for '{keyword}': volume={}, difficulty={}, cpc=${:.2}",
        seo_data.search_volume, seo_data.keyword_difficulty, seo_data.avg_cpc
    );

    let content = generate_post(&state.llm, keyword, &seo_data).await?;

    let path = state.posts.save_post(keyword, &content).await?;
    let file_saved = path.display().to_string();
    info!("Generated post for '{keyword}' saved to {file_saved}");

    Ok(PipelineOutcome {
        keyword: keyword.to_string(),
        seo_data,
        file_saved,
    })
}

/// Generates the blog post HTML for a keyword.
///
/// Output missing any `{AFF_LINK_n}` token is regenerated up to
/// MAX_GENERATION_RETRIES times, then failed loudly — a post must never
/// ship with silently absent affiliate links.
pub async fn generate_post(
    llm: &LlmClient,
    keyword: &str,
    metrics: &KeywordMetrics,
) -> Result<String, AppError> {
    let prompt = build_prompt(keyword, metrics);

    let mut missing: Vec<&str> = Vec::new();
    for attempt in 0..=MAX_GENERATION_RETRIES {
        let content = llm.call(&prompt, SEO_WRITER_SYSTEM).await?;

        missing = missing_placeholders(&content);
        if missing.is_empty() {
            return Ok(substitute_affiliate_links(&content));
        }

        warn!(
            "Generation attempt {}/{}: output missing placeholders {:?} — regenerating",
            attempt + 1,
            MAX_GENERATION_RETRIES + 1,
            missing
        );
    }

    Err(AppError::Llm(LlmError::MissingPlaceholders(
        missing.join(", "),
    )))
}

/// Fills the prompt template with the keyword and its metrics.
fn build_prompt(keyword: &str, metrics: &KeywordMetrics) -> String {
    BLOG_POST_PROMPT_TEMPLATE
        .replace("{keyword}", keyword)
        .replace("{search_volume}", &metrics.search_volume.to_string())
        .replace(
            "{keyword_difficulty}",
            &metrics.keyword_difficulty.to_string(),
        )
        .replace("{avg_cpc}", &format!("{:.2}", metrics.avg_cpc))
}

/// Placeholder identifiers whose `{NAME}` token is absent from `content`.
fn missing_placeholders(content: &str) -> Vec<&'static str> {
    AFFILIATE_LINKS
        .iter()
        .map(|(name, _)| *name)
        .filter(|name| !content.contains(&format!("{{{name}}}")))
        .collect()
}

/// Replaces every literal `{AFF_LINK_n}` occurrence with its destination
/// URL. Exact-substring substitution; nothing else in the text is touched.
fn substitute_affiliate_links(content: &str) -> String {
    let mut out = content.to_string();
    for (name, url) in AFFILIATE_LINKS {
        out = out.replace(&format!("{{{name}}}"), url);
    }
    out
}
