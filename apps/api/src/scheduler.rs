//! Daily generation job — fires once per day at local midnight and runs the
//! same pipeline as GET /generate for a fixed keyword.
//!
//! Failures never surface to a caller (there is none); they are logged and
//! recorded as a `JobOutcome` an operator can query at GET /jobs/daily.

use std::sync::Arc;

use chrono::{DateTime, Days, Local, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{error, info};

use crate::generation::generator::run_pipeline;
use crate::state::AppState;

/// Keyword used by the daily scheduled run.
pub const DAILY_KEYWORD: &str = "wireless earbuds";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Success,
    Failure,
}

/// Recorded result of one scheduled run.
#[derive(Debug, Clone, Serialize)]
pub struct JobOutcome {
    pub status: JobStatus,
    pub keyword: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_saved: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub finished_at: DateTime<Utc>,
}

/// Holds the outcome of the most recent scheduled run. Cheap to clone and
/// share between the scheduler task and the status handler.
#[derive(Clone, Default)]
pub struct JobTracker {
    last_outcome: Arc<RwLock<Option<JobOutcome>>>,
}

impl JobTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn record(&self, outcome: JobOutcome) {
        *self.last_outcome.write().await = Some(outcome);
    }

    pub async fn last(&self) -> Option<JobOutcome> {
        self.last_outcome.read().await.clone()
    }
}

/// Spawns the background task driving the daily run. The task sleeps until
/// the next local midnight, runs the pipeline, records the outcome, loops.
pub fn spawn_daily_job(state: AppState) {
    tokio::spawn(async move {
        loop {
            let delay = until_next_midnight(Local::now());
            info!("Next daily post scheduled in {}s", delay.as_secs());
            tokio::time::sleep(delay).await;
            run_scheduled(&state).await;
        }
    });
}

async fn run_scheduled(state: &AppState) {
    let outcome = match run_pipeline(state, DAILY_KEYWORD).await {
        Ok(result) => {
            info!("Generated daily post: {}", result.file_saved);
            JobOutcome {
                status: JobStatus::Success,
                keyword: DAILY_KEYWORD.to_string(),
                file_saved: Some(result.file_saved),
                error: None,
                finished_at: Utc::now(),
            }
        }
        Err(e) => {
            error!("Error generating daily post: {e}");
            JobOutcome {
                status: JobStatus::Failure,
                keyword: DAILY_KEYWORD.to_string(),
                file_saved: None,
                error: Some(e.to_string()),
                finished_at: Utc::now(),
            }
        }
    };
    state.daily_job.record(outcome).await;
}

/// Duration from `now` until the next local midnight.
fn until_next_midnight(now: DateTime<Local>) -> std::time::Duration {
    let next = (now.date_naive() + Days::new(1))
        .and_hms_opt(0, 0, 0)
        .and_then(|midnight| midnight.and_local_timezone(Local).earliest());

    match next {
        Some(next) => (next - now)
            .to_std()
            .unwrap_or(std::time::Duration::from_secs(1)),
        // Local midnight can be skipped by a DST transition; try again in
        // an hour rather than panicking
        None => std::time::Duration::from_secs(3600),
    }
}
