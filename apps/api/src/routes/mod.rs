pub mod health;
pub mod home;

use axum::{routing::get, Router};

use crate::generation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home::home_handler))
        .route("/health", get(health::health_handler))
        .route("/generate", get(handlers::handle_generate))
        .route("/jobs/daily", get(handlers::handle_daily_job_status))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::llm_client::LlmClient;
    use crate::metrics::MockSeoProvider;
    use crate::scheduler::JobTracker;
    use crate::storage::PostStore;

    /// Router wired to a temp posts directory and a keyless LLM client —
    /// generation fails deterministically without any network call.
    async fn test_app() -> (Router, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let posts = Arc::new(PostStore::new(dir.path()));
        posts.init().await.unwrap();

        let state = AppState {
            seo: Arc::new(MockSeoProvider::new()),
            llm: LlmClient::new(None),
            posts,
            daily_job: JobTracker::new(),
        };
        (build_router(state), dir)
    }

    async fn get_response(app: Router, uri: &str) -> axum::response::Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_generate_without_keyword_returns_400_fixed_body() {
        let (app, _dir) = test_app().await;
        let response = get_response(app, "/generate").await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Keyword parameter is required" })
        );
    }

    #[tokio::test]
    async fn test_generate_with_empty_keyword_returns_400() {
        let (app, _dir) = test_app().await;
        let response = get_response(app, "/generate?keyword=").await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Keyword parameter is required" })
        );
    }

    #[tokio::test]
    async fn test_generation_failure_returns_500_and_writes_no_file() {
        let (app, dir) = test_app().await;
        let response = get_response(app, "/generate?keyword=wireless%20earbuds").await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert!(body["error"].as_str().unwrap().contains("OPENAI_API_KEY"));

        // Either the full pipeline completes and a file exists, or nothing
        // is saved
        let mut entries = std::fs::read_dir(dir.path()).unwrap();
        assert!(entries.next().is_none(), "no partial artifact expected");
    }

    #[tokio::test]
    async fn test_home_page_serves_static_html() {
        let (app, _dir) = test_app().await;
        let response = get_response(app, "/").await;

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let page = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(page.contains("AI Blog Post Generator"));
        assert!(page.contains("/generate?keyword="));
    }

    #[tokio::test]
    async fn test_health_reports_ok() {
        let (app, _dir) = test_app().await;
        let response = get_response(app, "/health").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_daily_job_status_before_first_run() {
        let (app, _dir) = test_app().await;
        let response = get_response(app, "/jobs/daily").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({ "status": "never_run" }));
    }
}
