use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
///
/// The OpenAI key is optional at startup: its absence surfaces as a
/// generation-time error, not a boot failure.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: Option<String>,
    /// Directory generated posts are written to. Relative to the working
    /// directory unless overridden via POSTS_DIR.
    pub posts_dir: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openai_api_key: std::env::var("OPENAI_API_KEY")
                .ok()
                .filter(|key| !key.is_empty()),
            posts_dir: std::env::var("POSTS_DIR").unwrap_or_else(|_| "posts".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
