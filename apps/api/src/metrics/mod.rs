//! Metrics Provider — keyword metrics lookup backed by a static table with
//! a bounded-random fallback for unknown keywords.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::errors::AppError;

/// SEO metrics for a single keyword. `avg_cpc` is in USD, two decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordMetrics {
    pub search_volume: u64,
    /// 1–100 scale.
    pub keyword_difficulty: u8,
    pub avg_cpc: f64,
}

/// The metrics source trait. Implement this to swap the mock table for a
/// real SEO data backend without touching the handlers or the pipeline.
///
/// Carried in `AppState` as `Arc<dyn SeoProvider>`.
#[async_trait]
pub trait SeoProvider: Send + Sync {
    /// Returns the stored record for `keyword` (case-insensitive lookup),
    /// or a synthesized one when the keyword is unknown. Never fails and
    /// never mutates the store.
    async fn get_metrics(&self, keyword: &str) -> KeywordMetrics;

    /// Inserts or overwrites the record under the lowercased keyword.
    /// Out-of-range values are rejected instead of stored.
    async fn save_metrics(&self, keyword: &str, metrics: KeywordMetrics) -> Result<(), AppError>;
}

/// In-memory metrics table seeded with demo records. Reads and writes go
/// through an async `RwLock`; concurrent request handling is safe.
pub struct MockSeoProvider {
    table: RwLock<HashMap<String, KeywordMetrics>>,
}

impl MockSeoProvider {
    pub fn new() -> Self {
        let mut table = HashMap::new();
        table.insert(
            "wireless earbuds".to_string(),
            KeywordMetrics {
                search_volume: 110_000,
                keyword_difficulty: 65,
                avg_cpc: 2.50,
            },
        );
        table.insert(
            "best headphones".to_string(),
            KeywordMetrics {
                search_volume: 90_500,
                keyword_difficulty: 70,
                avg_cpc: 3.20,
            },
        );
        table.insert(
            "noise cancelling headphones".to_string(),
            KeywordMetrics {
                search_volume: 82_300,
                keyword_difficulty: 68,
                avg_cpc: 2.80,
            },
        );
        Self {
            table: RwLock::new(table),
        }
    }
}

impl Default for MockSeoProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SeoProvider for MockSeoProvider {
    async fn get_metrics(&self, keyword: &str) -> KeywordMetrics {
        if let Some(stored) = self.table.read().await.get(&keyword.to_lowercase()) {
            return stored.clone();
        }
        synthesize_metrics()
    }

    async fn save_metrics(&self, keyword: &str, metrics: KeywordMetrics) -> Result<(), AppError> {
        validate_metrics(&metrics)?;
        self.table
            .write()
            .await
            .insert(keyword.to_lowercase(), metrics);
        Ok(())
    }
}

/// Random metrics for keywords absent from the table:
/// volume in [1000, 100000], difficulty in [1, 100], CPC in [0.50, 5.00].
fn synthesize_metrics() -> KeywordMetrics {
    KeywordMetrics {
        search_volume: fastrand::u64(1000..=100_000),
        keyword_difficulty: fastrand::u8(1..=100),
        avg_cpc: round_cents(0.50 + fastrand::f64() * 4.50),
    }
}

fn validate_metrics(metrics: &KeywordMetrics) -> Result<(), AppError> {
    if !(1..=100).contains(&metrics.keyword_difficulty) {
        return Err(AppError::Validation(format!(
            "keyword_difficulty must be between 1 and 100, got {}",
            metrics.keyword_difficulty
        )));
    }
    if metrics.avg_cpc < 0.0 {
        return Err(AppError::Validation(format!(
            "avg_cpc must be non-negative, got {}",
            metrics.avg_cpc
        )));
    }
    Ok(())
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored_wireless_earbuds() -> KeywordMetrics {
        KeywordMetrics {
            search_volume: 110_000,
            keyword_difficulty: 65,
            avg_cpc: 2.50,
        }
    }

    #[tokio::test]
    async fn test_stored_keyword_returns_exact_record_repeatedly() {
        let provider = MockSeoProvider::new();
        for _ in 0..5 {
            let metrics = provider.get_metrics("wireless earbuds").await;
            assert_eq!(metrics, stored_wireless_earbuds());
        }
    }

    #[tokio::test]
    async fn test_lookup_is_case_insensitive() {
        let provider = MockSeoProvider::new();
        let metrics = provider.get_metrics("Wireless EARBUDS").await;
        assert_eq!(metrics, stored_wireless_earbuds());
    }

    #[tokio::test]
    async fn test_unknown_keyword_synthesizes_within_bounds() {
        let provider = MockSeoProvider::new();
        for _ in 0..100 {
            let metrics = provider.get_metrics("quantum gardening gloves").await;
            assert!((1000..=100_000).contains(&metrics.search_volume));
            assert!((1..=100).contains(&metrics.keyword_difficulty));
            assert!((0.50..=5.00).contains(&metrics.avg_cpc));
            // Rounded to whole cents
            let cents = metrics.avg_cpc * 100.0;
            assert!((cents - cents.round()).abs() < 1e-9);
        }
    }

    #[tokio::test]
    async fn test_lookup_does_not_insert_unknown_keywords() {
        let provider = MockSeoProvider::new();
        provider.get_metrics("standing desk").await;
        provider.get_metrics("standing desk").await;
        assert_eq!(
            provider.table.read().await.len(),
            3,
            "lookup must not persist synthesized metrics"
        );
    }

    #[tokio::test]
    async fn test_save_metrics_overwrites_under_lowercased_key() {
        let provider = MockSeoProvider::new();
        let updated = KeywordMetrics {
            search_volume: 50_000,
            keyword_difficulty: 10,
            avg_cpc: 1.25,
        };
        provider
            .save_metrics("Wireless Earbuds", updated.clone())
            .await
            .unwrap();
        assert_eq!(provider.get_metrics("wireless earbuds").await, updated);
    }

    #[tokio::test]
    async fn test_save_metrics_rejects_out_of_range_difficulty() {
        let provider = MockSeoProvider::new();
        for difficulty in [0u8, 101] {
            let result = provider
                .save_metrics(
                    "bad entry",
                    KeywordMetrics {
                        search_volume: 1,
                        keyword_difficulty: difficulty,
                        avg_cpc: 1.0,
                    },
                )
                .await;
            assert!(result.is_err(), "difficulty {difficulty} must be rejected");
        }
    }

    #[tokio::test]
    async fn test_save_metrics_rejects_negative_cpc() {
        let provider = MockSeoProvider::new();
        let result = provider
            .save_metrics(
                "bad entry",
                KeywordMetrics {
                    search_volume: 1,
                    keyword_difficulty: 50,
                    avg_cpc: -0.01,
                },
            )
            .await;
        assert!(result.is_err());
    }
}
