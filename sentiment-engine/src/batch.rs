//! Batch aggregation over news items
//!
//! Items are independent, so the async aggregator fans them out to blocking
//! tasks (bounded by a semaphore) and reassembles results in input order.

use crate::analyzer::SentimentAnalyzer;
use crate::config::BatchConfig;
use common::{round3, BatchResult, NewsDetail, NewsItem, SentimentLabel};
use futures::future::join_all;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{error, info};

/// A scored news item: the unrounded score plus its reported detail
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredItem {
    pub score: f64,
    pub detail: NewsDetail,
}

/// Reduce scored items to an overall reading.
///
/// The overall score is the mean of the unrounded item scores; no items gives
/// a neutral 0.5.
pub fn aggregate(items: impl IntoIterator<Item = ScoredItem>) -> BatchResult {
    let mut total = 0.0;
    let mut details = Vec::new();

    for item in items {
        total += item.score;
        details.push(item.detail);
    }

    if details.is_empty() {
        return BatchResult::empty();
    }

    let average = total / details.len() as f64;
    BatchResult {
        overall_sentiment: round3(average),
        sentiment_label: SentimentLabel::from_score(average),
        details,
    }
}

/// Concurrent batch analyzer
#[derive(Debug, Clone)]
pub struct BatchAggregator {
    analyzer: SentimentAnalyzer,
    config: BatchConfig,
}

impl BatchAggregator {
    pub fn new(analyzer: SentimentAnalyzer, config: BatchConfig) -> Self {
        Self { analyzer, config }
    }

    pub fn analyzer(&self) -> &SentimentAnalyzer {
        &self.analyzer
    }

    /// Analyze `items` concurrently. Output order matches input order and
    /// items without text are skipped.
    pub async fn analyze(&self, items: Vec<NewsItem>) -> BatchResult {
        let total_items = items.len();
        if total_items == 0 {
            return BatchResult::empty();
        }

        // Limit concurrent processing
        let semaphore = Arc::new(Semaphore::new(self.config.max_concurrent_items.max(1)));
        let mut tasks = Vec::with_capacity(total_items);

        for item in items {
            let permit = semaphore.clone().acquire_owned().await.ok();
            let analyzer = self.analyzer.clone();

            tasks.push(tokio::task::spawn_blocking(move || {
                let _permit = permit;
                analyzer.analyze_item(&item)
            }));
        }

        let mut scored = Vec::with_capacity(total_items);
        for (position, outcome) in join_all(tasks).await.into_iter().enumerate() {
            match outcome {
                Ok(Some(item)) => scored.push(item),
                Ok(None) => {}
                Err(e) => error!(position, error = %e, "Batch item task failed, skipping"),
            }
        }

        let result = aggregate(scored);

        info!(
            items = total_items,
            scored = result.details.len(),
            overall = result.overall_sentiment,
            label = %result.sentiment_label,
            "Batch analyzed"
        );

        result
    }
}
