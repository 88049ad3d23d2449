//! Example usage of the sentiment engine
//!
//! This example demonstrates:
//! 1. Building an analyzer with the built-in lexicon
//! 2. Single-text analysis with explainability details
//! 3. Training a Naive Bayes baseline and plugging it in
//! 4. Concurrent batch analysis over news records

use anyhow::Result;
use sentiment_engine::{
    BatchAggregator, BatchConfig, NaiveBayesBaseline, NewsItem, SampleLabel, SentimentAnalyzer,
    TrainingSample,
};
use std::sync::Arc;
use tracing::{info, Level};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    info!("Sentiment Engine - Example");
    info!("==========================");

    // Step 1: Analyzer with a neutral baseline
    let analyzer = SentimentAnalyzer::default();

    // Step 2: Single texts
    for text in [
        "股市大涨，利好消息不断",
        "市场暴跌，恐慌情绪蔓延，多股跌停",
        "芯片板块大幅上涨，上证指数创新高",
        "股价未上涨",
    ] {
        let result = analyzer.analyze_detailed(text);
        info!(
            "{} -> {:.3} ({}) industries={:?} keywords={:?}",
            text, result.score, result.label, result.industries, result.keywords
        );
        info!(
            "  baseline={:.3} lexicon={:.3} +{} -{} matches={}",
            result.details.baseline_score,
            result.details.lexicon_score,
            result.details.positive_count,
            result.details.negative_count,
            result.details.keyword_count
        );
    }

    // Step 3: Swap in a trained baseline
    let mut baseline = NaiveBayesBaseline::new();
    baseline.fit(&[
        TrainingSample::new("业绩大增，股价创新高", SampleLabel::Positive),
        TrainingSample::new("市场信心增强，资金积极入场", SampleLabel::Positive),
        TrainingSample::new("业绩亏损，股价大跌", SampleLabel::Negative),
        TrainingSample::new("市场恐慌，资金纷纷离场", SampleLabel::Negative),
    ])?;
    let analyzer = SentimentAnalyzer::with_baseline(Arc::new(baseline));
    info!("✅ Naive Bayes baseline trained");

    // Step 4: Batch
    let news = vec![
        NewsItem::new("科技股大涨", "今日科技板块表现强劲，多只股票涨停，投资者信心增强"),
        NewsItem::new("银行板块震荡", "<p>银行股午后回调，资金观望情绪浓厚</p>"),
        NewsItem::default(),
        NewsItem::new("新能源承压", "光伏、锂电池板块集体下跌，北向资金流出"),
    ];

    let aggregator = BatchAggregator::new(analyzer, BatchConfig::default());
    let result = aggregator.analyze(news).await;

    info!(
        "Overall: {:.3} ({}) over {} items",
        result.overall_sentiment,
        result.sentiment_label,
        result.details.len()
    );
    for detail in &result.details {
        info!(
            "  [{}] {:.3} {} industries={:?}",
            detail.title, detail.sentiment, detail.sentiment_label, detail.industries
        );
    }

    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
