//! Financial news sentiment engine
//!
//! Scores short financial text by blending a generic sentiment baseline with a
//! curated financial lexicon, then aggregates per-item scores into an overall
//! market reading. It includes:
//! - Lexicon loading and validation (built-in tables or TOML)
//! - Term matching, modifier resolution, industry and market tagging
//! - Evidence-weighted score blending and 7-band labeling
//! - Sequential and concurrent batch aggregation

pub mod analyzer;
pub mod baseline;
pub mod batch;
mod builtin;
pub mod combiner;
pub mod config;
pub mod error;
pub mod industry;
pub mod keywords;
pub mod lexicon;
pub mod matcher;
pub mod modifiers;
pub mod normalizer;

// Re-export commonly used types
pub use analyzer::{LexiconAnalysis, SentimentAnalyzer};
pub use baseline::{BaselineProvider, FnBaseline, NaiveBayesBaseline, NeutralBaseline, SampleLabel, TrainingSample};
pub use batch::{aggregate, BatchAggregator, ScoredItem};
pub use config::{load_config, BaselineKind, BatchConfig, EngineConfig};
pub use error::LexiconError;
pub use lexicon::{Lexicon, LexiconTable, Modifier, TermTable};
pub use matcher::MatchResult;

// Re-export common types for convenience
pub use common::{
    AnalysisDetails, AnalysisResult, BatchResult, MatchedTerm, NewsDetail, NewsItem, Polarity,
    SentimentLabel,
};
