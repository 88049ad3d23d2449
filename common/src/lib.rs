//! Shared types for the news sentiment workspace
//!
//! Everything here is part of the serialized result contract consumed by
//! reporting and API layers, so field names are kept stable.

pub mod label;
pub mod news;
pub mod result;

pub use label::{Polarity, SentimentLabel};
pub use news::NewsItem;
pub use result::{AnalysisDetails, AnalysisResult, BatchResult, MatchedTerm, NewsDetail};

/// Neutral midpoint for every score and weight in the system
pub const NEUTRAL_SCORE: f64 = 0.5;

/// Round a score to the 3 decimals used in reports
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
