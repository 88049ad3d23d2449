//! Analysis result records

use crate::label::{Polarity, SentimentLabel};
use crate::NEUTRAL_SCORE;
use serde::{Deserialize, Serialize};

/// A lexicon term found in a text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchedTerm {
    pub term: String,
    pub weight: f64,
    pub polarity: Polarity,
    /// Non-overlapping occurrences in the text
    pub count: usize,
}

impl MatchedTerm {
    /// Distance from the neutral midpoint
    pub fn salience(&self) -> f64 {
        (self.weight - NEUTRAL_SCORE).abs()
    }
}

/// Inputs that produced a score, kept for explainability
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisDetails {
    pub baseline_score: f64,
    pub lexicon_score: f64,
    pub positive_count: usize,
    pub negative_count: usize,
    pub neutral_count: usize,
    /// Total lexicon matches, the evidence volume used by the blend
    pub keyword_count: usize,
    pub matched_terms: Vec<MatchedTerm>,
}

impl Default for AnalysisDetails {
    fn default() -> Self {
        Self {
            baseline_score: NEUTRAL_SCORE,
            lexicon_score: NEUTRAL_SCORE,
            positive_count: 0,
            negative_count: 0,
            neutral_count: 0,
            keyword_count: 0,
            matched_terms: Vec::new(),
        }
    }
}

/// Single-text analysis result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub score: f64,
    pub label: SentimentLabel,
    pub keywords: Vec<String>,
    pub industries: Vec<String>,
    #[serde(default)]
    pub markets: Vec<String>,
    pub details: AnalysisDetails,
}

impl AnalysisResult {
    /// Result reported for empty or unusable text
    pub fn neutral() -> Self {
        Self {
            score: NEUTRAL_SCORE,
            label: SentimentLabel::Neutral,
            keywords: Vec::new(),
            industries: Vec::new(),
            markets: Vec::new(),
            details: AnalysisDetails::default(),
        }
    }
}

/// Per-item record inside a batch result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsDetail {
    pub title: String,
    pub sentiment: f64,
    pub sentiment_label: SentimentLabel,
    pub keywords: Vec<String>,
    pub industries: Vec<String>,
    pub baseline_score: f64,
    pub lexicon_score: f64,
    pub keyword_count: usize,
}

/// Overall reading over a collection of news items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchResult {
    pub overall_sentiment: f64,
    pub sentiment_label: SentimentLabel,
    pub details: Vec<NewsDetail>,
}

impl BatchResult {
    pub fn empty() -> Self {
        Self {
            overall_sentiment: NEUTRAL_SCORE,
            sentiment_label: SentimentLabel::Neutral,
            details: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_result_shape() {
        let result = AnalysisResult::neutral();
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["score"], 0.5);
        assert_eq!(value["label"], "neutral");
        assert!(value["keywords"].as_array().unwrap().is_empty());
        assert_eq!(value["details"]["baseline_score"], 0.5);
        assert_eq!(value["details"]["keyword_count"], 0);
    }

    #[test]
    fn test_batch_result_field_names() {
        let value = serde_json::to_value(BatchResult::empty()).unwrap();
        assert_eq!(value["overall_sentiment"], 0.5);
        assert_eq!(value["sentiment_label"], "neutral");
        assert!(value["details"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_salience() {
        let term = MatchedTerm {
            term: "crash".to_string(),
            weight: 0.1,
            polarity: Polarity::Negative,
            count: 2,
        };
        assert!((term.salience() - 0.4).abs() < 1e-12);
    }
}
