//! Sentiment labels and term polarity

use serde::{Deserialize, Serialize};
use std::fmt;

/// Seven-band market sentiment label
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    #[serde(rename = "strongly bearish")]
    StronglyBearish,
    #[serde(rename = "bearish")]
    Bearish,
    #[serde(rename = "mildly bearish")]
    MildlyBearish,
    #[serde(rename = "neutral")]
    Neutral,
    #[serde(rename = "mildly bullish")]
    MildlyBullish,
    #[serde(rename = "bullish")]
    Bullish,
    #[serde(rename = "strongly bullish")]
    StronglyBullish,
}

impl SentimentLabel {
    /// Map a score in [0, 1] to its band. Lower bounds are inclusive.
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s >= 0.70 => SentimentLabel::StronglyBullish,
            s if s >= 0.60 => SentimentLabel::Bullish,
            s if s >= 0.55 => SentimentLabel::MildlyBullish,
            s if s >= 0.45 => SentimentLabel::Neutral,
            s if s >= 0.40 => SentimentLabel::MildlyBearish,
            s if s >= 0.30 => SentimentLabel::Bearish,
            _ => SentimentLabel::StronglyBearish,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::StronglyBearish => "strongly bearish",
            SentimentLabel::Bearish => "bearish",
            SentimentLabel::MildlyBearish => "mildly bearish",
            SentimentLabel::Neutral => "neutral",
            SentimentLabel::MildlyBullish => "mildly bullish",
            SentimentLabel::Bullish => "bullish",
            SentimentLabel::StronglyBullish => "strongly bullish",
        }
    }

    pub fn is_bullish(&self) -> bool {
        *self > SentimentLabel::Neutral
    }

    pub fn is_bearish(&self) -> bool {
        *self < SentimentLabel::Neutral
    }
}

impl Default for SentimentLabel {
    fn default() -> Self {
        SentimentLabel::Neutral
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tilt of a lexicon term relative to the 0.5 midpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Positive,
    Negative,
    Neutral,
    /// Returned by lookups for terms the lexicon does not know
    Unknown,
}
