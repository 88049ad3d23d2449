//! Sentiment analyzer - scores financial news text
//!
//! Pipeline for one text:
//! - normalize the text
//! - ask the baseline provider for a generic score
//! - match lexicon terms and resolve intensity/negation modifiers
//! - blend baseline and lexicon scores by evidence volume
//! - label the result and tag industries, markets and keywords
//!
//! The analyzer holds no mutable state. It can be cloned cheaply and shared
//! across threads.

use crate::baseline::{baseline_or_neutral, BaselineProvider, NeutralBaseline};
use crate::batch::{aggregate, ScoredItem};
use crate::combiner::combine_scores;
use crate::industry::{detect_industries, detect_markets};
use crate::keywords::extract_keywords;
use crate::lexicon::Lexicon;
use crate::matcher::{match_terms, MatchResult};
use crate::modifiers::{apply_effect, modifier_effect};
use crate::normalizer::{normalize, normalize_opt};
use common::{
    round3, AnalysisDetails, AnalysisResult, BatchResult, NewsDetail, NewsItem, SentimentLabel,
    NEUTRAL_SCORE,
};
use std::sync::Arc;
use tracing::debug;

/// Matched terms reported in single-text details
pub const DETAIL_MATCHED_TERMS: usize = 5;

/// Lexicon-only view of a text
#[derive(Debug, Clone, PartialEq)]
pub struct LexiconAnalysis {
    /// Lexicon score after modifiers, 0.5 when nothing matched
    pub score: f64,
    /// Raw weighted average before modifiers
    pub raw_average: Option<f64>,
    /// Composite modifier effect
    pub modifier_effect: f64,
    pub matches: MatchResult,
    pub industries: Vec<String>,
    /// Label of the lexicon score alone
    pub label: SentimentLabel,
}

impl LexiconAnalysis {
    pub fn word_count(&self) -> usize {
        self.matches.total_count
    }
}

/// Intermediate scores for one text
struct TextScore {
    score: f64,
    baseline: f64,
    lexicon: LexiconAnalysis,
}

/// Financial news sentiment analyzer
#[derive(Clone)]
pub struct SentimentAnalyzer {
    lexicon: Arc<Lexicon>,
    baseline: Arc<dyn BaselineProvider>,
}

impl SentimentAnalyzer {
    pub fn new(lexicon: Arc<Lexicon>, baseline: Arc<dyn BaselineProvider>) -> Self {
        Self { lexicon, baseline }
    }

    /// Built-in lexicon with the given baseline
    pub fn with_baseline(baseline: Arc<dyn BaselineProvider>) -> Self {
        Self::new(Lexicon::builtin(), baseline)
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn baseline_name(&self) -> &str {
        self.baseline.name()
    }

    /// Lexicon-only analysis of already normalized text
    pub fn analyze_lexicon(&self, text: &str) -> LexiconAnalysis {
        let matches = match_terms(text, &self.lexicon);
        let effect = modifier_effect(text, &self.lexicon);
        let raw_average = matches.average();
        let score = raw_average
            .map(|avg| apply_effect(avg, effect))
            .unwrap_or(NEUTRAL_SCORE);

        LexiconAnalysis {
            score,
            raw_average,
            modifier_effect: effect,
            industries: detect_industries(text, &self.lexicon),
            label: SentimentLabel::from_score(score),
            matches,
        }
    }

    fn score_text(&self, text: &str) -> TextScore {
        let baseline = baseline_or_neutral(self.baseline.as_ref(), text);
        let lexicon = self.analyze_lexicon(text);
        let score = combine_scores(baseline, lexicon.raw_average.map(|_| lexicon.score), lexicon.word_count());

        debug!(
            baseline,
            lexicon = lexicon.score,
            words = lexicon.word_count(),
            effect = lexicon.modifier_effect,
            score,
            "Scored text"
        );

        TextScore {
            score,
            baseline,
            lexicon,
        }
    }

    /// Final score for a raw text, rounded to 3 decimals. Empty text is 0.5.
    pub fn analyze_text(&self, text: &str) -> f64 {
        let cleaned = normalize(text);
        if cleaned.is_empty() {
            return NEUTRAL_SCORE;
        }
        round3(self.score_text(&cleaned).score)
    }

    /// Full single-text analysis with explainability details
    pub fn analyze_detailed(&self, text: &str) -> AnalysisResult {
        let cleaned = normalize(text);
        if cleaned.is_empty() {
            return AnalysisResult::neutral();
        }

        let scored = self.score_text(&cleaned);
        let lexicon = scored.lexicon;
        let matches = lexicon.matches;

        AnalysisResult {
            score: round3(scored.score),
            label: SentimentLabel::from_score(scored.score),
            keywords: extract_keywords(&cleaned, &self.lexicon),
            industries: lexicon.industries,
            markets: detect_markets(&cleaned, &self.lexicon),
            details: AnalysisDetails {
                baseline_score: round3(scored.baseline),
                lexicon_score: round3(lexicon.score),
                positive_count: matches.positive_count,
                negative_count: matches.negative_count,
                neutral_count: matches.neutral_count,
                keyword_count: matches.total_count,
                matched_terms: matches
                    .matched_terms
                    .into_iter()
                    .take(DETAIL_MATCHED_TERMS)
                    .collect(),
            },
        }
    }

    /// Score one news record. Returns `None` when the record has no usable
    /// text.
    ///
    /// The title is used as given; only the content is normalized.
    pub fn analyze_item(&self, item: &NewsItem) -> Option<ScoredItem> {
        let title = item.title.clone().unwrap_or_default();
        let content = normalize_opt(item.content.as_deref());
        let full_text = format!("{} {}", title, content);

        if full_text.trim().is_empty() {
            return None;
        }

        let scored = self.score_text(&full_text);
        let detail = NewsDetail {
            title,
            sentiment: round3(scored.score),
            sentiment_label: SentimentLabel::from_score(scored.score),
            keywords: extract_keywords(&full_text, &self.lexicon),
            industries: scored.lexicon.industries,
            baseline_score: round3(scored.baseline),
            lexicon_score: round3(scored.lexicon.score),
            keyword_count: scored.lexicon.matches.total_count,
        };

        Some(ScoredItem {
            score: scored.score,
            detail,
        })
    }

    /// Score a collection of news records in order
    pub fn analyze_news(&self, items: &[NewsItem]) -> BatchResult {
        aggregate(items.iter().filter_map(|item| self.analyze_item(item)))
    }
}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        Self::with_baseline(Arc::new(NeutralBaseline))
    }
}

impl std::fmt::Debug for SentimentAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SentimentAnalyzer")
            .field("lexicon_version", &self.lexicon.version())
            .field("baseline", &self.baseline.name())
            .finish()
    }
}
