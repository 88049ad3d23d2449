//! Generic (non-domain) sentiment baselines
//!
//! The analyzer asks a `BaselineProvider` for a general-purpose sentiment
//! estimate and blends it with the lexicon score. Providers may fail; the
//! analyzer then falls back to a neutral 0.5 and carries on.

use anyhow::{bail, Context, Result};
use common::NEUTRAL_SCORE;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tracing::{info, warn};

/// External generic sentiment capability
pub trait BaselineProvider: Send + Sync {
    /// Provider name used in logs
    fn name(&self) -> &str;

    /// Sentiment of `text` in [0, 1]
    fn score(&self, text: &str) -> Result<f64>;
}

/// Ask `provider` for a baseline, substituting 0.5 on failure or a
/// non-finite value. Values outside [0, 1] are clamped.
pub fn baseline_or_neutral(provider: &dyn BaselineProvider, text: &str) -> f64 {
    match provider.score(text) {
        Ok(score) if score.is_finite() => score.clamp(0.0, 1.0),
        Ok(score) => {
            warn!(provider = provider.name(), score, "Baseline returned non-finite score, using neutral");
            NEUTRAL_SCORE
        }
        Err(e) => {
            warn!(provider = provider.name(), error = %e, "Baseline failed, using neutral");
            NEUTRAL_SCORE
        }
    }
}

/// Baseline that has no opinion
#[derive(Debug, Clone, Copy, Default)]
pub struct NeutralBaseline;

impl BaselineProvider for NeutralBaseline {
    fn name(&self) -> &str {
        "neutral"
    }

    fn score(&self, _text: &str) -> Result<f64> {
        Ok(NEUTRAL_SCORE)
    }
}

/// Adapter turning a closure into a provider
pub struct FnBaseline<F> {
    name: String,
    func: F,
}

impl<F> FnBaseline<F>
where
    F: Fn(&str) -> Result<f64> + Send + Sync,
{
    pub fn new(name: impl Into<String>, func: F) -> Self {
        Self {
            name: name.into(),
            func,
        }
    }
}

impl<F> BaselineProvider for FnBaseline<F>
where
    F: Fn(&str) -> Result<f64> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn score(&self, text: &str) -> Result<f64> {
        (self.func)(text)
    }
}

/// Label of a training sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SampleLabel {
    Positive,
    Negative,
}

impl SampleLabel {
    fn index(self) -> usize {
        match self {
            SampleLabel::Positive => 0,
            SampleLabel::Negative => 1,
        }
    }
}

/// A labelled sentence for training the Naive Bayes baseline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingSample {
    pub text: String,
    pub label: SampleLabel,
}

impl TrainingSample {
    pub fn new(text: impl Into<String>, label: SampleLabel) -> Self {
        Self {
            text: text.into(),
            label,
        }
    }
}

/// Character unigrams and bigrams over letters, digits and ideographs
fn char_features(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().filter(|c| c.is_alphanumeric()).collect();
    let mut features: Vec<String> = chars.iter().map(|c| c.to_string()).collect();
    features.extend(chars.windows(2).map(|w| w.iter().collect::<String>()));
    features
}

/// Binary multinomial Naive Bayes over character n-grams with Laplace
/// smoothing. Scores are P(positive | text).
#[derive(Debug, Clone)]
pub struct NaiveBayesBaseline {
    alpha: f64,
    class_counts: [usize; 2],
    feature_counts: [HashMap<String, usize>; 2],
    total_features: [usize; 2],
    vocabulary: HashSet<String>,
}

impl NaiveBayesBaseline {
    /// Create an untrained model. Scoring fails until `fit` succeeds.
    pub fn new() -> Self {
        Self {
            alpha: 1.0,
            class_counts: [0, 0],
            feature_counts: [HashMap::new(), HashMap::new()],
            total_features: [0, 0],
            vocabulary: HashSet::new(),
        }
    }

    /// Set the Laplace smoothing strength; it must be positive and finite
    pub fn with_alpha(mut self, alpha: f64) -> Result<Self> {
        if !alpha.is_finite() || alpha <= 0.0 {
            bail!("Smoothing alpha must be positive, got {}", alpha);
        }
        self.alpha = alpha;
        Ok(self)
    }

    /// Train on labelled samples. Both labels must be present.
    pub fn fit(&mut self, samples: &[TrainingSample]) -> Result<()> {
        let mut model = Self {
            alpha: self.alpha,
            ..Self::new()
        };

        for sample in samples {
            let class = sample.label.index();
            model.class_counts[class] += 1;
            for feature in char_features(&sample.text) {
                *model.feature_counts[class].entry(feature.clone()).or_insert(0) += 1;
                model.total_features[class] += 1;
                model.vocabulary.insert(feature);
            }
        }

        if model.class_counts.iter().any(|&count| count == 0) {
            bail!("Training corpus needs both positive and negative samples");
        }

        *self = model;
        Ok(())
    }

    /// Load a JSON array of `{"text": ..., "label": "positive" | "negative"}`
    /// and train on it
    pub fn from_corpus_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read baseline corpus {}", path.display()))?;
        let samples: Vec<TrainingSample> = serde_json::from_str(&content)
            .with_context(|| format!("Invalid baseline corpus {}", path.display()))?;

        let mut model = Self::new();
        model.fit(&samples)?;

        info!(
            path = %path.display(),
            samples = samples.len(),
            vocabulary = model.vocab_size(),
            "Naive Bayes baseline trained"
        );

        Ok(model)
    }

    pub fn is_trained(&self) -> bool {
        self.class_counts.iter().all(|&count| count > 0)
    }

    pub fn vocab_size(&self) -> usize {
        self.vocabulary.len()
    }

    fn log_likelihood(&self, class: usize, features: &[String]) -> f64 {
        let total_docs = (self.class_counts[0] + self.class_counts[1]) as f64;
        let denominator = self.total_features[class] as f64 + self.alpha * self.vocabulary.len() as f64;

        let mut log_prob = (self.class_counts[class] as f64 / total_docs).ln();
        for feature in features {
            // Features never seen in training are ignored
            if !self.vocabulary.contains(feature) {
                continue;
            }
            let count = self.feature_counts[class].get(feature).copied().unwrap_or(0) as f64;
            log_prob += ((count + self.alpha) / denominator).ln();
        }
        log_prob
    }
}

impl Default for NaiveBayesBaseline {
    fn default() -> Self {
        Self::new()
    }
}

impl BaselineProvider for NaiveBayesBaseline {
    fn name(&self) -> &str {
        "naive_bayes"
    }

    fn score(&self, text: &str) -> Result<f64> {
        if !self.is_trained() {
            bail!("Naive Bayes baseline has not been trained");
        }

        let features = char_features(text);
        let positive = self.log_likelihood(SampleLabel::Positive.index(), &features);
        let negative = self.log_likelihood(SampleLabel::Negative.index(), &features);

        // Two-class softmax in log space
        Ok(1.0 / (1.0 + (negative - positive).exp()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn corpus() -> Vec<TrainingSample> {
        vec![
            TrainingSample::new("业绩大增，股价创新高", SampleLabel::Positive),
            TrainingSample::new("市场信心增强，资金积极入场", SampleLabel::Positive),
            TrainingSample::new("公司前景良好，投资者欢迎", SampleLabel::Positive),
            TrainingSample::new("业绩亏损，股价大跌", SampleLabel::Negative),
            TrainingSample::new("市场恐慌，资金纷纷离场", SampleLabel::Negative),
            TrainingSample::new("公司前景堪忧，投资者失望", SampleLabel::Negative),
        ]
    }

    struct FailingBaseline;

    impl BaselineProvider for FailingBaseline {
        fn name(&self) -> &str {
            "failing"
        }

        fn score(&self, _text: &str) -> Result<f64> {
            bail!("model unavailable")
        }
    }

    #[test]
    fn test_neutral_baseline() {
        assert_eq!(NeutralBaseline.score("anything").unwrap(), 0.5);
    }

    #[test]
    fn test_failure_falls_back_to_neutral() {
        assert_eq!(baseline_or_neutral(&FailingBaseline, "股市上涨"), 0.5);
    }

    #[test]
    fn test_non_finite_and_out_of_range() {
        let nan = FnBaseline::new("nan", |_: &str| Ok(f64::NAN));
        assert_eq!(baseline_or_neutral(&nan, "x"), 0.5);

        let high = FnBaseline::new("high", |_: &str| Ok(1.7));
        assert_eq!(baseline_or_neutral(&high, "x"), 1.0);
    }

    #[test]
    fn test_fn_baseline() {
        let provider = FnBaseline::new("fixed", |text: &str| Ok(if text.is_empty() { 0.2 } else { 0.9 }));
        assert_eq!(provider.name(), "fixed");
        assert_eq!(provider.score("好").unwrap(), 0.9);
    }

    #[test]
    fn test_untrained_naive_bayes_fails() {
        let model = NaiveBayesBaseline::new();
        assert!(!model.is_trained());
        assert!(model.score("股价创新高").is_err());
        assert_eq!(baseline_or_neutral(&model, "股价创新高"), 0.5);
    }

    #[test]
    fn test_naive_bayes_ranks_texts() {
        let mut model = NaiveBayesBaseline::new();
        model.fit(&corpus()).unwrap();

        let positive = model.score("股价创新高，投资者欢迎").unwrap();
        let negative = model.score("股价大跌，投资者失望").unwrap();
        assert!(positive > 0.5);
        assert!(negative < 0.5);
        assert!((0.0..=1.0).contains(&positive));
    }

    #[test]
    fn test_naive_bayes_unknown_text_uses_prior() {
        let mut model = NaiveBayesBaseline::new();
        model.fit(&corpus()).unwrap();
        let score = model.score("xyz").unwrap();
        assert!((score - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_alpha_must_be_positive() {
        assert!(NaiveBayesBaseline::new().with_alpha(0.0).is_err());
        assert!(NaiveBayesBaseline::new().with_alpha(-1.0).is_err());
        assert!(NaiveBayesBaseline::new().with_alpha(f64::NAN).is_err());

        let mut model = NaiveBayesBaseline::new().with_alpha(0.5).unwrap();
        model.fit(&corpus()).unwrap();
        let score = model.score("股价创新高").unwrap();
        assert!(score.is_finite());
        assert!(score > 0.5);
    }

    #[test]
    fn test_fit_requires_both_labels() {
        let mut model = NaiveBayesBaseline::new();
        let only_positive = vec![TrainingSample::new("好", SampleLabel::Positive)];
        assert!(model.fit(&only_positive).is_err());
        assert!(!model.is_trained());
    }

    #[test]
    fn test_from_corpus_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = serde_json::to_string(&corpus()).unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let model = NaiveBayesBaseline::from_corpus_file(file.path()).unwrap();
        assert!(model.is_trained());
        assert!(model.vocab_size() > 0);
    }
}
