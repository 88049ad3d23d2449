//! Engine configuration

use crate::analyzer::SentimentAnalyzer;
use crate::baseline::{BaselineProvider, NaiveBayesBaseline, NeutralBaseline};
use crate::lexicon::Lexicon;
use anyhow::{anyhow, Context};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, Level};

/// Overall engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// TOML lexicon replacing the built-in tables
    #[serde(default)]
    pub lexicon_path: Option<PathBuf>,

    /// Generic sentiment baseline settings
    #[serde(default)]
    pub baseline: BaselineConfig,

    /// Batch processing settings
    #[serde(default)]
    pub batch: BatchConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Which generic sentiment baseline to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaselineKind {
    Neutral,
    NaiveBayes,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaselineConfig {
    #[serde(default = "default_baseline_kind")]
    pub kind: BaselineKind,

    /// JSON training corpus, required for `naive_bayes`
    #[serde(default)]
    pub corpus_path: Option<PathBuf>,
}

impl Default for BaselineConfig {
    fn default() -> Self {
        Self {
            kind: BaselineKind::Neutral,
            corpus_path: None,
        }
    }
}

fn default_baseline_kind() -> BaselineKind {
    BaselineKind::Neutral
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Maximum number of news items scored at the same time
    #[serde(default = "default_max_concurrent_items")]
    pub max_concurrent_items: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            max_concurrent_items: 8,
        }
    }
}

fn default_max_concurrent_items() -> usize {
    8
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// trace, debug, info, warn or error
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl LoggingConfig {
    pub fn max_level(&self) -> anyhow::Result<Level> {
        self.level
            .parse::<Level>()
            .map_err(|_| anyhow!("Invalid log level '{}'", self.level))
    }
}

impl EngineConfig {
    /// Configured lexicon, or the shared built-in one
    pub fn load_lexicon(&self) -> anyhow::Result<Arc<Lexicon>> {
        match &self.lexicon_path {
            Some(path) => Ok(Arc::new(Lexicon::load(path)?)),
            None => Ok(Lexicon::builtin()),
        }
    }

    pub fn build_baseline(&self) -> anyhow::Result<Arc<dyn BaselineProvider>> {
        match self.baseline.kind {
            BaselineKind::Neutral => Ok(Arc::new(NeutralBaseline)),
            BaselineKind::NaiveBayes => {
                let path = self
                    .baseline
                    .corpus_path
                    .as_ref()
                    .ok_or_else(|| anyhow!("baseline.corpus_path is required for the naive_bayes baseline"))?;
                Ok(Arc::new(NaiveBayesBaseline::from_corpus_file(path)?))
            }
        }
    }

    pub fn build_analyzer(&self) -> anyhow::Result<SentimentAnalyzer> {
        let lexicon = self.load_lexicon()?;
        let baseline = self.build_baseline()?;

        info!(
            lexicon_version = %lexicon.version(),
            baseline = baseline.name(),
            "Sentiment analyzer ready"
        );

        Ok(SentimentAnalyzer::new(lexicon, baseline))
    }
}

/// Load configuration from TOML file
pub fn load_config(path: impl AsRef<Path>) -> anyhow::Result<EngineConfig> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config: EngineConfig = toml::from_str(&content)
        .with_context(|| format!("Invalid config {}", path.display()))?;
    Ok(config)
}

/// Save configuration to TOML file
pub fn save_config(config: &EngineConfig, path: impl AsRef<Path>) -> anyhow::Result<()> {
    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Create a default configuration file template
pub fn create_config_template(path: impl AsRef<Path>) -> anyhow::Result<()> {
    let template = "# News Sentiment Engine Configuration

# Optional TOML lexicon replacing the built-in financial lexicon
# lexicon_path = \"lexicon.toml\"

[baseline]
# Generic sentiment baseline: \"neutral\" or \"naive_bayes\"
kind = \"neutral\"

# JSON array of {\"text\": ..., \"label\": \"positive\" | \"negative\"}
# Required when kind = \"naive_bayes\"
# corpus_path = \"corpus.json\"

[batch]
# Maximum number of news items scored at the same time
max_concurrent_items = 8

[logging]
# trace, debug, info, warn or error
level = \"info\"
";

    std::fs::write(path, template)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.baseline.kind, BaselineKind::Neutral);
        assert_eq!(config.batch.max_concurrent_items, 8);
        assert_eq!(config.logging.max_level().unwrap(), Level::INFO);
        assert!(config.lexicon_path.is_none());
    }

    #[test]
    fn test_config_serialization() {
        let mut config = EngineConfig::default();
        config.batch.max_concurrent_items = 3;
        config.baseline.kind = BaselineKind::NaiveBayes;

        let serialized = toml::to_string(&config).unwrap();
        let deserialized: EngineConfig = toml::from_str(&serialized).unwrap();

        assert_eq!(deserialized.batch.max_concurrent_items, 3);
        assert_eq!(deserialized.baseline.kind, BaselineKind::NaiveBayes);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: EngineConfig = toml::from_str("[batch]\n").unwrap();
        assert_eq!(config.batch.max_concurrent_items, 8);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_template_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("engine.toml");

        create_config_template(&path).unwrap();
        let config = load_config(&path).unwrap();
        assert_eq!(config.baseline.kind, BaselineKind::Neutral);
        assert_eq!(config.batch.max_concurrent_items, 8);

        save_config(&config, &path).unwrap();
        let reloaded = load_config(&path).unwrap();
        assert_eq!(reloaded.logging.level, "info");
    }

    #[test]
    fn test_invalid_log_level() {
        let config = LoggingConfig {
            level: "loud".to_string(),
        };
        assert!(config.max_level().is_err());
    }

    #[test]
    fn test_naive_bayes_requires_corpus() {
        let mut config = EngineConfig::default();
        config.baseline.kind = BaselineKind::NaiveBayes;
        assert!(config.build_baseline().is_err());
    }

    #[test]
    fn test_build_default_analyzer() {
        let analyzer = EngineConfig::default().build_analyzer().unwrap();
        assert_eq!(analyzer.baseline_name(), "neutral");
        assert_eq!(analyzer.lexicon().version(), "builtin-1");
    }
}
