use std::path::PathBuf;
use thiserror::Error;

/// Failures while loading or validating a lexicon table
#[derive(Error, Debug)]
pub enum LexiconError {
    #[error("Failed to read lexicon file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Lexicon TOML parsing error: {0}")]
    TomlParsing(#[from] toml::de::Error),

    #[error("Lexicon version must not be empty")]
    MissingVersion,

    #[error("Empty term in {0} table")]
    EmptyTerm(&'static str),

    #[error("Weight {weight} for term '{term}' is outside [0, 1]")]
    WeightOutOfRange { term: String, weight: f64 },

    #[error("Term '{0}' appears in more than one polarity table")]
    DuplicateTerm(String),

    #[error("Industry '{0}' has no keywords")]
    EmptyIndustry(String),

    #[error("Modifier '{term}' has invalid multiplier {value}")]
    InvalidModifier { term: String, value: f64 },
}

pub type Result<T> = std::result::Result<T, LexiconError>;
