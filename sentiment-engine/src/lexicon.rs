//! Financial lexicon
//!
//! The lexicon is built once, either from the built-in tables or from a TOML
//! file, and is shared read-only (`Arc<Lexicon>`) by every analysis call.
//! There is no mutation API after construction.

use crate::builtin;
use crate::error::{LexiconError, Result};
use common::{Polarity, NEUTRAL_SCORE};
use lazy_static::lazy_static;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Multiplier value reserved to mark a negation modifier
pub const NEGATION_SENTINEL: f64 = -1.0;

lazy_static! {
    static ref BUILTIN_LEXICON: Arc<Lexicon> = Arc::new(Lexicon::from_builtin_tables());
}

/// A polarity term and its weight
#[derive(Debug, Clone, PartialEq)]
pub struct WordEntry {
    pub term: String,
    pub weight: f64,
}

/// How a modifier term adjusts the lexicon score
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Modifier {
    Scale(f64),
    Negation,
}

impl Modifier {
    pub fn from_multiplier(value: f64) -> Self {
        if value == NEGATION_SENTINEL {
            Modifier::Negation
        } else {
            Modifier::Scale(value)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModifierEntry {
    pub term: String,
    pub modifier: Modifier,
}

/// Industry name and its keyword group, in declared order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndustryGroup {
    pub name: String,
    pub keywords: Vec<String>,
}

/// Market index name and the market it belongs to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketIndicator {
    pub index: String,
    pub market: String,
}

/// `term = value` table kept in the order the entries were written
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermTable(Vec<(String, f64)>);

impl FromIterator<(String, f64)> for TermTable {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for TermTable {
    type Item = (String, f64);
    type IntoIter = std::vec::IntoIter<(String, f64)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl Serialize for TermTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(term, value)| (term, value)))
    }
}

impl<'de> Deserialize<'de> for TermTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct TermTableVisitor;

        impl<'de> Visitor<'de> for TermTableVisitor {
            type Value = TermTable;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a table of term = number entries")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<TermTable, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((term, value)) = map.next_entry::<String, f64>()? {
                    entries.push((term, value));
                }
                Ok(TermTable(entries))
            }
        }

        deserializer.deserialize_map(TermTableVisitor)
    }
}

/// On-disk lexicon schema. Every table keeps the file's declaration order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconTable {
    pub version: String,
    #[serde(default)]
    pub positive: TermTable,
    #[serde(default)]
    pub negative: TermTable,
    #[serde(default)]
    pub neutral: Vec<String>,
    #[serde(default)]
    pub industries: Vec<IndustryGroup>,
    #[serde(default)]
    pub modifiers: TermTable,
    #[serde(default)]
    pub markets: Vec<MarketIndicator>,
}

/// Immutable financial sentiment dictionary
#[derive(Debug, Clone)]
pub struct Lexicon {
    version: String,
    positive: Vec<WordEntry>,
    negative: Vec<WordEntry>,
    neutral: Vec<String>,
    industries: Vec<IndustryGroup>,
    modifiers: Vec<ModifierEntry>,
    markets: Vec<MarketIndicator>,
    lookup: HashMap<String, (f64, Polarity)>,
}

impl Lexicon {
    /// Shared handle to the built-in lexicon
    pub fn builtin() -> Arc<Lexicon> {
        Arc::clone(&BUILTIN_LEXICON)
    }

    fn from_builtin_tables() -> Self {
        let entries = |table: &[(&str, f64)]| {
            table
                .iter()
                .map(|(term, weight)| WordEntry {
                    term: term.to_string(),
                    weight: *weight,
                })
                .collect::<Vec<_>>()
        };

        Self::assemble(
            builtin::VERSION.to_string(),
            entries(builtin::POSITIVE_TERMS),
            entries(builtin::NEGATIVE_TERMS),
            builtin::NEUTRAL_TERMS.iter().map(|t| t.to_string()).collect(),
            builtin::INDUSTRIES
                .iter()
                .map(|(name, keywords)| IndustryGroup {
                    name: name.to_string(),
                    keywords: keywords.iter().map(|k| k.to_string()).collect(),
                })
                .collect(),
            builtin::MODIFIERS
                .iter()
                .map(|(term, value)| ModifierEntry {
                    term: term.to_string(),
                    modifier: Modifier::from_multiplier(*value),
                })
                .collect(),
            builtin::MARKET_INDICATORS
                .iter()
                .map(|(index, market)| MarketIndicator {
                    index: index.to_string(),
                    market: market.to_string(),
                })
                .collect(),
        )
    }

    /// Build and validate a lexicon from a parsed table
    pub fn from_table(table: LexiconTable) -> Result<Self> {
        let into_entries = |map: TermTable| {
            map.into_iter()
                .map(|(term, weight)| WordEntry { term, weight })
                .collect::<Vec<_>>()
        };

        let lexicon = Self::assemble(
            table.version,
            into_entries(table.positive),
            into_entries(table.negative),
            table.neutral,
            table.industries,
            table
                .modifiers
                .into_iter()
                .map(|(term, value)| ModifierEntry {
                    term,
                    modifier: Modifier::from_multiplier(value),
                })
                .collect(),
            table.markets,
        );
        lexicon.validate()?;
        Ok(lexicon)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let table: LexiconTable = toml::from_str(content)?;
        Self::from_table(table)
    }

    /// Load a lexicon table from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| LexiconError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let lexicon = Self::from_toml_str(&content)?;

        info!(
            path = %path.display(),
            version = %lexicon.version,
            terms = lexicon.term_count(),
            "Lexicon loaded"
        );

        Ok(lexicon)
    }

    fn assemble(
        version: String,
        positive: Vec<WordEntry>,
        negative: Vec<WordEntry>,
        neutral: Vec<String>,
        industries: Vec<IndustryGroup>,
        modifiers: Vec<ModifierEntry>,
        markets: Vec<MarketIndicator>,
    ) -> Self {
        let mut lookup = HashMap::new();
        for entry in &positive {
            lookup.insert(entry.term.clone(), (entry.weight, Polarity::Positive));
        }
        for entry in &negative {
            lookup.insert(entry.term.clone(), (entry.weight, Polarity::Negative));
        }
        for term in &neutral {
            lookup.insert(term.clone(), (NEUTRAL_SCORE, Polarity::Neutral));
        }

        Self {
            version,
            positive,
            negative,
            neutral,
            industries,
            modifiers,
            markets,
            lookup,
        }
    }

    /// Check the table invariants: weights in [0, 1], non-empty terms,
    /// disjoint polarity tables, non-empty industry groups and usable
    /// modifier multipliers.
    pub fn validate(&self) -> Result<()> {
        if self.version.trim().is_empty() {
            return Err(LexiconError::MissingVersion);
        }

        let mut seen: HashSet<&str> = HashSet::new();
        let tables: [(&'static str, Vec<(&str, f64)>); 3] = [
            ("positive", self.positive.iter().map(|e| (e.term.as_str(), e.weight)).collect()),
            ("negative", self.negative.iter().map(|e| (e.term.as_str(), e.weight)).collect()),
            ("neutral", self.neutral.iter().map(|t| (t.as_str(), NEUTRAL_SCORE)).collect()),
        ];

        for (table, entries) in &tables {
            for (term, weight) in entries {
                if term.is_empty() {
                    return Err(LexiconError::EmptyTerm(*table));
                }
                if !(0.0..=1.0).contains(weight) {
                    return Err(LexiconError::WeightOutOfRange {
                        term: term.to_string(),
                        weight: *weight,
                    });
                }
                if !seen.insert(*term) {
                    return Err(LexiconError::DuplicateTerm(term.to_string()));
                }
            }
        }

        for group in &self.industries {
            if group.keywords.is_empty() {
                return Err(LexiconError::EmptyIndustry(group.name.clone()));
            }
            if group.keywords.iter().any(|k| k.is_empty()) {
                return Err(LexiconError::EmptyTerm("industries"));
            }
        }

        for entry in &self.modifiers {
            if entry.term.is_empty() {
                return Err(LexiconError::EmptyTerm("modifiers"));
            }
            if let Modifier::Scale(value) = entry.modifier {
                if !value.is_finite() || value <= 0.0 {
                    return Err(LexiconError::InvalidModifier {
                        term: entry.term.clone(),
                        value,
                    });
                }
            }
        }

        if self.markets.iter().any(|m| m.index.is_empty()) {
            return Err(LexiconError::EmptyTerm("markets"));
        }

        Ok(())
    }

    /// Weight and polarity of a single term; unknown terms are neutral
    pub fn word_sentiment(&self, term: &str) -> (f64, Polarity) {
        self.lookup
            .get(term)
            .copied()
            .unwrap_or((NEUTRAL_SCORE, Polarity::Unknown))
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn positive(&self) -> &[WordEntry] {
        &self.positive
    }

    pub fn negative(&self) -> &[WordEntry] {
        &self.negative
    }

    pub fn neutral(&self) -> &[String] {
        &self.neutral
    }

    pub fn industries(&self) -> &[IndustryGroup] {
        &self.industries
    }

    pub fn modifiers(&self) -> &[ModifierEntry] {
        &self.modifiers
    }

    pub fn markets(&self) -> &[MarketIndicator] {
        &self.markets
    }

    /// Number of polarity terms (positive, negative and neutral)
    pub fn term_count(&self) -> usize {
        self.positive.len() + self.negative.len() + self.neutral.len()
    }
}
