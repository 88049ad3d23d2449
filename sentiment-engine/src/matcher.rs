//! Lexicon term matching
//!
//! Every polarity term is counted as a verbatim substring of the text
//! (non-overlapping, left to right). This is a linear scan per term, which is
//! fine for a lexicon of a few hundred entries. A multi-pattern automaton would
//! give the same counts.

use crate::lexicon::{Lexicon, WordEntry};
use common::{MatchedTerm, Polarity, NEUTRAL_SCORE};
use std::cmp::Ordering;

/// Most salient matched terms kept per text
pub const MAX_MATCHED_TERMS: usize = 10;

/// Weighted polarity evidence found in a text
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchResult {
    /// Σ weight × occurrences over all matched terms
    pub total_weighted: f64,
    /// Σ occurrences over all matched terms
    pub total_count: usize,
    pub positive_count: usize,
    pub negative_count: usize,
    pub neutral_count: usize,
    /// Matched polarity terms by salience, descending, at most
    /// `MAX_MATCHED_TERMS`
    pub matched_terms: Vec<MatchedTerm>,
}

impl MatchResult {
    /// Raw lexicon average, `None` when nothing matched
    pub fn average(&self) -> Option<f64> {
        if self.total_count > 0 {
            Some(self.total_weighted / self.total_count as f64)
        } else {
            None
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total_count == 0
    }
}

/// Non-overlapping occurrences of `term` in `text`
pub fn count_occurrences(text: &str, term: &str) -> usize {
    if term.is_empty() {
        return 0;
    }
    text.matches(term).count()
}

/// Scan `text` against every polarity table of the lexicon
pub fn match_terms(text: &str, lexicon: &Lexicon) -> MatchResult {
    let mut result = MatchResult::default();
    let mut matched = Vec::new();

    let mut scan = |entries: &[WordEntry], polarity: Polarity, result: &mut MatchResult| {
        for entry in entries {
            let count = count_occurrences(text, &entry.term);
            if count == 0 {
                continue;
            }
            result.total_weighted += entry.weight * count as f64;
            result.total_count += count;
            match polarity {
                Polarity::Positive => result.positive_count += count,
                _ => result.negative_count += count,
            }
            matched.push(MatchedTerm {
                term: entry.term.clone(),
                weight: entry.weight,
                polarity,
                count,
            });
        }
    };

    scan(lexicon.positive(), Polarity::Positive, &mut result);
    scan(lexicon.negative(), Polarity::Negative, &mut result);

    for term in lexicon.neutral() {
        let count = count_occurrences(text, term);
        if count > 0 {
            result.total_weighted += NEUTRAL_SCORE * count as f64;
            result.total_count += count;
            result.neutral_count += count;
        }
    }

    // Stable sort: equal salience keeps declaration order
    matched.sort_by(|a, b| {
        b.salience()
            .partial_cmp(&a.salience())
            .unwrap_or(Ordering::Equal)
    });
    matched.truncate(MAX_MATCHED_TERMS);
    result.matched_terms = matched;

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_occurrences_non_overlapping() {
        assert_eq!(count_occurrences("上涨上涨上涨", "上涨"), 3);
        assert_eq!(count_occurrences("aaaa", "aa"), 2);
        assert_eq!(count_occurrences("abc", ""), 0);
        assert_eq!(count_occurrences("", "上涨"), 0);
    }

    #[test]
    fn test_surge_and_good_news() {
        let lexicon = Lexicon::builtin();
        let result = match_terms("股市大涨，利好消息不断", &lexicon);

        assert_eq!(result.total_count, 2);
        assert_eq!(result.positive_count, 2);
        assert_eq!(result.negative_count, 0);
        let avg = result.average().unwrap();
        assert!((avg - 0.825).abs() < 1e-9);
    }

    #[test]
    fn test_counts_repeated_terms() {
        let lexicon = Lexicon::builtin();
        let result = match_terms("下跌，下跌，再下跌", &lexicon);

        assert_eq!(result.negative_count, 3);
        assert_eq!(result.total_count, 3);
        assert_eq!(result.matched_terms.len(), 1);
        assert_eq!(result.matched_terms[0].count, 3);
        assert!((result.average().unwrap() - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_neutral_terms_count_toward_average() {
        let lexicon = Lexicon::builtin();
        let result = match_terms("指数横盘，资金观望", &lexicon);

        // 横盘 is neutral (0.5), 观望 is negative (0.45)
        assert_eq!(result.neutral_count, 1);
        assert_eq!(result.negative_count, 1);
        assert_eq!(result.total_count, 2);
        assert!((result.average().unwrap() - 0.475).abs() < 1e-9);
        // Neutral terms are not listed
        assert_eq!(result.matched_terms.len(), 1);
        assert_eq!(result.matched_terms[0].term, "观望");
    }

    #[test]
    fn test_no_matches() {
        let lexicon = Lexicon::builtin();
        let result = match_terms("今天天气很好", &lexicon);
        assert!(result.is_empty());
        assert_eq!(result.average(), None);
        assert!(result.matched_terms.is_empty());
    }

    #[test]
    fn test_matched_terms_ranked_by_salience() {
        let lexicon = Lexicon::builtin();
        let result = match_terms("市场震荡，随后暴跌，午后反弹", &lexicon);

        let terms: Vec<&str> = result.matched_terms.iter().map(|t| t.term.as_str()).collect();
        // 暴跌 (0.05) > 反弹 (0.7) > 震荡 (0.45)
        assert_eq!(terms, vec!["暴跌", "反弹", "震荡"]);
        assert_eq!(result.matched_terms[0].polarity, Polarity::Negative);
    }

    #[test]
    fn test_matched_terms_truncated_to_ten() {
        let lexicon = Lexicon::builtin();
        let text = "暴涨大涨飙升井喷创新高涨停强势突破反弹回升上涨增长利好看涨";
        let result = match_terms(text, &lexicon);

        assert!(result.positive_count > MAX_MATCHED_TERMS);
        assert_eq!(result.matched_terms.len(), MAX_MATCHED_TERMS);
        let saliences: Vec<f64> = result.matched_terms.iter().map(|t| t.salience()).collect();
        assert!(saliences.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_salience_ties_follow_file_order() {
        let lexicon = Lexicon::from_toml_str(
            r#"
version = "ties-1"

[positive]
zeta = 0.8
alpha = 0.8
"#,
        )
        .unwrap();

        let result = match_terms("zeta alpha", &lexicon);
        let terms: Vec<&str> = result.matched_terms.iter().map(|t| t.term.as_str()).collect();
        assert_eq!(terms, vec!["zeta", "alpha"]);
    }

    #[test]
    fn test_matching_is_deterministic() {
        let lexicon = Lexicon::builtin();
        let text = "暴涨后跳水，利好利空交织，大涨与暴跌并存";
        let a = match_terms(text, &lexicon);
        let b = match_terms(text, &lexicon);
        assert_eq!(a, b);
    }
}
