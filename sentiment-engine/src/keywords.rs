//! Domain keyword extraction

use crate::lexicon::Lexicon;
use std::cmp::Reverse;

/// Most keywords reported per text
pub const MAX_KEYWORDS: usize = 15;

/// Domain keywords found in `text`.
///
/// Positive and negative terms come first, in order of first occurrence
/// (longer term first on a tie). A term is skipped when every occurrence sits
/// inside a longer matched term, so "连续涨停" does not also list "涨停".
/// Industry keywords follow in declared order.
pub fn extract_keywords(text: &str, lexicon: &Lexicon) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let candidates: Vec<(usize, &str, Vec<(usize, usize)>)> = lexicon
        .positive()
        .iter()
        .chain(lexicon.negative().iter())
        .enumerate()
        .filter_map(|(idx, entry)| {
            let term = entry.term.as_str();
            if term.is_empty() {
                return None;
            }
            let spans: Vec<(usize, usize)> = text
                .match_indices(term)
                .map(|(start, m)| (start, start + m.len()))
                .collect();
            (!spans.is_empty()).then_some((idx, term, spans))
        })
        .collect();

    let covered = |term: &str, start: usize, end: usize| {
        candidates.iter().any(|(_, other, spans)| {
            other.len() > term.len() && spans.iter().any(|&(s, e)| s <= start && end <= e)
        })
    };

    let mut found: Vec<(usize, Reverse<usize>, usize, &str)> = candidates
        .iter()
        .filter_map(|(idx, term, spans)| {
            spans
                .iter()
                .find(|&&(start, end)| !covered(term, start, end))
                .map(|&(start, _)| (start, Reverse(term.len()), *idx, *term))
        })
        .collect();
    found.sort();

    let mut keywords: Vec<String> = found.into_iter().map(|(_, _, _, term)| term.to_string()).collect();

    for group in lexicon.industries() {
        for kw in &group.keywords {
            if text.contains(kw.as_str()) && !keywords.contains(kw) {
                keywords.push(kw.clone());
            }
        }
    }

    keywords.truncate(MAX_KEYWORDS);
    keywords
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_financial_keywords() {
        let lexicon = Lexicon::builtin();
        let keywords = extract_keywords("今日股市上涨，科技股表现强劲，利好消息不断", &lexicon);
        assert_eq!(keywords, vec!["上涨", "利好"]);
    }

    #[test]
    fn test_polarity_terms_before_industry_keywords() {
        let lexicon = Lexicon::builtin();
        let keywords = extract_keywords("芯片板块暴跌，半导体承压", &lexicon);
        assert_eq!(keywords, vec!["暴跌", "承压", "芯片", "半导体"]);
    }

    #[test]
    fn test_nested_term_folded_into_longer_match() {
        let lexicon = Lexicon::builtin();
        assert_eq!(extract_keywords("连续涨停", &lexicon), vec!["连续涨停"]);
    }

    #[test]
    fn test_nested_term_kept_when_it_also_stands_alone() {
        let lexicon = Lexicon::builtin();
        let keywords = extract_keywords("连续涨停后再度涨停", &lexicon);
        assert_eq!(keywords, vec!["连续涨停", "涨停"]);
    }

    #[test]
    fn test_keywords_truncated() {
        let lexicon = Lexicon::builtin();
        let text = "暴涨大涨飙升井喷创新高涨停强势突破反弹回升上涨增长利好看涨买入增持推荐盈利";
        let keywords = extract_keywords(text, &lexicon);
        assert_eq!(keywords.len(), MAX_KEYWORDS);
        assert_eq!(keywords[0], "暴涨");
    }

    #[test]
    fn test_empty_text() {
        let lexicon = Lexicon::builtin();
        assert!(extract_keywords("", &lexicon).is_empty());
    }
}
