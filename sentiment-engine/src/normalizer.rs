//! Text cleanup before lexicon matching

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref MARKUP_TAG: Regex = Regex::new(r"<[^>]+>").unwrap();
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
    // CJK ideographs, ASCII letters and digits, whitespace and sentence punctuation
    static ref DISALLOWED: Regex =
        Regex::new(r"[^\x{4e00}-\x{9fa5}a-zA-Z0-9\s.,!?。，！？]").unwrap();
}

/// Strip markup and noise characters, collapse whitespace and trim.
/// Empty input gives an empty string.
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let cleaned = MARKUP_TAG.replace_all(text, "");
    let cleaned = WHITESPACE_RUN.replace_all(&cleaned, " ");
    let cleaned = DISALLOWED.replace_all(&cleaned, "");
    cleaned.trim().to_string()
}

/// `normalize` for a value that may be absent
pub fn normalize_opt(text: Option<&str>) -> String {
    text.map(normalize).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_markup() {
        let cleaned = normalize("<p>测试  文本</p>");
        assert!(!cleaned.contains('<'));
        assert!(!cleaned.contains('>'));
        assert_eq!(cleaned, "测试 文本");
    }

    #[test]
    fn test_empty_and_absent() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \n\t "), "");
        assert_eq!(normalize_opt(None), "");
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(normalize("  股市\n\n上涨\t利好  "), "股市 上涨 利好");
    }

    #[test]
    fn test_keeps_allowed_punctuation() {
        assert_eq!(normalize("股市上涨！！！利好消息。"), "股市上涨！！！利好消息。");
        assert_eq!(normalize("AAPL up 5.2, wow!"), "AAPL up 5.2, wow!");
    }

    #[test]
    fn test_drops_noise_characters() {
        assert_eq!(normalize("涨幅%20@#$【重磅】"), "涨幅20重磅");
        assert_eq!(normalize("emoji 🚀 rocket"), "emoji  rocket");
    }
}
