//! Industry and market tagging

use crate::lexicon::Lexicon;

/// Industries whose keyword group appears in the text.
///
/// Output follows the lexicon's declared industry order, never match position.
pub fn detect_industries(text: &str, lexicon: &Lexicon) -> Vec<String> {
    lexicon
        .industries()
        .iter()
        .filter(|group| group.keywords.iter().any(|kw| text.contains(kw.as_str())))
        .map(|group| group.name.clone())
        .collect()
}

/// Markets whose index names appear in the text, deduplicated, first-seen
/// declared order.
pub fn detect_markets(text: &str, lexicon: &Lexicon) -> Vec<String> {
    let mut markets: Vec<String> = Vec::new();
    for indicator in lexicon.markets() {
        if text.contains(indicator.index.as_str()) && !markets.contains(&indicator.market) {
            markets.push(indicator.market.clone());
        }
    }
    markets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_technology_only() {
        let lexicon = Lexicon::builtin();
        assert_eq!(detect_industries("芯片板块午后拉升", &lexicon), vec!["technology"]);
    }

    #[test]
    fn test_declared_order_not_position() {
        let lexicon = Lexicon::builtin();
        // Banks are mentioned first, chips second; technology is declared first
        let industries = detect_industries("银行股走强，芯片股跟涨", &lexicon);
        assert_eq!(industries, vec!["technology", "finance"]);
    }

    #[test]
    fn test_industry_reported_once() {
        let lexicon = Lexicon::builtin();
        let industries = detect_industries("芯片、半导体与人工智能齐涨", &lexicon);
        assert_eq!(industries, vec!["technology"]);
    }

    #[test]
    fn test_new_energy() {
        let lexicon = Lexicon::builtin();
        let industries = detect_industries("光伏和锂电池概念股大涨", &lexicon);
        assert!(industries.contains(&"new_energy".to_string()));
    }

    #[test]
    fn test_no_industry() {
        let lexicon = Lexicon::builtin();
        assert!(detect_industries("", &lexicon).is_empty());
        assert!(detect_industries("今日市场平稳", &lexicon).is_empty());
    }

    #[test]
    fn test_detect_markets() {
        let lexicon = Lexicon::builtin();
        let markets = detect_markets("纳斯达克收涨，上证指数与深证成指同步走高", &lexicon);
        assert_eq!(markets, vec!["A-share", "US"]);
        assert!(detect_markets("没有提到指数", &lexicon).is_empty());
    }
}
