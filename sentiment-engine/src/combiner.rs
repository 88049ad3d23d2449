//! Blend of the baseline score with the lexicon score
//!
//! Trust in the lexicon grows with the number of lexicon matches:
//!
//! | matches | baseline | lexicon |
//! |---------|----------|---------|
//! | 0       | 0.8      | 0.2 (neutral 0.5 stands in) |
//! | 1-2     | 0.5      | 0.5     |
//! | 3-5     | 0.3      | 0.7     |
//! | >5      | 0.2      | 0.8     |

use common::NEUTRAL_SCORE;

/// (baseline weight, lexicon weight) for a lexicon match count
pub fn blend_weights(word_count: usize) -> (f64, f64) {
    match word_count {
        0 => (0.8, 0.2),
        1..=2 => (0.5, 0.5),
        3..=5 => (0.3, 0.7),
        _ => (0.2, 0.8),
    }
}

/// Final unrounded score in [0, 1]
pub fn combine_scores(baseline: f64, lexicon_score: Option<f64>, word_count: usize) -> f64 {
    let (baseline_weight, lexicon_weight) = blend_weights(word_count);
    let lexicon = if word_count == 0 {
        NEUTRAL_SCORE
    } else {
        lexicon_score.unwrap_or(NEUTRAL_SCORE)
    };

    (baseline * baseline_weight + lexicon * lexicon_weight).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_tier_weights() {
        assert_eq!(blend_weights(0), (0.8, 0.2));
        assert_eq!(blend_weights(1), (0.5, 0.5));
        assert_eq!(blend_weights(2), (0.5, 0.5));
        assert_eq!(blend_weights(3), (0.3, 0.7));
        assert_eq!(blend_weights(5), (0.3, 0.7));
        assert_eq!(blend_weights(6), (0.2, 0.8));
        assert_eq!(blend_weights(100), (0.2, 0.8));
    }

    #[test]
    fn test_no_matches_uses_neutral_lexicon() {
        assert!(approx(combine_scores(0.9, None, 0), 0.9 * 0.8 + 0.1));
        // A stray lexicon score is ignored without evidence
        assert!(approx(combine_scores(0.9, Some(0.0), 0), 0.82));
    }

    #[test]
    fn test_two_matches_even_blend() {
        assert!(approx(combine_scores(0.6, Some(0.825), 2), 0.7125));
    }

    #[test]
    fn test_more_evidence_moves_toward_lexicon() {
        let baseline = 0.5;
        let lexicon = 0.7;
        let few = combine_scores(baseline, Some(lexicon), 1);
        let many = combine_scores(baseline, Some(lexicon), 6);
        assert!((many - lexicon).abs() < (few - lexicon).abs());
    }

    #[test]
    fn test_result_bounded() {
        for count in [0, 1, 3, 6] {
            for (b, l) in [(0.0, 0.0), (1.0, 1.0), (0.0, 1.0), (1.0, 0.0)] {
                let score = combine_scores(b, Some(l), count);
                assert!((0.0..=1.0).contains(&score));
            }
        }
    }
}
