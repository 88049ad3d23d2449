//! Intensity and negation modifiers

use crate::lexicon::{Lexicon, Modifier};

/// Exponent applied to the composite intensity multiplier
pub const DAMPING_EXPONENT: f64 = 0.3;

/// Composite modifier effect for a text.
///
/// Starts at 1.0. Every modifier present in the text (presence, not count)
/// multiplies it by its multiplier. Every negation present flips the sign, so
/// an even number of distinct negation markers cancels out.
pub fn modifier_effect(text: &str, lexicon: &Lexicon) -> f64 {
    lexicon
        .modifiers()
        .iter()
        .filter(|entry| text.contains(entry.term.as_str()))
        .fold(1.0, |effect, entry| match entry.modifier {
            Modifier::Negation => -effect,
            Modifier::Scale(multiplier) => effect * multiplier,
        })
}

/// Apply a modifier effect to a raw lexicon average.
///
/// A negative effect inverts the average around the 0.5 midpoint. Otherwise
/// the average is scaled by `effect^0.3` and clamped to [0, 1].
pub fn apply_effect(average: f64, effect: f64) -> f64 {
    if effect < 0.0 {
        (1.0 - average).clamp(0.0, 1.0)
    } else {
        (average * effect.powf(DAMPING_EXPONENT)).clamp(0.0, 1.0)
    }
}
