//! Two-digit numbers (0-99)

use crate::vocabulary::Vocabulary;

use super::PLURAL_SUFFIX;

/// Spell a number below 100
pub(super) fn two_digits(vocabulary: &Vocabulary, n: u32) -> String {
    debug_assert!(n < 100);
    let idx = n as usize;

    if n < 10 {
        return vocabulary.units[idx].clone();
    }
    if n < 17 {
        return vocabulary.teens[idx - 10].clone();
    }
    if n < 20 {
        return format!("{}-{}", vocabulary.teens[0], vocabulary.units[idx - 10]);
    }

    // Irregular words win over every compositional rule
    if let Some(word) = vocabulary.special_tens.get(&n) {
        return word.clone();
    }

    if idx / 10 < vocabulary.tens.len() {
        return compose_tens(vocabulary, n);
    }

    vigesimal(vocabulary, n)
}

/// Tens word, then "et-un" or a hyphenated unit word
fn compose_tens(vocabulary: &Vocabulary, n: u32) -> String {
    let tens = &vocabulary.tens[(n / 10) as usize];
    match n % 10 {
        0 => tens.clone(),
        1 => format!("{tens}-{}-{}", vocabulary.conjunction, vocabulary.units[1]),
        unit => format!("{tens}-{}", vocabulary.units[unit as usize]),
    }
}

/// 70-99 for dialects that count by twenties above sixty
///
/// Only reached when the tens table stops at soixante, in which case the
/// vocabulary is guaranteed to carry a score stem.
fn vigesimal(vocabulary: &Vocabulary, n: u32) -> String {
    let score = vocabulary.score.as_deref().unwrap_or_default();
    match n {
        70..=79 => format!("{}-{}", vocabulary.tens[6], two_digits(vocabulary, n - 60)),
        80 => format!("{score}{PLURAL_SUFFIX}"),
        _ => format!("{score}-{}", two_digits(vocabulary, n - 80)),
    }
}
