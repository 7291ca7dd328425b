//! Three-digit numbers (0-999)

use crate::vocabulary::Vocabulary;

use super::PLURAL_SUFFIX;
use super::tens::two_digits;

/// Spell a number below 1000
///
/// "cent" is pluralized only for two hundred and up with nothing after it,
/// e.g. 200 is "deux-cents" but 201 is "deux-cent-un".
pub(super) fn three_digits(vocabulary: &Vocabulary, n: u32) -> String {
    debug_assert!(n < 1000);
    if n < 100 {
        return two_digits(vocabulary, n);
    }

    let hundreds = n / 100;
    let remainder = n % 100;

    let mut words = if hundreds == 1 {
        vocabulary.hundred.clone()
    } else {
        format!(
            "{}-{}",
            vocabulary.units[hundreds as usize], vocabulary.hundred
        )
    };

    if remainder != 0 {
        words.push('-');
        words.push_str(&two_digits(vocabulary, remainder));
    } else if hundreds > 1 {
        words.push_str(PLURAL_SUFFIX);
    }

    words
}
