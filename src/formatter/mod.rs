//! Numeral formatting module
//!
//! This module spells integers from 0 to 999,999 as French words.
//! The main entry point is the [`Formatter`] type.

mod batch;
mod hundreds;
mod tens;

pub use batch::Translations;

use tracing::{debug, trace};

use crate::error::{FormatError, Result};
use crate::parser::{MAX_NUMBER, parse_integer};
use crate::types::{BatchMode, Dialect};
use crate::vocabulary::{Vocabulary, vocabulary_for};

use hundreds::three_digits;

/// Appended to "cent" and "mille" when they are multiplied and end the number
pub(crate) const PLURAL_SUFFIX: &str = "s";

/// Spells numbers in one French dialect
///
/// The dialect's tables are resolved when the formatter is built and are
/// read-only afterwards, so a formatter can be shared freely between threads.
///
/// # Examples
/// ```
/// use french_numerals::{Dialect, Formatter};
///
/// let standard = Formatter::new(Dialect::Standard).unwrap();
/// assert_eq!(standard.format(80).unwrap(), "quatre-vingts");
///
/// let belgian = Formatter::from_token("be").unwrap();
/// assert_eq!(belgian.format(80).unwrap(), "huitante");
/// ```
#[derive(Debug, Clone)]
pub struct Formatter {
    dialect: Dialect,
    vocabulary: &'static Vocabulary,
}

impl Formatter {
    /// Create a formatter for `dialect`
    pub fn new(dialect: Dialect) -> Result<Self> {
        let vocabulary = vocabulary_for(dialect)?;
        debug!(%dialect, "formatter ready");
        Ok(Formatter {
            dialect,
            vocabulary,
        })
    }

    /// Create a formatter for the default dialect, [`Dialect::Standard`]
    ///
    /// There is no `Default` impl because loading the tables can fail.
    pub fn standard() -> Result<Self> {
        Self::new(Dialect::default())
    }

    /// Create a formatter from a dialect token (`fr` or `be`)
    pub fn from_token(token: &str) -> Result<Self> {
        Self::new(token.parse()?)
    }

    /// The dialect this formatter spells in
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Spell `n` in words, joined with hyphens
    ///
    /// # Errors
    /// `FormatError::OutOfRange` if `n` is negative or not below 1,000,000.
    pub fn format(&self, n: i64) -> Result<String> {
        if !(0..=i64::from(MAX_NUMBER)).contains(&n) {
            debug!(number = n, "number out of supported range");
            return Err(FormatError::out_of_range(n));
        }
        Ok(self.spell(n as u32))
    }

    /// Parse `text` as an integer, then spell it
    ///
    /// # Errors
    /// `FormatError::InvalidInput` if `text` is not an integer,
    /// `FormatError::OutOfRange` if it is one outside 0..=999,999.
    pub fn format_str(&self, text: &str) -> Result<String> {
        let n = parse_integer(text)?;
        Ok(self.spell(n))
    }

    /// Spell every number of `numbers`, in order
    ///
    /// In [`BatchMode::Eager`] every number is spelled before returning and the first
    /// failure fails the whole call. In [`BatchMode::Lazy`] numbers are spelled as the
    /// result is iterated and a failure surfaces at its position.
    ///
    /// # Errors
    /// `FormatError::EmptyInput` if `numbers` yields nothing, in both modes.
    pub fn format_many<I>(&self, numbers: I, mode: BatchMode) -> Result<Translations<I::IntoIter>>
    where
        I: IntoIterator<Item = i64>,
    {
        Translations::new(self.clone(), numbers.into_iter(), mode)
    }

    fn spell(&self, n: u32) -> String {
        let vocabulary = self.vocabulary;
        let words = if n < 1000 {
            three_digits(vocabulary, n)
        } else {
            let thousands = n / 1000;
            let remainder = n % 1000;

            // "mille" never takes "un" in front of it
            let mut words = if thousands == 1 {
                vocabulary.thousand.clone()
            } else {
                format!("{}-{}", three_digits(vocabulary, thousands), vocabulary.thousand)
            };

            if remainder != 0 {
                words.push('-');
                words.push_str(&three_digits(vocabulary, remainder));
            } else if thousands > 1 {
                words.push_str(PLURAL_SUFFIX);
            }
            words
        };

        trace!(number = n, dialect = %self.dialect, %words, "spelled number");
        words
    }
}

/// Spell `number` in `dialect`
///
/// # Examples
/// ```
/// use french_numerals::{Dialect, to_french_words};
///
/// assert_eq!(to_french_words(2021, Dialect::Standard).unwrap(), "deux-mille-vingt-et-un");
/// ```
pub fn to_french_words(number: i64, dialect: Dialect) -> Result<String> {
    Formatter::new(dialect)?.format(number)
}

/// Spell every number of `numbers` in `dialect`
///
/// See [`Formatter::format_many`].
pub fn to_french_words_many<I>(
    numbers: I,
    dialect: Dialect,
    mode: BatchMode,
) -> Result<Translations<I::IntoIter>>
where
    I: IntoIterator<Item = i64>,
{
    Formatter::new(dialect)?.format_many(numbers, mode)
}
