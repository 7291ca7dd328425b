//! Type definitions shared by the formatter and its adapters
//!
//! This module defines the dialect selector and the batch evaluation mode.

use std::fmt;
use std::str::FromStr;

use crate::error::FormatError;

/// French dialect whose vocabulary is used to spell numbers
///
/// The two dialects only differ in the 70-99 range: standard French counts
/// by twenties there (soixante-dix, quatre-vingts), Belgian French has plain
/// tens words (septante, huitante, nonante).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dialect {
    /// Standard (European) French, token `fr`
    #[default]
    Standard,
    /// Belgian French, token `be`
    Belgian,
}

impl Dialect {
    /// Tokens accepted by [`Dialect::from_str`]
    pub const SUPPORTED: [&'static str; 2] = ["fr", "be"];

    /// Every dialect, in the order of [`Dialect::SUPPORTED`]
    pub const ALL: [Dialect; 2] = [Dialect::Standard, Dialect::Belgian];

    /// The short token naming this dialect
    pub fn token(self) -> &'static str {
        match self {
            Dialect::Standard => "fr",
            Dialect::Belgian => "be",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Dialect {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fr" => Ok(Dialect::Standard),
            "be" => Ok(Dialect::Belgian),
            other => Err(FormatError::UnsupportedDialect(other.to_string())),
        }
    }
}

/// How [`crate::Formatter::format_many`] produces its results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BatchMode {
    /// Spell each number when it is pulled from the result
    #[default]
    Lazy,
    /// Spell every number up front, failing on the first invalid one
    Eager,
}
