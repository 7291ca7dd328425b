//! Spelling several numbers at once

use std::iter::Peekable;
use std::vec;

use tracing::debug;

use crate::error::{FormatError, Result};
use crate::types::BatchMode;

use super::Formatter;

/// Word forms produced by [`Formatter::format_many`], in input order
///
/// Iterating yields one `Result` per input number. An eager batch only ever
/// yields `Ok` items; a lazy batch stops after yielding its first error.
#[derive(Debug)]
pub struct Translations<I: Iterator<Item = i64>> {
    state: State<I>,
}

#[derive(Debug)]
enum State<I: Iterator<Item = i64>> {
    Eager(vec::IntoIter<String>),
    Lazy {
        formatter: Formatter,
        numbers: Peekable<I>,
        failed: bool,
    },
}

impl<I: Iterator<Item = i64>> Translations<I> {
    pub(super) fn new(formatter: Formatter, numbers: I, mode: BatchMode) -> Result<Self> {
        let mut numbers = numbers.peekable();
        if numbers.peek().is_none() {
            debug!("refusing to format an empty batch");
            return Err(FormatError::EmptyInput);
        }

        let state = match mode {
            BatchMode::Eager => {
                let words = numbers
                    .map(|n| formatter.format(n))
                    .collect::<Result<Vec<_>>>()?;
                State::Eager(words.into_iter())
            }
            BatchMode::Lazy => State::Lazy {
                formatter,
                numbers,
                failed: false,
            },
        };

        Ok(Translations { state })
    }

    /// Whether every number was already spelled when the batch was created
    pub fn is_eager(&self) -> bool {
        matches!(self.state, State::Eager(_))
    }

    /// Collect the remaining word forms, failing on the first invalid number
    pub fn into_vec(self) -> Result<Vec<String>> {
        self.collect()
    }
}

impl<I: Iterator<Item = i64>> Iterator for Translations<I> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.state {
            State::Eager(words) => words.next().map(Ok),
            State::Lazy {
                formatter,
                numbers,
                failed,
            } => {
                if *failed {
                    return None;
                }
                let result = formatter.format(numbers.next()?);
                *failed = result.is_err();
                Some(result)
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.state {
            State::Eager(words) => words.size_hint(),
            State::Lazy {
                numbers, failed, ..
            } => {
                if *failed {
                    (0, Some(0))
                } else {
                    (0, numbers.size_hint().1)
                }
            }
        }
    }
}
