use tracing::debug;
use winnow::ascii::{digit1, multispace0};
use winnow::combinator::{delimited, opt};
use winnow::token::one_of;
use winnow::{ModalResult, Parser};

use crate::error::{FormatError, Result};

/// Largest number the formatter can spell
pub const MAX_NUMBER: u32 = 999_999;

/// A syntactically valid integer, not yet checked against the supported range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegerLiteral<'s> {
    /// Whether a minus sign preceded the digits
    pub negative: bool,
    /// The digits as written, leading zeros included
    pub digits: &'s str,
}

impl IntegerLiteral<'_> {
    /// Check the literal against 0..=999_999 and return its value
    ///
    /// Literals too large for any machine integer are still reported as out of range,
    /// with their digits preserved in the error.
    pub fn value(&self) -> Result<u32> {
        let significant = self.digits.trim_start_matches('0');
        if significant.is_empty() {
            // "0", "000" and "-0" are all zero
            return Ok(0);
        }

        if self.negative {
            return Err(FormatError::out_of_range(format!("-{significant}")));
        }
        if significant.len() > 6 {
            return Err(FormatError::out_of_range(significant));
        }

        significant
            .parse::<u32>()
            .map_err(|_| FormatError::invalid_input(self.digits))
    }
}

/// Parse an optional sign
fn parse_sign(input: &mut &str) -> ModalResult<bool> {
    opt(one_of(['+', '-']))
        .map(|sign| sign == Some('-'))
        .parse_next(input)
}

/// Parse an integer literal, optionally surrounded by whitespace
pub fn parse_integer_literal<'s>(input: &mut &'s str) -> ModalResult<IntegerLiteral<'s>> {
    delimited(multispace0, (parse_sign, digit1), multispace0)
        .map(|(negative, digits)| IntegerLiteral { negative, digits })
        .parse_next(input)
}

/// Parse text into a number the formatter accepts
///
/// # Arguments
/// * `text` - The text to parse, e.g. a command-line argument
///
/// # Returns
/// * `Ok(u32)` - The number, within 0..=999_999
/// * `Err(FormatError::InvalidInput)` - The text is not an integer
/// * `Err(FormatError::OutOfRange)` - The text is an integer outside the supported range
///
/// # Examples
/// ```
/// use french_numerals::parser::parse_integer;
///
/// assert_eq!(parse_integer(" 2021 ").unwrap(), 2021);
/// assert!(parse_integer("12.5").is_err());
/// ```
pub fn parse_integer(text: &str) -> Result<u32> {
    let mut input = text;

    let literal = match parse_integer_literal(&mut input) {
        Ok(literal) if input.is_empty() => literal,
        Ok(_) => {
            debug!(input = text, remaining = input, "trailing characters after integer");
            return Err(FormatError::invalid_input(text));
        }
        Err(e) => {
            debug!(input = text, error = ?e, "not an integer literal");
            return Err(FormatError::invalid_input(text));
        }
    };

    literal.value()
}
