//! Textual integer parsing module
//!
//! This module turns user-supplied text (a command-line argument, a query parameter)
//! into a number the formatter accepts. The main entry point is the `parse_integer` function.

mod integer;

pub use integer::{IntegerLiteral, MAX_NUMBER, parse_integer, parse_integer_literal};
