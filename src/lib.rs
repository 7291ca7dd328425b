//! Spell numbers from 0 to 999,999 as French words, in standard or Belgian French.
//!
//! ```
//! use french_numerals::{Dialect, Formatter};
//!
//! let formatter = Formatter::new(Dialect::Standard).unwrap();
//! assert_eq!(formatter.format(999).unwrap(), "neuf-cent-quatre-vingt-dix-neuf");
//! ```

pub mod error;
pub mod formatter;
pub mod parser;
pub mod service;
pub mod types;
mod vocabulary;

// 导出主要 API
pub use error::{FormatError, Result};
pub use formatter::{Formatter, Translations, to_french_words, to_french_words_many};
pub use parser::parse_integer;
pub use types::*;
