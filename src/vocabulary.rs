//! Vocabulary tables for each dialect
//!
//! The words are embedded as a TOML document: a `[base]` table shared by all
//! dialects and one table per dialect token whose keys override the base.
//! The document is parsed once per process and never mutated afterwards.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use serde::Deserialize;
use tracing::debug;

use crate::error::{FormatError, Result};
use crate::types::Dialect;

const EMBEDDED_VOCABULARY: &str = include_str!("vocabulary/vocabulary.toml");

const UNIT_COUNT: usize = 10;
const TEEN_COUNT: usize = 7;
/// Tens table of a dialect that names every band up to 90
const FULL_TENS_COUNT: usize = 10;
/// Tens table of a dialect that stops at soixante and counts by twenties above it
const VIGESIMAL_TENS_COUNT: usize = 7;

/// Resolved, validated word tables of one dialect
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Vocabulary {
    /// Words for 0-9
    pub(crate) units: Vec<String>,
    /// Words for 10-16
    pub(crate) teens: Vec<String>,
    /// Words for each multiple of ten, indexed by the tens digit (index 0 unused)
    pub(crate) tens: Vec<String>,
    /// Irregular two-digit words checked before any composition
    pub(crate) special_tens: BTreeMap<u32, String>,
    /// Stem for eighty when the tens table stops at sixty
    pub(crate) score: Option<String>,
    pub(crate) hundred: String,
    pub(crate) thousand: String,
    /// Word joining a tens word and "un"
    pub(crate) conjunction: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawVocabulary {
    units: Option<Vec<String>>,
    teens: Option<Vec<String>>,
    tens: Option<Vec<String>>,
    score: Option<String>,
    special_tens: Option<Vec<SpecialTen>>,
    hundred: Option<String>,
    thousand: Option<String>,
    conjunction: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct SpecialTen {
    value: u32,
    word: String,
}

#[derive(Debug, Deserialize)]
struct VocabularyFile {
    #[serde(default)]
    base: RawVocabulary,
    #[serde(flatten)]
    dialects: BTreeMap<String, RawVocabulary>,
}

impl RawVocabulary {
    /// Apply the keys present in `patch` over `self`
    fn overlay(&self, patch: &RawVocabulary) -> RawVocabulary {
        RawVocabulary {
            units: patch.units.clone().or_else(|| self.units.clone()),
            teens: patch.teens.clone().or_else(|| self.teens.clone()),
            tens: patch.tens.clone().or_else(|| self.tens.clone()),
            score: patch.score.clone().or_else(|| self.score.clone()),
            special_tens: patch
                .special_tens
                .clone()
                .or_else(|| self.special_tens.clone()),
            hundred: patch.hundred.clone().or_else(|| self.hundred.clone()),
            thousand: patch.thousand.clone().or_else(|| self.thousand.clone()),
            conjunction: patch
                .conjunction
                .clone()
                .or_else(|| self.conjunction.clone()),
        }
    }
}

fn required<T>(value: Option<T>, key: &str, dialect: Dialect) -> Result<T> {
    value.ok_or_else(|| FormatError::Vocabulary(format!("[{dialect}] missing key '{key}'")))
}

fn check_words(words: &[String], key: &str, dialect: Dialect) -> Result<()> {
    match words.iter().position(|w| w.is_empty()) {
        Some(idx) => Err(FormatError::Vocabulary(format!(
            "[{dialect}] empty word at {key}[{idx}]"
        ))),
        None => Ok(()),
    }
}

impl Vocabulary {
    fn from_raw(raw: RawVocabulary, dialect: Dialect) -> Result<Self> {
        let units = required(raw.units, "units", dialect)?;
        let teens = required(raw.teens, "teens", dialect)?;
        let tens = required(raw.tens, "tens", dialect)?;
        let hundred = required(raw.hundred, "hundred", dialect)?;
        let thousand = required(raw.thousand, "thousand", dialect)?;
        let conjunction = required(raw.conjunction, "conjunction", dialect)?;
        let score = raw.score;

        if units.len() != UNIT_COUNT {
            return Err(FormatError::Vocabulary(format!(
                "[{dialect}] units must list {UNIT_COUNT} words, found {}",
                units.len()
            )));
        }
        if teens.len() != TEEN_COUNT {
            return Err(FormatError::Vocabulary(format!(
                "[{dialect}] teens must list {TEEN_COUNT} words, found {}",
                teens.len()
            )));
        }
        let tens_complete = tens.len() == FULL_TENS_COUNT
            || (tens.len() == VIGESIMAL_TENS_COUNT && score.is_some());
        if !tens_complete {
            return Err(FormatError::Vocabulary(format!(
                "[{dialect}] tens must list {FULL_TENS_COUNT} words, or {VIGESIMAL_TENS_COUNT} words and a score stem, found {}",
                tens.len()
            )));
        }

        check_words(&units, "units", dialect)?;
        check_words(&teens, "teens", dialect)?;
        // tens[0] is a placeholder for values below ten
        check_words(&tens[1..], "tens", dialect)?;
        for (key, word) in [
            ("hundred", &hundred),
            ("thousand", &thousand),
            ("conjunction", &conjunction),
        ] {
            if word.is_empty() {
                return Err(FormatError::Vocabulary(format!("[{dialect}] empty '{key}'")));
            }
        }
        if score.as_deref() == Some("") {
            return Err(FormatError::Vocabulary(format!("[{dialect}] empty 'score'")));
        }

        let mut special_tens = BTreeMap::new();
        for entry in raw.special_tens.unwrap_or_default() {
            if !(20..=99).contains(&entry.value) {
                return Err(FormatError::Vocabulary(format!(
                    "[{dialect}] special_tens value {} is not a two-digit number above 19",
                    entry.value
                )));
            }
            if entry.word.is_empty() {
                return Err(FormatError::Vocabulary(format!(
                    "[{dialect}] empty special_tens word for {}",
                    entry.value
                )));
            }
            if special_tens.insert(entry.value, entry.word).is_some() {
                return Err(FormatError::Vocabulary(format!(
                    "[{dialect}] duplicate special_tens value {}",
                    entry.value
                )));
            }
        }

        Ok(Vocabulary {
            units,
            teens,
            tens,
            special_tens,
            score,
            hundred,
            thousand,
            conjunction,
        })
    }
}

/// The tables of every supported dialect
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct VocabularyCatalog {
    standard: Vocabulary,
    belgian: Vocabulary,
}

impl VocabularyCatalog {
    /// Parse and validate a vocabulary document
    pub(crate) fn from_toml_str(toml_str: &str) -> Result<Self> {
        let file: VocabularyFile =
            toml::from_str(toml_str).map_err(|e| FormatError::Vocabulary(e.to_string()))?;

        let resolve = |dialect: Dialect| -> Result<Vocabulary> {
            let patch = file.dialects.get(dialect.token()).ok_or_else(|| {
                FormatError::Vocabulary(format!("missing [{}] table", dialect.token()))
            })?;
            Vocabulary::from_raw(file.base.overlay(patch), dialect)
        };

        Ok(VocabularyCatalog {
            standard: resolve(Dialect::Standard)?,
            belgian: resolve(Dialect::Belgian)?,
        })
    }

    pub(crate) fn get(&self, dialect: Dialect) -> &Vocabulary {
        match dialect {
            Dialect::Standard => &self.standard,
            Dialect::Belgian => &self.belgian,
        }
    }
}

// Global catalog, loaded on first use
static CATALOG: OnceLock<Result<VocabularyCatalog>> = OnceLock::new();

/// Get the embedded tables for `dialect`
pub(crate) fn vocabulary_for(dialect: Dialect) -> Result<&'static Vocabulary> {
    let catalog = CATALOG
        .get_or_init(|| {
            let catalog = VocabularyCatalog::from_toml_str(EMBEDDED_VOCABULARY);
            match &catalog {
                Ok(_) => debug!("loaded embedded vocabulary"),
                Err(e) => debug!(error = %e, "embedded vocabulary rejected"),
            }
            catalog
        })
        .as_ref()
        .map_err(|e| e.clone())?;
    Ok(catalog.get(dialect))
}
