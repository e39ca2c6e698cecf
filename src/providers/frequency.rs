//! In-memory Zipf frequency table.
//!
//! Tables load from a tab-separated `word<TAB>zipf` listing. A compact table of
//! common English words is bundled; supply a fuller listing (for example one
//! exported from a wordfreq dump) for realistic rarity estimates.

use super::WordFrequency;
use std::collections::HashMap;
use std::sync::LazyLock;
use thiserror::Error;

/// Frequency assumed for words the lexicon cannot rate.
pub const RARE_WORD_FLOOR: f64 = 1.0;

const BUNDLED_ENGLISH: &str = include_str!("../../data/en_zipf.tsv");

static ENGLISH: LazyLock<FrequencyTable> = LazyLock::new(|| {
    #[expect(clippy::expect_used, reason = "bundled table is constant and valid")]
    FrequencyTable::from_tsv("en", BUNDLED_ENGLISH).expect("valid bundled table")
});

/// Errors returned by [`FrequencyTable`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FrequencyError {
    /// The table has no entry for the word.
    #[error("no frequency recorded for `{word}`")]
    UnknownWord { word: String },
    /// The table covers a different language.
    #[error("table covers `{table}` but `{requested}` was requested")]
    UnsupportedLanguage { table: String, requested: String },
    /// A listing line did not contain exactly a word and a value.
    #[error("line {line}: expected `word<TAB>zipf`")]
    MalformedRow { line: usize },
    /// A listing value was not a finite number.
    #[error("line {line}: `{value}` is not a finite zipf frequency")]
    InvalidFrequency { line: usize, value: String },
}

/// Word frequencies for a single language.
///
/// # Examples
///
/// ```
/// use cognitive_load::providers::{FrequencyTable, WordFrequency};
///
/// let table = FrequencyTable::new("en").with_entry("cat", 4.8);
/// assert_eq!(table.zipf_frequency("cat", "en"), Ok(4.8));
/// assert!(table.zipf_frequency("ocelot", "en").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequencyTable {
    lang: String,
    entries: HashMap<String, f64>,
}

impl FrequencyTable {
    /// Create an empty table for `lang`.
    #[must_use]
    pub fn new(lang: impl Into<String>) -> Self {
        Self {
            lang: lang.into(),
            entries: HashMap::new(),
        }
    }

    /// The bundled table of common English words.
    #[must_use]
    pub fn english() -> Self {
        ENGLISH.clone()
    }

    /// Parse a `word<TAB>zipf` listing. Blank lines and `#` comments are
    /// skipped; words are stored lowercased.
    ///
    /// # Errors
    ///
    /// Returns [`FrequencyError::MalformedRow`] or
    /// [`FrequencyError::InvalidFrequency`] naming the first bad line.
    pub fn from_tsv(lang: impl Into<String>, listing: &str) -> Result<Self, FrequencyError> {
        let mut table = Self::new(lang);
        for (idx, raw) in listing.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut fields = line.split_whitespace();
            let (Some(word), Some(value), None) = (fields.next(), fields.next(), fields.next())
            else {
                return Err(FrequencyError::MalformedRow { line: idx + 1 });
            };
            let zipf = value
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| FrequencyError::InvalidFrequency {
                    line: idx + 1,
                    value: value.to_owned(),
                })?;
            table.insert(word, zipf);
        }
        Ok(table)
    }

    /// Add or replace an entry.
    #[must_use]
    pub fn with_entry(mut self, word: &str, zipf: f64) -> Self {
        self.insert(word, zipf);
        self
    }

    /// Add or replace an entry in place.
    pub fn insert(&mut self, word: &str, zipf: f64) {
        self.entries.insert(word.to_lowercase(), zipf);
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.lang
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl WordFrequency for FrequencyTable {
    type Error = FrequencyError;

    fn zipf_frequency(&self, word: &str, lang: &str) -> Result<f64, Self::Error> {
        if lang != self.lang {
            return Err(FrequencyError::UnsupportedLanguage {
                table: self.lang.clone(),
                requested: lang.to_owned(),
            });
        }
        self.entries
            .get(word)
            .copied()
            .ok_or_else(|| FrequencyError::UnknownWord {
                word: word.to_owned(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn bundled_table_parses() {
        let table = FrequencyTable::english();
        assert!(table.len() > 100);
        assert_eq!(table.language(), "en");
        assert!(table.zipf_frequency("the", "en").is_ok());
    }

    #[rstest]
    #[case("# comment\n\ncat\t4.8\n", Ok(1))]
    #[case("cat 4.8 extra\n", Err(FrequencyError::MalformedRow { line: 1 }))]
    #[case("cat\n", Err(FrequencyError::MalformedRow { line: 1 }))]
    #[case(
        "dog\t5.0\ncat\tinf\n",
        Err(FrequencyError::InvalidFrequency { line: 2, value: "inf".into() })
    )]
    fn parses_listings(#[case] listing: &str, #[case] expected: Result<usize, FrequencyError>) {
        let parsed = FrequencyTable::from_tsv("en", listing).map(|t| t.len());
        assert_eq!(parsed, expected);
    }

    #[rstest]
    fn stores_words_lowercased() {
        let table = FrequencyTable::new("en").with_entry("Paris", 5.1);
        assert_eq!(table.zipf_frequency("paris", "en"), Ok(5.1));
    }

    #[rstest]
    fn rejects_other_languages() {
        let table = FrequencyTable::new("en").with_entry("chat", 4.0);
        assert_eq!(
            table.zipf_frequency("chat", "fr"),
            Err(FrequencyError::UnsupportedLanguage {
                table: "en".into(),
                requested: "fr".into(),
            })
        );
    }
}
