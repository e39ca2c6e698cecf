//! Vocabulary statistics: word frequency, rarity and nominalisation.

use super::text::{ratio, tokenize_words};
use crate::providers::{RARE_WORD_FLOOR, WordFrequency};

/// Default Zipf threshold below which a word counts as rare.
pub const DEFAULT_RARE_THRESHOLD: f64 = 4.5;

const NOMINAL_SUFFIXES: &[&str] = &["tion", "ment", "ness", "ity", "ization"];

/// Frequency summary of a word list.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LexicalProfile {
    pub word_count: usize,
    pub avg_zipf: f64,
    pub rare_ratio: f64,
}

impl LexicalProfile {
    /// Look every word up once and summarise the frequencies.
    ///
    /// Unknown words and non-finite frequencies take [`RARE_WORD_FLOOR`].
    #[must_use]
    pub fn measure<L: WordFrequency + ?Sized>(
        words: &[&str],
        lexicon: &L,
        lang: &str,
        rare_threshold: f64,
    ) -> Self {
        let freqs: Vec<f64> = words.iter().map(|w| zipf_or_floor(lexicon, w, lang)).collect();
        if freqs.is_empty() {
            return Self::default();
        }
        let rare = freqs.iter().filter(|&&f| f < rare_threshold).count();
        #[expect(clippy::cast_precision_loss, reason = "word count within f64 range")]
        #[expect(clippy::float_arithmetic, reason = "arithmetic mean")]
        let avg_zipf = freqs.iter().sum::<f64>() / freqs.len() as f64;
        Self {
            word_count: freqs.len(),
            avg_zipf,
            rare_ratio: ratio(rare, freqs.len()),
        }
    }
}

/// Zipf frequency of `word` lowercased, or the rare-word floor.
#[must_use]
pub fn zipf_or_floor<L: WordFrequency + ?Sized>(lexicon: &L, word: &str, lang: &str) -> f64 {
    lexicon
        .zipf_frequency(&word.to_lowercase(), lang)
        .ok()
        .filter(|f| f.is_finite())
        .unwrap_or(RARE_WORD_FLOOR)
}

/// Mean Zipf frequency of the words in `text`; `0.0` without words.
///
/// # Examples
///
/// ```
/// use cognitive_load::features::lexical::average_word_zipf;
/// use cognitive_load::providers::FrequencyTable;
///
/// let table = FrequencyTable::new("en").with_entry("cat", 5.0);
/// // "zyx" is unknown and counts as 1.0.
/// assert_eq!(average_word_zipf("Cat zyx", &table, "en"), 3.0);
/// ```
#[must_use]
pub fn average_word_zipf<L: WordFrequency + ?Sized>(text: &str, lexicon: &L, lang: &str) -> f64 {
    LexicalProfile::measure(&tokenize_words(text), lexicon, lang, DEFAULT_RARE_THRESHOLD).avg_zipf
}

/// Fraction of words in `text` with Zipf frequency strictly below
/// `threshold`; `0.0` without words.
#[must_use]
pub fn rare_word_ratio<L: WordFrequency + ?Sized>(
    text: &str,
    lexicon: &L,
    lang: &str,
    threshold: f64,
) -> f64 {
    LexicalProfile::measure(&tokenize_words(text), lexicon, lang, threshold).rare_ratio
}

/// Whether `word` ends in a nominalising suffix, ignoring case.
#[must_use]
pub fn is_nominalization(word: &str) -> bool {
    let lower = word.to_ascii_lowercase();
    NOMINAL_SUFFIXES.iter().any(|suffix| lower.ends_with(suffix))
}

/// Fraction of words in `text` that look like nominalisations.
#[must_use]
pub fn nominalization_ratio(text: &str) -> f64 {
    let words = tokenize_words(text);
    ratio(words.iter().filter(|w| is_nominalization(w)).count(), words.len())
}
