//! Average sentence length readability metric.

use super::TextProcessor;
use crate::features::text::split_sentences;
use thiserror::Error;

/// Errors returned by [`SentenceLength`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReadabilityError {
    /// No sentence could be found in the input.
    #[error("text contains no sentences")]
    NoSentences,
}

/// Words per sentence, counting whitespace-separated lexicon items.
///
/// A lexicon item is any whitespace-separated chunk holding at least one
/// alphanumeric character, so stray punctuation does not inflate the count.
///
/// # Examples
///
/// ```
/// use cognitive_load::providers::{SentenceLength, TextProcessor};
///
/// let asl = SentenceLength.process("One two three. Four five.").unwrap();
/// assert!((asl - 2.5).abs() < 1e-9);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct SentenceLength;

impl TextProcessor for SentenceLength {
    type Output = f64;
    type Error = ReadabilityError;

    fn process(&self, input: &str) -> Result<Self::Output, Self::Error> {
        let sentences = split_sentences(input).len();
        if sentences == 0 {
            return Err(ReadabilityError::NoSentences);
        }
        let lexicon = input
            .split_whitespace()
            .filter(|chunk| chunk.chars().any(char::is_alphanumeric))
            .count();
        #[expect(clippy::cast_precision_loss, reason = "counts within f64 range")]
        #[expect(clippy::float_arithmetic, reason = "mean words per sentence")]
        Ok(lexicon as f64 / sentences as f64)
    }
}
