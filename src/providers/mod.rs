//! Collaborator interfaces consumed by the scoring engine.
//!
//! The engine treats the parser, the word-frequency source and the
//! readability metric as black boxes behind these traits. Lightweight default
//! implementations live in the submodules so the crate works end to end
//! without external services.

use crate::document::ParsedDocument;

pub mod frequency;
pub mod parser;
pub mod readability;

pub use frequency::{FrequencyError, FrequencyTable, RARE_WORD_FLOOR};
pub use parser::{HeuristicParser, MAX_INPUT_CHARS, ParseError};
pub use readability::{ReadabilityError, SentenceLength};

/// Processes text to produce a structured, thread-safe output.
///
/// Parsers and readability metrics both implement this trait; the aliases
/// below name the concrete shapes the engine expects.
pub trait TextProcessor {
    /// Structured result returned by the processor.
    ///
    /// Outputs are `Send + Sync + 'static` so a handle built once at start-up
    /// can serve scoring calls on any thread.
    type Output: Send + Sync + 'static;
    /// Error type returned when processing fails.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Process the supplied text.
    ///
    /// # Errors
    ///
    /// Returns an error if processing fails.
    fn process(&self, input: &str) -> Result<Self::Output, Self::Error>;
}

/// Looks up how common a word is in a reference corpus.
///
/// Frequencies use the Zipf scale: the base-10 logarithm of occurrences per
/// billion words, so everyday words sit around 5–7 and rare words below 3.
pub trait WordFrequency {
    /// Error returned for unknown words or unsupported languages.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Zipf frequency of an already lowercased `word` in language `lang`.
    ///
    /// # Errors
    ///
    /// Returns an error when no frequency is known for the word.
    fn zipf_frequency(&self, word: &str, lang: &str) -> Result<f64, Self::Error>;
}

/// Splits text into sentences, tokens and noun chunks.
pub type DocumentParser<E> =
    dyn TextProcessor<Output = ParsedDocument, Error = E> + Send + Sync + 'static;

/// Estimates the average sentence length of a text.
pub type ReadabilityMetric<E> = dyn TextProcessor<Output = f64, Error = E> + Send + Sync + 'static;
