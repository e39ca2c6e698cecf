//! Cognitive load scoring engine.
//!
//! Combines the intrinsic, extraneous and germane components into the
//! cognitive load index. The engine owns its word-frequency source and
//! readability metric but never the parser: callers build the parser once and
//! pass it by reference, or hand in documents they parsed themselves. Scoring
//! is a pure function of the document and the text; missing signals degrade
//! to documented defaults and never fail.

use crate::{
    api::{CognitiveLoadResult, ComponentScore, Label},
    components::{ExtraneousFeatures, GermaneFeatures, IntrinsicFeatures},
    config::{BlendWeights, ConfigError, ScoringConfig},
    document::ParsedDocument,
    normalise::round_to,
    providers::{FrequencyTable, SentenceLength, TextProcessor, WordFrequency},
};
use std::sync::LazyLock;
use thiserror::Error;
use tracing::debug;

static DEFAULT_ENGINE: LazyLock<CognitiveLoadEngine> = LazyLock::new(CognitiveLoadEngine::new);

/// Errors returned by [`CognitiveLoadEngine::score_text`].
#[derive(Debug, Error)]
pub enum CognitiveLoadError<E>
where
    E: std::error::Error + 'static,
{
    /// The parser rejected the text.
    #[error("failed to parse text: {0}")]
    Parse(#[source] E),
}

/// Scorer parameterised over its word-frequency source and readability
/// metric.
///
/// # Examples
///
/// ```
/// use cognitive_load::{CognitiveLoadEngine, HeuristicParser, Label};
///
/// let engine = CognitiveLoadEngine::new();
/// let parser = HeuristicParser::default();
/// let result = engine.score_text(&parser, "").expect("empty text parses");
/// assert_eq!(result.cli, 0.5);
/// assert_eq!(result.label, Label::Medium);
/// ```
#[derive(Debug, Clone)]
pub struct CognitiveLoadEngine<L = FrequencyTable, R = SentenceLength> {
    lexicon: L,
    readability: R,
    config: ScoringConfig,
}

impl Default for CognitiveLoadEngine {
    fn default() -> Self {
        Self {
            lexicon: FrequencyTable::english(),
            readability: SentenceLength,
            config: ScoringConfig::default(),
        }
    }
}

impl CognitiveLoadEngine {
    /// Create an engine with the bundled English table and the built-in
    /// sentence-length metric.
    #[must_use]
    #[rustfmt::skip]
    pub fn new() -> Self { Self::default() }
}

impl<L, R> CognitiveLoadEngine<L, R> {
    /// Replace the word-frequency source.
    #[must_use]
    pub fn with_lexicon<L2>(self, lexicon: L2) -> CognitiveLoadEngine<L2, R> {
        CognitiveLoadEngine {
            lexicon,
            readability: self.readability,
            config: self.config,
        }
    }

    /// Replace the readability metric.
    #[must_use]
    pub fn with_readability<R2>(self, readability: R2) -> CognitiveLoadEngine<L, R2> {
        CognitiveLoadEngine {
            lexicon: self.lexicon,
            readability,
            config: self.config,
        }
    }

    /// Replace the scoring configuration after validating it.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the configuration is out of range.
    pub fn with_config(mut self, config: ScoringConfig) -> Result<Self, ConfigError> {
        self.config = config.validate()?;
        Ok(self)
    }

    #[must_use]
    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }
}

impl<L, R> CognitiveLoadEngine<L, R>
where
    L: WordFrequency,
    R: TextProcessor<Output = f64>,
{
    /// Score `text` using a document the caller already parsed from it.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(text_len = text.len(), tokens = doc.tokens().len())
    )]
    pub fn compute(&self, doc: &ParsedDocument, text: &str) -> CognitiveLoadResult {
        let intrinsic = ComponentScore::new(IntrinsicFeatures::measure(
            text,
            doc,
            &self.lexicon,
            &self.config,
        ));
        let extraneous = ComponentScore::new(ExtraneousFeatures::measure(
            text,
            doc,
            &self.readability,
            &self.config,
        ));
        let germane = ComponentScore::new(GermaneFeatures::measure(text));
        debug!(
            intrinsic = intrinsic.score,
            extraneous = extraneous.score,
            germane = germane.score,
            "component scores"
        );

        let raw_score = blend(
            &self.config.blend,
            intrinsic.score,
            extraneous.score,
            germane.score,
        );
        let cli = rescale(raw_score);
        let label = Label::from_cli(cli, &self.config.labels);
        debug!(raw_score, cli, %label, "cognitive load index");
        CognitiveLoadResult {
            intrinsic,
            extraneous,
            germane,
            raw_score,
            cli,
            label,
        }
    }

    /// Parse `text` with `parser` and score it.
    ///
    /// # Errors
    ///
    /// Returns [`CognitiveLoadError::Parse`] if the parser fails. Scoring
    /// itself never fails.
    pub fn score_text<P>(
        &self,
        parser: &P,
        text: &str,
    ) -> Result<CognitiveLoadResult, CognitiveLoadError<P::Error>>
    where
        P: TextProcessor<Output = ParsedDocument> + ?Sized,
    {
        let doc = parser.process(text).map_err(CognitiveLoadError::Parse)?;
        Ok(self.compute(&doc, text))
    }
}

/// Score `text` and its parsed `doc` with the default engine.
///
/// # Examples
///
/// ```
/// use cognitive_load::{compute_cognitive_load, document::ParsedDocument};
///
/// let result = compute_cognitive_load(&ParsedDocument::default(), "");
/// assert_eq!(result.raw_score, 0.0);
/// ```
#[must_use]
pub fn compute_cognitive_load(doc: &ParsedDocument, text: &str) -> CognitiveLoadResult {
    DEFAULT_ENGINE.compute(doc, text)
}

/// Weighted blend of the component scores, clipped to `[-1, 1]`.
#[must_use]
#[expect(clippy::float_arithmetic, reason = "weighted blend")]
pub fn blend(weights: &BlendWeights, intrinsic: f64, extraneous: f64, germane: f64) -> f64 {
    (weights.intrinsic * intrinsic + weights.extraneous * extraneous - weights.germane * germane)
        .clamp(-1.0, 1.0)
}

/// Map a clipped raw score onto `[0, 1]`, rounded to three decimals.
#[must_use]
#[expect(clippy::float_arithmetic, reason = "affine rescale")]
pub fn rescale(raw_score: f64) -> f64 {
    round_to((raw_score.clamp(-1.0, 1.0) + 1.0) / 2.0, 3)
}
