//! Intrinsic load: difficulty carried by the subject matter itself.
//!
//! Dense domain terminology and rare vocabulary both raise the score.

use super::LoadComponent;
use crate::{
    config::ScoringConfig,
    document::ParsedDocument,
    features::{
        lexical::LexicalProfile,
        terms::{extract_candidate_terms, term_sample},
        text::{ratio, tokenize_words},
    },
    normalise::{Norm, round_to},
    providers::WordFrequency,
};
use serde::{Deserialize, Serialize};

pub const TERM_WEIGHT: f64 = 0.5;
pub const RARE_WEIGHT: f64 = 0.3;
pub const ZIPF_WEIGHT: f64 = 0.2;

const TERM_NORM: Norm = Norm::Scaled { factor: 5.0 };
const ZIPF_NORM: Norm = Norm::Inverse {
    floor: 1.0,
    span: 6.0,
};

/// Raw intrinsic-load signals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntrinsicFeatures {
    pub word_count: usize,
    pub num_terms: usize,
    /// Distinct candidate terms per word.
    pub term_ratio: f64,
    pub avg_zipf: f64,
    pub rare_ratio: f64,
    pub terms_sample: Vec<String>,
}

impl IntrinsicFeatures {
    /// Measure term density and vocabulary rarity.
    #[must_use]
    pub fn measure<L>(text: &str, doc: &ParsedDocument, lexicon: &L, config: &ScoringConfig) -> Self
    where
        L: WordFrequency + ?Sized,
    {
        let words = tokenize_words(text);
        let profile = LexicalProfile::measure(
            &words,
            lexicon,
            &config.language,
            config.rare_word_threshold,
        );
        let terms = extract_candidate_terms(doc);
        Self {
            word_count: words.len(),
            num_terms: terms.len(),
            term_ratio: ratio(terms.len(), words.len().max(1)),
            avg_zipf: profile.avg_zipf,
            rare_ratio: profile.rare_ratio,
            terms_sample: term_sample(&terms, config.term_sample_size),
        }
    }

    #[must_use]
    pub fn term_norm(&self) -> f64 {
        TERM_NORM.apply(self.term_ratio)
    }

    /// Rarer vocabulary scores higher. Text without words carries no
    /// vocabulary signal and scores zero.
    #[must_use]
    pub fn zipf_norm(&self) -> f64 {
        if self.word_count == 0 {
            0.0
        } else {
            ZIPF_NORM.apply(self.avg_zipf)
        }
    }
}

impl LoadComponent for IntrinsicFeatures {
    #[expect(clippy::float_arithmetic, reason = "weighted blend")]
    fn score(&self) -> f64 {
        (TERM_WEIGHT * self.term_norm()
            + RARE_WEIGHT * self.rare_ratio.clamp(0.0, 1.0)
            + ZIPF_WEIGHT * self.zipf_norm())
        .clamp(0.0, 1.0)
    }

    fn rounded(&self) -> Self {
        Self {
            term_ratio: round_to(self.term_ratio, 4),
            avg_zipf: round_to(self.avg_zipf, 3),
            rare_ratio: round_to(self.rare_ratio, 3),
            ..self.clone()
        }
    }
}
