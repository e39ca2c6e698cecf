//! Extraneous load: difficulty added by the way the text is written.

use super::{LoadComponent, count_as_f64};
use crate::{
    config::ScoringConfig,
    document::ParsedDocument,
    features::{
        lexical::nominalization_ratio,
        syntax::{
            average_branching_factor, average_sentence_length, count_passive_voice, mean_depth,
            sentence_dependency_depths,
        },
    },
    normalise::{Norm, round_to},
    providers::TextProcessor,
};
use serde::{Deserialize, Serialize};

pub const DEPTH_WEIGHT: f64 = 0.3;
pub const BRANCH_WEIGHT: f64 = 0.25;
pub const SENTENCE_LENGTH_WEIGHT: f64 = 0.15;
pub const NOMINALIZATION_WEIGHT: f64 = 0.15;
pub const PASSIVE_WEIGHT: f64 = 0.15;

const DEPTH_NORM: Norm = Norm::Capped { cap: 10.0 };
const BRANCH_NORM: Norm = Norm::Capped { cap: 3.0 };
const SENTENCE_LENGTH_NORM: Norm = Norm::Capped { cap: 30.0 };
const NOMINALIZATION_NORM: Norm = Norm::Scaled { factor: 10.0 };

/// Raw extraneous-load signals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtraneousFeatures {
    pub sentence_count: usize,
    pub avg_dependency_depth: f64,
    pub avg_branching: f64,
    pub passive_count: usize,
    pub avg_sentence_length: f64,
    pub nominalization_ratio: f64,
}

impl ExtraneousFeatures {
    /// Measure syntactic complexity and presentation density.
    #[must_use]
    pub fn measure<R>(
        text: &str,
        doc: &ParsedDocument,
        readability: &R,
        config: &ScoringConfig,
    ) -> Self
    where
        R: TextProcessor<Output = f64> + ?Sized,
    {
        let depths = sentence_dependency_depths(doc, config.depth_cap);
        Self {
            sentence_count: doc.sentences().len(),
            avg_dependency_depth: mean_depth(&depths),
            avg_branching: average_branching_factor(doc),
            passive_count: count_passive_voice(doc),
            avg_sentence_length: average_sentence_length(text, readability),
            nominalization_ratio: nominalization_ratio(text),
        }
    }

    #[must_use]
    pub fn depth_norm(&self) -> f64 {
        DEPTH_NORM.apply(self.avg_dependency_depth)
    }

    #[must_use]
    pub fn branch_norm(&self) -> f64 {
        BRANCH_NORM.apply(self.avg_branching)
    }

    #[must_use]
    pub fn sentence_length_norm(&self) -> f64 {
        SENTENCE_LENGTH_NORM.apply(self.avg_sentence_length)
    }

    #[must_use]
    pub fn nominalization_norm(&self) -> f64 {
        NOMINALIZATION_NORM.apply(self.nominalization_ratio)
    }

    /// Share of sentences in the passive voice.
    #[must_use]
    pub fn passive_norm(&self) -> f64 {
        Norm::Capped {
            cap: count_as_f64(self.sentence_count.max(1)),
        }
        .apply(count_as_f64(self.passive_count))
    }
}

impl LoadComponent for ExtraneousFeatures {
    #[expect(clippy::float_arithmetic, reason = "weighted blend")]
    fn score(&self) -> f64 {
        (DEPTH_WEIGHT * self.depth_norm()
            + BRANCH_WEIGHT * self.branch_norm()
            + SENTENCE_LENGTH_WEIGHT * self.sentence_length_norm()
            + NOMINALIZATION_WEIGHT * self.nominalization_norm()
            + PASSIVE_WEIGHT * self.passive_norm())
        .clamp(0.0, 1.0)
    }

    fn rounded(&self) -> Self {
        Self {
            avg_dependency_depth: round_to(self.avg_dependency_depth, 3),
            avg_branching: round_to(self.avg_branching, 3),
            avg_sentence_length: round_to(self.avg_sentence_length, 3),
            nominalization_ratio: round_to(self.nominalization_ratio, 4),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::SentenceLength;
    use crate::tests::support::approx_eq;
    use rstest::rstest;

    fn features(depth: f64, passive: usize, sentences: usize) -> ExtraneousFeatures {
        ExtraneousFeatures {
            sentence_count: sentences,
            avg_dependency_depth: depth,
            avg_branching: 0.0,
            passive_count: passive,
            avg_sentence_length: 0.0,
            nominalization_ratio: 0.0,
        }
    }

    #[rstest]
    #[case(10.0)]
    #[case(50.0)]
    #[case(200.0)]
    #[expect(clippy::float_cmp, reason = "saturation must be exact")]
    fn depth_saturates_exactly(#[case] depth: f64) {
        assert_eq!(features(depth, 0, 1).depth_norm(), 1.0);
    }

    #[rstest]
    #[case(0, 0, 0.0)]
    #[case(1, 0, 1.0)]
    #[case(1, 4, 0.25)]
    #[case(3, 2, 1.0)]
    fn passive_share_floors_sentence_count(
        #[case] passive: usize,
        #[case] sentences: usize,
        #[case] expected: f64,
    ) {
        let norm = features(0.0, passive, sentences).passive_norm();
        assert!(approx_eq(norm, expected, 1e-12));
    }

    #[rstest]
    fn saturated_features_score_one() {
        let f = ExtraneousFeatures {
            sentence_count: 1,
            avg_dependency_depth: 12.0,
            avg_branching: 3.5,
            passive_count: 1,
            avg_sentence_length: 45.0,
            nominalization_ratio: 0.2,
        };
        assert!(approx_eq(f.score(), 1.0, 1e-12));
    }

    #[rstest]
    fn empty_input_scores_zero() {
        let f = ExtraneousFeatures::measure(
            "",
            &ParsedDocument::default(),
            &SentenceLength,
            &ScoringConfig::default(),
        );
        assert_eq!(f.sentence_count, 0);
        assert!(approx_eq(f.score(), 0.0, 1e-12));
    }
}
