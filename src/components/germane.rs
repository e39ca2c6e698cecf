//! Germane load: how much the text scaffolds learning.
//!
//! Examples, summaries, questions and sequencing cues raise the score, which
//! in turn lowers the overall index.

use super::{LoadComponent, count_as_f64};
use crate::{
    features::discourse::{
        count_questions, count_scaffold_cues, presence_of_examples, presence_of_summaries,
    },
    normalise::Norm,
};
use serde::{Deserialize, Serialize};

pub const EXAMPLE_WEIGHT: f64 = 0.4;
pub const SUMMARY_WEIGHT: f64 = 0.25;
pub const QUESTION_WEIGHT: f64 = 0.2;
pub const SCAFFOLD_WEIGHT: f64 = 0.15;

const EXAMPLE_NORM: Norm = Norm::Capped { cap: 3.0 };
const SUMMARY_NORM: Norm = Norm::Capped { cap: 2.0 };
const QUESTION_NORM: Norm = Norm::Capped { cap: 3.0 };
const SCAFFOLD_NORM: Norm = Norm::Capped { cap: 6.0 };

/// Raw germane-load signals, all counts over the raw text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GermaneFeatures {
    pub example_count: usize,
    pub summary_count: usize,
    pub question_count: usize,
    pub scaffold_count: usize,
}

impl GermaneFeatures {
    /// Scan `text` for learning-support markers.
    ///
    /// # Examples
    ///
    /// ```
    /// use cognitive_load::components::{GermaneFeatures, LoadComponent};
    ///
    /// let f = GermaneFeatures::measure("First, why? For example: this.");
    /// assert_eq!(f.question_count, 1);
    /// assert!(f.score() > 0.0);
    /// ```
    #[must_use]
    pub fn measure(text: &str) -> Self {
        Self {
            example_count: presence_of_examples(text),
            summary_count: presence_of_summaries(text),
            question_count: count_questions(text),
            scaffold_count: count_scaffold_cues(text),
        }
    }

    #[must_use]
    pub fn example_norm(&self) -> f64 {
        EXAMPLE_NORM.apply(count_as_f64(self.example_count))
    }

    #[must_use]
    pub fn summary_norm(&self) -> f64 {
        SUMMARY_NORM.apply(count_as_f64(self.summary_count))
    }

    #[must_use]
    pub fn question_norm(&self) -> f64 {
        QUESTION_NORM.apply(count_as_f64(self.question_count))
    }

    #[must_use]
    pub fn scaffold_norm(&self) -> f64 {
        SCAFFOLD_NORM.apply(count_as_f64(self.scaffold_count))
    }
}

impl LoadComponent for GermaneFeatures {
    #[expect(clippy::float_arithmetic, reason = "weighted blend")]
    fn score(&self) -> f64 {
        (EXAMPLE_WEIGHT * self.example_norm()
            + SUMMARY_WEIGHT * self.summary_norm()
            + QUESTION_WEIGHT * self.question_norm()
            + SCAFFOLD_WEIGHT * self.scaffold_norm())
        .clamp(0.0, 1.0)
    }

    fn rounded(&self) -> Self {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::approx_eq;
    use rstest::rstest;

    fn counts(example: usize, summary: usize, question: usize, scaffold: usize) -> GermaneFeatures {
        GermaneFeatures {
            example_count: example,
            summary_count: summary,
            question_count: question,
            scaffold_count: scaffold,
        }
    }

    #[rstest]
    #[case(counts(0, 0, 0, 0), 0.0)]
    #[case(counts(3, 2, 3, 6), 1.0)]
    #[case(counts(9, 9, 9, 60), 1.0)]
    #[case(counts(0, 1, 0, 0), 0.125)]
    #[case(counts(0, 0, 0, 3), 0.075)]
    fn blends_counts(#[case] f: GermaneFeatures, #[case] expected: f64) {
        assert!(approx_eq(f.score(), expected, 1e-12), "got {}", f.score());
    }

    #[rstest]
    fn more_examples_never_lower_the_score() {
        let scores: Vec<f64> = (0..6).map(|n| counts(n, 0, 0, 0).score()).collect();
        assert!(scores.windows(2).all(|w| w[1] >= w[0]));
        assert!(approx_eq(scores[3], scores[5], 1e-12));
    }

    #[rstest]
    fn measures_raw_text() {
        let f = GermaneFeatures::measure("Step one. Then? In summary, such as this.");
        assert_eq!(f, counts(1, 1, 1, 2));
    }
}
