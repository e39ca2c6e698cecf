//! Result types returned by the scoring engine.

use crate::{
    components::{ExtraneousFeatures, GermaneFeatures, IntrinsicFeatures, LoadComponent},
    config::LabelThresholds,
    normalise::round_to,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A component's raw features together with its normalised score.
///
/// # Examples
///
/// ```
/// use cognitive_load::api::ComponentScore;
/// use cognitive_load::components::GermaneFeatures;
///
/// let c = ComponentScore::new(GermaneFeatures { question_count: 3, ..Default::default() });
/// assert!((c.score - 0.2).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentScore<F> {
    pub features: F,
    pub score: f64,
}

impl<F: LoadComponent> ComponentScore<F> {
    /// Score `features` and keep them as diagnostics.
    #[must_use]
    pub fn new(features: F) -> Self {
        let score = features.score();
        Self { features, score }
    }

    /// Copy with features and score rounded for presentation.
    #[must_use]
    pub fn rounded(&self) -> Self {
        Self {
            features: self.features.rounded(),
            score: round_to(self.score, 3),
        }
    }
}

/// Three-tier classification of the cognitive load index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    Low,
    Medium,
    High,
}

impl Label {
    /// Classify `cli` against the label thresholds.
    ///
    /// # Examples
    ///
    /// ```
    /// use cognitive_load::api::Label;
    /// use cognitive_load::config::LabelThresholds;
    ///
    /// let t = LabelThresholds::default();
    /// assert_eq!(Label::from_cli(0.33, &t), Label::Medium);
    /// assert_eq!(Label::from_cli(0.66, &t), Label::High);
    /// ```
    #[must_use]
    pub fn from_cli(cli: f64, thresholds: &LabelThresholds) -> Self {
        if cli < thresholds.medium {
            Self::Low
        } else if cli < thresholds.high {
            Self::Medium
        } else {
            Self::High
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one scoring call.
///
/// `raw_score` is the clipped blend in `[-1, 1]`; `cli` rescales it onto
/// `[0, 1]` and is rounded to three decimals before labelling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CognitiveLoadResult {
    pub intrinsic: ComponentScore<IntrinsicFeatures>,
    pub extraneous: ComponentScore<ExtraneousFeatures>,
    pub germane: ComponentScore<GermaneFeatures>,
    pub raw_score: f64,
    pub cli: f64,
    pub label: Label,
}

impl CognitiveLoadResult {
    /// Copy with every diagnostic rounded for display.
    #[must_use]
    pub fn rounded(&self) -> Self {
        Self {
            intrinsic: self.intrinsic.rounded(),
            extraneous: self.extraneous.rounded(),
            germane: self.germane.rounded(),
            raw_score: round_to(self.raw_score, 3),
            cli: self.cli,
            label: self.label,
        }
    }
}

/// Presentation bundle: a rounded result and its explanation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub result: CognitiveLoadResult,
    pub explanation: Vec<String>,
}

impl Report {
    /// Round `result` and attach the qualitative explanation.
    #[must_use]
    pub fn new(result: &CognitiveLoadResult) -> Self {
        Self {
            result: result.rounded(),
            explanation: crate::explain::explain(result),
        }
    }
}
