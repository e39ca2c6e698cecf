//! Qualitative explanation of a scoring result.

use crate::api::CognitiveLoadResult;

struct Tiers {
    high: f64,
    moderate: f64,
    messages: [&'static str; 3],
}

impl Tiers {
    fn describe(&self, score: f64) -> &'static str {
        let [high, moderate, low] = self.messages;
        if score > self.high {
            high
        } else if score > self.moderate {
            moderate
        } else {
            low
        }
    }
}

const INTRINSIC: Tiers = Tiers {
    high: 0.6,
    moderate: 0.3,
    messages: [
        "High intrinsic load: many domain terms / rare words detected.",
        "Moderate intrinsic load: some technical terms present.",
        "Low intrinsic load: general vocabulary.",
    ],
};

const EXTRANEOUS: Tiers = Tiers {
    high: 0.6,
    moderate: 0.3,
    messages: [
        "High extraneous load: complex sentence structures or many nominalizations.",
        "Moderate extraneous load: some syntactic complexity.",
        "Low extraneous load: simple presentation.",
    ],
};

const GERMANE: Tiers = Tiers {
    high: 0.5,
    moderate: 0.2,
    messages: [
        "High germane support: examples/summaries/questions present to aid learning.",
        "Moderate germane support: some scaffolding cues present.",
        "Low germane support: lacks examples or retrieval prompts.",
    ],
};

/// One sentence per component, in intrinsic, extraneous, germane order.
#[must_use]
pub fn explain(result: &CognitiveLoadResult) -> Vec<String> {
    vec![
        INTRINSIC.describe(result.intrinsic.score).to_owned(),
        EXTRANEOUS.describe(result.extraneous.score).to_owned(),
        GERMANE.describe(result.germane.score).to_owned(),
    ]
}
