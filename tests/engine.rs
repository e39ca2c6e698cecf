//! End-to-end scoring through the engine.

use cognitive_load::components::{GermaneFeatures, IntrinsicFeatures, LoadComponent};
use cognitive_load::engine::{blend, rescale};
use cognitive_load::{
    BlendWeights, CognitiveLoadEngine, CognitiveLoadResult, FrequencyTable, HeuristicParser,
    Label, ParsedDocument, ScoringConfig, Span, TextProcessor, Token, compute_cognitive_load,
};
use proptest::prelude::*;
use rstest::{fixture, rstest};
mod support;
use support::approx_eq;

const EPSILON: f64 = 1e-12;

#[fixture]
fn engine() -> CognitiveLoadEngine {
    CognitiveLoadEngine::new()
}

fn score(engine: &CognitiveLoadEngine, text: &str) -> CognitiveLoadResult {
    engine
        .score_text(&HeuristicParser::default(), text)
        .unwrap_or_else(|e| panic!("scoring failed: {e}"))
}

/// A single sentence whose tokens form one head chain of `len` hops.
fn chain_document(len: usize) -> ParsedDocument {
    let tokens = (0..=len)
        .map(|i| Token::new(format!("w{i}"), "NOUN", "NN", (i + 1).min(len)))
        .collect();
    ParsedDocument::from_heads(tokens, vec![Span::new(0, len + 1, "chain")], vec![])
}

#[rstest]
#[case("")]
#[case("   \n\t ")]
fn empty_input_is_neutral(engine: CognitiveLoadEngine, #[case] text: &str) {
    let result = score(&engine, text);
    assert!(approx_eq(result.intrinsic.score, 0.0, EPSILON));
    assert!(approx_eq(result.extraneous.score, 0.0, EPSILON));
    assert!(approx_eq(result.germane.score, 0.0, EPSILON));
    assert!(approx_eq(result.cli, 0.5, EPSILON));
    assert_eq!(result.label, Label::Medium);
}

#[rstest]
fn scoring_is_idempotent(engine: CognitiveLoadEngine) {
    let text = "The mitochondrial membrane potential was measured by fluorescence. \
                For example, cells were stained. In summary, what changed?";
    assert_eq!(score(&engine, text), score(&engine, text));
}

#[rstest]
fn free_function_matches_default_engine(engine: CognitiveLoadEngine) {
    let text = "Cats sleep. Dogs bark loudly.";
    let doc = HeuristicParser::default()
        .process(text)
        .unwrap_or_else(|e| panic!("parse failed: {e}"));
    assert_eq!(compute_cognitive_load(&doc, text), engine.compute(&doc, text));
}

#[rstest]
fn deep_chains_saturate_depth(engine: CognitiveLoadEngine) {
    let result = engine.compute(&chain_document(12), "chain");
    assert!(approx_eq(result.extraneous.features.avg_dependency_depth, 12.0, EPSILON));
    assert!(approx_eq(result.extraneous.features.depth_norm(), 1.0, EPSILON));
}

#[rstest]
fn cyclic_heads_stop_at_the_cap() {
    let tokens = vec![
        Token::new("a", "NOUN", "NN", 1),
        Token::new("b", "NOUN", "NN", 0),
    ];
    let doc = ParsedDocument::from_heads(tokens, vec![Span::new(0, 2, "a b")], vec![]);
    let config = ScoringConfig {
        depth_cap: 7,
        ..ScoringConfig::default()
    };
    let engine = CognitiveLoadEngine::new()
        .with_config(config)
        .unwrap_or_else(|e| panic!("valid config rejected: {e}"));
    let result = engine.compute(&doc, "a b");
    assert!(approx_eq(result.extraneous.features.avg_dependency_depth, 7.0, EPSILON));
}

#[rstest]
fn scaffolding_lowers_the_index(engine: CognitiveLoadEngine) {
    let plain = score(&engine, "The enzyme catalyses the hydrolysis of peptide bonds.");
    let scaffolded = score(
        &engine,
        "The enzyme catalyses the hydrolysis of peptide bonds. For example, e.g. trypsin. \
         In summary, why? First, then, finally.",
    );
    assert!(scaffolded.germane.score > plain.germane.score);
    assert!(scaffolded.germane.features.example_count >= 2);
}

#[rstest]
fn custom_lexicon_drives_rarity() {
    let lexicon = FrequencyTable::new("en")
        .with_entry("cats", 6.0)
        .with_entry("sleep", 6.0);
    let engine = CognitiveLoadEngine::new().with_lexicon(lexicon);
    let doc = ParsedDocument::default();
    let common = engine.compute(&doc, "cats sleep");
    let rare = engine.compute(&doc, "zygotes sleep");
    assert!(approx_eq(common.intrinsic.features.rare_ratio, 0.0, EPSILON));
    assert!(approx_eq(rare.intrinsic.features.rare_ratio, 0.5, EPSILON));
    assert!(rare.intrinsic.score > common.intrinsic.score);
}

#[rstest]
fn custom_weights_change_the_blend() {
    let config = ScoringConfig {
        blend: BlendWeights {
            intrinsic: 0.0,
            extraneous: 0.0,
            germane: 0.0,
        },
        ..ScoringConfig::default()
    };
    let engine = CognitiveLoadEngine::new()
        .with_config(config)
        .unwrap_or_else(|e| panic!("valid config rejected: {e}"));
    let result = score(&engine, "Nominalization of the implementation was performed.");
    assert!(approx_eq(result.raw_score, 0.0, EPSILON));
    assert!(approx_eq(result.cli, 0.5, EPSILON));
}

fn intrinsic(rare_ratio: f64, avg_zipf: f64, term_ratio: f64) -> IntrinsicFeatures {
    IntrinsicFeatures {
        word_count: 10,
        num_terms: 1,
        term_ratio,
        avg_zipf,
        rare_ratio,
        terms_sample: vec![],
    }
}

proptest! {
    #[test]
    fn scores_stay_in_range(text in "[A-Za-z ,.?!'\n]{0,240}") {
        let result = CognitiveLoadEngine::new()
            .score_text(&HeuristicParser::default(), &text)
            .unwrap_or_else(|e| panic!("scoring failed: {e}"));
        for value in [
            result.intrinsic.score,
            result.extraneous.score,
            result.germane.score,
            result.cli,
        ] {
            prop_assert!((0.0..=1.0).contains(&value), "{value} out of range");
        }
        prop_assert!((-1.0..=1.0).contains(&result.raw_score));
    }

    #[test]
    fn rarer_vocabulary_never_lowers_intrinsic(
        low in 0.0..=1.0_f64,
        high in 0.0..=1.0_f64,
        zipf in 0.0..8.0_f64,
        terms in 0.0..0.5_f64,
    ) {
        let (low, high) = if low <= high { (low, high) } else { (high, low) };
        prop_assert!(intrinsic(low, zipf, terms).score() <= intrinsic(high, zipf, terms).score());
    }

    #[test]
    fn more_examples_never_lower_germane_nor_raise_cli(
        examples in 0_usize..10,
        extra in 1_usize..5,
        summaries in 0_usize..4,
        intrinsic_score in 0.0..=1.0_f64,
        extraneous_score in 0.0..=1.0_f64,
    ) {
        let before = GermaneFeatures { example_count: examples, summary_count: summaries, ..Default::default() };
        let after = GermaneFeatures { example_count: examples + extra, ..before };
        prop_assert!(after.score() >= before.score());

        let weights = BlendWeights::default();
        let cli_before = rescale(blend(&weights, intrinsic_score, extraneous_score, before.score()));
        let cli_after = rescale(blend(&weights, intrinsic_score, extraneous_score, after.score()));
        prop_assert!(cli_after <= cli_before);
    }
}
