//! Structural guarantees of the built-in parser.

use cognitive_load::features::{count_passive_voice, extract_candidate_terms};
use cognitive_load::providers::{HeuristicParser, MAX_INPUT_CHARS, ParseError};
use cognitive_load::{ParsedDocument, TextProcessor};
use proptest::prelude::*;
use rstest::rstest;
use std::time::{Duration, Instant};

fn parse(text: &str) -> ParsedDocument {
    HeuristicParser::default()
        .process(text)
        .unwrap_or_else(|e| panic!("parse failed: {e}"))
}

/// Whether every head chain reaches a self-headed root within the token
/// count.
fn is_forest(doc: &ParsedDocument) -> bool {
    let len = doc.tokens().len();
    (0..len).all(|start| {
        let mut node = start;
        for _ in 0..=len {
            let head = doc.tokens()[node].head;
            if head == node {
                return true;
            }
            node = head;
        }
        false
    })
}

#[rstest]
fn default_limit_is_two_million_characters() {
    assert_eq!(HeuristicParser::default().max_chars(), MAX_INPUT_CHARS);
    assert_eq!(MAX_INPUT_CHARS, 2_000_000);
}

#[rstest]
fn oversized_input_is_an_error() {
    let text = "a".repeat(11);
    let result = HeuristicParser::default().with_max_chars(10).process(&text);
    assert_eq!(result, Err(ParseError::TooLong { actual: 11, limit: 10 }));
}

#[rstest]
#[case("of ".repeat(70_000) + "end", 70_001)]
#[case("the cat of the dog ".repeat(11_000), 55_000)]
fn parses_long_unterminated_sentence_in_linear_time(
    #[case] text: String,
    #[case] tokens: usize,
) {
    let started = Instant::now();
    let doc = parse(&text);
    let elapsed = started.elapsed();
    assert!(elapsed < Duration::from_secs(5), "took {elapsed:?}");
    assert_eq!(doc.sentences().len(), 1);
    assert_eq!(doc.tokens().len(), tokens);
    assert!(is_forest(&doc));
}

#[rstest]
#[case("The samples were centrifuged.", 1)]
#[case("The team centrifuged the samples.", 0)]
#[case("It was good. The data were collected. We ran it.", 1)]
fn detects_passive_sentences(#[case] text: &str, #[case] expected: usize) {
    assert_eq!(count_passive_voice(&parse(text)), expected);
}

#[rstest]
fn extracts_chunks_and_proper_noun_runs() {
    let doc = parse("The team from Bell Labs measured the noise.");
    let terms: Vec<String> = extract_candidate_terms(&doc).into_iter().collect();
    assert!(terms.contains(&"bell labs".to_owned()), "{terms:?}");
    assert!(terms.contains(&"the noise".to_owned()), "{terms:?}");
    assert!(terms.contains(&"the team".to_owned()), "{terms:?}");
}

#[rstest]
fn sentences_partition_the_tokens() {
    let doc = parse("First sentence here. Second one! And a third?");
    let mut next = 0;
    for sentence in doc.sentences() {
        assert_eq!(sentence.start, next);
        assert!(sentence.end > sentence.start);
        next = sentence.end;
    }
    assert_eq!(next, doc.tokens().len());
}

#[rstest]
fn document_round_trips_through_json() {
    let doc = parse("The committee approved the proposal.");
    let json = serde_json::to_string(&doc).unwrap_or_else(|e| panic!("serialise: {e}"));
    let back: ParsedDocument =
        serde_json::from_str(&json).unwrap_or_else(|e| panic!("deserialise: {e}"));
    assert_eq!(back, doc);
}

proptest! {
    #[test]
    fn trees_are_acyclic_and_sentence_local(text in "[A-Za-z0-9 ,;.?!'\n-]{0,300}") {
        let doc = parse(&text);
        prop_assert!(is_forest(&doc));
        for sentence in doc.sentences() {
            for token in doc.span_tokens(sentence) {
                prop_assert!((sentence.start..sentence.end).contains(&token.head));
            }
        }
        for chunk in doc.noun_chunks() {
            prop_assert!(chunk.start < chunk.end && chunk.end <= doc.tokens().len());
            prop_assert!(!chunk.text.trim().is_empty());
        }
    }
}
