//! Candidate domain-term extraction from noun chunks and proper-noun runs.

use crate::document::ParsedDocument;
use std::collections::BTreeSet;

/// Number of terms surfaced in diagnostics by default.
pub const DEFAULT_TERM_SAMPLE: usize = 8;

const PROPER_NOUN: &str = "PROPN";

/// Collect lowercased noun chunks and maximal proper-noun runs.
///
/// The set is ordered so that sampling from it is stable for identical
/// input.
///
/// # Examples
///
/// ```
/// use cognitive_load::document::{ParsedDocument, Span, Token};
/// use cognitive_load::features::terms::extract_candidate_terms;
///
/// let doc = ParsedDocument::from_heads(
///     vec![
///         Token::new("New", "PROPN", "NNP", 1),
///         Token::new("York", "PROPN", "NNP", 2),
///         Token::new("sleeps", "VERB", "VBZ", 2),
///     ],
///     vec![Span::new(0, 3, "New York sleeps")],
///     vec![Span::new(0, 2, " New York ")],
/// );
/// let terms = extract_candidate_terms(&doc);
/// assert_eq!(terms.into_iter().collect::<Vec<_>>(), vec!["new york"]);
/// ```
#[must_use]
pub fn extract_candidate_terms(doc: &ParsedDocument) -> BTreeSet<String> {
    let mut terms: BTreeSet<String> = doc
        .noun_chunks()
        .iter()
        .map(|chunk| chunk.text.trim().to_lowercase())
        .filter(|text| !text.is_empty())
        .collect();

    let mut run: Vec<&str> = Vec::new();
    for token in doc.tokens() {
        if token.pos == PROPER_NOUN {
            run.push(&token.text);
        } else {
            flush_run(&mut run, &mut terms);
        }
    }
    flush_run(&mut run, &mut terms);
    terms
}

fn flush_run(run: &mut Vec<&str>, terms: &mut BTreeSet<String>) {
    if !run.is_empty() {
        terms.insert(run.join(" ").to_lowercase());
        run.clear();
    }
}

/// The first `n` terms in set order.
#[must_use]
pub fn term_sample(terms: &BTreeSet<String>, n: usize) -> Vec<String> {
    terms.iter().take(n).cloned().collect()
}
