//! Syntactic complexity signals over a parsed document.
//!
//! Dependency depth, branching, passive voice and sentence length. Walks over
//! the dependency graph are bounded so cyclic or malformed trees coming from
//! an external parser degrade to a capped depth instead of looping.

use super::text::{ratio, split_sentences, tokenize_words};
use crate::{document::ParsedDocument, providers::TextProcessor};
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, warn};

/// Maximum number of head hops followed from any token.
pub const DEFAULT_DEPTH_CAP: usize = 200;

const PAST_PARTICIPLE: &str = "VBN";

static PASSIVE_AUX_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[expect(clippy::expect_used, reason = "pattern is constant and valid")]
    Regex::new(r"\b(was|were|is|are|been|be|being|has been|have been)\b").expect("valid regex")
});

/// Maximum head-chain length per sentence.
///
/// Each token's head chain is followed until a self-headed root, a dangling
/// head index, or `cap` hops.
///
/// # Examples
///
/// ```
/// use cognitive_load::document::{ParsedDocument, Span, Token};
/// use cognitive_load::features::syntax::sentence_dependency_depths;
///
/// let doc = ParsedDocument::from_heads(
///     vec![
///         Token::new("Very", "ADV", "RB", 1),
///         Token::new("old", "ADJ", "JJ", 2),
///         Token::new("trees", "NOUN", "NNS", 3),
///         Token::new("fall", "VERB", "VBP", 3),
///     ],
///     vec![Span::new(0, 4, "Very old trees fall")],
///     vec![],
/// );
/// assert_eq!(sentence_dependency_depths(&doc, 200), vec![3]);
/// ```
#[must_use]
pub fn sentence_dependency_depths(doc: &ParsedDocument, cap: usize) -> Vec<usize> {
    let mut truncated = 0_usize;
    let depths: Vec<usize> = doc
        .sentences()
        .iter()
        .map(|sentence| {
            (sentence.start..sentence.end)
                .filter(|&idx| doc.token(idx).is_some())
                .map(|idx| match head_chain_length(doc, idx, cap) {
                    Some(depth) => depth,
                    None => {
                        truncated += 1;
                        cap
                    }
                })
                .max()
                .unwrap_or(0)
        })
        .collect();
    if truncated > 0 {
        warn!(walks = truncated, cap, "dependency walks hit the depth cap");
    }
    depths
}

/// Hops from `start` to its root, or `None` once `cap` hops are exceeded.
fn head_chain_length(doc: &ParsedDocument, start: usize, cap: usize) -> Option<usize> {
    let mut depth = 0;
    let mut node = start;
    while let Some(token) = doc.token(node) {
        if token.head == node || doc.token(token.head).is_none() {
            return Some(depth);
        }
        if depth == cap {
            return None;
        }
        depth += 1;
        node = token.head;
    }
    Some(depth)
}

/// Mean number of direct children per token; `0.0` without tokens.
#[must_use]
pub fn average_branching_factor(doc: &ParsedDocument) -> f64 {
    let children: usize = doc.tokens().iter().map(|t| t.children.len()).sum();
    ratio(children, doc.tokens().len())
}

/// Sentences containing a passive auxiliary and a past participle.
#[must_use]
pub fn count_passive_voice(doc: &ParsedDocument) -> usize {
    doc.sentences()
        .iter()
        .filter(|sentence| {
            PASSIVE_AUX_RE.is_match(&sentence.text.to_lowercase())
                && doc
                    .span_tokens(sentence)
                    .iter()
                    .any(|t| t.tag == PAST_PARTICIPLE)
        })
        .count()
}

/// Average sentence length from `metric`, or the local fallback when the
/// metric fails.
pub fn average_sentence_length<R>(text: &str, metric: &R) -> f64
where
    R: TextProcessor<Output = f64> + ?Sized,
{
    match metric.process(text) {
        Ok(asl) if asl.is_finite() => asl,
        Ok(asl) => {
            warn!(value = asl, "readability metric returned a non-finite length");
            fallback_sentence_length(text)
        }
        Err(err) => {
            debug!(error = %err, "readability metric failed; using word/sentence ratio");
            fallback_sentence_length(text)
        }
    }
}

/// Words per sentence using the crate's own tokenisation; `0.0` without
/// sentences.
#[must_use]
pub fn fallback_sentence_length(text: &str) -> f64 {
    ratio(tokenize_words(text).len(), split_sentences(text).len())
}

/// Mean of `depths`; `0.0` when empty.
#[must_use]
pub fn mean_depth(depths: &[usize]) -> f64 {
    ratio(depths.iter().sum(), depths.len())
}
