//! Discourse markers that support learning: examples, summaries, questions
//! and sequencing cues.
//!
//! Markers are matched case-insensitively on the raw text, not the parsed
//! document.

use super::text::count_matches;
use regex::Regex;
use std::sync::LazyLock;

const EXAMPLE_MARKERS: &[&str] = &[
    r"\bfor example\b",
    r"\be\.g\.",
    r"\bsuch as\b",
    r"\bfor instance\b",
    r"\bexample:\b",
];

const SUMMARY_MARKERS: &[&str] = &[
    r"\bin summary\b",
    r"\bto conclude\b",
    r"\bin conclusion\b",
    r"\bto summariz",
    r"\bin brief\b",
];

fn compile_all(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| {
            #[expect(clippy::expect_used, reason = "patterns are constant and valid")]
            Regex::new(p).expect("valid regex")
        })
        .collect()
}

static EXAMPLE_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| compile_all(EXAMPLE_MARKERS));
static SUMMARY_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| compile_all(SUMMARY_MARKERS));

static EXAMPLE_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[expect(clippy::expect_used, reason = "pattern is constant and valid")]
    Regex::new(r"(?:^|\n)\s*example\b").expect("valid regex")
});

static SCAFFOLD_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[expect(clippy::expect_used, reason = "pattern is constant and valid")]
    Regex::new(r"\b(first|second|third|then|next|step)\b").expect("valid regex")
});

fn categories_present(res: &[Regex], lower: &str) -> usize {
    res.iter().filter(|re| re.is_match(lower)).count()
}

/// Distinct example-marker categories plus lines that open with "example".
///
/// # Examples
///
/// ```
/// use cognitive_load::features::discourse::presence_of_examples;
///
/// let text = "For example, cats. Dogs, e.g. poodles.\nExample: foo";
/// assert_eq!(presence_of_examples(text), 3);
/// ```
#[must_use]
pub fn presence_of_examples(text: &str) -> usize {
    let lower = text.to_lowercase();
    categories_present(&EXAMPLE_RES, &lower) + count_matches(&EXAMPLE_LINE_RE, &lower)
}

/// Distinct summary-marker categories present.
#[must_use]
pub fn presence_of_summaries(text: &str) -> usize {
    categories_present(&SUMMARY_RES, &text.to_lowercase())
}

/// Number of question marks.
///
/// # Examples
///
/// ```
/// use cognitive_load::features::discourse::count_questions;
///
/// assert_eq!(count_questions("What? Why? Because."), 2);
/// ```
#[must_use]
pub fn count_questions(text: &str) -> usize {
    text.matches('?').count()
}

/// Whole-word sequencing cues such as "first", "then" and "step".
#[must_use]
pub fn count_scaffold_cues(text: &str) -> usize {
    count_matches(&SCAFFOLD_RE, &text.to_lowercase())
}
