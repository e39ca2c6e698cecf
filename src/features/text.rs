//! Shared text helpers for the feature extractors.
//!
//! Word tokenisation, naive sentence splitting and regex match counting. The
//! extractors call these so every feature agrees on what a word and a
//! sentence are.

use regex::Regex;
use std::sync::LazyLock;

static WORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[expect(clippy::expect_used, reason = "pattern is constant and valid")]
    Regex::new(r"[A-Za-z']+").expect("valid regex")
});

static SENTENCE_BOUNDARY_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[expect(clippy::expect_used, reason = "pattern is constant and valid")]
    Regex::new(r"[.!?]+").expect("valid regex")
});

/// Extract runs of ASCII letters and apostrophes, preserving case and order.
///
/// # Examples
///
/// ```
/// use cognitive_load::features::text::tokenize_words;
///
/// assert_eq!(tokenize_words("Hello, world's!"), vec!["Hello", "world's"]);
/// ```
#[must_use]
pub fn tokenize_words(text: &str) -> Vec<&str> {
    WORD_RE.find_iter(text).map(|m| m.as_str()).collect()
}

/// Split on runs of `.`, `!` and `?`, dropping blank segments.
///
/// # Examples
///
/// ```
/// use cognitive_load::features::text::split_sentences;
///
/// assert_eq!(split_sentences("Hi. Bye!! ?"), vec!["Hi", "Bye"]);
/// ```
#[must_use]
pub fn split_sentences(text: &str) -> Vec<&str> {
    SENTENCE_BOUNDARY_RE
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Number of non-overlapping matches of `re` in `haystack`.
#[must_use]
pub fn count_matches(re: &Regex, haystack: &str) -> usize {
    re.find_iter(haystack).count()
}

/// Divide `part` by `whole`, yielding `0.0` when `whole` is zero.
#[must_use]
#[expect(clippy::cast_precision_loss, reason = "counts within f64 range")]
#[expect(clippy::float_arithmetic, reason = "ratio of counts")]
pub fn ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}
