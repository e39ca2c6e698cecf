//! Rule-based English parser.
//!
//! Produces a [`ParsedDocument`] without a statistical model: sentences come
//! from terminal punctuation, tags from closed word lists and suffix rules,
//! and the dependency tree from a shallow attachment scheme. The trees are
//! crude but always acyclic and sentence-local, which is all the feature
//! extractors need to rank texts consistently.

use super::TextProcessor;
use crate::document::{ParsedDocument, Span, Token};
use regex::Regex;
use std::{ops::Range, sync::LazyLock};
use thiserror::Error;
use tracing::debug;

/// Largest input the parser accepts by default, in characters.
pub const MAX_INPUT_CHARS: usize = 2_000_000;

static SENTENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[expect(clippy::expect_used, reason = "pattern is constant and valid")]
    Regex::new(r"[^.!?]+[.!?]*").expect("valid regex")
});

static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[expect(clippy::expect_used, reason = "pattern is constant and valid")]
    Regex::new(r"[A-Za-z0-9']+|[^\sA-Za-z0-9']").expect("valid regex")
});

const DETERMINERS: &[(&str, &str)] = &[
    ("the", "DT"),
    ("a", "DT"),
    ("an", "DT"),
    ("this", "DT"),
    ("that", "DT"),
    ("these", "DT"),
    ("those", "DT"),
    ("every", "DT"),
    ("each", "DT"),
    ("some", "DT"),
    ("any", "DT"),
    ("no", "DT"),
    ("all", "DT"),
    ("both", "DT"),
    ("another", "DT"),
    ("my", "PRP$"),
    ("your", "PRP$"),
    ("his", "PRP$"),
    ("its", "PRP$"),
    ("our", "PRP$"),
    ("their", "PRP$"),
];

const PRONOUNS: &[(&str, &str)] = &[
    ("i", "PRP"),
    ("you", "PRP"),
    ("he", "PRP"),
    ("she", "PRP"),
    ("it", "PRP"),
    ("we", "PRP"),
    ("they", "PRP"),
    ("me", "PRP"),
    ("him", "PRP"),
    ("her", "PRP"),
    ("us", "PRP"),
    ("them", "PRP"),
    ("itself", "PRP"),
    ("themselves", "PRP"),
    ("who", "WP"),
    ("whom", "WP"),
    ("what", "WP"),
    ("which", "WDT"),
];

const AUXILIARIES: &[(&str, &str)] = &[
    ("am", "VBP"),
    ("are", "VBP"),
    ("is", "VBZ"),
    ("was", "VBD"),
    ("were", "VBD"),
    ("be", "VB"),
    ("being", "VBG"),
    ("been", "VBN"),
    ("have", "VBP"),
    ("has", "VBZ"),
    ("had", "VBD"),
    ("having", "VBG"),
    ("do", "VBP"),
    ("does", "VBZ"),
    ("did", "VBD"),
    ("can", "MD"),
    ("could", "MD"),
    ("will", "MD"),
    ("would", "MD"),
    ("shall", "MD"),
    ("should", "MD"),
    ("may", "MD"),
    ("might", "MD"),
    ("must", "MD"),
];

/// Auxiliaries that turn a following participle into `VBN`.
const PERFECT_OR_PASSIVE: &[&str] = &[
    "am", "are", "is", "was", "were", "be", "being", "been", "have", "has", "had", "having",
];

const PREPOSITIONS: &[&str] = &[
    "of", "in", "on", "at", "by", "for", "with", "from", "to", "into", "onto", "about", "over",
    "under", "between", "through", "during", "before", "after", "against", "without", "within",
    "among", "across", "toward", "towards", "upon", "via",
];

const COORDINATORS: &[&str] = &["and", "or", "but", "nor", "yet", "so"];

const SUBORDINATORS: &[&str] = &[
    "because", "although", "though", "while", "if", "unless", "since", "whereas", "whether",
    "once", "until",
];

const IRREGULAR_PARTICIPLES: &[&str] = &[
    "taken", "given", "written", "broken", "chosen", "spoken", "driven", "eaten", "fallen",
    "forgotten", "hidden", "known", "seen", "shown", "thrown", "grown", "drawn", "done", "made",
    "found", "built", "held", "kept", "left", "lost", "paid", "said", "sent", "told", "thought",
    "brought", "bought", "caught", "taught", "understood", "won",
];

const ADJECTIVE_SUFFIXES: &[&str] = &["ous", "ful", "ive", "able", "ible", "ic", "less", "ical"];

/// Tags that may open or extend a noun chunk.
const CHUNK_POS: &[&str] = &["DET", "ADJ", "NUM", "NOUN", "PROPN"];

/// Errors returned by [`HeuristicParser`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("input has {actual} characters; the parser accepts at most {limit}")]
    TooLong { actual: usize, limit: usize },
}

/// Rule-based parser used when no external parse is supplied.
///
/// # Examples
///
/// ```
/// use cognitive_load::providers::{HeuristicParser, TextProcessor};
///
/// let doc = HeuristicParser::default()
///     .process("The committee approved the proposal.")
///     .expect("short text parses");
/// assert_eq!(doc.sentences().len(), 1);
/// let chunks: Vec<_> = doc.noun_chunks().iter().map(|c| c.text.as_str()).collect();
/// assert_eq!(chunks, vec!["The committee", "the proposal"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeuristicParser {
    max_chars: usize,
}

impl Default for HeuristicParser {
    fn default() -> Self {
        Self {
            max_chars: MAX_INPUT_CHARS,
        }
    }
}

impl HeuristicParser {
    /// Override the input length limit.
    #[must_use]
    pub fn with_max_chars(mut self, max_chars: usize) -> Self {
        self.max_chars = max_chars;
        self
    }

    #[must_use]
    pub fn max_chars(&self) -> usize {
        self.max_chars
    }
}

impl TextProcessor for HeuristicParser {
    type Output = ParsedDocument;
    type Error = ParseError;

    fn process(&self, input: &str) -> Result<Self::Output, Self::Error> {
        let actual = input.chars().count();
        if actual > self.max_chars {
            return Err(ParseError::TooLong {
                actual,
                limit: self.max_chars,
            });
        }

        let mut tokens = Vec::new();
        let mut sentences = Vec::new();
        let mut chunks = Vec::new();
        for sentence in SENTENCE_RE.find_iter(input).map(|m| m.as_str().trim()) {
            if sentence.is_empty() {
                continue;
            }
            let parsed = SentenceParse::new(sentence);
            if parsed.words.is_empty() {
                continue;
            }
            let base = tokens.len();
            chunks.extend(parsed.chunks.iter().map(|chunk| {
                let bytes = parsed.offsets[chunk.start].start..parsed.offsets[chunk.end - 1].end;
                let text = &sentence[bytes];
                Span::new(base + chunk.start, base + chunk.end, text)
            }));
            let heads = parsed.heads();
            tokens.extend(parsed.words.iter().zip(heads).map(|(word, head)| {
                Token::new(word.text, word.pos, word.tag, base + head)
            }));
            sentences.push(Span::new(base, tokens.len(), sentence));
        }
        debug!(
            sentences = sentences.len(),
            tokens = tokens.len(),
            chunks = chunks.len(),
            "parsed text"
        );
        Ok(ParsedDocument::from_heads(tokens, sentences, chunks))
    }
}

struct Word<'a> {
    text: &'a str,
    pos: &'static str,
    tag: &'static str,
}

impl Word<'_> {
    fn is_chunk_head(&self) -> bool {
        matches!(self.pos, "NOUN" | "PROPN")
    }

    fn is_verbal(&self) -> bool {
        matches!(self.pos, "VERB" | "AUX")
    }
}

/// Tokens, tags and noun chunks of one sentence, indexed locally.
struct SentenceParse<'a> {
    words: Vec<Word<'a>>,
    offsets: Vec<Range<usize>>,
    chunks: Vec<Range<usize>>,
}

impl<'a> SentenceParse<'a> {
    fn new(sentence: &'a str) -> Self {
        let mut words: Vec<Word<'a>> = Vec::new();
        let mut offsets = Vec::new();
        for m in TOKEN_RE.find_iter(sentence) {
            let (pos, tag) = classify(m.as_str(), words.len(), &words);
            words.push(Word {
                text: m.as_str(),
                pos,
                tag,
            });
            offsets.push(m.range());
        }
        let chunks = noun_chunks(&words);
        Self {
            words,
            offsets,
            chunks,
        }
    }

    /// Local head index for every word.
    ///
    /// Chunk members attach to their chunk head, chunk heads to a directly
    /// preceding preposition, prepositions to the nearest earlier chunk head
    /// or verb, and everything else to the root. Every link either targets
    /// the root or a token that itself links strictly leftwards, so the
    /// result is acyclic.
    fn heads(&self) -> Vec<usize> {
        let root = self.root();
        let mut heads = vec![root; self.words.len()];
        let mut is_head = vec![false; self.words.len()];
        for chunk in &self.chunks {
            let head = chunk.end - 1;
            is_head[head] = true;
            for member in chunk.start..head {
                heads[member] = head;
            }
            match chunk.start.checked_sub(1) {
                Some(prev) if self.words[prev].pos == "ADP" && head != root => {
                    heads[head] = prev;
                }
                _ => {}
            }
        }
        let mut last_site = None;
        for (idx, word) in self.words.iter().enumerate() {
            if word.pos == "ADP" && idx != root {
                heads[idx] = last_site.unwrap_or(root);
            }
            if word.is_verbal() || is_head[idx] {
                last_site = Some(idx);
            }
        }
        heads[root] = root;
        heads
    }

    fn root(&self) -> usize {
        self.words
            .iter()
            .position(|w| w.pos == "VERB")
            .or_else(|| self.words.iter().position(|w| w.pos == "AUX"))
            .or_else(|| self.chunks.first().map(|chunk| chunk.end - 1))
            .or_else(|| self.words.iter().position(|w| w.pos != "PUNCT"))
            .unwrap_or(0)
    }
}

fn lookup(table: &[(&str, &'static str)], word: &str) -> Option<&'static str> {
    table
        .iter()
        .find_map(|&(entry, tag)| (entry == word).then_some(tag))
}

/// Assign a coarse and a fine tag to `word` at `position` in its sentence.
fn classify(word: &str, position: usize, previous: &[Word<'_>]) -> (&'static str, &'static str) {
    if !word.chars().any(char::is_alphanumeric) {
        let tag = match word {
            "." | "!" | "?" => ".",
            "," => ",",
            _ => ":",
        };
        return ("PUNCT", tag);
    }
    if word.chars().all(|c| c.is_ascii_digit() || c == '\'') {
        return ("NUM", "CD");
    }

    let lower = word.to_ascii_lowercase();
    if let Some(tag) = lookup(DETERMINERS, &lower) {
        return ("DET", tag);
    }
    if let Some(tag) = lookup(PRONOUNS, &lower) {
        return ("PRON", tag);
    }
    if let Some(tag) = lookup(AUXILIARIES, &lower) {
        return ("AUX", tag);
    }
    if PREPOSITIONS.contains(&lower.as_str()) {
        return ("ADP", "IN");
    }
    if COORDINATORS.contains(&lower.as_str()) {
        return ("CCONJ", "CC");
    }
    if SUBORDINATORS.contains(&lower.as_str()) {
        return ("SCONJ", "IN");
    }
    if is_proper_noun(word, position) {
        return ("PROPN", "NNP");
    }
    if lower.len() > 3 && lower.ends_with("ly") {
        return ("ADV", "RB");
    }
    if lower.len() > 4 && lower.ends_with("ing") {
        return ("VERB", "VBG");
    }
    if (lower.len() > 3 && lower.ends_with("ed")) || IRREGULAR_PARTICIPLES.contains(&lower.as_str())
    {
        let tag = if follows_perfect_or_passive(previous) {
            "VBN"
        } else {
            "VBD"
        };
        return ("VERB", tag);
    }
    if lower.len() > 4 && ADJECTIVE_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
        return ("ADJ", "JJ");
    }
    match previous.last().map(|w| w.tag) {
        Some("MD" | "TO") => return ("VERB", "VB"),
        Some("PRP") if lower.ends_with('s') => return ("VERB", "VBZ"),
        Some("PRP") => return ("VERB", "VBP"),
        _ => {}
    }
    if lower.len() > 3 && lower.ends_with('s') && !lower.ends_with("ss") {
        ("NOUN", "NNS")
    } else {
        ("NOUN", "NN")
    }
}

fn is_proper_noun(word: &str, position: usize) -> bool {
    let mut chars = word.chars();
    let capitalised = chars.next().is_some_and(|c| c.is_ascii_uppercase());
    let acronym = word.len() > 1 && word.chars().all(|c| c.is_ascii_uppercase());
    acronym || (capitalised && position > 0)
}

/// Whether a `be` or `have` form sits within the two preceding words.
fn follows_perfect_or_passive(previous: &[Word<'_>]) -> bool {
    previous.iter().rev().take(2).any(|w| {
        w.pos == "AUX" && PERFECT_OR_PASSIVE.contains(&w.text.to_ascii_lowercase().as_str())
    })
}

/// Noun chunks as local ranges.
///
/// A chunk is a run of determiners, adjectives, numbers and nouns cut after
/// its last noun. A determiner following a noun starts a new run. Personal
/// pronouns form single-word chunks.
fn noun_chunks(words: &[Word<'_>]) -> Vec<Range<usize>> {
    let mut chunks = Vec::new();
    let mut start: Option<usize> = None;
    let mut last_head: Option<usize> = None;
    for (idx, word) in words.iter().enumerate() {
        let continues = CHUNK_POS.contains(&word.pos)
            && !(word.pos == "DET" && last_head.is_some());
        if !continues {
            close_chunk(&mut chunks, start.take(), last_head.take());
        }
        if CHUNK_POS.contains(&word.pos) {
            start.get_or_insert(idx);
            if word.is_chunk_head() {
                last_head = Some(idx);
            }
        } else if word.tag == "PRP" {
            chunks.push(idx..idx + 1);
        }
    }
    close_chunk(&mut chunks, start, last_head);
    chunks
}

fn close_chunk(chunks: &mut Vec<Range<usize>>, start: Option<usize>, last_head: Option<usize>) {
    if let (Some(start), Some(head)) = (start, last_head) {
        chunks.push(start..head + 1);
    }
}
