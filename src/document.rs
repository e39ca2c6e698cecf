//! Parsed document model shared by the feature extractors.
//!
//! Tokens live in a single arena in text order. Heads, children, sentences
//! and noun chunks all refer to tokens by arena index, so the dependency graph
//! never holds owning back-references. Documents serialise to JSON, which lets
//! an external parser hand its output to the `cogload` binary.

use serde::{Deserialize, Serialize};

/// A single token with its tags and dependency links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    /// Coarse part-of-speech tag such as `NOUN` or `PROPN`.
    pub pos: String,
    /// Fine-grained tag such as `NN` or `VBN`.
    pub tag: String,
    /// Arena index of the syntactic head. Roots are their own head.
    pub head: usize,
    /// Arena indices of the direct dependents.
    #[serde(default)]
    pub children: Vec<usize>,
}

impl Token {
    /// Create a token without children; see [`ParsedDocument::from_heads`].
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        pos: impl Into<String>,
        tag: impl Into<String>,
        head: usize,
    ) -> Self {
        Self {
            text: text.into(),
            pos: pos.into(),
            tag: tag.into(),
            head,
            children: Vec::new(),
        }
    }
}

/// A half-open range of token indices together with its surface text.
///
/// Used for both sentences and noun chunks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

impl Span {
    #[must_use]
    pub fn new(start: usize, end: usize, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            text: text.into(),
        }
    }
}

/// Output of a parser: sentences, tokens and noun chunks over one text.
///
/// # Examples
///
/// ```
/// use cognitive_load::document::{ParsedDocument, Span, Token};
///
/// let doc = ParsedDocument::from_heads(
///     vec![Token::new("Cats", "NOUN", "NNS", 1), Token::new("sleep", "VERB", "VBP", 1)],
///     vec![Span::new(0, 2, "Cats sleep")],
///     vec![Span::new(0, 1, "Cats")],
/// );
/// assert_eq!(doc.tokens()[1].children, vec![0]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedDocument {
    tokens: Vec<Token>,
    sentences: Vec<Span>,
    #[serde(default)]
    noun_chunks: Vec<Span>,
}

impl ParsedDocument {
    /// Assemble a document whose tokens already carry their children.
    #[must_use]
    pub fn new(tokens: Vec<Token>, sentences: Vec<Span>, noun_chunks: Vec<Span>) -> Self {
        Self {
            tokens,
            sentences,
            noun_chunks,
        }
    }

    /// Assemble a document and derive every token's children from the heads.
    ///
    /// Self-headed roots and dangling head indices contribute no child link.
    #[must_use]
    pub fn from_heads(
        mut tokens: Vec<Token>,
        sentences: Vec<Span>,
        noun_chunks: Vec<Span>,
    ) -> Self {
        let links: Vec<(usize, usize)> = tokens
            .iter()
            .enumerate()
            .filter(|&(idx, tok)| tok.head != idx)
            .map(|(idx, tok)| (tok.head, idx))
            .collect();
        for tok in &mut tokens {
            tok.children.clear();
        }
        for (head, child) in links {
            if let Some(parent) = tokens.get_mut(head) {
                parent.children.push(child);
            }
        }
        Self::new(tokens, sentences, noun_chunks)
    }

    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    #[must_use]
    pub fn sentences(&self) -> &[Span] {
        &self.sentences
    }

    #[must_use]
    pub fn noun_chunks(&self) -> &[Span] {
        &self.noun_chunks
    }

    #[must_use]
    pub fn token(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// Tokens covered by `span`. Out-of-range spans yield an empty slice.
    #[must_use]
    pub fn span_tokens(&self, span: &Span) -> &[Token] {
        self.tokens.get(span.start..span.end).unwrap_or(&[])
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn chain() -> Vec<Token> {
        vec![
            Token::new("The", "DET", "DT", 1),
            Token::new("dog", "NOUN", "NN", 2),
            Token::new("barks", "VERB", "VBZ", 2),
        ]
    }

    #[rstest]
    fn derives_children_from_heads() {
        let doc = ParsedDocument::from_heads(chain(), vec![Span::new(0, 3, "The dog barks")], vec![]);
        assert_eq!(doc.tokens()[2].children, vec![1]);
        assert_eq!(doc.tokens()[1].children, vec![0]);
        assert!(doc.tokens()[0].children.is_empty());
    }

    #[rstest]
    fn dangling_heads_are_ignored() {
        let tokens = vec![Token::new("Lost", "NOUN", "NN", 7)];
        let doc = ParsedDocument::from_heads(tokens, vec![Span::new(0, 1, "Lost")], vec![]);
        assert!(doc.tokens()[0].children.is_empty());
    }

    #[rstest]
    #[case(Span::new(0, 2, "The dog"), 2)]
    #[case(Span::new(2, 9, "barks"), 0)]
    #[case(Span::new(3, 1, ""), 0)]
    fn span_tokens_clamps_ranges(#[case] span: Span, #[case] expected: usize) {
        let doc = ParsedDocument::from_heads(chain(), vec![], vec![]);
        assert_eq!(doc.span_tokens(&span).len(), expected);
    }

    #[rstest]
    #[expect(clippy::expect_used, reason = "test should fail loudly")]
    fn children_and_chunks_are_optional_in_json() {
        let json = r#"{
            "tokens": [{"text": "Hi", "pos": "INTJ", "tag": "UH", "head": 0}],
            "sentences": [{"start": 0, "end": 1, "text": "Hi"}]
        }"#;
        let doc: ParsedDocument = serde_json::from_str(json).expect("deserialise document");
        assert!(doc.noun_chunks().is_empty());
        assert!(doc.tokens()[0].children.is_empty());
    }
}
