//! Raw feature extractors feeding the component scores.

pub mod discourse;
pub mod lexical;
pub mod syntax;
pub mod terms;
pub mod text;

pub use discourse::{count_questions, count_scaffold_cues, presence_of_examples, presence_of_summaries};
pub use lexical::{LexicalProfile, average_word_zipf, nominalization_ratio, rare_word_ratio};
pub use syntax::{
    average_branching_factor, average_sentence_length, count_passive_voice,
    sentence_dependency_depths,
};
pub use terms::extract_candidate_terms;
pub use text::tokenize_words;
