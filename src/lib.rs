//! Heuristic cognitive load index for learning material.
//!
//! The engine scores a text together with its parsed document along three
//! components (intrinsic, extraneous and germane load) and blends them into a
//! single index in `[0, 1]` with a Low/Medium/High label. Parsing, word
//! frequencies and readability are collaborators behind the traits in
//! [`providers`].

pub mod api;
#[cfg(feature = "cli")]
pub mod cli;
pub mod components;
pub mod config;
pub mod document;
pub mod engine;
pub mod explain;
pub mod features;
pub mod normalise;
pub mod providers;
#[cfg(feature = "rewrite")]
pub mod rewrite;

pub use api::{CognitiveLoadResult, ComponentScore, Label, Report};
#[cfg(feature = "cli")]
pub use cli::CogloadArgs;
pub use config::{BlendWeights, ConfigError, LabelThresholds, ScoringConfig};
pub use document::{ParsedDocument, Span, Token};
pub use engine::{CognitiveLoadEngine, CognitiveLoadError, compute_cognitive_load};
pub use explain::explain;
pub use providers::{
    DocumentParser, FrequencyTable, HeuristicParser, ReadabilityMetric, SentenceLength,
    TextProcessor, WordFrequency,
};
#[cfg(feature = "rewrite")]
pub use rewrite::{RewriteClient, RewriteError, TargetLevel};

pub mod tests;
