//! Simplified rewrites from a generative language model.
//!
//! Posts a simplification prompt to a Gemini-style `generateContent`
//! endpoint and returns the first candidate's text. The API key is sent in
//! the `x-goog-api-key` header.
//!
//! # Examples
//!
//! ```no_run
//! use cognitive_load::{RewriteClient, TargetLevel, TextProcessor};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = RewriteClient::from_env("gemini-2.5-flash")?.with_level(TargetLevel::Beginner);
//! let simpler = client.process("Photosynthesis is the conversion of light energy.")?;
//! println!("{simpler}");
//! # Ok(())
//! # }
//! ```

use reqwest::{StatusCode, blocking::Client};
use serde::{Deserialize, Serialize};
use std::{env, fmt, str::FromStr, time::Duration};
use thiserror::Error;
use tracing::debug;

use crate::providers::TextProcessor;

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
/// Base URL of the public Generative Language API.
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Error returned by [`RewriteClient`].
#[derive(Debug, Error)]
pub enum RewriteError {
    /// No API key was supplied or found in the environment.
    #[error("GEMINI_API_KEY is not set")]
    MissingCredential,
    /// Input or generated text was empty.
    #[error("empty input or rewrite")]
    Empty,
    /// HTTP request failed.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// Response did not contain any candidate text.
    #[error("invalid response")]
    InvalidResponse,
}

impl RewriteError {
    /// Whether repeating the same request may succeed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Request(err) => {
                err.is_timeout()
                    || err.is_connect()
                    || err.status().is_some_and(|status| {
                        status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS
                    })
            }
            Self::MissingCredential | Self::Empty | Self::InvalidResponse => false,
        }
    }
}

impl PartialEq for RewriteError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::MissingCredential, Self::MissingCredential)
                | (Self::Empty, Self::Empty)
                | (Self::InvalidResponse, Self::InvalidResponse)
                | (Self::Request(_), Self::Request(_))
        )
    }
}

impl Eq for RewriteError {}

/// Reading level the rewrite is aimed at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetLevel {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
}

impl TargetLevel {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for TargetLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown [`TargetLevel`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown target level '{0}'; expected beginner, intermediate or advanced")]
pub struct UnknownLevel(pub String);

impl FromStr for TargetLevel {
    type Err = UnknownLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            _ => Err(UnknownLevel(s.to_owned())),
        }
    }
}

/// Prompt asking for a simpler version of `paragraph` at `level`.
#[must_use]
pub fn simplification_prompt(paragraph: &str, level: TargetLevel) -> String {
    format!(
        "You are an expert educational editor. Rewrite the ORIGINAL paragraph to make it \
         simpler for a {level} reader.\n\
         Constraints:\n\
         - Use short sentences (max ~15 words).\n\
         - Replace complex words with simple words where possible.\n\
         - Remove unnecessary nominalizations and simplify clause nesting.\n\
         - Preserve the main technical meaning and terms if essential.\n\
         - Add a one-sentence example or analogy if it helps clarity.\n\n\
         ORIGINAL:\n\"\"\"{paragraph}\"\"\"\n\n\
         Produce the simplified paragraph only.\n"
    )
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Serialize)]
struct Content<'a> {
    parts: [Part<'a>; 1],
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateResponse {
    fn into_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .find_map(|part| part.text)
    }
}

/// Rewrite provider backed by a `generateContent` HTTP API.
#[derive(Debug, Clone)]
pub struct RewriteClient {
    client: Client,
    url: String,
    api_key: String,
    level: TargetLevel,
}

impl RewriteClient {
    /// Create a client for `model` served under `endpoint`.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be constructed with the default
    /// configuration.
    #[must_use]
    pub fn new(endpoint: &str, model: &str, api_key: impl Into<String>) -> Self {
        #[expect(
            clippy::expect_used,
            reason = "client builder should not fail with defaults"
        )]
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .expect("client builder failed with default configuration");
        Self {
            client,
            url: format!(
                "{}/models/{model}:generateContent",
                endpoint.trim_end_matches('/')
            ),
            api_key: api_key.into(),
            level: TargetLevel::default(),
        }
    }

    /// Create a client for the public endpoint using the key in
    /// `GEMINI_API_KEY`.
    ///
    /// # Errors
    ///
    /// Returns [`RewriteError::MissingCredential`] when the variable is unset
    /// or blank.
    pub fn from_env(model: &str) -> Result<Self, RewriteError> {
        let key = env::var(API_KEY_VAR)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(RewriteError::MissingCredential)?;
        Ok(Self::new(DEFAULT_ENDPOINT, model, key))
    }

    /// Aim rewrites at `level`.
    #[must_use]
    pub fn with_level(mut self, level: TargetLevel) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn level(&self) -> TargetLevel {
        self.level
    }
}

impl TextProcessor for RewriteClient {
    type Output = String;
    type Error = RewriteError;

    fn process(&self, input: &str) -> Result<Self::Output, Self::Error> {
        if input.trim().is_empty() {
            return Err(RewriteError::Empty);
        }
        let prompt = simplification_prompt(input, self.level);
        let body = GenerateRequest {
            contents: [Content {
                parts: [Part { text: &prompt }],
            }],
        };
        debug!(url = %self.url, level = %self.level, "requesting rewrite");
        let resp = self
            .client
            .post(&self.url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()?
            .error_for_status()?;
        let api: GenerateResponse = resp.json().map_err(|_| RewriteError::InvalidResponse)?;
        let text = api.into_text().ok_or(RewriteError::InvalidResponse)?;
        if text.trim().is_empty() {
            return Err(RewriteError::Empty);
        }
        Ok(text)
    }
}
