//! Scoring configuration and its TOML serialisation.
//!
//! Every default reproduces the reference weights and thresholds, so an empty
//! configuration file scores exactly like [`ScoringConfig::default`].

use crate::features::{
    lexical::DEFAULT_RARE_THRESHOLD, syntax::DEFAULT_DEPTH_CAP, terms::DEFAULT_TERM_SAMPLE,
};
use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading or validating a [`ScoringConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A weight or threshold is NaN or infinite.
    #[error("{field} must be finite")]
    NonFinite { field: &'static str },
    /// A weight is negative.
    #[error("{field} must not be negative")]
    Negative { field: &'static str },
    /// The dependency depth cap is zero.
    #[error("depth_cap must be greater than 0")]
    ZeroDepthCap,
    /// Label thresholds are outside `(0, 1)` or out of order.
    #[error("label thresholds must satisfy 0 < medium < high < 1")]
    LabelOrder,
    /// The configuration file does not exist.
    #[error("scoring configuration {} not found", path.display())]
    Missing { path: PathBuf },
    /// The configuration source could not be read or parsed.
    #[error("failed to load scoring configuration: {0}")]
    Load(#[source] Box<figment::Error>),
}

/// Weights combining the component scores into the raw index.
///
/// `raw = intrinsic·w_i + extraneous·w_e − germane·w_g`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BlendWeights {
    pub intrinsic: f64,
    pub extraneous: f64,
    pub germane: f64,
}

impl Default for BlendWeights {
    fn default() -> Self {
        Self {
            intrinsic: 0.45,
            extraneous: 0.45,
            germane: 0.35,
        }
    }
}

/// Lower bounds of the `Medium` and `High` labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LabelThresholds {
    pub medium: f64,
    pub high: f64,
}

impl Default for LabelThresholds {
    fn default() -> Self {
        Self {
            medium: 0.33,
            high: 0.66,
        }
    }
}

/// Tunable parameters of the scoring engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoringConfig {
    /// Language code passed to the word-frequency source.
    pub language: String,
    /// Zipf frequency below which a word is rare.
    pub rare_word_threshold: f64,
    /// Number of candidate terms kept as a diagnostic sample.
    pub term_sample_size: usize,
    /// Maximum head hops followed when measuring dependency depth.
    pub depth_cap: usize,
    pub blend: BlendWeights,
    pub labels: LabelThresholds,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            language: "en".to_owned(),
            rare_word_threshold: DEFAULT_RARE_THRESHOLD,
            term_sample_size: DEFAULT_TERM_SAMPLE,
            depth_cap: DEFAULT_DEPTH_CAP,
            blend: BlendWeights::default(),
            labels: LabelThresholds::default(),
        }
    }
}

impl ScoringConfig {
    /// Ensure the configuration values are within acceptable bounds.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the first invalid value.
    #[must_use = "Validation should not be ignored"]
    pub fn validate(self) -> Result<Self, ConfigError> {
        check_finite("rare_word_threshold", self.rare_word_threshold)?;
        for (field, weight) in [
            ("blend.intrinsic", self.blend.intrinsic),
            ("blend.extraneous", self.blend.extraneous),
            ("blend.germane", self.blend.germane),
        ] {
            check_finite(field, weight)?;
            if weight < 0.0 {
                return Err(ConfigError::Negative { field });
            }
        }
        if self.depth_cap == 0 {
            return Err(ConfigError::ZeroDepthCap);
        }
        let LabelThresholds { medium, high } = self.labels;
        check_finite("labels.medium", medium)?;
        check_finite("labels.high", high)?;
        if !(0.0 < medium && medium < high && high < 1.0) {
            return Err(ConfigError::LabelOrder);
        }
        Ok(self)
    }

    /// Load a TOML file over the defaults and validate the result.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] or [`ConfigError::Load`] if the file
    /// cannot be read or parsed, or a validation error for out-of-range
    /// values.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(ConfigError::Missing {
                path: path.to_path_buf(),
            });
        }
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path))
            .extract::<Self>()
            .map_err(|e| ConfigError::Load(Box::new(e)))?
            .validate()
    }
}

fn check_finite(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite { field })
    }
}
