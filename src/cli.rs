//! CLI argument types and layered configuration for the `cogload` binary.
//! [`OrthoConfig`](ortho_config::OrthoConfig) merges a file passed with
//! `--config-path`, the environment (prefix `COGLOAD_`) and the command line,
//! later layers winning.

use serde::Deserialize;
use std::path::PathBuf;

/// Command-line arguments for the `cogload` binary.
///
/// # Examples
///
/// Parse flags directly:
/// ```
/// use cognitive_load::cli::CogloadArgs;
/// use ortho_config::OrthoConfig;
///
/// let args = CogloadArgs::load_from_iter(["cogload", "--json=true"])
///     .expect("load args from CLI iterator");
/// assert!(args.json);
/// assert!(!args.rewrite);
/// ```
///
/// Load from a configuration file:
/// ```
/// use cognitive_load::cli::CogloadArgs;
/// use ortho_config::OrthoConfig;
/// use std::io::Write;
/// use tempfile::NamedTempFile;
///
/// let mut file = NamedTempFile::new().expect("create temp file");
/// writeln!(file, "json = true").expect("write config");
/// let path = file.path().to_str().expect("path str");
/// let args = CogloadArgs::load_from_iter(["cogload", "--config-path", path])
///     .expect("load args from config path");
/// assert!(args.json);
/// ```
#[derive(Debug, Deserialize, ortho_config::OrthoConfig)]
#[ortho_config(prefix = "COGLOAD")]
pub struct CogloadArgs {
    /// Text file to score; standard input when absent.
    #[serde(default)]
    pub input: Option<PathBuf>,

    /// Pre-parsed document in JSON, used instead of the built-in parser.
    #[serde(default)]
    pub document: Option<PathBuf>,

    /// Word-frequency table as `word<TAB>zipf` lines.
    #[serde(default)]
    pub lexicon: Option<PathBuf>,

    /// Scoring configuration in TOML.
    #[serde(default)]
    pub scoring_path: Option<PathBuf>,

    /// Emit the rounded result as JSON.
    #[ortho_config(default = false)]
    #[serde(default)]
    pub json: bool,

    /// Request a simplified rewrite after scoring.
    #[ortho_config(default = false)]
    #[serde(default)]
    pub rewrite: bool,

    /// Reading level for the rewrite: beginner, intermediate or advanced.
    #[serde(default)]
    pub target_level: Option<String>,

    /// Model used for the rewrite.
    #[serde(default)]
    pub model: Option<String>,

    /// Optional path to a configuration file.
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}
