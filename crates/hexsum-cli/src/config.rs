//! # CLI Configuration
//!
//! Optional YAML file selected with `--config`:
//!
//! ```yaml
//! output: json   # plain | json
//! label: true
//! ```
//!
//! Every key is optional. Command-line flags take precedence.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// How `hexsum hash` renders its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The bare hex digest, optionally preceded by a label line.
    #[default]
    Plain,
    /// A single JSON object.
    Json,
}

/// Settings loaded from the config file.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HexsumConfig {
    /// Default output format.
    pub output: OutputFormat,
    /// Print a header line naming the input before the digest.
    pub label: bool,
}

impl HexsumConfig {
    /// Load from `path`, or return defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_yaml(&content)
            .with_context(|| format!("invalid config file {}", path.display()))
    }

    /// Parse from YAML text. An empty document yields defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }
}
