use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::cli::{MetricArg, ScoreArg};

/// Top-level Argus configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ArgusConfig {
    /// Detection settings.
    #[serde(default)]
    pub detect: DetectToml,
}

/// `[detect]` section of the TOML configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DetectToml {
    #[serde(default = "default_k")]
    pub k: usize,
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
    #[serde(default = "default_n_outliers")]
    pub n_outliers: usize,
    #[serde(default)]
    pub cutoff: f64,
    #[serde(default)]
    pub metric: MetricArg,
    #[serde(default)]
    pub score: ScoreArg,
    #[serde(default)]
    pub return_all: bool,
}

impl Default for DetectToml {
    fn default() -> Self {
        Self {
            k: default_k(),
            batch_size: default_batch_size(),
            n_outliers: default_n_outliers(),
            cutoff: 0.0,
            metric: MetricArg::default(),
            score: ScoreArg::default(),
            return_all: false,
        }
    }
}

fn default_k() -> usize {
    5
}
fn default_batch_size() -> usize {
    1000
}
fn default_n_outliers() -> usize {
    30
}

/// Loads and parses a TOML configuration file.
pub fn load(path: &Path) -> Result<ArgusConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&text)
        .with_context(|| format!("failed to parse config file: {}", path.display()))
}
