//! Run configuration passed explicitly to the pipeline.

use std::{fs::File, io::BufReader, path::Path};

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Spreadsheet row of the first data row: row 1 holds the headers and rows
/// are numbered from 1, so 0-based data index `i` is reported as `i + 2`.
pub const HEADER_ROW_OFFSET: usize = 2;

pub const DEFAULT_PLACEHOLDER_TOKENS: &[&str] = &["BLANK", ""];

/// What the normalizer does with empty cells in numeric columns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
#[value(rename_all = "kebab-case")]
pub enum MissingNumericPolicy {
    /// Leave them missing; they never take part in matching.
    #[default]
    Skip,
    /// Replace them with `0`, as the legacy tool did.
    ZeroFill,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatchConfig {
    /// Tokens never reported as matches even when both columns contain them.
    pub placeholder_tokens: Vec<String>,
    pub missing_numeric: MissingNumericPolicy,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            placeholder_tokens: DEFAULT_PLACEHOLDER_TOKENS
                .iter()
                .map(|t| t.to_string())
                .collect(),
            missing_numeric: MissingNumericPolicy::default(),
        }
    }
}

impl MatchConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).with_context(|| format!("Opening config file {path:?}"))?;
        let config: MatchConfig = serde_yaml::from_reader(BufReader::new(file))
            .with_context(|| format!("Parsing config file {path:?}"))?;
        Ok(config)
    }

    pub fn to_yaml_string(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Serializing config to YAML")
    }

    pub fn is_placeholder(&self, token: &str) -> bool {
        self.placeholder_tokens.iter().any(|p| p == token)
    }
}
