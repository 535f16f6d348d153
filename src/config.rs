//! Generation configuration.
//!
//! Settings are read from an optional TOML file. Every section and field
//! has a default, so an empty file is a valid configuration.

use crate::mnemonic::WordCount;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Upper bound on mnemonics generated in one run.
pub const MAX_COUNT: u32 = 1000;

/// Configuration validation errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid mnemonic count {0} (must be 1-1000)")]
    InvalidCount(u32),
    #[error("failed to read config file: {0}")]
    FileReadError(String),
    #[error("failed to parse config file: {0}")]
    ParseError(String),
}

/// Full configuration file format.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FileConfig {
    #[serde(default)]
    pub mnemonic: MnemonicConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Mnemonic shape.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MnemonicConfig {
    /// Words per sentence. Unsupported values fail to parse.
    #[serde(default)]
    pub word_count: WordCount,
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Number of mnemonics to generate.
    pub count: u32,
    /// Print one numbered word per line instead of a single line.
    pub numbered: bool,
    /// Write Prometheus metrics to stderr after generation.
    pub metrics: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            count: 1,
            numbered: false,
            metrics: false,
        }
    }
}

impl OutputConfig {
    /// Validates the output parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.count == 0 || self.count > MAX_COUNT {
            return Err(ConfigError::InvalidCount(self.count));
        }
        Ok(())
    }
}

impl FileConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::FileReadError(e.to_string()))?;
        content.parse()
    }

    /// Validates all sections.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.output.validate()
    }
}

impl std::str::FromStr for FileConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let config: FileConfig =
            toml::from_str(s).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}
