// Copyright (c) 2024 The Fuego Developers

//! Configuration for the burn detector CLI.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// How detection results are printed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum OutputMode {
    /// Human-readable key/value lines
    #[default]
    Text,
    /// One JSON object per line
    Json,
    /// Indented JSON
    JsonPretty,
}

/// Burn detector configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// Output format for reports
    #[serde(default)]
    pub output_mode: OutputMode,

    /// Look for an Ethereum destination address in commitment metadata
    #[serde(default = "default_extract_address")]
    pub extract_address: bool,

    /// Largest tx_extra accepted, in bytes
    #[serde(default = "default_max_extra_bytes")]
    pub max_extra_bytes: usize,
}

fn default_extract_address() -> bool {
    true
}

fn default_max_extra_bytes() -> usize {
    4096
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            output_mode: OutputMode::default(),
            extract_address: default_extract_address(),
            max_extra_bytes: default_max_extra_bytes(),
        }
    }
}

impl DetectorConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse and validate configuration from a TOML string.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config: DetectorConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load the configuration file if it exists, otherwise use defaults.
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            tracing::info!("Loading configuration from {}", path.display());
            Self::from_file(path)
        } else {
            tracing::debug!("No configuration at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.max_extra_bytes == 0 {
            anyhow::bail!("max_extra_bytes must be greater than zero");
        }
        Ok(())
    }
}
