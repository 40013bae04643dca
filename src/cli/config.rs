//! TOML configuration file support.
//!
//! Settings that would otherwise be repeated on every invocation can live in
//! a config file:
//!
//! ```toml
//! # rockeval.toml
//! [conversion]
//! instrument = "RE7"
//! normalized = true
//! output_dir = "treated_data"
//! ```
//!
//! Command-line flags always take precedence over the file.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use rockeval::instrument::InstrumentVersion;

/// Root configuration structure for rockeval.toml files.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Conversion-specific settings.
    #[serde(default)]
    pub conversion: ConversionConfig,
}

/// Configuration for the convert command.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConversionConfig {
    /// Instrument generation ("RE6" or "RE7").
    pub instrument: Option<String>,

    /// Normalize curves to sample mass (default: true).
    pub normalized: Option<bool>,

    /// Folder the exports are written to.
    pub output_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }
}

impl ConversionConfig {
    /// Instrument version from the file, if set.
    pub fn instrument(&self) -> Result<Option<InstrumentVersion>> {
        self.instrument
            .as_deref()
            .map(|s| s.parse::<InstrumentVersion>())
            .transpose()
            .context("Invalid 'instrument' in configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml = r#"
            [conversion]
            instrument = "RE6"
            normalized = false
            output_dir = "out"
        "#;

        let config = Config::from_str(toml).unwrap();
        assert_eq!(config.conversion.instrument().unwrap(), Some(InstrumentVersion::Re6));
        assert_eq!(config.conversion.normalized, Some(false));
        assert_eq!(config.conversion.output_dir, Some(PathBuf::from("out")));
    }

    #[test]
    fn test_partial_config() {
        let toml = r#"
            [conversion]
            normalized = true
        "#;

        let config = Config::from_str(toml).unwrap();
        assert_eq!(config.conversion.normalized, Some(true));
        assert_eq!(config.conversion.instrument().unwrap(), None);
        assert_eq!(config.conversion.output_dir, None);
    }

    #[test]
    fn test_empty_config() {
        let config = Config::from_str("").unwrap();
        assert_eq!(config.conversion.normalized, None);
    }

    #[test]
    fn test_bad_instrument() {
        let config = Config::from_str("[conversion]\ninstrument = \"RE5\"\n").unwrap();
        assert!(config.conversion.instrument().is_err());
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(Config::from_str("[conversion]\ncompression_level = 3\n").is_err());
    }
}
