//! Configuration module

use crate::error::CliError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use varna_api::Config;

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Analysis configuration
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Custom classification tables
    #[serde(default)]
    pub tables: TablesConfig,
}

/// Analysis-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Script words are normalized into
    pub target_script: String,

    /// Tokenize the normalized form instead of the raw input
    pub normalize_first: bool,

    /// Fail on invalid words
    pub strict_validation: bool,

    /// Confidence multiplier for best-effort rule verdicts
    pub best_effort_factor: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            target_script: "iast".to_string(),
            normalize_first: true,
            strict_validation: false,
            best_effort_factor: varna_api::config::DEFAULT_BEST_EFFORT_FACTOR,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
        }
    }
}

/// Paths to custom tables; both or neither
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
pub struct TablesConfig {
    /// Devanagari table TOML
    pub devanagari: Option<PathBuf>,

    /// IAST table TOML
    pub iast: Option<PathBuf>,
}

/// Template written by `varna generate-config`
pub const TEMPLATE: &str = r#"# Varna CLI configuration

[analysis]
# Script words are normalized into: "iast" or "devanagari"
target_script = "iast"
# Tokenize the normalized form instead of the raw input
normalize_first = true
# Fail on invalid words instead of analysing them best-effort
strict_validation = false
# Confidence multiplier for rule verdicts on invalid words (0.0 - 1.0)
best_effort_factor = 0.5

[output]
# "text" or "json"
default_format = "text"
pretty_json = true

[tables]
# Custom classification tables replace the built-in ones when both are set
# devanagari = "tables/devanagari.toml"
# iast = "tables/iast.toml"
"#;

impl CliConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()).into())
    }

    /// Load the file at `path`, or defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        log::debug!("loading configuration from {}", path.display());
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Analysis configuration for the API layer
    pub fn to_api_config(&self) -> Result<Config> {
        let mut builder = Config::builder()
            .target(&self.analysis.target_script)?
            .normalize_first(self.analysis.normalize_first)
            .strict_validation(self.analysis.strict_validation)
            .best_effort_factor(self.analysis.best_effort_factor);

        match (&self.tables.devanagari, &self.tables.iast) {
            (Some(deva), Some(iast)) => builder = builder.tables(deva, iast),
            (None, None) => {}
            _ => {
                return Err(CliError::ConfigError(
                    "[tables] needs both devanagari and iast".to_string(),
                )
                .into())
            }
        }

        Ok(builder.build()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use varna_core::Script;

    #[test]
    fn test_template_parses_to_defaults() {
        let config = CliConfig::from_toml_str(TEMPLATE).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_partial_config() {
        let config = CliConfig::from_toml_str(
            r#"
[analysis]
target_script = "devanagari"
"#,
        )
        .unwrap();
        assert_eq!(config.analysis.target_script, "devanagari");
        assert!(config.analysis.normalize_first);
        assert_eq!(config.output.default_format, "text");

        let api = config.to_api_config().unwrap();
        assert_eq!(api.target_script, Script::Devanagari);
    }

    #[test]
    fn test_half_configured_tables_rejected() {
        let config = CliConfig::from_toml_str(
            r#"
[tables]
iast = "iast.toml"
"#,
        )
        .unwrap();
        assert!(config.to_api_config().is_err());
    }

    #[test]
    fn test_bad_script_rejected() {
        let mut config = CliConfig::default();
        config.analysis.target_script = "cyrillic".to_string();
        assert!(config.to_api_config().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("varna.toml");
        fs::write(&path, "[output]\ndefault_format = \"json\"\n").unwrap();

        let config = CliConfig::load(Some(&path)).unwrap();
        assert_eq!(config.output.default_format, "json");
        assert!(CliConfig::load(Some(&dir.path().join("missing.toml"))).is_err());
        assert_eq!(CliConfig::load(None).unwrap(), CliConfig::default());
    }
}
