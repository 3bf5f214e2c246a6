//! High-level configuration API

use crate::error::{ApiError, Result};
use std::path::PathBuf;
use varna_core::Script;

/// Confidence multiplier applied when analysing an invalid word
pub const DEFAULT_BEST_EFFORT_FACTOR: f64 = 0.5;

/// Paths to a custom pair of classification tables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TablePaths {
    /// Devanagari table TOML
    pub devanagari: PathBuf,
    /// IAST table TOML
    pub iast: PathBuf,
}

/// Analysis configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Script words are normalized into
    pub target_script: Script,
    /// Tokenize the normalized form instead of the raw input
    pub normalize_first: bool,
    /// Reject invalid words instead of analysing them best-effort
    pub strict_validation: bool,
    /// Confidence multiplier for best-effort verdicts, in `0.0..=1.0`
    pub best_effort_factor: f64,
    /// Custom tables; the embedded set is used when `None`
    pub tables: Option<TablePaths>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_script: Script::Iast,
            normalize_first: false,
            strict_validation: false,
            best_effort_factor: DEFAULT_BEST_EFFORT_FACTOR,
            tables: None,
        }
    }
}

impl Config {
    /// Strict configuration: invalid words are errors
    pub fn strict() -> Self {
        Self {
            strict_validation: true,
            ..Self::default()
        }
    }

    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check field ranges
    pub fn validate(&self) -> Result<()> {
        if self.target_script == Script::Unknown {
            return Err(ApiError::Config(
                "target script must be devanagari or iast".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.best_effort_factor) {
            return Err(ApiError::Config(format!(
                "best-effort factor {} is outside 0.0..=1.0",
                self.best_effort_factor
            )));
        }
        if let Some(paths) = &self.tables {
            if paths.devanagari.as_os_str().is_empty() || paths.iast.as_os_str().is_empty() {
                return Err(ApiError::Config(
                    "custom tables need both a devanagari and an iast file".to_string(),
                ));
            }
        }
        Ok(())
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the normalization target by script name
    pub fn target(mut self, script: &str) -> Result<Self> {
        self.config.target_script = script
            .parse()
            .map_err(|_| ApiError::Config(format!("unknown script '{script}'")))?;
        Ok(self)
    }

    /// Set the normalization target
    pub fn target_script(mut self, script: Script) -> Self {
        self.config.target_script = script;
        self
    }

    /// Tokenize the normalized form
    pub fn normalize_first(mut self, enabled: bool) -> Self {
        self.config.normalize_first = enabled;
        self
    }

    /// Reject invalid words
    pub fn strict_validation(mut self, enabled: bool) -> Self {
        self.config.strict_validation = enabled;
        self
    }

    /// Set the best-effort confidence multiplier
    pub fn best_effort_factor(mut self, factor: f64) -> Self {
        self.config.best_effort_factor = factor;
        self
    }

    /// Load tables from files instead of the embedded set
    pub fn tables(mut self, devanagari: impl Into<PathBuf>, iast: impl Into<PathBuf>) -> Self {
        self.config.tables = Some(TablePaths {
            devanagari: devanagari.into(),
            iast: iast.into(),
        });
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        self.config.validate()?;
        Ok(self.config)
    }
}
