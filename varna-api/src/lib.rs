//! Public API for Varna phonological analysis
//!
//! [`Analyzer`] bundles a table set with a [`Config`] and exposes the core
//! operations as serializable results. The [`rules`] module is the boundary
//! grammar-rule predicates are written against.

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;
pub mod rules;

use std::sync::Arc;
use varna_core::{tables, validate, Classifier, PhonologyTables, Tokenizer, Word};

// Re-export key types
pub use config::{Config, ConfigBuilder, TablePaths};
pub use dto::{ClassificationDto, PhonemeDto, WordAnalysis};
pub use error::{ApiError, Result};
pub use rules::{RuleContext, RulePredicate, RuleRegistry, RuleVerdict};
pub use varna_core::{ParityIssue, Place, Script};

/// Main entry point for word analysis
///
/// Cloning is cheap; the tables are shared.
#[derive(Debug, Clone)]
pub struct Analyzer {
    tables: Arc<PhonologyTables>,
    config: Config,
}

impl Analyzer {
    /// Analyzer over the embedded tables with default configuration
    pub fn new() -> Self {
        Self {
            tables: tables::shared(),
            config: Config::default(),
        }
    }

    /// Create an analyzer with custom configuration
    ///
    /// Loads the configured table files, if any.
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;

        let tables = match &config.tables {
            Some(paths) => {
                log::info!(
                    "loading tables from {} and {}",
                    paths.devanagari.display(),
                    paths.iast.display()
                );
                Arc::new(PhonologyTables::from_files(&paths.devanagari, &paths.iast)?)
            }
            None => tables::shared(),
        };

        Ok(Self { tables, config })
    }

    /// Create an analyzer over an already built table set
    pub fn with_tables(tables: Arc<PhonologyTables>, config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { tables, config })
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The shared table set
    pub fn tables(&self) -> &Arc<PhonologyTables> {
        &self.tables
    }

    /// Classifier over this analyzer's tables
    pub fn classifier(&self) -> Classifier<'_> {
        Classifier::new(&self.tables)
    }

    /// Tokenizer over this analyzer's tables
    pub fn tokenizer(&self) -> Tokenizer<'_> {
        Tokenizer::new(&self.tables)
    }

    /// Core pipeline value for `text`
    pub fn word(&self, text: &str) -> Word {
        Word::analyze_with(text, &self.tables)
    }

    /// Run the full pipeline on one word
    ///
    /// In strict mode an invalid word is an error; otherwise it is analysed
    /// best-effort and the report carries the failure reason.
    pub fn analyze(&self, text: &str) -> Result<WordAnalysis> {
        let report = validate(text);
        if !report.is_valid {
            let reason = report.reason().unwrap_or_default();
            if self.config.strict_validation {
                return Err(ApiError::InvalidWord {
                    word: text.to_string(),
                    reason,
                });
            }
            log::debug!("analysing invalid word {text:?} best-effort: {reason}");
        }

        let normalized = self.normalize(text);
        let tokenized = if self.config.normalize_first {
            normalized.clone()
        } else {
            text.to_string()
        };

        let phonemes = self
            .tokenizer()
            .tokenize(&tokenized)
            .iter()
            .map(|p| PhonemeDto::from_phoneme(p, &self.tables))
            .collect();

        Ok(WordAnalysis::new(
            text, &report, normalized, tokenized, phonemes,
        ))
    }

    /// Analyze each word, stopping at the first strict-mode rejection
    pub fn analyze_all<'a, I>(&self, words: I) -> Result<Vec<WordAnalysis>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        words.into_iter().map(|w| self.analyze(w)).collect()
    }

    /// Canonical form of `text` in the configured target script
    pub fn normalize(&self, text: &str) -> String {
        varna_core::normalize(text, Some(self.config.target_script))
    }

    /// Classify one phoneme
    pub fn classify(&self, phoneme: &str) -> ClassificationDto {
        ClassificationDto::new(phoneme, &self.classifier().classify(phoneme))
    }

    /// Are `a` and `b` savarna?
    pub fn are_homorganic(&self, a: &str, b: &str) -> bool {
        self.classifier().are_homorganic(a, b)
    }

    /// Places where the two tables disagree
    pub fn check_parity(&self) -> Vec<ParityIssue> {
        self.tables.check_parity()
    }

    /// Confidence for a verdict reached on valid or invalid input
    pub fn confidence(&self, valid: bool) -> f64 {
        if valid {
            1.0
        } else {
            self.config.best_effort_factor
        }
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

// Convenience functions

/// Analyze a word with default configuration
pub fn analyze(text: &str) -> Result<WordAnalysis> {
    Analyzer::new().analyze(text)
}

/// Analyze a word and serialize the result as JSON
pub fn analyze_json(text: &str) -> Result<String> {
    Ok(serde_json::to_string(&analyze(text)?)?)
}
