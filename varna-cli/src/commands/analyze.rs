//! Analyze command implementation

use super::{build_analyzer, ScriptArg};
use crate::config::CliConfig;
use crate::error::CliError;
use crate::input;
use crate::output::{create_formatter, OutputFormat};
use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use std::io;
use varna_api::Script;

/// Arguments for the analyze command
#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Words or short phrases to analyze
    #[arg(value_name = "WORDS")]
    pub words: Vec<String>,

    /// Input files or patterns (supports glob), one word per line
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Output format [default: from config, else text]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Script to normalize into
    #[arg(short, long, value_enum)]
    pub target: Option<ScriptArg>,

    /// Tokenize the raw input instead of its normalized form
    #[arg(long)]
    pub no_normalize: bool,

    /// Fail on the first invalid word
    #[arg(long)]
    pub strict: bool,
}

impl AnalyzeArgs {
    /// Execute the analyze command
    pub fn execute(&self, config: &CliConfig) -> Result<()> {
        let words = self.collect_words()?;
        let config = self.apply_overrides(config);
        let analyzer = build_analyzer(&config)?;
        let format = resolve_format(self.format, &config)?;

        log::info!("Analyzing {} word(s)", words.len());

        let analyses = analyzer
            .analyze_all(words.iter().map(String::as_str))
            .context("Failed to analyze input")?;

        let mut formatter = create_formatter(format, io::stdout(), config.output.pretty_json);
        for analysis in &analyses {
            formatter.format_analysis(analysis)?;
        }
        formatter.finish()
    }

    /// Positional words followed by the lines of every input file
    fn collect_words(&self) -> Result<Vec<String>> {
        let mut words = self.words.clone();

        if !self.input.is_empty() {
            words.extend(input::collect_words(&self.input)?);
        }

        if words.is_empty() {
            return Err(CliError::NoInput.into());
        }
        Ok(words)
    }

    fn apply_overrides(&self, config: &CliConfig) -> CliConfig {
        let mut config = config.clone();
        if let Some(target) = self.target {
            config.analysis.target_script = Script::from(target).code().to_string();
        }
        if self.no_normalize {
            config.analysis.normalize_first = false;
        }
        if self.strict {
            config.analysis.strict_validation = true;
        }
        config
    }
}

/// Command-line format, else the configured default
pub(crate) fn resolve_format(
    format: Option<OutputFormat>,
    config: &CliConfig,
) -> Result<OutputFormat> {
    match format {
        Some(format) => Ok(format),
        None => OutputFormat::from_str(&config.output.default_format, true).map_err(|_| {
            CliError::ConfigError(format!(
                "unknown output format '{}'",
                config.output.default_format
            ))
            .into()
        }),
    }
}
