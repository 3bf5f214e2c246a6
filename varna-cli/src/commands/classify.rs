//! Classify command implementation

use super::analyze::resolve_format;
use super::build_analyzer;
use crate::config::CliConfig;
use crate::output::{create_formatter, OutputFormat};
use anyhow::Result;
use clap::Args;
use std::io;

/// Arguments for the classify command
#[derive(Debug, Args)]
pub struct ClassifyArgs {
    /// Phonemes to classify, in either script
    #[arg(value_name = "PHONEME", required = true)]
    pub phonemes: Vec<String>,

    /// Output format [default: from config, else text]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl ClassifyArgs {
    /// Execute the classify command
    pub fn execute(&self, config: &CliConfig) -> Result<()> {
        let analyzer = build_analyzer(config)?;
        let format = resolve_format(self.format, config)?;

        let mut formatter = create_formatter(format, io::stdout(), config.output.pretty_json);
        for phoneme in &self.phonemes {
            formatter.format_classification(&analyzer.classify(phoneme))?;
        }
        formatter.finish()
    }
}
