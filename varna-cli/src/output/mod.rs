//! Output formatting module

use anyhow::Result;
use std::io::Write;
use varna_api::{ClassificationDto, WordAnalysis};

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output one word analysis
    fn format_analysis(&mut self, analysis: &WordAnalysis) -> Result<()>;

    /// Format and output one phoneme classification
    fn format_classification(&mut self, classification: &ClassificationDto) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human readable text
    Text,
    /// JSON array of results
    Json,
}

/// Build the formatter for `format`
pub fn create_formatter<W: Write + Send + Sync + 'static>(
    format: OutputFormat,
    writer: W,
    pretty_json: bool,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
    }
}
