//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde_json::Value;
use std::io::Write;
use varna_api::{ClassificationDto, WordAnalysis};

/// JSON formatter - outputs results as one JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    items: Vec<Value>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            items: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_analysis(&mut self, analysis: &WordAnalysis) -> Result<()> {
        self.items.push(serde_json::to_value(analysis)?);
        Ok(())
    }

    fn format_classification(&mut self, classification: &ClassificationDto) -> Result<()> {
        self.items.push(serde_json::to_value(classification)?);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.items)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.items)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use varna_api::Analyzer;

    #[test]
    fn test_json_array() {
        let analyzer = Analyzer::new();
        let mut formatter = JsonFormatter::new(Vec::new(), false);
        formatter
            .format_analysis(&analyzer.analyze("deva").unwrap())
            .unwrap();
        formatter
            .format_analysis(&analyzer.analyze("xyz").unwrap())
            .unwrap();
        formatter.finish().unwrap();

        let parsed: Vec<WordAnalysis> = serde_json::from_slice(&formatter.writer).unwrap();
        assert_eq!(parsed.len(), 2);
        assert!(parsed[0].is_valid);
        assert!(!parsed[1].is_valid);
    }
}
