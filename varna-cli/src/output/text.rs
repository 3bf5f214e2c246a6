//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;
use varna_api::{ClassificationDto, PhonemeDto, WordAnalysis};

/// Plain text formatter
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

fn describe(phoneme: &PhonemeDto) -> String {
    match (&phoneme.class, phoneme.place) {
        (Some(class), Some(place)) => format!("{}({class}, {place})", phoneme.grapheme),
        _ if phoneme.recognized => format!("{}(-)", phoneme.grapheme),
        _ => format!("{}(?)", phoneme.grapheme),
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_analysis(&mut self, analysis: &WordAnalysis) -> Result<()> {
        writeln!(self.writer, "{}", analysis.text)?;
        match &analysis.error {
            None => writeln!(self.writer, "  script: {}, valid", analysis.script)?,
            Some(reason) => writeln!(
                self.writer,
                "  script: {}, invalid: {reason}",
                analysis.script
            )?,
        }
        writeln!(self.writer, "  normalized: {}", analysis.normalized)?;

        let phonemes: Vec<String> = analysis.phonemes.iter().map(describe).collect();
        writeln!(self.writer, "  phonemes: {}", phonemes.join(" "))?;
        Ok(())
    }

    fn format_classification(&mut self, c: &ClassificationDto) -> Result<()> {
        let Some(class) = &c.class else {
            writeln!(self.writer, "{}: unclassified", c.phoneme)?;
            return Ok(());
        };

        let kind = if c.is_vowel { "vowel" } else { "consonant" };
        let place = c.place.map_or("none", |p| p.as_str());
        writeln!(
            self.writer,
            "{}: {kind}, {place}, {class} [{}]",
            c.phoneme,
            c.members.join(" ")
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
