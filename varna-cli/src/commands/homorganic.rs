//! Homorganic command implementation

use super::build_analyzer;
use crate::config::CliConfig;
use anyhow::Result;
use clap::Args;

/// Arguments for the homorganic command
#[derive(Debug, Args)]
pub struct HomorganicArgs {
    /// First phoneme
    pub first: String,

    /// Second phoneme
    pub second: String,
}

impl HomorganicArgs {
    /// Execute the homorganic command; prints `true` or `false`
    pub fn execute(&self, config: &CliConfig) -> Result<()> {
        let analyzer = build_analyzer(config)?;
        println!("{}", analyzer.are_homorganic(&self.first, &self.second));
        Ok(())
    }
}
