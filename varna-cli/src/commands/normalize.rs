//! Normalize command implementation

use super::{build_analyzer, ScriptArg};
use crate::config::CliConfig;
use anyhow::Result;
use clap::Args;
use varna_api::Script;

/// Arguments for the normalize command
#[derive(Debug, Args)]
pub struct NormalizeArgs {
    /// Words to normalize
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,

    /// Script to normalize into [default: from config, else iast]
    #[arg(short, long, value_enum)]
    pub target: Option<ScriptArg>,
}

impl NormalizeArgs {
    /// Execute the normalize command
    pub fn execute(&self, config: &CliConfig) -> Result<()> {
        let mut config = config.clone();
        if let Some(target) = self.target {
            config.analysis.target_script = Script::from(target).code().to_string();
        }
        let analyzer = build_analyzer(&config)?;

        for word in &self.words {
            println!("{}", analyzer.normalize(word));
        }
        Ok(())
    }
}
