//! CLI command implementations

use crate::config::CliConfig;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use varna_api::{Analyzer, Script};

pub mod analyze;
pub mod check_tables;
pub mod classify;
pub mod generate_config;
pub mod homorganic;
pub mod normalize;

/// Sanskrit phonological analysis for Devanagari and IAST
#[derive(Debug, Parser)]
#[command(name = "varna", version, about)]
pub struct Cli {
    /// Configuration file
    #[arg(short, long, value_name = "FILE", global = true, env = "VARNA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the full analysis pipeline on words
    Analyze(analyze::AnalyzeArgs),

    /// Print the canonical form of words
    Normalize(normalize::NormalizeArgs),

    /// Classify phonemes by savarna class and place
    Classify(classify::ClassifyArgs),

    /// Check whether two phonemes are savarna
    Homorganic(homorganic::HomorganicArgs),

    /// Load custom classification tables and check their parity
    CheckTables(check_tables::CheckTablesArgs),

    /// Generate a CLI configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ListCommands {
    /// List supported scripts
    Scripts,

    /// List available output formats
    Formats,
}

/// Script names accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ScriptArg {
    /// Latin transliteration with diacritics
    Iast,
    /// Native Devanagari script
    Devanagari,
}

impl From<ScriptArg> for Script {
    fn from(arg: ScriptArg) -> Self {
        match arg {
            ScriptArg::Iast => Script::Iast,
            ScriptArg::Devanagari => Script::Devanagari,
        }
    }
}

impl Cli {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load(self.config.as_deref())?;

        match &self.command {
            Commands::Analyze(args) => args.execute(&config),
            Commands::Normalize(args) => args.execute(&config),
            Commands::Classify(args) => args.execute(&config),
            Commands::Homorganic(args) => args.execute(&config),
            Commands::CheckTables(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => {
                list(*subcommand);
                Ok(())
            }
        }
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}

fn list(subcommand: ListCommands) {
    match subcommand {
        ListCommands::Scripts => {
            println!("Supported scripts:");
            for script in Script::known() {
                println!("  {:<12} {}", script.code(), script.name());
            }
        }
        ListCommands::Formats => {
            println!("Output formats:");
            println!("  text  Human readable text");
            println!("  json  JSON array of results");
        }
    }
}

/// Analyzer for `config`, with per-command overrides already applied
pub(crate) fn build_analyzer(config: &CliConfig) -> Result<Analyzer> {
    let api_config = config.to_api_config()?;
    Analyzer::with_config(api_config).context("Failed to set up analyzer")
}
