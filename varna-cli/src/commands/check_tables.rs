//! Check-tables command implementation

use crate::error::CliError;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use varna_core::PhonologyTables;

/// Arguments for the check-tables command
#[derive(Debug, Args)]
pub struct CheckTablesArgs {
    /// Devanagari table TOML
    #[arg(long, value_name = "FILE", required = true)]
    pub devanagari: PathBuf,

    /// IAST table TOML
    #[arg(long, value_name = "FILE", required = true)]
    pub iast: PathBuf,
}

impl CheckTablesArgs {
    /// Execute the check-tables command
    pub fn execute(&self) -> Result<()> {
        println!(
            "Checking tables: {} and {}",
            self.devanagari.display(),
            self.iast.display()
        );

        let tables = match PhonologyTables::from_files(&self.devanagari, &self.iast) {
            Ok(tables) => tables,
            Err(e) => {
                println!("✗ Tables are invalid!");
                println!("  Error: {e}");
                return Err(CliError::TableCheck(e.to_string()).into());
            }
        };

        let issues = tables.check_parity();
        if !issues.is_empty() {
            println!("✗ Tables disagree on {} letter(s):", issues.len());
            for issue in &issues {
                println!("  {issue}");
            }
            return Err(CliError::TableCheck(format!("{} parity issue(s)", issues.len())).into());
        }

        println!("✓ Tables are valid!");
        for table in [tables.devanagari(), tables.iast()] {
            println!(
                "  {}: {} classes, {} symbols",
                table.name(),
                table.classes().len(),
                table.symbol_count()
            );
        }
        Ok(())
    }
}
