//! The `varna` command-line tool

use clap::Parser;
use varna_cli::commands::Cli;

fn main() -> anyhow::Result<()> {
    Cli::parse().execute()
}
