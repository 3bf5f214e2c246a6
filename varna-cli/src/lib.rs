//! Varna CLI library
//!
//! This library provides the command-line interface for the Varna
//! Sanskrit phonological analysis engine.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;

pub use error::{CliError, CliResult};
