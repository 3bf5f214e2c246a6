//! Core error types
//!
//! Only table construction can fail. Analysis operations report problems
//! through their return values instead.

use thiserror::Error;

/// Errors raised while building classification tables
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// TOML could not be parsed into the table schema
    #[error("failed to parse {source_name} table: {message}")]
    Parse {
        /// Table being parsed (script code or file path)
        source_name: String,
        /// Parser message
        message: String,
    },

    /// Table file could not be read
    #[error("failed to read table file {path}: {message}")]
    Io {
        /// The file path
        path: String,
        /// The underlying I/O message
        message: String,
    },

    /// The table declares a different script than the slot it was loaded into
    #[error("table declares script '{found}', expected '{expected}'")]
    ScriptMismatch {
        /// Script the slot requires
        expected: String,
        /// Script the table declares
        found: String,
    },

    /// A group without members
    #[error("{script} table: group '{group}' has no members")]
    EmptyGroup {
        /// Script code
        script: String,
        /// Group name
        group: String,
    },

    /// A grapheme listed in more than one place
    #[error("{script} table: '{grapheme}' is listed more than once")]
    DuplicateEntry {
        /// Script code
        script: String,
        /// The repeated grapheme
        grapheme: String,
    },

    /// Groups must be vowels or consonants
    #[error("{script} table: group '{group}' must be a vowel or consonant group")]
    OtherCategoryGroup {
        /// Script code
        script: String,
        /// Group name
        group: String,
    },

    /// A vowel sign pointing at something that is not a classified vowel
    #[error("{script} table: vowel sign '{sign}' maps to '{target}', which is not a classified vowel")]
    DanglingVowelSign {
        /// Script code
        script: String,
        /// The vowel sign
        sign: String,
        /// Its declared independent vowel
        target: String,
    },
}

impl TableError {
    pub(crate) fn parse(source_name: impl Into<String>, err: impl std::fmt::Display) -> Self {
        TableError::Parse {
            source_name: source_name.into(),
            message: err.to_string(),
        }
    }
}

/// Result type for table construction
pub type Result<T> = std::result::Result<T, TableError>;
