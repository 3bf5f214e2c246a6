//! Classification tables
//!
//! Both per-script tables are independent literal data. [`PhonologyTables`]
//! groups them and checks that they agree on articulation places.

pub mod config;
pub mod inventory;
pub(crate) mod loader;

pub use config::TableConfig;
pub use inventory::{SavarnaClass, ScriptTable, TableEntry};
pub use loader::{embedded, load_embedded, shared, DEVANAGARI_TOML, IAST_TOML};

use crate::error::{Result, TableError};
use crate::phoneme::{Category, Place};
use crate::scheme;
use crate::script::Script;
use std::fmt;
use std::path::Path;

/// The immutable table set consumed by every query
#[derive(Debug, Clone)]
pub struct PhonologyTables {
    devanagari: ScriptTable,
    iast: ScriptTable,
}

impl PhonologyTables {
    /// Pair two tables, rejecting a table loaded into the wrong slot
    pub fn new(devanagari: ScriptTable, iast: ScriptTable) -> Result<Self> {
        for (expected, table) in [
            (Script::Devanagari, &devanagari),
            (Script::Iast, &iast),
        ] {
            if table.script() != expected {
                return Err(TableError::ScriptMismatch {
                    expected: expected.code().to_string(),
                    found: table.script().code().to_string(),
                });
            }
        }

        let tables = Self { devanagari, iast };
        for issue in tables.check_parity() {
            log::warn!("table parity: {issue}");
        }
        Ok(tables)
    }

    /// Build from parsed configurations
    pub fn from_configs(devanagari: &TableConfig, iast: &TableConfig) -> Result<Self> {
        Self::new(
            ScriptTable::from_config(devanagari)?,
            ScriptTable::from_config(iast)?,
        )
    }

    /// Build from TOML sources
    pub fn from_toml_strs(devanagari: &str, iast: &str) -> Result<Self> {
        let deva = TableConfig::from_toml_str(Script::Devanagari.code(), devanagari)?;
        let iast = TableConfig::from_toml_str(Script::Iast.code(), iast)?;
        Self::from_configs(&deva, &iast)
    }

    /// Build from TOML files on disk
    pub fn from_files(devanagari: &Path, iast: &Path) -> Result<Self> {
        let read = |path: &Path| {
            std::fs::read_to_string(path).map_err(|e| TableError::Io {
                path: path.display().to_string(),
                message: e.to_string(),
            })
        };
        let deva_src = read(devanagari)?;
        let iast_src = read(iast)?;

        let deva = TableConfig::from_toml_str(&devanagari.display().to_string(), &deva_src)?;
        let iast = TableConfig::from_toml_str(&iast.display().to_string(), &iast_src)?;
        Self::from_configs(&deva, &iast)
    }

    /// Tables with no entries; every query misses
    pub fn empty() -> Self {
        Self {
            devanagari: ScriptTable::empty(Script::Devanagari),
            iast: ScriptTable::empty(Script::Iast),
        }
    }

    /// Table for a script, `None` for [`Script::Unknown`]
    pub fn table(&self, script: Script) -> Option<&ScriptTable> {
        match script {
            Script::Devanagari => Some(&self.devanagari),
            Script::Iast => Some(&self.iast),
            Script::Unknown => None,
        }
    }

    /// Devanagari table
    pub fn devanagari(&self) -> &ScriptTable {
        &self.devanagari
    }

    /// IAST table
    pub fn iast(&self) -> &ScriptTable {
        &self.iast
    }

    /// Compare every transliteration pair across the two tables
    ///
    /// Letters absent from both tables are skipped, so a reduced inventory
    /// only has to be consistent with itself.
    pub fn check_parity(&self) -> Vec<ParityIssue> {
        let mut issues = Vec::new();

        for (deva, iast) in scheme::letter_pairs() {
            let left = self.devanagari.lookup(&deva);
            let right = self.iast.lookup(iast);

            let kind = match (left, right) {
                (None, None) => continue,
                (Some(_), None) => ParityKind::MissingIast,
                (None, Some(_)) => ParityKind::MissingDevanagari,
                (Some(l), Some(r)) if l.place != r.place => ParityKind::Place {
                    devanagari: l.place,
                    iast: r.place,
                },
                (Some(l), Some(r)) if l.category != r.category => ParityKind::Category {
                    devanagari: l.category,
                    iast: r.category,
                },
                _ => continue,
            };

            issues.push(ParityIssue {
                devanagari: deva,
                iast: iast.to_string(),
                kind,
            });
        }

        issues
    }
}

/// How a transliteration pair disagrees
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParityKind {
    /// Only the IAST table lacks the letter
    MissingIast,
    /// Only the Devanagari table lacks the letter
    MissingDevanagari,
    /// Articulation places differ
    Place {
        devanagari: Option<Place>,
        iast: Option<Place>,
    },
    /// Categories differ
    Category {
        devanagari: Category,
        iast: Category,
    },
}

/// A transliteration pair the two tables classify differently
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParityIssue {
    pub devanagari: String,
    pub iast: String,
    pub kind: ParityKind,
}

impl fmt::Display for ParityIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let place = |p: &Option<Place>| p.map_or("none", |p| p.as_str());
        match &self.kind {
            ParityKind::MissingIast => {
                write!(f, "{} / {}: missing from IAST table", self.devanagari, self.iast)
            }
            ParityKind::MissingDevanagari => write!(
                f,
                "{} / {}: missing from Devanagari table",
                self.devanagari, self.iast
            ),
            ParityKind::Place { devanagari, iast } => write!(
                f,
                "{} / {}: place {} vs {}",
                self.devanagari,
                self.iast,
                place(devanagari),
                place(iast)
            ),
            ParityKind::Category { devanagari, iast } => write!(
                f,
                "{} / {}: category {} vs {}",
                self.devanagari, self.iast, devanagari, iast
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEVA: &str = r#"
[metadata]
script = "devanagari"
name = "Reduced"

[[groups]]
name = "ka-varga"
category = "consonant"
place = "guttural"
members = ["क", "ख"]
"#;

    const IAST: &str = r#"
[metadata]
script = "iast"
name = "Reduced"

[[groups]]
name = "ka-varga"
category = "consonant"
place = "guttural"
members = ["k", "kh"]
"#;

    #[test]
    fn test_reduced_tables_have_parity() {
        let tables = PhonologyTables::from_toml_strs(DEVA, IAST).unwrap();
        assert!(tables.check_parity().is_empty());
    }

    #[test]
    fn test_swapped_tables_rejected() {
        let err = PhonologyTables::from_toml_strs(IAST, DEVA).unwrap_err();
        assert!(matches!(err, TableError::ScriptMismatch { .. }));
    }

    #[test]
    fn test_place_divergence_reported() {
        let iast = IAST.replace("guttural", "palatal");
        let tables = PhonologyTables::from_toml_strs(DEVA, &iast).unwrap();
        let issues = tables.check_parity();
        assert_eq!(issues.len(), 2);
        assert!(matches!(
            issues[0].kind,
            ParityKind::Place {
                devanagari: Some(Place::Guttural),
                iast: Some(Place::Palatal)
            }
        ));
        assert!(issues[0].to_string().contains("guttural vs palatal"));
    }

    #[test]
    fn test_missing_letter_reported() {
        let iast = IAST.replace(r#"["k", "kh"]"#, r#"["k"]"#);
        let tables = PhonologyTables::from_toml_strs(DEVA, &iast).unwrap();
        let issues = tables.check_parity();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].devanagari, "ख");
        assert_eq!(issues[0].kind, ParityKind::MissingIast);
    }

    #[test]
    fn test_unknown_script_has_no_table() {
        let tables = PhonologyTables::empty();
        assert!(tables.table(Script::Unknown).is_none());
        assert!(tables.table(Script::Iast).unwrap().is_empty());
    }
}
