//! Configuration structures and validation
//!
//! This module defines the TOML schema for classification tables.

use crate::error::{Result, TableError};
use crate::phoneme::{Category, Place};
use crate::script::Script;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Root table configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableConfig {
    pub metadata: Metadata,
    #[serde(default)]
    pub groups: Vec<GroupConfig>,
    #[serde(default)]
    pub symbols: Vec<SymbolConfig>,
    /// Dependent vowel sign → independent vowel
    #[serde(default)]
    pub vowel_signs: BTreeMap<String, String>,
}

/// Table metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub script: Script,
    pub name: String,
}

/// One savarna group
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupConfig {
    pub name: String,
    pub category: Category,
    #[serde(default)]
    pub place: Option<Place>,
    pub members: Vec<String>,
}

/// A recognized unit that belongs to no group
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymbolConfig {
    pub grapheme: String,
    pub name: String,
}

impl TableConfig {
    /// Parse a table from TOML
    pub fn from_toml_str(source_name: &str, toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str).map_err(|e| TableError::parse(source_name, e))
    }

    /// Validate configuration
    pub(crate) fn validate(&self) -> Result<()> {
        let script = self.metadata.script.code().to_string();
        let mut seen = HashSet::new();
        let mut vowels = HashSet::new();

        for group in &self.groups {
            if group.members.is_empty() {
                return Err(TableError::EmptyGroup {
                    script,
                    group: group.name.clone(),
                });
            }
            if group.category == Category::Other {
                return Err(TableError::OtherCategoryGroup {
                    script,
                    group: group.name.clone(),
                });
            }
            for member in &group.members {
                if !seen.insert(member.as_str()) {
                    return Err(TableError::DuplicateEntry {
                        script,
                        grapheme: member.clone(),
                    });
                }
                if group.category == Category::Vowel {
                    vowels.insert(member.as_str());
                }
            }
        }

        for symbol in &self.symbols {
            if !seen.insert(symbol.grapheme.as_str()) {
                return Err(TableError::DuplicateEntry {
                    script,
                    grapheme: symbol.grapheme.clone(),
                });
            }
        }

        for (sign, target) in &self.vowel_signs {
            if seen.contains(sign.as_str()) {
                return Err(TableError::DuplicateEntry {
                    script,
                    grapheme: sign.clone(),
                });
            }
            if !vowels.contains(target.as_str()) {
                return Err(TableError::DanglingVowelSign {
                    script,
                    sign: sign.clone(),
                    target: target.clone(),
                });
            }
        }

        Ok(())
    }
}
