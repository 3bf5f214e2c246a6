//! Per-script savarna table with O(1) lookup
//!
//! Built once from a validated [`TableConfig`] and read-only afterwards.

use crate::error::Result;
use crate::phoneme::{Category, ClassId, Place};
use crate::script::Script;
use crate::tables::config::TableConfig;
use serde::Serialize;
use smallvec::SmallVec;
use std::collections::HashMap;

/// A named set of mutually homorganic phonemes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SavarnaClass {
    name: String,
    category: Category,
    place: Option<Place>,
    members: SmallVec<[String; 5]>,
}

impl SavarnaClass {
    /// Group name from the table
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Vowel or consonant
    pub fn category(&self) -> Category {
        self.category
    }

    /// Shared articulation place
    pub fn place(&self) -> Option<Place> {
        self.place
    }

    /// Members in table order
    pub fn members(&self) -> &[String] {
        &self.members
    }

    /// Is `grapheme` (a table key) a member?
    pub fn contains(&self, grapheme: &str) -> bool {
        self.members.iter().any(|m| m == grapheme)
    }

    /// Number of members
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Classes built from a validated table are never empty
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// What the table knows about one key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableEntry {
    /// Broad category
    pub category: Category,
    /// Articulation place
    pub place: Option<Place>,
    /// Savarna class, `None` for symbols
    pub class: Option<ClassId>,
}

/// Classification table for one script
#[derive(Debug, Clone)]
pub struct ScriptTable {
    script: Script,
    name: String,
    classes: Vec<SavarnaClass>,
    entries: HashMap<String, TableEntry>,
    /// Longest key in chars, bounds greedy matching
    max_key_chars: usize,
    symbol_count: usize,
}

impl ScriptTable {
    /// Create from configuration
    pub fn from_config(config: &TableConfig) -> Result<Self> {
        config.validate()?;

        let mut classes = Vec::with_capacity(config.groups.len());
        let mut entries = HashMap::new();

        for (index, group) in config.groups.iter().enumerate() {
            let entry = TableEntry {
                category: group.category,
                place: group.place,
                class: Some(ClassId(index)),
            };
            for member in &group.members {
                entries.insert(member.clone(), entry);
            }
            classes.push(SavarnaClass {
                name: group.name.clone(),
                category: group.category,
                place: group.place,
                members: group.members.iter().cloned().collect(),
            });
        }

        for symbol in &config.symbols {
            entries.insert(
                symbol.grapheme.clone(),
                TableEntry {
                    category: Category::Other,
                    place: None,
                    class: None,
                },
            );
        }

        // Signs share the entry of their independent vowel
        for (sign, target) in &config.vowel_signs {
            if let Some(entry) = entries.get(target).copied() {
                entries.insert(sign.clone(), entry);
            }
        }

        let max_key_chars = entries.keys().map(|k| k.chars().count()).max().unwrap_or(0);

        log::debug!(
            "built {} table: {} classes, {} symbols, {} keys",
            config.metadata.script.code(),
            classes.len(),
            config.symbols.len(),
            entries.len()
        );

        Ok(Self {
            script: config.metadata.script,
            name: config.metadata.name.clone(),
            classes,
            entries,
            max_key_chars,
            symbol_count: config.symbols.len(),
        })
    }

    /// Table with no entries; every lookup misses
    pub fn empty(script: Script) -> Self {
        Self {
            script,
            name: script.name().to_string(),
            classes: Vec::new(),
            entries: HashMap::new(),
            max_key_chars: 0,
            symbol_count: 0,
        }
    }

    /// Script this table classifies
    pub fn script(&self) -> Script {
        self.script
    }

    /// Display name from the table metadata
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All savarna classes
    pub fn classes(&self) -> &[SavarnaClass] {
        &self.classes
    }

    /// Class by id
    pub fn class(&self, id: ClassId) -> Option<&SavarnaClass> {
        self.classes.get(id.0)
    }

    /// Look up a normalized key - hot path
    #[inline]
    pub fn lookup(&self, key: &str) -> Option<TableEntry> {
        self.entries.get(key).copied()
    }

    /// Does the table know this key?
    #[inline]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Longest key length in chars
    pub fn max_key_chars(&self) -> usize {
        self.max_key_chars
    }

    /// Number of recognized symbols
    pub fn symbol_count(&self) -> usize {
        self.symbol_count
    }

    /// True when the table has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
