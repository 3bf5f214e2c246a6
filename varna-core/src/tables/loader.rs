//! Embedded table loader
//!
//! The default tables are compiled into the crate and built on first access.

use crate::error::Result;
use crate::tables::PhonologyTables;
use std::sync::{Arc, OnceLock};

/// Embedded Devanagari table source
pub const DEVANAGARI_TOML: &str = include_str!("../../configs/scripts/devanagari.toml");

/// Embedded IAST table source
pub const IAST_TOML: &str = include_str!("../../configs/scripts/iast.toml");

static EMBEDDED: OnceLock<Arc<PhonologyTables>> = OnceLock::new();

/// Build a fresh copy of the embedded tables
pub fn load_embedded() -> Result<PhonologyTables> {
    PhonologyTables::from_toml_strs(DEVANAGARI_TOML, IAST_TOML)
}

/// Process-wide embedded tables, built once
///
/// A broken embedded table degrades to empty tables (every query misses)
/// rather than aborting the caller.
pub fn shared() -> Arc<PhonologyTables> {
    EMBEDDED.get_or_init(build_embedded).clone()
}

/// Borrow the process-wide embedded tables
pub fn embedded() -> &'static PhonologyTables {
    EMBEDDED.get_or_init(build_embedded).as_ref()
}

fn build_embedded() -> Arc<PhonologyTables> {
    match load_embedded() {
        Ok(tables) => Arc::new(tables),
        Err(e) => {
            log::error!("failed to load embedded tables: {e}");
            Arc::new(PhonologyTables::empty())
        }
    }
}
