//! Mapping file persistence
//!
//! The mapping file is a flat JSON object of `token → rendering` strings,
//! pretty-printed with unicode left unescaped so it stays hand-editable:
//!
//! ```json
//! {
//!   "\\alpha": "α",
//!   "\\mathcal{O}(n)": "O(n)"
//! }
//! ```

use std::fs;
use std::path::Path;

use crate::core::table::SymbolTable;
use crate::data::symbols::FxIndexMap;
use crate::utils::error::{FixError, FixResult};

/// Mapping file used when none is given on the command line
pub const DEFAULT_MAPPINGS_FILE: &str = "math_mappings.json";

/// Parse mapping file contents, keeping the file's entry order
pub fn parse_mappings(text: &str) -> FixResult<FxIndexMap<String, String>> {
    let mappings: FxIndexMap<String, String> = serde_json::from_str(text)?;
    Ok(mappings)
}

/// Read and parse the mapping file at `path`
pub fn load_mappings(path: &Path) -> FixResult<FxIndexMap<String, String>> {
    let text = fs::read_to_string(path).map_err(|e| FixError::io_at(path, e))?;
    parse_mappings(&text).map_err(|e| match e {
        FixError::MappingFormat { message, .. } => FixError::mapping_at(path, message),
        other => other,
    })
}

/// Serialize the whole table the way `save_mappings` writes it
pub fn mappings_to_json(table: &SymbolTable) -> FixResult<String> {
    let mut json = serde_json::to_string_pretty(table.export())?;
    json.push('\n');
    Ok(json)
}

/// Write every entry of `table` to `path`
pub fn save_mappings(path: &Path, table: &SymbolTable) -> FixResult<()> {
    let json = mappings_to_json(table)?;
    fs::write(path, json).map_err(|e| FixError::io_at(path, e))?;
    log::debug!("Saved {} mappings to {}", table.len(), path.display());
    Ok(())
}
