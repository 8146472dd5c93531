//! Feature modules - file-level handling around the core
//!
//! - Mapping file persistence (JSON)
//! - Whole-document and file processing

pub mod document;
pub mod mappings;

// Re-export commonly used types
pub use document::{check_file, fix_file, fixer_for, run, FixOptions, FixReport, LineChange};
pub use mappings::{
    load_mappings, mappings_to_json, parse_mappings, save_mappings, DEFAULT_MAPPINGS_FILE,
};
