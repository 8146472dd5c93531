//! Data layer - Static mappings
//!
//! This module contains all static data used for transliteration:
//! - Built-in symbol mappings that seed the symbol table
//! - Unicode superscript/subscript character tables

pub mod scripts;
pub mod symbols;

// Re-export commonly used items
pub use scripts::{to_subscript, to_superscript, SUBSCRIPTS, SUPERSCRIPTS};
pub use symbols::{FxIndexMap, DEFAULT_GROUPS, DEFAULT_SYMBOLS};
