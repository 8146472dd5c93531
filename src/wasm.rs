//! WASM bindings for texheading
//!
//! JavaScript-accessible heading fixing. There is no terminal in the browser,
//! so every proposed rendering is accepted; custom mappings can be passed in
//! as a plain object and are layered on the built-in table.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "wasm")]
use crate::data::symbols::FxIndexMap;
#[cfg(feature = "wasm")]
use crate::{HeadingFixer, SymbolTable};

/// Options accepted by `fixDocument` (exposed to WASM)
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize, Default)]
pub struct FixDocumentOptions {
    /// Extra `token → rendering` entries layered on the built-in table
    #[serde(default)]
    pub mappings: FxIndexMap<String, String>,
}

/// A changed line as seen from JavaScript
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
pub struct ChangedLine {
    pub line: usize,
    pub before: String,
    pub after: String,
}

/// Document fixing result with metadata
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
pub struct FixDocumentResult {
    /// The fixed document
    pub output: String,
    /// Lines that changed
    pub changes: Vec<ChangedLine>,
    /// Full mapping table after the run
    pub mappings: FxIndexMap<String, String>,
}

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Plain-text rendering of a math formula (without $ delimiters)
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "transliterate")]
pub fn transliterate_wasm(input: &str) -> String {
    crate::transliterate(input)
}

/// Fix a single heading line with the built-in mappings
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "processLine")]
pub fn process_line_wasm(line: &str) -> String {
    crate::process_line(line)
}

/// Fix every heading in a document
///
/// # Arguments
/// * `input` - Full LaTeX document
/// * `options` - `{ mappings?: Record<string, string> }`
///
/// # Returns
/// `{ output, changes: [{ line, before, after }], mappings }`
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "fixDocument")]
pub fn fix_document_wasm(input: &str, options: JsValue) -> Result<JsValue, JsValue> {
    let opts: FixDocumentOptions = serde_wasm_bindgen::from_value(options).unwrap_or_default();

    let mut table = SymbolTable::with_defaults();
    table.merge(opts.mappings);
    let mut fixer = HeadingFixer::new(table);
    let (output, changes) = fixer.fix_document(input);

    let result = FixDocumentResult {
        output,
        changes: changes
            .into_iter()
            .map(|c| ChangedLine {
                line: c.line_number,
                before: c.before,
                after: c.after,
            })
            .collect(),
        mappings: fixer.into_table().export().clone(),
    };

    serde_wasm_bindgen::to_value(&result).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Get version information
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "getVersion")]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
