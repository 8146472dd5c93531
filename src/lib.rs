//! # texheading
//!
//! Makes LaTeX section headings with inline math safe for PDF bookmarks.
//!
//! hyperref cannot put typeset math into the PDF outline, so a heading such
//! as `\section{The $\alpha$ decay}` produces warnings and a garbled bookmark.
//! This crate wraps each formula in `\texorpdfstring{$math$}{text}`, deriving
//! the plain-text alternative from a symbol table and a small transliteration
//! pipeline.
//!
//! ## Features
//!
//! - **Transliteration**: Greek letters, operators, arrows, fractions, roots,
//!   super- and subscripts to unicode text
//! - **Editable Mappings**: 250+ built-in mappings, extended from a JSON file
//! - **Idempotent**: already wrapped formulas are left alone
//! - **Interactive**: accept, reject or override each rendering
//! - **WASM Support**: Compiles to WebAssembly for browser usage
//!
//! ## Usage Examples
//!
//! ### Formula Transliteration
//!
//! ```rust
//! use texheading::transliterate;
//!
//! assert_eq!(transliterate(r"\alpha + \beta"), "α + β");
//! assert_eq!(transliterate(r"\frac{x+1}{y-1}"), "(x+1)/(y-1)");
//! assert_eq!(transliterate(r"x^2 + y_i"), "x² + yᵢ");
//! ```
//!
//! ### Heading Lines
//!
//! ```rust
//! use texheading::process_line;
//!
//! assert_eq!(
//!     process_line(r"\section{Study of $\frac{a}{b}$ ratios}"),
//!     r"\section{Study of \texorpdfstring{$\frac{a}{b}$}{a/b} ratios}"
//! );
//! ```
//!
//! ### Whole Documents
//!
//! ```rust
//! use texheading::HeadingFixer;
//!
//! let mut fixer = HeadingFixer::default();
//! let (fixed, changes) = fixer.fix_document("\\section{$\\alpha$ decay}\nBody $x$.\n");
//! assert_eq!(fixed, "\\section{\\texorpdfstring{$\\alpha$}{α} decay}\nBody $x$.\n");
//! assert_eq!(changes.len(), 1);
//! ```

use lazy_static::lazy_static;

/// Core fixing modules
pub mod core;

/// Data layer - static mappings and character tables
pub mod data;

/// Feature modules - file handling around the core
pub mod features;

/// Utility modules
pub mod utils;

/// WASM bindings (feature-gated)
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export core types
pub use core::{
    find_math_spans, fix_heading_line, is_already_wrapped, is_heading_line, AcceptAll, Candidate,
    HeadingFixer, MathSpan, PromptResolver, RejectAll, RenderingSource, Resolution,
    ScriptedResolver, SpanResolver, SymbolTable, Transliterator,
};

// Re-export feature modules
pub use features::document;
pub use features::mappings;
pub use features::{FixOptions, FixReport, LineChange, DEFAULT_MAPPINGS_FILE};

// Re-export symbol data
pub use data::scripts;
pub use data::symbols;

// Re-export utilities
pub use utils::error::{FixError, FixResult, FixWarning};

lazy_static! {
    static ref DEFAULT_TABLE: SymbolTable = SymbolTable::with_defaults();
}

/// Plain-text rendering of LaTeX math using the built-in mappings
///
/// # Arguments
/// * `markup` - math content without `$` delimiters
///
/// # Returns
/// Unicode text, never failing on malformed input
pub fn transliterate(markup: &str) -> String {
    core::transliterate::transliterate(markup, &DEFAULT_TABLE)
}

/// Plain-text rendering of LaTeX math using a custom table
pub fn transliterate_with(markup: &str, table: &SymbolTable) -> String {
    core::transliterate::transliterate(markup, table)
}

/// Fix one heading line with the built-in mappings, accepting every rendering
///
/// Lines that are not `\section{` / `\subsection{` headings come back unchanged.
pub fn process_line(line: &str) -> String {
    fix_heading_line(line, &DEFAULT_TABLE).into_owned()
}

/// Fix every heading in a document with the built-in mappings
pub fn fix_document(text: &str) -> String {
    HeadingFixer::new(DEFAULT_TABLE.clone()).fix_document(text).0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transliterate_basic() {
        assert_eq!(transliterate(r"\alpha"), "α");
        assert_eq!(transliterate(r"\alpha + \unknown + \beta"), "α + β");
    }

    #[test]
    fn test_transliterate_with_custom_table() {
        let mut table = SymbolTable::with_defaults();
        table.upsert(r"\alpha", "alpha");
        assert_eq!(transliterate_with(r"\alpha", &table), "alpha");
        assert_eq!(transliterate(r"\alpha"), "α");
    }

    #[test]
    fn test_process_line() {
        assert_eq!(
            process_line(r"\section{Introduction to $\alpha$ particles}"),
            r"\section{Introduction to \texorpdfstring{$\alpha$}{α} particles}"
        );
        assert_eq!(process_line("plain $x$ text"), "plain $x$ text");
    }

    #[test]
    fn test_fix_document() {
        let text = "\\subsection{The $x^2$ function}\n";
        assert_eq!(
            fix_document(text),
            "\\subsection{The \\texorpdfstring{$x^2$}{x²} function}\n"
        );
    }
}
