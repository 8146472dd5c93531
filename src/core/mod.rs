//! Core fixing modules
//!
//! - `table`: editable token → rendering lookup
//! - `transliterate`: LaTeX math markup → plain unicode text
//! - `resolve`: per-span accept / reject / custom decisions
//! - `heading`: heading scanner that wraps math spans

pub mod heading;
pub mod resolve;
pub mod table;
pub mod transliterate;

pub use heading::{
    find_math_spans, fix_heading_line, is_already_wrapped, is_heading_line, propose_rendering,
    rewrite_heading, wrap, HeadingFixer, MathSpan, WRAP_COMMAND,
};
pub use resolve::{
    AcceptAll, Candidate, PromptResolver, RejectAll, RenderingSource, Resolution,
    ScriptedResolver, SpanResolver,
};
pub use table::SymbolTable;
pub use transliterate::{Transliterator, DIVISION_PLACEHOLDER};
