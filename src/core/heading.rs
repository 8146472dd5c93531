//! Heading scanner
//!
//! Finds inline math in `\section{...}` / `\subsection{...}` lines and wraps
//! each formula as `\texorpdfstring{$math$}{text}`, so hyperref gets plain
//! text for the PDF outline while the document still typesets the math.
//!
//! Each span found in a heading line ends in exactly one state:
//!
//! ```text
//! Found ─┬─ already inside \texorpdfstring ──▶ skip
//!        ├─ exact table hit ─────────────────▶ propose table rendering
//!        └─ table miss ──────────────────────▶ propose transliteration
//! proposal ─▶ resolver ─▶ Accept | Reject | Custom(rendering)
//! ```
//!
//! Replacements are computed against the unmodified line and applied from
//! the last span to the first, so earlier offsets stay valid.

use std::borrow::Cow;

use lazy_static::lazy_static;
use regex::Regex;

use crate::core::resolve::{AcceptAll, Candidate, RenderingSource, Resolution, SpanResolver};
use crate::core::table::SymbolTable;
use crate::core::transliterate::transliterate;

/// Command that carries a PDF-safe alternative to its first argument
pub const WRAP_COMMAND: &str = r"\texorpdfstring";

/// Inline math delimiter
pub const MATH_DELIMITER: char = '$';

lazy_static! {
    /// `\section{` or `\subsection{`, optionally indented, spaces before the brace allowed
    static ref HEADING_RE: Regex = Regex::new(r"^\s*\\(?:sub)?section\s*\{").unwrap();

    /// Opening of a wrap command up to the brace of its first argument
    static ref WRAP_OPENER_RE: Regex = Regex::new(r"\\texorpdfstring\s*\{").unwrap();
}

/// A `$...$` span within a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MathSpan<'a> {
    /// Byte offset of the opening delimiter
    pub start: usize,
    /// Byte offset just past the closing delimiter
    pub end: usize,
    /// Text between the delimiters
    pub content: &'a str,
}

impl<'a> MathSpan<'a> {
    /// The span including its delimiters
    pub fn raw<'l>(&self, line: &'l str) -> &'l str {
        &line[self.start..self.end]
    }
}

/// True when `line` opens a section or subsection heading
pub fn is_heading_line(line: &str) -> bool {
    HEADING_RE.is_match(line)
}

/// All non-empty `$...$` spans, left to right.
///
/// Delimiters pair up in order. An unpaired trailing `$` yields nothing, an
/// empty `$$` pair is consumed without producing a span, and `\$` is a
/// literal dollar sign rather than a delimiter.
pub fn find_math_spans(line: &str) -> Vec<MathSpan<'_>> {
    let mut spans = Vec::new();
    let mut open: Option<usize> = None;

    for (i, c) in line.char_indices() {
        if c != MATH_DELIMITER || is_escaped(line, i) {
            continue;
        }
        match open.take() {
            None => open = Some(i),
            Some(start) if i == start + 1 => {}
            Some(start) => spans.push(MathSpan {
                start,
                end: i + 1,
                content: &line[start + 1..i],
            }),
        }
    }

    spans
}

/// Odd number of backslashes right before byte `pos`
fn is_escaped(line: &str, pos: usize) -> bool {
    let backslashes = line.as_bytes()[..pos]
        .iter()
        .rev()
        .take_while(|&&b| b == b'\\')
        .count();
    backslashes % 2 == 1
}

/// True when `span_start` lies within the first argument of the nearest
/// `\texorpdfstring` that opens before it.
///
/// A first argument that never closes runs to the end of the line.
pub fn is_already_wrapped(line: &str, span_start: usize) -> bool {
    let Some(before) = line.get(..span_start) else {
        return false;
    };
    let Some(opener) = WRAP_OPENER_RE.find_iter(before).last() else {
        return false;
    };

    let arg_start = opener.end();
    let arg_end = first_argument_end(&line[arg_start..])
        .map(|offset| arg_start + offset)
        .unwrap_or(line.len());

    (arg_start..=arg_end).contains(&span_start)
}

/// Offset of the brace closing an argument whose opening brace was just consumed
fn first_argument_end(text: &str) -> Option<usize> {
    let mut depth = 1usize;
    for (i, c) in text.char_indices() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

/// `\texorpdfstring{<raw span>}{<rendering>}`
pub fn wrap(raw_span: &str, rendering: &str) -> String {
    format!("{}{{{}}}{{{}}}", WRAP_COMMAND, raw_span, rendering)
}

/// Rewrite the unwrapped spans of a heading line.
///
/// `decide` gets each unwrapped span, last to first, and returns the
/// rendering to wrap it with, or `None` to leave it alone. Lines that are not
/// headings, or where nothing is rewritten, come back borrowed.
pub fn rewrite_heading<'a, F>(line: &'a str, mut decide: F) -> Cow<'a, str>
where
    F: FnMut(&MathSpan<'a>) -> Option<String>,
{
    if !is_heading_line(line) {
        return Cow::Borrowed(line);
    }

    let mut output: Option<String> = None;
    for span in find_math_spans(line).iter().rev() {
        if is_already_wrapped(line, span.start) {
            log::debug!("Skipping already wrapped formula ${}$", span.content);
            continue;
        }
        let Some(rendering) = decide(span) else {
            continue;
        };
        let wrapped = wrap(span.raw(line), &rendering);
        output
            .get_or_insert_with(|| line.to_string())
            .replace_range(span.start..span.end, &wrapped);
    }

    output.map_or(Cow::Borrowed(line), Cow::Owned)
}

/// Table rendering for an exact hit, else the transliteration
pub fn propose_rendering(formula: &str, table: &SymbolTable) -> (String, RenderingSource) {
    match table.lookup(formula) {
        Some(rendering) => (rendering.to_string(), RenderingSource::Table),
        None => (
            transliterate(formula, table),
            RenderingSource::Transliterated,
        ),
    }
}

/// Fix a heading line with `table`, accepting every proposal
pub fn fix_heading_line<'a>(line: &'a str, table: &SymbolTable) -> Cow<'a, str> {
    rewrite_heading(line, |span| Some(propose_rendering(span.content, table).0))
}

/// Scanner with its own symbol table and resolver.
///
/// Custom renderings returned by the resolver are added to the table, so the
/// same formula later in the run gets them without asking twice.
pub struct HeadingFixer {
    table: SymbolTable,
    resolver: Box<dyn SpanResolver>,
}

impl Default for HeadingFixer {
    fn default() -> Self {
        Self::new(SymbolTable::with_defaults())
    }
}

impl std::fmt::Debug for HeadingFixer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeadingFixer")
            .field("entries", &self.table.len())
            .finish_non_exhaustive()
    }
}

impl HeadingFixer {
    /// Fixer that accepts every proposal
    pub fn new(table: SymbolTable) -> Self {
        Self::with_resolver(table, AcceptAll)
    }

    pub fn with_resolver(table: SymbolTable, resolver: impl SpanResolver + 'static) -> Self {
        Self {
            table,
            resolver: Box::new(resolver),
        }
    }

    pub fn table(&self) -> &SymbolTable {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut SymbolTable {
        &mut self.table
    }

    pub fn into_table(self) -> SymbolTable {
        self.table
    }

    /// Process one line; `line_number` is only passed on to the resolver
    pub fn process_line<'a>(&mut self, line_number: usize, line: &'a str) -> Cow<'a, str> {
        let table = &mut self.table;
        let resolver = self.resolver.as_mut();

        rewrite_heading(line, |span| {
            let (proposed, source) = propose_rendering(span.content, table);
            let candidate = Candidate {
                line_number,
                line,
                formula: span.content,
                proposed: &proposed,
                source,
            };

            match resolver.resolve(&candidate) {
                Resolution::Accept => {
                    log::debug!("Line {}: ${}$ -> {}", line_number, span.content, proposed);
                    Some(proposed)
                }
                Resolution::Reject => {
                    log::debug!("Line {}: kept ${}$ as is", line_number, span.content);
                    None
                }
                Resolution::Custom(custom) => {
                    log::debug!("Line {}: ${}$ -> {} (custom)", line_number, span.content, custom);
                    table.upsert(span.content, custom.as_str());
                    Some(custom)
                }
            }
        })
    }
}
