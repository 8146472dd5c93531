//! Math markup → plain text transliteration
//!
//! A best-effort, lossy conversion of a LaTeX math string into readable
//! unicode text, suitable for a PDF bookmark. The pipeline runs in a fixed
//! order, each stage working on the previous stage's output:
//!
//! 1. whole-token substitution from the symbol table (longest key first)
//! 2. fractions: `\frac{a+1}{b}` → `(a+1)/b`
//! 3. roots: `\sqrt{x+1}` → `√(x+1)`
//! 4. scripts: `x^{n+1}` → `xⁿ⁺¹`, `a_i` → `aᵢ`
//! 5. residual cleanup of unknown commands, braces, spacing and operators
//!
//! A markup string that is itself a table key short-circuits to its rendering.
//!
//! ## Example
//!
//! ```rust
//! use texheading::{transliterate_with, SymbolTable};
//!
//! let table = SymbolTable::with_defaults();
//! assert_eq!(transliterate_with(r"\frac{x+1}{y-1}", &table), "(x+1)/(y-1)");
//! assert_eq!(transliterate_with(r"\alpha + \unknown + \beta", &table), "α + β");
//! ```

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::core::table::SymbolTable;
use crate::data::scripts::{to_subscript, to_superscript};

/// Division bar emitted by the fraction stage.
///
/// Operator spacing must not touch a fraction bar, so the fraction stage
/// writes this escape sequence and cleanup turns it into `/` once spacing is
/// settled. The fence characters live in the Private Use Area and are stripped
/// from the input before the pipeline starts, so input can never forge it.
pub const DIVISION_PLACEHOLDER: &str = "\u{E000}DIV\u{E001}";

const PLACEHOLDER_FENCES: [char; 2] = ['\u{E000}', '\u{E001}'];

/// Fraction commands, each written with its opening brace
const FRACTION_OPENERS: &[&str] = &["\\frac{", "\\dfrac{", "\\tfrac{"];

const ROOT_COMMAND: &str = "\\sqrt";

/// Binary operators recognized by the cleanup stage
const OPERATORS: &[char] = &['+', '-', '*', '/', '=', '<', '>'];

lazy_static! {
    /// `^{...}` or `^x`
    static ref SUPERSCRIPT_RE: Regex = Regex::new(r"\^\{([^}]+)\}|\^([a-zA-Z0-9])").unwrap();

    /// `_{...}` or `_x`
    static ref SUBSCRIPT_RE: Regex = Regex::new(r"_\{([^}]+)\}|_([a-zA-Z0-9])").unwrap();

    /// Any command left after substitution, with optional star
    static ref COMMAND_RE: Regex = Regex::new(r"\\[a-zA-Z]+\*?").unwrap();

    /// Innermost brace group
    static ref BRACE_GROUP_RE: Regex = Regex::new(r"\{([^{}]*)\}").unwrap();

    static ref WHITESPACE_RE: Regex = Regex::new(r"\s+").unwrap();

    static ref LEADING_OPERATOR_RE: Regex = Regex::new(r"^\s*[+\-*/=<>]\s*").unwrap();

    static ref TRAILING_OPERATOR_RE: Regex = Regex::new(r"\s*[+\-*/=<>]\s*$").unwrap();

    static ref OPERATOR_SPACING_RE: Regex = Regex::new(r"\s*([+\-*/=<>])\s*").unwrap();
}

/// Transliterate `markup` using the symbol table `table`
pub fn transliterate(markup: &str, table: &SymbolTable) -> String {
    Transliterator::new(table).transliterate(markup)
}

/// The transliteration pipeline bound to one symbol table
#[derive(Debug, Clone, Copy)]
pub struct Transliterator<'t> {
    table: &'t SymbolTable,
}

impl<'t> Transliterator<'t> {
    pub fn new(table: &'t SymbolTable) -> Self {
        Self { table }
    }

    /// Run the full pipeline. Total: every input yields a string, `""` → `""`.
    pub fn transliterate(&self, markup: &str) -> String {
        let markup = markup.replace(PLACEHOLDER_FENCES, "");

        if let Some(rendering) = self
            .table
            .lookup(&markup)
            .or_else(|| self.table.lookup(markup.trim()))
        {
            return rendering.to_string();
        }

        let text = self.apply_known_symbols(&markup);
        let text = self.rewrite_fractions(&text);
        let text = self.rewrite_roots(&text);
        let text = rewrite_scripts(&text);
        cleanup_residue(&text)
    }

    /// Stage 1: replace every table key, longest first.
    ///
    /// Command keys only match when not followed by an ASCII letter, so
    /// `\in` never eats the start of `\infty`. Literal keys match anywhere.
    pub fn apply_known_symbols(&self, text: &str) -> String {
        let mut result = text.to_string();

        for (token, rendering) in self.table.keys_longest_first() {
            if !result.contains(token) {
                continue;
            }
            result = if token.starts_with('\\') {
                replace_command(&result, token, rendering)
            } else {
                result.replace(token, rendering)
            };
        }

        result
    }

    /// Stage 2: `\frac{num}{den}` → `num<DIV>den`
    pub fn rewrite_fractions(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut rest = text;

        while let Some((pos, opener)) = find_first_of(rest, FRACTION_OPENERS) {
            out.push_str(&rest[..pos]);
            // Keep the brace in `after`: the group reader starts on it
            let after = &rest[pos + opener.len() - 1..];

            let groups = read_group(after).and_then(|(num, used)| {
                read_group(&after[used..]).map(|(den, more)| (num, den, used + more))
            });

            match groups {
                Some((num, den, used)) => {
                    out.push_str(&self.fraction_side(num));
                    out.push_str(DIVISION_PLACEHOLDER);
                    out.push_str(&self.fraction_side(den));
                    rest = &after[used..];
                }
                None => {
                    // Unbalanced: leave the command for cleanup
                    out.push_str(&opener[..opener.len() - 1]);
                    rest = after;
                }
            }
        }

        out.push_str(rest);
        out
    }

    fn fraction_side(&self, side: &str) -> String {
        let side = self.apply_known_symbols(side);
        let side = self.rewrite_fractions(&side);
        let side = strip_whitespace(&side);
        // A table key such as `\frac{a}{b}` has already become a literal `a/b`
        if side.contains(['+', '-', '*', '/']) || side.contains(DIVISION_PLACEHOLDER) {
            format!("({})", side)
        } else {
            side
        }
    }

    /// Stage 3: `\sqrt{arg}` → `√arg` or `√(arg)`, `\sqrt[n]{arg}` → `ⁿ√arg`
    pub fn rewrite_roots(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut rest = text;

        while let Some(pos) = rest.find(ROOT_COMMAND) {
            out.push_str(&rest[..pos]);
            let after = &rest[pos + ROOT_COMMAND.len()..];

            match self.read_root(after) {
                Some((rendered, used)) => {
                    out.push_str(&rendered);
                    rest = &after[used..];
                }
                None => {
                    out.push_str(ROOT_COMMAND);
                    rest = after;
                }
            }
        }

        out.push_str(rest);
        out
    }

    /// Parse `[index]{arg}` or `{arg}` right after `\sqrt`
    fn read_root(&self, after: &str) -> Option<(String, usize)> {
        let (index, index_len) = match after.strip_prefix('[') {
            Some(inner) => {
                let close = inner.find(']')?;
                (Some(&inner[..close]), close + 2)
            }
            None => (None, 0),
        };

        let (arg, arg_len) = read_group(&after[index_len..])?;
        let arg = strip_whitespace(&self.apply_known_symbols(arg));

        let mut rendered = String::new();
        if let Some(index) = index {
            let index = strip_whitespace(&self.apply_known_symbols(index));
            rendered.push_str(&to_superscript(&index));
        }
        rendered.push('√');
        if arg.contains(['+', '-', '*', '/']) || arg.contains(DIVISION_PLACEHOLDER) {
            rendered.push('(');
            rendered.push_str(&arg);
            rendered.push(')');
        } else {
            rendered.push_str(&arg);
        }

        Some((rendered, index_len + arg_len))
    }
}

/// Stage 4: superscripts first, then subscripts
pub fn rewrite_scripts(text: &str) -> String {
    let text = SUPERSCRIPT_RE.replace_all(text, |caps: &Captures| {
        let content = caps.get(1).or_else(|| caps.get(2)).map_or("", |m| m.as_str());
        to_superscript(content)
    });

    SUBSCRIPT_RE
        .replace_all(&text, |caps: &Captures| {
            let content = caps.get(1).or_else(|| caps.get(2)).map_or("", |m| m.as_str());
            to_subscript(content)
        })
        .into_owned()
}

/// Stage 5: remove what is left of the markup and settle spacing
pub fn cleanup_residue(text: &str) -> String {
    let text = COMMAND_RE.replace_all(text, "");
    let text = BRACE_GROUP_RE.replace_all(&text, "($1)");
    let text = WHITESPACE_RE.replace_all(&text, " ");

    // Operators orphaned by removed commands
    let text = LEADING_OPERATOR_RE.replace(&text, "");
    let text = TRAILING_OPERATOR_RE.replace(&text, "");
    let mut text = collapse_repeated_operators(&text);

    // Fractions and roots already spaced their own output
    let structured = (text.contains('(') && text.contains(')'))
        || text.contains('√')
        || text.contains(DIVISION_PLACEHOLDER);
    if !structured {
        text = OPERATOR_SPACING_RE.replace_all(&text, " $1 ").into_owned();
    }

    let text = text.replace(DIVISION_PLACEHOLDER, "/");
    WHITESPACE_RE.replace_all(&text, " ").trim().to_string()
}

/// `a + + b` → `a + b`: an operator followed (across whitespace) by repeats of
/// itself collapses to one occurrence.
fn collapse_repeated_operators(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        out.push(c);
        if !OPERATORS.contains(&c) {
            continue;
        }

        let tail = &text[i + c.len_utf8()..];
        let gap = tail.len() - tail.trim_start().len();
        let repeats = tail[gap..].chars().take_while(|&n| n == c).count();
        if repeats > 0 {
            let skip_to = i + c.len_utf8() + gap + repeats * c.len_utf8();
            while chars.peek().is_some_and(|&(j, _)| j < skip_to) {
                chars.next();
            }
        }
    }

    out
}

/// Replace `command` wherever it is not followed by an ASCII letter
fn replace_command(text: &str, command: &str, rendering: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(pos) = rest.find(command) {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + command.len()..];
        if after.starts_with(|c: char| c.is_ascii_alphabetic()) {
            // Part of a longer command; resume just past the backslash
            out.push('\\');
            rest = &rest[pos + 1..];
        } else {
            out.push_str(rendering);
            rest = after;
        }
    }

    out.push_str(rest);
    out
}

/// Earliest occurrence of any needle, with the needle that matched
fn find_first_of<'n>(text: &str, needles: &[&'n str]) -> Option<(usize, &'n str)> {
    needles
        .iter()
        .filter_map(|&needle| text.find(needle).map(|pos| (pos, needle)))
        .min_by_key(|&(pos, _)| pos)
}

/// Read a balanced `{...}` group at the start of `text`.
///
/// Returns the inner text and the number of bytes consumed including both
/// braces. Any nesting depth is accepted.
pub(crate) fn read_group(text: &str) -> Option<(&str, usize)> {
    if !text.starts_with('{') {
        return None;
    }

    let mut depth = 0usize;
    for (i, c) in text.char_indices() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some((&text[1..i], i + 1));
                }
            }
            _ => {}
        }
    }
    None
}

#[inline]
fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}
