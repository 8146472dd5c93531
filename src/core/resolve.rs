//! Deciding what happens to each candidate replacement
//!
//! The scanner never talks to a terminal itself. For every math span it is
//! about to wrap it asks a `SpanResolver`, which may accept the proposed
//! rendering, reject the change, or supply its own rendering.
//!
//! Implementations:
//! - `AcceptAll`: take every proposal (`--yes`, tests, WASM)
//! - `RejectAll`: change nothing (dry runs)
//! - `ScriptedResolver`: answers from a queue (tests)
//! - `PromptResolver`: asks on a reader/writer pair (interactive CLI)
//! - any `FnMut(&Candidate) -> Resolution` closure

use std::collections::VecDeque;
use std::io::{self, BufRead, Stderr, StdinLock, Write};

/// Where a proposed rendering came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderingSource {
    /// Exact symbol table hit on the whole formula
    Table,
    /// Produced by the transliteration pipeline
    Transliterated,
}

/// One replacement the scanner would like to make
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    /// 1-based line number within the document
    pub line_number: usize,
    /// The heading line as it was read
    pub line: &'a str,
    /// Formula content without delimiters
    pub formula: &'a str,
    /// Rendering the scanner proposes
    pub proposed: &'a str,
    pub source: RenderingSource,
}

/// Outcome for a candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Use the proposed rendering
    Accept,
    /// Leave the span untouched
    Reject,
    /// Use this rendering instead and remember it for the rest of the run
    Custom(String),
}

/// Decides the fate of candidate replacements
pub trait SpanResolver {
    fn resolve(&mut self, candidate: &Candidate<'_>) -> Resolution;
}

impl<F> SpanResolver for F
where
    F: FnMut(&Candidate<'_>) -> Resolution,
{
    fn resolve(&mut self, candidate: &Candidate<'_>) -> Resolution {
        self(candidate)
    }
}

/// Accepts every proposal
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl SpanResolver for AcceptAll {
    fn resolve(&mut self, _candidate: &Candidate<'_>) -> Resolution {
        Resolution::Accept
    }
}

/// Rejects every proposal
#[derive(Debug, Clone, Copy, Default)]
pub struct RejectAll;

impl SpanResolver for RejectAll {
    fn resolve(&mut self, _candidate: &Candidate<'_>) -> Resolution {
        Resolution::Reject
    }
}

/// Answers from a fixed queue, accepting once the queue runs dry.
///
/// Every formula it was asked about is recorded, in order.
#[derive(Debug, Clone, Default)]
pub struct ScriptedResolver {
    answers: VecDeque<Resolution>,
    asked: Vec<String>,
}

impl ScriptedResolver {
    pub fn new(answers: impl IntoIterator<Item = Resolution>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            asked: Vec::new(),
        }
    }

    /// Formulas seen so far
    pub fn asked(&self) -> &[String] {
        &self.asked
    }
}

impl SpanResolver for ScriptedResolver {
    fn resolve(&mut self, candidate: &Candidate<'_>) -> Resolution {
        self.asked.push(candidate.formula.to_string());
        self.answers.pop_front().unwrap_or(Resolution::Accept)
    }
}

/// Interactive confirmation over any reader/writer pair.
///
/// Answers: empty, `y` or `yes` accept; `n` or `no` reject; `c` or `custom`
/// ask for a rendering (an empty one rejects). Anything else asks again.
/// End of input rejects.
pub struct PromptResolver<R, W> {
    input: R,
    output: W,
}

impl PromptResolver<StdinLock<'static>, Stderr> {
    /// Prompt on stderr, read answers from stdin
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> PromptResolver<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the writer, e.g. to inspect what was printed
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_answer(&mut self) -> Option<String> {
        let _ = self.output.flush();
        let mut buffer = String::new();
        match self.input.read_line(&mut buffer) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(buffer.trim().to_string()),
        }
    }
}

impl<R: BufRead, W: Write> SpanResolver for PromptResolver<R, W> {
    fn resolve(&mut self, candidate: &Candidate<'_>) -> Resolution {
        let _ = writeln!(self.output);
        let _ = writeln!(self.output, "--- Line {} ---", candidate.line_number);
        let _ = writeln!(self.output, "Original: {}", candidate.line.trim());
        let _ = writeln!(self.output, "Math formula found: ${}$", candidate.formula);
        let _ = writeln!(self.output, "Default mapping: {}", candidate.proposed);

        loop {
            let _ = write!(self.output, "Apply this change? [Y/n/c(ustom)]: ");
            let Some(answer) = self.read_answer() else {
                return Resolution::Reject;
            };

            match answer.to_lowercase().as_str() {
                "" | "y" | "yes" => return Resolution::Accept,
                "n" | "no" => return Resolution::Reject,
                "c" | "custom" => {
                    let _ = write!(
                        self.output,
                        "Enter custom mapping for '${}$': ",
                        candidate.formula
                    );
                    return match self.read_answer() {
                        Some(custom) if !custom.is_empty() => Resolution::Custom(custom),
                        _ => {
                            let _ = writeln!(
                                self.output,
                                "No custom mapping provided, skipping change."
                            );
                            Resolution::Reject
                        }
                    };
                }
                _ => {
                    let _ = writeln!(
                        self.output,
                        "Please enter 'y' (yes), 'n' (no), or 'c' (custom)"
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn candidate() -> Candidate<'static> {
        Candidate {
            line_number: 3,
            line: r"  \section{Mass $m_0$}  ",
            formula: "m_0",
            proposed: "m₀",
            source: RenderingSource::Transliterated,
        }
    }

    fn prompt(input: &str) -> (Resolution, String) {
        let mut resolver = PromptResolver::new(Cursor::new(input.to_string()), Vec::new());
        let resolution = resolver.resolve(&candidate());
        let printed = String::from_utf8(resolver.into_output()).unwrap();
        (resolution, printed)
    }

    #[test]
    fn test_prompt_accepts_by_default() {
        let (resolution, printed) = prompt("\n");
        assert_eq!(resolution, Resolution::Accept);
        assert!(printed.contains("--- Line 3 ---"));
        assert!(printed.contains(r"Original: \section{Mass $m_0$}"));
        assert!(printed.contains("Math formula found: $m_0$"));
        assert!(printed.contains("Default mapping: m₀"));
    }

    #[test]
    fn test_prompt_yes_and_no() {
        assert_eq!(prompt("YES\n").0, Resolution::Accept);
        assert_eq!(prompt("n\n").0, Resolution::Reject);
        assert_eq!(prompt("No\n").0, Resolution::Reject);
    }

    #[test]
    fn test_prompt_custom() {
        let (resolution, _) = prompt("c\nrest mass\n");
        assert_eq!(resolution, Resolution::Custom("rest mass".to_string()));

        let (resolution, printed) = prompt("custom\n\n");
        assert_eq!(resolution, Resolution::Reject);
        assert!(printed.contains("No custom mapping provided"));
    }

    #[test]
    fn test_prompt_reasks_on_invalid_answer() {
        let (resolution, printed) = prompt("maybe\ny\n");
        assert_eq!(resolution, Resolution::Accept);
        assert_eq!(printed.matches("Apply this change?").count(), 2);
        assert!(printed.contains("Please enter 'y' (yes)"));
    }

    #[test]
    fn test_prompt_eof_rejects() {
        assert_eq!(prompt("").0, Resolution::Reject);
    }

    #[test]
    fn test_scripted_resolver() {
        let mut resolver = ScriptedResolver::new([Resolution::Reject]);
        assert_eq!(resolver.resolve(&candidate()), Resolution::Reject);
        assert_eq!(resolver.resolve(&candidate()), Resolution::Accept);
        assert_eq!(resolver.asked(), ["m_0", "m_0"]);
    }

    #[test]
    fn test_closure_resolver() {
        let mut resolver = |c: &Candidate<'_>| Resolution::Custom(c.formula.to_uppercase());
        assert_eq!(
            resolver.resolve(&candidate()),
            Resolution::Custom("M_0".to_string())
        );
    }
}
