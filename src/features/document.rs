//! Whole-document processing
//!
//! Runs the heading scanner over every line of a document, collects what
//! changed, and handles the file side: reading the input, writing the result
//! back only when something changed, and saving the mapping file afterwards.

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::heading::HeadingFixer;
use crate::core::resolve::{AcceptAll, PromptResolver};
use crate::core::table::SymbolTable;
use crate::features::mappings::save_mappings;
use crate::utils::error::{FixError, FixResult, FixWarning};

/// One modified line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineChange {
    /// 1-based
    pub line_number: usize,
    /// Line content without its terminator
    pub before: String,
    pub after: String,
}

/// Outcome of processing a file
#[derive(Debug, Clone, Default)]
pub struct FixReport {
    pub changes: Vec<LineChange>,
    pub warnings: Vec<FixWarning>,
    /// The output file was written
    pub written: bool,
    /// The mapping file was saved
    pub mappings_saved: bool,
    /// Where the result went (or would have gone)
    pub output_path: PathBuf,
}

impl FixReport {
    pub fn has_changes(&self) -> bool {
        !self.changes.is_empty()
    }
}

/// File processing options
#[derive(Debug, Clone, Default)]
pub struct FixOptions {
    /// Document to fix
    pub input: PathBuf,
    /// Where to write the result; the input is overwritten when unset
    pub output: Option<PathBuf>,
    /// Mapping file loaded before and saved after the run
    pub mappings: Option<PathBuf>,
    /// Accept every proposed rendering without asking
    pub auto_accept: bool,
}

impl FixOptions {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            ..Default::default()
        }
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    pub fn with_mappings(mut self, mappings: impl Into<PathBuf>) -> Self {
        self.mappings = Some(mappings.into());
        self
    }

    pub fn auto_accept(mut self, yes: bool) -> Self {
        self.auto_accept = yes;
        self
    }

    /// The output path, falling back to the input
    pub fn output_path(&self) -> &Path {
        self.output.as_deref().unwrap_or(&self.input)
    }
}

/// Split a line into content and terminator (`\n`, `\r\n` or nothing)
fn split_terminator(line: &str) -> (&str, &str) {
    if let Some(body) = line.strip_suffix("\r\n") {
        (body, "\r\n")
    } else if let Some(body) = line.strip_suffix('\n') {
        (body, "\n")
    } else {
        (line, "")
    }
}

impl HeadingFixer {
    /// Fix every heading in `text`, keeping line terminators as they were
    pub fn fix_document(&mut self, text: &str) -> (String, Vec<LineChange>) {
        let mut output = String::with_capacity(text.len());
        let mut changes = Vec::new();

        for (index, line) in text.split_inclusive('\n').enumerate() {
            let line_number = index + 1;
            let (body, terminator) = split_terminator(line);
            let fixed = self.process_line(line_number, body);

            if fixed != body {
                changes.push(LineChange {
                    line_number,
                    before: body.to_string(),
                    after: fixed.to_string(),
                });
            }
            output.push_str(&fixed);
            output.push_str(terminator);
        }

        (output, changes)
    }
}

fn read_input(path: &Path) -> FixResult<String> {
    if !path.exists() {
        return Err(FixError::input_not_found(path));
    }
    fs::read_to_string(path).map_err(|e| FixError::io_at(path, e))
}

/// Fix the document at `options.input` with an already configured fixer.
///
/// The output is written only when some line changed, and the mapping file
/// is saved only after a successful write. Failing to write either one is
/// reported as a warning rather than an error.
pub fn fix_file(fixer: &mut HeadingFixer, options: &FixOptions) -> FixResult<FixReport> {
    let text = read_input(&options.input)?;
    let (fixed, changes) = fixer.fix_document(&text);

    let mut report = FixReport {
        changes,
        output_path: options.output_path().to_path_buf(),
        ..Default::default()
    };

    if !report.has_changes() {
        log::info!("No headings to fix in {}", options.input.display());
        return Ok(report);
    }

    if let Err(e) = fs::write(&report.output_path, fixed) {
        let err = FixError::io_at(&report.output_path, e);
        log::warn!("{}", err);
        report.warnings.push(err.into());
        return Ok(report);
    }
    report.written = true;

    if let Some(path) = &options.mappings {
        match save_mappings(path, fixer.table()) {
            Ok(()) => report.mappings_saved = true,
            Err(err) => {
                log::warn!("Could not save mappings: {}", err);
                report.warnings.push(err.into());
            }
        }
    }

    Ok(report)
}

/// Report the lines that would change, without writing anything
pub fn check_file(fixer: &mut HeadingFixer, path: &Path) -> FixResult<Vec<LineChange>> {
    let text = read_input(path)?;
    Ok(fixer.fix_document(&text).1)
}

/// Build a fixer for `options`: mapping file layered on the defaults,
/// prompting on the terminal unless `auto_accept` is set.
///
/// A mapping file that exists but cannot be loaded yields a warning.
pub fn fixer_for(options: &FixOptions) -> (HeadingFixer, Option<FixWarning>) {
    let (table, warning) = SymbolTable::build_with_warnings(options.mappings.as_deref());
    let fixer = if options.auto_accept {
        HeadingFixer::with_resolver(table, AcceptAll)
    } else {
        HeadingFixer::with_resolver(table, PromptResolver::stdio())
    };
    (fixer, warning)
}

/// Load mappings, fix the input, write the output and save the mappings.
///
/// A mapping file that exists but fails to load is never saved over.
pub fn run(options: &FixOptions) -> FixResult<FixReport> {
    // Fail on a missing input before any prompting happens
    if !options.input.exists() {
        return Err(FixError::input_not_found(&options.input));
    }

    let (mut fixer, load_warning) = fixer_for(options);
    let Some(load_warning) = load_warning else {
        return fix_file(&mut fixer, options);
    };

    // Saving now would replace the user's entries with the defaults
    let without_save = FixOptions {
        mappings: None,
        ..options.clone()
    };
    let mut report = fix_file(&mut fixer, &without_save)?;
    report.warnings.insert(0, load_warning);

    match &options.mappings {
        Some(path) if report.written => {
            log::warn!("Mapping file {} was not updated", path.display());
            report.warnings.push(
                FixWarning::new(format!("Mapping file '{}' was not updated", path.display()))
                    .with_suggestion("fix the file by hand, mappings from this run were not saved"),
            );
        }
        _ => {}
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::resolve::{Resolution, ScriptedResolver};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_fix_document_preserves_terminators() {
        let text = "\\section{$\\alpha$}\r\nplain $x$\n\\subsection{$x^2$}";
        let (fixed, changes) = HeadingFixer::default().fix_document(text);
        assert_eq!(
            fixed,
            "\\section{\\texorpdfstring{$\\alpha$}{α}}\r\nplain $x$\n\\subsection{\\texorpdfstring{$x^2$}{x²}}"
        );
        assert_eq!(changes.len(), 2);
        assert_eq!(changes[0].line_number, 1);
        assert_eq!(changes[0].before, r"\section{$\alpha$}");
        assert_eq!(changes[1].line_number, 3);
    }

    #[test]
    fn test_fix_document_unchanged() {
        let text = "\\section{Intro}\n\nSome $x$ text.\n";
        let (fixed, changes) = HeadingFixer::default().fix_document(text);
        assert_eq!(fixed, text);
        assert!(changes.is_empty());
    }

    #[test]
    fn test_fix_document_empty() {
        let (fixed, changes) = HeadingFixer::default().fix_document("");
        assert_eq!(fixed, "");
        assert!(changes.is_empty());
    }

    #[test]
    fn test_fix_document_line_numbers_reach_resolver() {
        let resolver = ScriptedResolver::new([Resolution::Reject]);
        let mut fixer = HeadingFixer::with_resolver(SymbolTable::with_defaults(), resolver);
        let (_, changes) = fixer.fix_document("\\section{$a$}\n\\section{$b$}\n");
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].line_number, 2);
    }

    #[test]
    fn test_options_output_path() {
        let options = FixOptions::new("paper.tex");
        assert_eq!(options.output_path(), Path::new("paper.tex"));
        let options = options.with_output("fixed.tex");
        assert_eq!(options.output_path(), Path::new("fixed.tex"));
    }

    #[test]
    fn test_fix_file_writes_and_saves() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("paper.tex");
        let mappings = dir.path().join("math_mappings.json");
        fs::write(&input, "\\section{The $\\alpha$ decay}\n").unwrap();

        let options = FixOptions::new(&input)
            .with_mappings(&mappings)
            .auto_accept(true);
        let report = run(&options).unwrap();

        assert!(report.written);
        assert!(report.mappings_saved);
        assert!(report.warnings.is_empty());
        assert_eq!(
            fs::read_to_string(&input).unwrap(),
            "\\section{The \\texorpdfstring{$\\alpha$}{α} decay}\n"
        );
        assert!(fs::read_to_string(&mappings).unwrap().contains("\"\\\\alpha\": \"α\""));
    }

    #[test]
    fn test_fix_file_without_changes_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("paper.tex");
        let output = dir.path().join("out.tex");
        let mappings = dir.path().join("math_mappings.json");
        fs::write(&input, "\\section{Plain}\n").unwrap();

        let options = FixOptions::new(&input)
            .with_output(&output)
            .with_mappings(&mappings)
            .auto_accept(true);
        let report = run(&options).unwrap();

        assert!(!report.has_changes());
        assert!(!report.written);
        assert!(!output.exists());
        assert!(!mappings.exists());
    }

    #[test]
    fn test_missing_input_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let options = FixOptions::new(dir.path().join("missing.tex")).auto_accept(true);
        assert!(matches!(run(&options), Err(FixError::InputNotFound { .. })));

        let mut fixer = HeadingFixer::default();
        assert!(matches!(
            check_file(&mut fixer, &options.input),
            Err(FixError::InputNotFound { .. })
        ));
    }

    #[test]
    fn test_write_failure_is_a_warning() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("paper.tex");
        fs::write(&input, "\\section{$x$}\n").unwrap();
        let mappings = dir.path().join("math_mappings.json");

        let options = FixOptions::new(&input)
            .with_output(dir.path().join("no/such/dir/out.tex"))
            .with_mappings(&mappings);
        let mut fixer = HeadingFixer::default();
        let report = fix_file(&mut fixer, &options).unwrap();

        assert!(report.has_changes());
        assert!(!report.written);
        assert!(!report.mappings_saved);
        assert_eq!(report.warnings.len(), 1);
        assert!(!mappings.exists());
    }

    #[test]
    fn test_check_file_does_not_write() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("paper.tex");
        let original = "\\section{$\\beta$}\n";
        fs::write(&input, original).unwrap();

        let changes = check_file(&mut HeadingFixer::default(), &input).unwrap();
        assert_eq!(changes.len(), 1);
        assert_eq!(fs::read_to_string(&input).unwrap(), original);
    }

    #[test]
    fn test_bad_mapping_file_becomes_warning() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("paper.tex");
        let mappings = dir.path().join("math_mappings.json");
        fs::write(&input, "\\section{$x$}\n").unwrap();
        fs::write(&mappings, "{ not json").unwrap();

        let options = FixOptions::new(&input)
            .with_mappings(&mappings)
            .auto_accept(true);
        let report = run(&options).unwrap();

        assert!(report.written);
        assert!(report.warnings[0]
            .suggestion
            .as_deref()
            .unwrap()
            .contains("built-in"));
    }

    #[test]
    fn test_bad_mapping_file_is_left_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("paper.tex");
        let mappings = dir.path().join("math_mappings.json");
        let user_entries = "{\"\\\\mathcal{O}(n)\": \"big O\",}";
        fs::write(&input, "\\section{$\\alpha$ decay}\n").unwrap();
        fs::write(&mappings, user_entries).unwrap();

        let options = FixOptions::new(&input)
            .with_mappings(&mappings)
            .auto_accept(true);
        let report = run(&options).unwrap();

        assert!(report.written);
        assert!(!report.mappings_saved);
        assert_eq!(report.warnings.len(), 2);
        assert!(report.warnings[1].message.contains("was not updated"));
        assert_eq!(fs::read_to_string(&mappings).unwrap(), user_entries);
    }
}
