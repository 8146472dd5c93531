//! Error handling for texheading
//!
//! The transliteration engine and the heading scanner are total and never
//! fail. Errors only arise at the edges: reading the input document, reading
//! or writing the mapping file, and writing the output.

use std::fmt;
use std::path::{Path, PathBuf};

/// Error type for file-level operations
#[derive(Debug, Clone)]
pub enum FixError {
    /// The input document does not exist
    InputNotFound { path: PathBuf },
    /// Reading or writing a file failed
    Io {
        path: Option<PathBuf>,
        message: String,
    },
    /// The mapping file is not a flat JSON object of strings
    MappingFormat {
        path: Option<PathBuf>,
        message: String,
    },
}

impl fmt::Display for FixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FixError::InputNotFound { path } => {
                write!(f, "Input file '{}' not found", path.display())
            }
            FixError::Io { path, message } => {
                if let Some(p) = path {
                    write!(f, "IO error on '{}': {}", p.display(), message)
                } else {
                    write!(f, "IO error: {}", message)
                }
            }
            FixError::MappingFormat { path, message } => {
                if let Some(p) = path {
                    write!(f, "Invalid mapping file '{}': {}", p.display(), message)
                } else {
                    write!(f, "Invalid mapping data: {}", message)
                }
            }
        }
    }
}

impl std::error::Error for FixError {}

impl From<std::io::Error> for FixError {
    fn from(err: std::io::Error) -> Self {
        FixError::Io {
            path: None,
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for FixError {
    fn from(err: serde_json::Error) -> Self {
        FixError::MappingFormat {
            path: None,
            message: err.to_string(),
        }
    }
}

/// Result type for file-level operations
pub type FixResult<T> = Result<T, FixError>;

/// Non-fatal problems reported alongside a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixWarning {
    pub message: String,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl fmt::Display for FixWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(l) = self.line {
            write!(f, "Warning at line {}: {}", l, self.message)?;
        } else {
            write!(f, "Warning: {}", self.message)?;
        }
        if let Some(ref sug) = self.suggestion {
            write!(f, " ({})", sug)?;
        }
        Ok(())
    }
}

impl FixWarning {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            line: None,
            suggestion: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

impl From<FixError> for FixWarning {
    fn from(err: FixError) -> Self {
        FixWarning::new(err.to_string())
    }
}

// Convenience constructors for errors
impl FixError {
    pub fn io_at(path: impl AsRef<Path>, err: std::io::Error) -> Self {
        FixError::Io {
            path: Some(path.as_ref().to_path_buf()),
            message: err.to_string(),
        }
    }

    pub fn mapping_at(path: impl AsRef<Path>, message: impl Into<String>) -> Self {
        FixError::MappingFormat {
            path: Some(path.as_ref().to_path_buf()),
            message: message.into(),
        }
    }

    pub fn input_not_found(path: impl AsRef<Path>) -> Self {
        FixError::InputNotFound {
            path: path.as_ref().to_path_buf(),
        }
    }
}
