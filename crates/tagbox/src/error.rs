//! Error types for linting and fixing

use miette::Diagnostic;
use thiserror::Error;

/// Errors that can occur while linting a file or applying its fixes
#[derive(Error, Debug, Diagnostic)]
pub enum LintError {
    /// Source text could not be parsed
    #[error("Failed to parse {path}{}", reason.as_ref().map(|r| format!(" - {}", r)).unwrap_or_default())]
    #[diagnostic(
        code(tagbox::parse),
        help("files with syntax errors are never autofixed")
    )]
    Parse { path: String, reason: Option<String> },

    /// An import rewrite was requested before the Program node was visited
    #[error("Import fix requested before the Program node was visited")]
    #[diagnostic(code(tagbox::missing_program))]
    MissingProgram,

    /// A text edit does not fit the source it is applied to
    #[error("Invalid edit range {start}..{end} for source of length {len}")]
    #[diagnostic(code(tagbox::invalid_edit))]
    InvalidEdit { start: u32, end: u32, len: usize },
}

impl LintError {
    /// Create a Parse error
    pub fn parse(path: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            reason: None,
        }
    }

    /// Create a Parse error with reason
    pub fn parse_with_reason(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            reason: Some(reason.into()),
        }
    }
}

/// Result type for lint operations
pub type Result<T> = std::result::Result<T, LintError>;
