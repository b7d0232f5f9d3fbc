//! Error types for the tagbox CLI.
//!
//! - [`CliError`] is what commands return
//! - [`ConfigError`] covers loading and validating `tagbox.config.json`
//!
//! Lint diagnostics are not errors; a `check` run that finds some ends with
//! [`CliError::ProblemsFound`] so the process exits non-zero.

mod report;

pub use report::cli_error_to_miette;

use std::path::PathBuf;
use thiserror::Error;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration-related errors (file not found, invalid values, etc.)
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Reading a source file failed
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing a fixed file back failed
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An include path does not exist
    #[error("Path not found: {}", .0.display())]
    PathNotFound(PathBuf),

    /// Walking the include paths failed
    #[error("File discovery failed: {0}")]
    Walk(#[from] ignore::Error),

    /// I/O errors not tied to a single file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON output could not be serialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Lint diagnostics were reported
    #[error("Found {problems} problem{} in {files} file{}", plural(.problems), plural(.files))]
    ProblemsFound { problems: usize, files: usize },

    /// Some files could not be linted (usually syntax errors)
    #[error("{count} file{} could not be linted", plural(.count))]
    FilesFailed { count: usize },
}

/// Configuration-specific errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file given with --config doesn't exist
    #[error("Config file not found: {}\n\nHint: Create a tagbox.config.json file or fix the --config path", .0.display())]
    NotFound(PathBuf),

    /// Merged configuration could not be deserialized
    #[error("Invalid configuration: {message}\n\nHint: Check tagbox.config.json and TAGBOX_* variables")]
    Invalid { message: String },

    /// Invalid value for a configuration option
    #[error("Invalid value for '{field}': {value}\n\nHint: {hint}")]
    InvalidValue {
        /// Name of the field with invalid value
        field: String,
        /// The invalid value
        value: String,
        /// Helpful hint for correct values
        hint: String,
    },
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Invalid {
            message: err.to_string(),
        }
    }
}

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Attach a file path to I/O failures.
pub trait ResultExt<T> {
    /// Map an I/O error to [`CliError::Read`]
    fn reading(self, path: impl Into<PathBuf>) -> Result<T>;

    /// Map an I/O error to [`CliError::Write`]
    fn writing(self, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> ResultExt<T> for std::io::Result<T> {
    fn reading(self, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|source| CliError::Read {
            path: path.into(),
            source,
        })
    }

    fn writing(self, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|source| CliError::Write {
            path: path.into(),
            source,
        })
    }
}

fn plural(count: &usize) -> &'static str {
    if *count == 1 { "" } else { "s" }
}
