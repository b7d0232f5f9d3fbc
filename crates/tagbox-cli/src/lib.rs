//! Command-line runner for the `prefer-box-as-tag` rule.
//!
//! The binary discovers JSX/TSX files, lints them in parallel with the
//! [`tagbox`] library and either reports or fixes what it finds.
//!
//! # Architecture
//!
//! - [`cli`] - clap argument definitions
//! - [`commands`] - `check` and `fix`
//! - [`config`] - `tagbox.config.json` / `TAGBOX_*` / CLI merging with figment
//! - [`error`] - CLI error types and miette conversion
//! - [`logger`] - tracing subscriber setup
//! - [`ui`] - status lines and diagnostic rendering
//!
//! # Example
//!
//! ```rust,no_run
//! use tagbox_cli::{cli::CheckArgs, commands, error::Result, logger};
//!
//! fn main() -> Result<()> {
//!     logger::init_logger(false, false, false);
//!     commands::check_execute(CheckArgs::default())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, ConfigError, Result};
