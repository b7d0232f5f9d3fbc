use super::OutputFormat;
use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Report semantic HTML tags that should use <Box as="...">
    ///
    /// Exits with a non-zero status when any diagnostic is found.
    Check(CheckArgs),

    /// Rewrite semantic HTML tags to <Box as="..."> in place
    ///
    /// Applies fixes until the files are clean and adds or extends the
    /// gestalt import. Files with syntax errors are left untouched.
    Fix(FixArgs),
}

/// Arguments for the check command
#[derive(Args, Debug, Default)]
pub struct CheckArgs {
    /// Files or directories to lint
    ///
    /// Overrides `include` from the configuration. Defaults to the current
    /// directory.
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Path to tagbox.config.json
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Pretty)]
    pub format: OutputFormat,
}

/// Arguments for the fix command
#[derive(Args, Debug, Default)]
pub struct FixArgs {
    /// Files or directories to fix
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Path to tagbox.config.json
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Compute fixes without writing files
    #[arg(long)]
    pub dry_run: bool,
}
