//! Fix command implementation.
//!
//! Fixes every discovered file in parallel and writes changed files back,
//! unless `--dry-run` is given.

use crate::cli::FixArgs;
use crate::commands::files::{self, SourceFile};
use crate::commands::utils;
use crate::config::TagboxConfig;
use crate::error::{CliError, Result, ResultExt};
use crate::ui::{self, report};
use rayon::prelude::*;
use std::path::Path;
use tagbox::{FixOutcome, LintError, Rule};
use tracing::{debug, info};

/// Totals over one fix run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FixSummary {
    pub files: usize,
    pub changed_files: usize,
    pub fixes_applied: usize,
    pub remaining: usize,
    pub files_with_remaining: usize,
    pub failed: usize,
}

/// Execute the fix command in the current directory.
pub fn execute(args: FixArgs) -> Result<()> {
    let cwd = utils::get_cwd()?;
    execute_in(&args, &cwd)
}

/// Execute the fix command with an explicit working directory.
///
/// # Errors
///
/// Returns [`CliError::ProblemsFound`] when diagnostics remain after fixing
/// and [`CliError::FilesFailed`] when some files could not be read, parsed
/// or written.
pub fn execute_in(args: &FixArgs, cwd: &Path) -> Result<()> {
    let summary = run(args, cwd)?;

    let file_count = |n: usize| format!("{n} file{}", if n == 1 { "" } else { "s" });
    if summary.fixes_applied == 0 {
        if summary.remaining == 0 && summary.failed == 0 {
            ui::success("Nothing to fix");
        }
    } else if args.dry_run {
        ui::info(&format!(
            "Would apply {} fixes in {} (dry run, nothing written)",
            summary.fixes_applied,
            file_count(summary.changed_files)
        ));
    } else {
        ui::success(&format!(
            "Applied {} fixes in {}",
            summary.fixes_applied,
            file_count(summary.changed_files)
        ));
    }

    if summary.remaining > 0 {
        return Err(CliError::ProblemsFound {
            problems: summary.remaining,
            files: summary.files_with_remaining,
        });
    }

    if summary.failed > 0 {
        return Err(CliError::FilesFailed {
            count: summary.failed,
        });
    }

    Ok(())
}

/// Fix all files, write them back unless dry-running, and return the totals.
pub fn run(args: &FixArgs, cwd: &Path) -> Result<FixSummary> {
    let config = TagboxConfig::load(&args.paths, args.config.as_deref(), cwd)?;
    let paths = files::discover(&config, cwd)?;

    if paths.is_empty() {
        ui::warning("No files matched the configured paths and extensions");
        return Ok(FixSummary::default());
    }

    info!(files = paths.len(), dry_run = args.dry_run, "fixing");
    let linter = config.linter();
    let docs_url = Some(linter.rule().meta().docs_url);

    let fixed: Vec<Result<(SourceFile, std::result::Result<FixOutcome, LintError>)>> = paths
        .par_iter()
        .map(|path| -> Result<_> {
            let file = SourceFile::read(path, cwd)?;
            let outcome = linter.fix_source(&file.display, &file.source);

            if let Ok(outcome) = &outcome {
                if outcome.changed && !args.dry_run {
                    std::fs::write(&file.path, &outcome.code).writing(&file.path)?;
                    debug!(path = %file.display, "wrote fixed file");
                }
            }
            Ok((file, outcome))
        })
        .collect();

    let mut summary = FixSummary {
        files: fixed.len(),
        ..FixSummary::default()
    };
    let mut text = String::new();

    for entry in &fixed {
        let (file, outcome) = match entry {
            Ok((file, Ok(outcome))) => (file, outcome),
            Ok((_, Err(err))) => {
                summary.failed += 1;
                ui::error(&err.to_string());
                continue;
            }
            Err(err) => {
                summary.failed += 1;
                ui::error(&err.to_string());
                continue;
            }
        };

        if outcome.changed {
            summary.changed_files += 1;
            summary.fixes_applied += outcome.fixes_applied;
            let verb = if args.dry_run { "Would fix" } else { "Fixed" };
            ui::info(&format!(
                "{verb} {} ({} fix{})",
                ui::path(&file.display),
                outcome.fixes_applied,
                if outcome.fixes_applied == 1 { "" } else { "es" }
            ));
        }

        if !outcome.remaining.is_empty() {
            summary.remaining += outcome.remaining.len();
            summary.files_with_remaining += 1;
            text.push_str(&report::render_pretty(
                &file.display,
                &outcome.code,
                &outcome.remaining,
                docs_url,
                ui::color_enabled(),
            ));
        }
    }

    print!("{text}");
    Ok(summary)
}
