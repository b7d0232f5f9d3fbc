//! Check command implementation.
//!
//! Lints every discovered file in parallel and prints the diagnostics.

use crate::cli::{CheckArgs, OutputFormat};
use crate::commands::files::{self, SourceFile};
use crate::commands::utils;
use crate::config::TagboxConfig;
use crate::error::{CliError, Result};
use crate::ui::{self, report};
use rayon::prelude::*;
use std::path::Path;
use tagbox::{LintError, LintResult, Rule};
use tracing::info;

/// Totals over one check run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CheckSummary {
    pub files: usize,
    pub problems: usize,
    pub fixable: usize,
    pub files_with_problems: usize,
    pub failed: usize,
}

/// Execute the check command in the current directory.
///
/// # Errors
///
/// Returns [`CliError::ProblemsFound`] when diagnostics were printed and
/// [`CliError::FilesFailed`] when some files could not be read or parsed.
pub fn execute(args: CheckArgs) -> Result<()> {
    let cwd = utils::get_cwd()?;
    execute_in(&args, &cwd)
}

/// Execute the check command with an explicit working directory.
pub fn execute_in(args: &CheckArgs, cwd: &Path) -> Result<()> {
    let summary = run(args, cwd)?;

    if summary.problems > 0 {
        if summary.fixable > 0 {
            ui::info(&format!(
                "{} of {} can be fixed with `tagbox fix`",
                summary.fixable, summary.problems
            ));
        }
        return Err(CliError::ProblemsFound {
            problems: summary.problems,
            files: summary.files_with_problems,
        });
    }

    if summary.failed > 0 {
        return Err(CliError::FilesFailed {
            count: summary.failed,
        });
    }

    ui::success(&format!(
        "No problems found in {} file{}",
        summary.files,
        if summary.files == 1 { "" } else { "s" }
    ));
    Ok(())
}

/// Lint, print diagnostics in the requested format and return the totals.
pub fn run(args: &CheckArgs, cwd: &Path) -> Result<CheckSummary> {
    let config = TagboxConfig::load(&args.paths, args.config.as_deref(), cwd)?;
    let paths = files::discover(&config, cwd)?;

    if paths.is_empty() {
        ui::warning("No files matched the configured paths and extensions");
        return Ok(CheckSummary::default());
    }

    info!(files = paths.len(), "linting");
    let linter = config.linter();
    let docs_url = Some(linter.rule().meta().docs_url);

    // A file that cannot be read fails on its own, like a file that cannot be parsed
    let linted: Vec<Result<(SourceFile, std::result::Result<LintResult, LintError>)>> = paths
        .par_iter()
        .map(|path| -> Result<_> {
            let file = SourceFile::read(path, cwd)?;
            let result = linter.lint_source(&file.display, &file.source);
            Ok((file, result))
        })
        .collect();

    let mut summary = CheckSummary {
        files: linted.len(),
        ..CheckSummary::default()
    };
    let mut text = String::new();
    let mut json = Vec::new();

    for entry in &linted {
        let (file, result) = match entry {
            Ok((file, Ok(result))) => (file, result),
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
        if result.is_clean() {
            continue;
        }

        summary.problems += result.diagnostics.len();
        summary.fixable += result.diagnostics.iter().filter(|d| d.is_fixable()).count();
        summary.files_with_problems += 1;

        match args.format {
            OutputFormat::Pretty => text.push_str(&report::render_pretty(
                &file.display,
                &file.source,
                &result.diagnostics,
                docs_url,
                ui::color_enabled(),
            )),
            OutputFormat::Compact => text.push_str(&report::render_compact(
                &file.display,
                &file.source,
                &result.diagnostics,
            )),
            OutputFormat::Json => json.extend(report::json_diagnostics(
                &file.display,
                &file.source,
                &result.diagnostics,
            )),
        }
    }

    if args.format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&json)?);
    } else {
        print!("{text}");
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn project(files: &[(&str, &str)]) -> TempDir {
        let temp = TempDir::new().unwrap();
        for (rel, content) in files {
            let path = temp.path().join(rel);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, content).unwrap();
        }
        temp
    }

    fn compact() -> CheckArgs {
        CheckArgs {
            format: OutputFormat::Compact,
            ..CheckArgs::default()
        }
    }

    #[test]
    fn test_run_counts_problems() {
        let temp = project(&[
            ("src/A.jsx", "const a = <><nav /><footer /></>;"),
            ("src/B.tsx", "const b = <div />;"),
        ]);

        let summary = run(&compact(), temp.path()).unwrap();
        assert_eq!(summary.files, 2);
        assert_eq!(summary.problems, 2);
        assert_eq!(summary.fixable, 2);
        assert_eq!(summary.files_with_problems, 1);
        assert_eq!(summary.failed, 0);
    }

    #[test]
    fn test_parse_failures_are_counted() {
        let temp = project(&[("Broken.jsx", "const a = <nav>;")]);

        let summary = run(&compact(), temp.path()).unwrap();
        assert_eq!(summary.failed, 1);
        assert!(matches!(
            execute_in(&compact(), temp.path()),
            Err(CliError::FilesFailed { count: 1 })
        ));
    }

    #[test]
    fn test_unreadable_file_does_not_stop_the_run() {
        let temp = project(&[("A.jsx", "<nav />;")]);
        fs::write(temp.path().join("Legacy.js"), b"const s = '\xe9';\n").unwrap();

        let summary = run(&compact(), temp.path()).unwrap();
        assert_eq!(summary.files, 2);
        assert_eq!(summary.problems, 1);
        assert_eq!(summary.failed, 1);
    }

    #[test]
    fn test_execute_fails_on_problems() {
        let temp = project(&[("A.jsx", "<aside />;")]);

        let err = execute_in(&compact(), temp.path()).unwrap_err();
        assert!(matches!(
            err,
            CliError::ProblemsFound {
                problems: 1,
                files: 1
            }
        ));
    }

    #[test]
    fn test_clean_project_passes() {
        let temp = project(&[("A.jsx", "import { Box } from 'gestalt';\n<Box as=\"aside\" />;")]);
        assert!(execute_in(&compact(), temp.path()).is_ok());
    }
}
