//! Conversion from CLI errors to miette reports.

use crate::error::{CliError, ConfigError};
use miette::{MietteDiagnostic, Report};

/// Convert CliError to a miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Config(ConfigError::NotFound(path)) => Report::new(
            MietteDiagnostic::new(format!("Config file not found: {}", path.display()))
                .with_code("tagbox::config::not_found")
                .with_help("create a tagbox.config.json file or fix the --config path"),
        ),
        CliError::Config(e) => miette::miette!("Configuration error: {}", e),
        CliError::ProblemsFound { .. } => Report::new(
            MietteDiagnostic::new(err.to_string())
                .with_code("tagbox::problems")
                .with_help("run `tagbox fix` to apply the suggested fixes"),
        ),
        CliError::FilesFailed { .. } => Report::new(
            MietteDiagnostic::new(err.to_string())
                .with_code("tagbox::parse")
                .with_help("files with syntax errors are never autofixed"),
        ),
        _ => miette::miette!("{}", err),
    }
}
