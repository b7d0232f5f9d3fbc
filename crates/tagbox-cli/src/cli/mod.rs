//! Command-line interface definition.
//!
//! - `tagbox check` - report semantic HTML tags that should be `<Box as="...">`
//! - `tagbox fix` - rewrite them in place

mod commands;
pub mod enums;

use clap::Parser;

pub use commands::{CheckArgs, Command, FixArgs};
pub use enums::*;

/// tagbox - prefer `<Box as="...">` over semantic HTML tags
#[derive(Parser, Debug)]
#[command(
    name = "tagbox",
    version,
    about = "Prefer <Box as=\"...\"> over semantic HTML tags in JSX",
    long_about = "tagbox finds semantic HTML elements such as <header>, <nav> or <section>\n\
                  in JSX and TSX files and rewrites them to the gestalt Box component,\n\
                  adding the gestalt import where it is missing."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    ///
    /// Outputs plain text without ANSI color codes. Useful for logging to
    /// files or systems that don't support colored terminal output.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_check_defaults() {
        let cli = Cli::try_parse_from(["tagbox", "check"]).unwrap();
        match cli.command {
            Command::Check(args) => {
                assert!(args.paths.is_empty());
                assert_eq!(args.format, OutputFormat::Pretty);
                assert!(args.config.is_none());
            }
            _ => panic!("expected check"),
        }
    }

    #[test]
    fn test_check_with_paths_and_format() {
        let cli =
            Cli::try_parse_from(["tagbox", "check", "src", "app", "--format", "json"]).unwrap();
        match cli.command {
            Command::Check(args) => {
                assert_eq!(args.paths, vec![PathBuf::from("src"), PathBuf::from("app")]);
                assert_eq!(args.format, OutputFormat::Json);
            }
            _ => panic!("expected check"),
        }
    }

    #[test]
    fn test_fix_dry_run_and_config() {
        let cli = Cli::try_parse_from([
            "tagbox",
            "--no-color",
            "fix",
            "--dry-run",
            "--config",
            "custom.json",
        ])
        .unwrap();

        assert!(cli.no_color);
        match cli.command {
            Command::Fix(args) => {
                assert!(args.dry_run);
                assert_eq!(args.config, Some(PathBuf::from("custom.json")));
            }
            _ => panic!("expected fix"),
        }
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["tagbox", "-v", "-q", "check"]).is_err());
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        assert!(Cli::try_parse_from(["tagbox", "check", "--format", "xml"]).is_err());
    }
}
