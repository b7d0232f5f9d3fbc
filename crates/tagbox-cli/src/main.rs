//! tagbox CLI entry point.
//!
//! Parses arguments, sets up logging and error reporting, then dispatches to
//! the selected command.

use clap::Parser;
use miette::Result;
use tagbox_cli::{cli, commands, error, logger, ui};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    let result = match args.command {
        cli::Command::Check(check_args) => commands::check_execute(check_args),
        cli::Command::Fix(fix_args) => commands::fix_execute(fix_args),
    };

    result.map_err(error::cli_error_to_miette)
}
