//! Rigging CLI - build-plan resolution for frontend bundles.
//!
//! Parses command-line arguments, initializes logging, and dispatches to
//! the requested command.

use clap::Parser;
use miette::Result;
use rigging_cli::{cli, commands, logger};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);

    match args.command {
        cli::Command::Resolve(resolve_args) => commands::resolve_execute(resolve_args),
    }
}
