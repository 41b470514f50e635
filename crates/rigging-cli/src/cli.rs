//! Command-line interface definition for the Rigging plan resolver.
//!
//! Defined with clap v4 derive macros. The `resolve` command mirrors the
//! invocation contract of the resolver core: a mandatory mode, an optional
//! network override (bare flag → fixed LAN address, value → explicit host),
//! and an analyzer toggle that defaults to on.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use rigging_plan::{Mode, NetworkOverride, Overrides};

/// Rigging - build-plan resolver for frontend bundles
#[derive(Parser, Debug)]
#[command(
    name = "rig",
    version,
    about = "Resolve a deployable build plan for a target mode",
    long_about = "Rigging resolves a complete build plan (rule table, stage chain, output \n\
                  scheme, optimization policy) for a development or production build and \n\
                  emits it as JSON for the downstream bundler."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve a build plan and emit it as JSON
    Resolve(ResolveArgs),
}

#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Build mode: "development" or "production"
    #[arg(long, value_parser = parse_mode)]
    pub mode: Mode,

    /// Serve on the network instead of localhost.
    ///
    /// Without a value, the preconfigured LAN address is used; with a
    /// value, that host is used verbatim.
    #[arg(long, num_args = 0..=1, value_name = "HOST")]
    pub network: Option<Option<String>>,

    /// Skip registering the bundle-composition analyzer stage
    #[arg(long)]
    pub no_analyze: bool,

    /// Write the plan to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Pretty-print the emitted JSON
    #[arg(long)]
    pub pretty: bool,
}

impl ResolveArgs {
    /// Convert parsed flags into the resolver's override set.
    pub fn overrides(&self) -> Overrides {
        let network = self.network.as_ref().map(|host| match host {
            Some(host) => NetworkOverride::Address(host.clone()),
            None => NetworkOverride::Enabled(true),
        });

        Overrides {
            network,
            analyze: !self.no_analyze,
        }
    }
}

fn parse_mode(s: &str) -> Result<Mode, rigging_plan::PlanError> {
    s.parse()
}
