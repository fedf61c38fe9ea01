//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Gatelint - gateway configuration validation.
#[derive(Debug, Parser)]
#[command(name = "gatelint")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Only print the final status and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug_log: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate a gateway configuration file
    Check(CheckArgs),

    /// Print the schema document the linter would validate against
    Schema(SchemaArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Path to the gateway configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Lint the configuration against its JSON Schema
    #[arg(short, long)]
    pub lint: bool,

    /// Path or URL of a custom schema (file, http or https)
    #[arg(short, long)]
    pub schema: Option<String>,

    /// Lint against the hosted schema for this release line
    #[arg(long)]
    pub online: bool,

    /// Dump the parsed configuration; repeat for more detail (-d, -dd, -ddd)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Register the configured routes on the routing layer without serving
    #[arg(short = 't', long)]
    pub test_routes: bool,

    /// Override the listening port during route testing
    #[arg(short, long)]
    pub port: Option<u16>,
}

/// Arguments for the `schema` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct SchemaArgs {
    /// Path or URL of a custom schema (file, http or https)
    #[arg(short, long)]
    pub schema: Option<String>,

    /// Resolve the hosted schema for this release line
    #[arg(long)]
    pub online: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
