//! Command-line interface definition.
use clap::{Parser, Subcommand};

use crate::config::Format;

/// Top-level CLI entry point for the settings inspector.
#[derive(Parser, Debug)]
#[command(
    name = "twcfg",
    about = "Inspect and check utility-CSS build settings",
    version
)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Options shared by every subcommand.
    #[command(flatten)]
    pub global: GlobalOpts,
}

/// Options shared across all subcommands.
#[derive(Parser, Debug, Clone)]
pub struct GlobalOpts {
    /// Settings file (default: tailwind.config.toml or tailwind.config.json
    /// in the current directory)
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the loaded settings in normalised form
    Show(RenderOpts),
    /// Report likely mistakes in the settings
    Check(CheckOpts),
    /// Print the built-in default settings
    Defaults(RenderOpts),
    /// Print version information
    Version,
}

/// Options for subcommands that render settings.
#[derive(Parser, Debug, Clone)]
pub struct RenderOpts {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Json)]
    pub format: Format,
}

/// Options for the `check` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct CheckOpts {
    /// Exit successfully even when warnings are reported
    #[arg(long)]
    pub allow_warnings: bool,
}
