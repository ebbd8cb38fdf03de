//! # CLI Argument Definitions
//!
//! Command-line interface of the `autho` binary, declared with `clap` derive.

use autho::catalog::CatalogFormat;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "autho")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Autho.R pricing catalog and pricing sheet tooling")]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: AppCommands,
}

/// Flags accepted by every subcommand.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Configuration file (defaults to an optional `autho.toml` in the working directory)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Catalog file (.toml or .json) used instead of the built-in plans
    #[arg(long, global = true, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Raise log verbosity (repeatable)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,
}

/// Enumeration of available subcommands.
#[derive(Debug, Subcommand)]
pub enum AppCommands {
    /// Print the pricing table
    Plans,
    /// Show one plan in detail
    Show {
        /// Tier name (e.g. 'starter' or 'Professional')
        tier: String,
    },
    /// Resolve a marketplace SKU to its plan
    Sku {
        /// Azure SKU or IBM Cloud catalog ID (e.g. 'author-business')
        sku: String,
    },
    /// Lint the catalog for internal consistency
    Lint {
        /// Months charged for a year of annual billing
        #[arg(long, value_name = "N")]
        multiplier: Option<u32>,
        /// Fail on warnings as well as errors
        #[arg(long)]
        deny_warnings: bool,
        /// Print the rule ids and what each one checks, then exit
        #[arg(long, conflicts_with_all = ["multiplier", "deny_warnings"])]
        list_rules: bool,
    },
    /// Check a PRICING.md against the catalog
    Check {
        /// Document to check (defaults to `document.path` from the config)
        path: Option<PathBuf>,
        /// Fail on warnings as well as errors
        #[arg(long)]
        deny_warnings: bool,
    },
    /// Render the canonical PRICING.md
    Render {
        /// Write to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Print the active catalog as a catalog file
    Export {
        #[arg(short, long, value_enum, default_value_t = ExportFormat::Toml)]
        format: ExportFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Toml,
    Json,
}

impl From<ExportFormat> for CatalogFormat {
    fn from(format: ExportFormat) -> Self {
        match format {
            ExportFormat::Toml => Self::Toml,
            ExportFormat::Json => Self::Json,
        }
    }
}
