#![warn(rust_2018_idioms, unused_lifetimes)]
#![allow(clippy::print_stderr, clippy::print_stdout)]

pub mod handlers;
pub mod models;

use crate::handlers::{Outcome, Session, catalog, document, lint};
use crate::models::args::{AppCommands, Cli};

use anyhow::{Context, Result};
use autho::domain::config::{AppConfig, LoggingConfig};
use autho::kernel::config::ConfigLoader;
use autho_logger::{Logger, parse_level, raise_level};
use clap::Parser;
use std::process::ExitCode;

const CHECK_FAILED: u8 = 1;
const RUN_FAILED: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(Outcome::Success) => ExitCode::SUCCESS,
        Ok(Outcome::Failure) => ExitCode::from(CHECK_FAILED),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(RUN_FAILED)
        },
    }
}

fn run(cli: Cli) -> Result<Outcome> {
    let config: AppConfig = ConfigLoader::new()
        .maybe_file(cli.global.config.as_deref())
        .load()
        .context("Failed to load configuration")?;

    let _logger = init_logger(&config.logging, cli.global.verbose)?;

    let catalog = autho::open_catalog(&config, cli.global.catalog.as_deref())?;
    let mut session = Session { config, catalog, json: cli.global.json };

    match cli.command {
        AppCommands::Plans => catalog::list_plans(&session),
        AppCommands::Show { tier } => catalog::show_plan(&session, &tier),
        AppCommands::Sku { sku } => catalog::resolve_sku(&session, &sku),
        AppCommands::Lint { list_rules: true, .. } => lint::list_rules(&session),
        AppCommands::Lint { multiplier, deny_warnings, .. } => {
            lint::lint_catalog(&mut session, multiplier, deny_warnings)
        },
        AppCommands::Check { path, deny_warnings } => {
            document::check_document(&session, path.as_deref(), deny_warnings)
        },
        AppCommands::Render { output } => document::render_document(&session, output.as_deref()),
        AppCommands::Export { format } => catalog::export_catalog(&session, format),
    }
}

fn init_logger(config: &LoggingConfig, verbose: u8) -> Result<Logger> {
    let level = raise_level(parse_level(&config.level)?, verbose);
    let builder = Logger::builder().name(env!("CARGO_BIN_NAME")).console(true).level(level);

    let logger = match &config.directory {
        Some(directory) => builder.path(directory).json(config.json).init()?,
        None => builder.init()?,
    };
    Ok(logger)
}
