//! Ameshview CLI - fetch and watch the Tokyo Amesh composite.
//!
//! This binary is a thin presentation shell over the `ameshview` library:
//! `fetch` runs one reload cycle and writes the composite PNG, `watch`
//! keeps it up to date on the auto-reload schedule.

mod commands;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::error;

use ameshview::{AmeshConfig, AppError};

#[derive(Parser)]
#[command(
    name = "ameshview",
    version,
    about = "Composites the Tokyo Amesh precipitation radar over its base map"
)]
struct Cli {
    /// Path to an INI configuration file.
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run one reload cycle and write the composite PNG.
    Fetch(commands::FetchArgs),
    /// Keep the composite up to date on the reload schedule.
    Watch(commands::WatchArgs),
}

fn load_config(path: Option<&Path>) -> Result<AmeshConfig, AppError> {
    match path {
        Some(path) => AmeshConfig::from_ini(path),
        None => Ok(AmeshConfig::default()),
    }
}

fn main() -> ExitCode {
    ameshview::telemetry::init();

    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            error!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    let result = match cli.command {
        Command::Fetch(args) => commands::fetch::run(config, args),
        Command::Watch(args) => commands::watch::run(config, args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
