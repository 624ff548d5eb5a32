//! rWorklogs library root.
//! Exposes the CLI parser, the high-level run() function, and the work-log
//! core: interval parsing, tire-service classification and time slicing.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod logging;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;
use utils::path::resolve_path;

pub use crate::core::classifier::{Classification, classify, classify_plan};
pub use crate::core::interval::parse_interval;
pub use crate::core::worklog::{generate_auto_work_log, generate_work_log};

/// Central command dispatcher
pub fn dispatch(cli: &Cli, config_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Init { force } => cli::commands::init::handle(config_path, *force),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, config_path),
        Commands::Generate { .. } => {
            let cfg = Config::load(config_path)?;
            cli::commands::generate::handle(&cli.command, &cfg)
        }
        Commands::Auto { .. } => {
            let cfg = Config::load(config_path)?;
            cli::commands::auto::handle(&cli.command, &cfg)
        }
        Commands::Classify { .. } => {
            let cfg = Config::load(config_path)?;
            cli::commands::classify::handle(&cli.command, &cfg)
        }
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ diagnostics on stderr
    logging::init(cli.verbose);

    // 3️⃣ config path: --config override or the platform default.
    // Init and config work on the file itself, so loading is left to each command.
    let config_path = cli
        .config
        .as_deref()
        .map(resolve_path)
        .unwrap_or_else(Config::config_file);

    dispatch(&cli, &config_path)
}
