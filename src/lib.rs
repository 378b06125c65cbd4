//! rTimesheet library root.
//! Exposes the CLI parser, the `run()` entry point and the timesheet engine:
//! parsing (`utils::time`), validation, weekly aggregation, overtime
//! reallocation and reports (`core`), plus file adapters (`import`, `export`).

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod import;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg),
        Commands::Check { .. } => cli::commands::check::handle(&cli.command, cfg),
        Commands::Report { .. } => cli::commands::report::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Payload { .. } => cli::commands::payload::handle(&cli.command, cfg),
    }
}

/// Entry point usato da main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ carica config UNA sola volta (file di --config o quello standard)
    let cfg = Config::load(&Config::resolve_path(cli.config.as_deref()))?;

    // 3️⃣ passa tutto al dispatcher
    dispatch(&cli, &cfg)
}
