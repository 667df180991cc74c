//! healthviz library root.
//! Exposes the CLI parser, the high-level run() function, and the
//! query-to-chart pipeline modules.

pub mod chart;
pub mod cli;
pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod ui;

use clap::Parser;
use cli::commands::RenderOpts;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::{Path, PathBuf};

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let opts = RenderOpts {
        out: cli.out.as_ref().map(PathBuf::from),
        open: cli.open,
    };

    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Indicators { .. } => {
            cli::commands::indicators::handle(&cli.command, cfg, &opts)
        }
        Commands::Sanitation => cli::commands::sanitation::handle(cfg, &opts),
        Commands::Pollution => cli::commands::pollution::handle(cfg, &opts),
        Commands::Drugs => cli::commands::drugs::handle(cfg, &opts),
        Commands::Substances => cli::commands::substances::handle(cfg, &opts),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    let cfg = Config::load(cli.config.as_deref().map(Path::new))?;
    dispatch(&cli, &cfg)
}
