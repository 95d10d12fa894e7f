pub mod handlers;
pub mod models;

use crate::handlers::{list, render};
use crate::models::args::{AppCommands, Cli};

use anyhow::{Context, Result};
use clap::Parser;
use techdeck::kernel::config::load_deck_config;
use techdeck_logger::{LevelFilter, Logger};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let mut logger = Logger::builder(env!("CARGO_BIN_NAME")).stderr(true).level(level);
    if let Some(dir) = &cli.log_dir {
        logger = logger.path(dir);
    }
    let log = logger.init()?;
    tracing::debug!(files = log.writes_files(), "Logger ready");

    let config =
        load_deck_config(cli.config.as_ref()).context("Critical: Configuration is malformed")?;
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        AppCommands::Render(args) => render::run(&config, &args, &mut stdout)?,
        AppCommands::List { selected } => list::run(&config, selected, &mut stdout)?,
    }

    Ok(())
}
