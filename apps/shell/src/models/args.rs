//! # CLI Argument Definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "deck")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Render and inspect technology portfolios")]
pub struct Cli {
    /// Configuration file (defaults to `techdeck.*` in the working directory)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Also write rolling log files into this directory
    #[arg(long, global = true, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Log verbosity: repeat for more detail
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: AppCommands,
}

#[derive(Debug, Subcommand)]
pub enum AppCommands {
    /// Render the portfolio as a standalone HTML page
    Render(RenderArgs),
    /// List the catalog grouped by sector
    List {
        /// Only list technologies of the configured portfolio
        #[arg(long)]
        selected: bool,
    },
}

#[derive(Debug, Clone, Default, clap::Args)]
pub struct RenderArgs {
    /// Write the page to a file instead of stdout
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Flip the selection of a technology relative to the configured portfolio
    #[arg(long = "toggle", value_name = "ID")]
    pub toggle: Vec<String>,

    /// Mark a technology as featured
    #[arg(long = "feature", value_name = "ID")]
    pub feature: Vec<String>,

    /// Cards per row
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..))]
    pub cols: Option<u8>,

    /// Page title
    #[arg(long, default_value = "Technology portfolio")]
    pub title: String,

    /// Render only the selected technologies instead of the whole catalog
    #[arg(long)]
    pub only_selected: bool,
}
