//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

use crate::config::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "cartview")]
#[command(author, version, about = "Render a user and cart state snapshot")]
pub struct Cli {
    /// Config file (default: platform config dir / cartview.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Snapshot JSON document to render instead of the sample state
    #[arg(short, long)]
    pub snapshot: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Count selector and render calls and log the totals
    #[arg(long)]
    pub count_renders: bool,

    /// Print the loaded state as a snapshot document and exit
    #[arg(long)]
    pub dump_snapshot: bool,
}
