//! Command-line interface for strictly_sketch.

use clap::Parser;
use std::path::PathBuf;

/// Strictly Sketch - animated tic-tac-toe in the terminal
///
/// Click a cell to place a mark, press `r` to start over, `q` to quit.
#[derive(Parser, Debug)]
#[command(name = "strictly_sketch")]
#[command(about = "Animated two-player tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults are used if it does not exist)
    #[arg(short, long, default_value = "strictly_sketch.toml")]
    pub config: PathBuf,

    /// Override the animation frame rate (frames per second)
    #[arg(long)]
    pub frame_rate: Option<u32>,

    /// Override the log file path
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
