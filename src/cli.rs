//! Command-line interface for strictly_oxo.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_oxo::{PlayerKind, Side};

/// Strictly OXO - noughts and crosses on any square board
#[derive(Parser, Debug)]
#[command(name = "strictly_oxo")]
#[command(about = "Turn-based N×N noughts and crosses", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play one game
    Play {
        /// TOML config file; missing file means defaults
        #[arg(short, long, default_value = "oxo.toml")]
        config: PathBuf,

        /// Board dimension
        #[arg(long)]
        size: Option<usize>,

        /// Side that moves first (nought | cross)
        #[arg(long)]
        start: Option<Side>,

        /// Who plays noughts (human | ai)
        #[arg(long)]
        nought: Option<PlayerKind>,

        /// Who plays crosses (human | ai)
        #[arg(long)]
        cross: Option<PlayerKind>,

        /// Print events as JSON lines instead of drawing the board
        #[arg(long)]
        json: bool,
    },
}
