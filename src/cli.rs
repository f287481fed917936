//! Command-line interface.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Hexapawn and Tic Tac Toe against an AI that learns from its losses
#[derive(Parser, Debug)]
#[command(name = "adaptive-games")]
#[command(version, long_about = None)]
pub struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Seed for the AI's choices (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Let the AI place the first Tic Tac Toe mark
    #[arg(long)]
    pub ai_first: bool,

    /// Let the Hexapawn AI prune moves after a loss
    #[arg(long)]
    pub hexapawn_learning: bool,

    /// Play one game directly instead of showing the menu
    #[arg(long, value_enum)]
    pub game: Option<GameChoice>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

/// Games selectable from the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum GameChoice {
    Hexapawn,
    Tictactoe,
}
