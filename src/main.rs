//! Adaptive Games - console entry point.

mod cli;

use std::io;

use adaptive_games::console::{run_menu, Console};
use adaptive_games::core::HubConfig;
use adaptive_games::error::SessionError;
use adaptive_games::session::Hub;
use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, GameChoice};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the board on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_writer(io::stderr)
        .init();

    let config = load_config(&cli)?;
    let mut hub = Hub::from_config(&config);
    info!(seed = hub.seed(), ?config, "configuration loaded");

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());

    let outcome = match cli.game {
        Some(GameChoice::Hexapawn) => hub.hexapawn.play(&mut console).map(|_| ()),
        Some(GameChoice::Tictactoe) => hub.tictactoe.play(&mut console).map(|_| ()),
        None => run_menu(&mut console, &mut hub),
    };

    match outcome {
        Ok(()) | Err(SessionError::InputClosed) => Ok(()),
        Err(e) => Err(e).context("console session failed"),
    }
}

/// File configuration first, then command-line overrides.
fn load_config(cli: &Cli) -> Result<HubConfig> {
    let mut config = match &cli.config {
        Some(path) => HubConfig::load(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => HubConfig::default(),
    };

    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if cli.ai_first {
        config = config.with_ai_first(true);
    }
    if cli.hexapawn_learning {
        config = config.with_hexapawn_learning(true);
    }
    Ok(config)
}
