//! Strictly OXO - command-line front end.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::io::BufRead;
use std::path::PathBuf;
use std::sync::Arc;
use strictly_oxo::{
    ChannelSpectator, EventRenderer, Game, GameEvent, OxoConfig, PlayerKind, Side, Spectator,
};
use tokio::sync::{Mutex, mpsc};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,strictly_oxo=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            size,
            start,
            nought,
            cross,
            json,
        } => run_play(config, size, start, nought, cross, json).await,
    }
}

/// Plays one game and reports events until it finishes.
#[instrument(skip_all, fields(config_path = %config_path.display()))]
async fn run_play(
    config_path: PathBuf,
    size: Option<usize>,
    start: Option<Side>,
    nought: Option<PlayerKind>,
    cross: Option<PlayerKind>,
    json: bool,
) -> Result<()> {
    let config = OxoConfig::load_or_default(&config_path)?.with_overrides(size, start, nought, cross);
    info!(?config, "Starting game");

    let input = Arc::new(Mutex::new(spawn_stdin_reader()));
    let runtime = tokio::runtime::Handle::current();
    let game = Game::new(
        *config.size(),
        *config.start(),
        config.nought().build("Nought", &input, &runtime),
        config.cross().build("Cross", &input, &runtime),
    )?;

    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let spectator: Arc<dyn Spectator> = Arc::new(ChannelSpectator::new(event_tx));
    game.register_spectator(&spectator);
    let mut renderer = EventRenderer::new(game.size());
    game.start()?;

    loop {
        let event = tokio::select! {
            event = event_rx.recv() => event.context("Event channel closed")?,
            _ = tokio::signal::ctrl_c() => anyhow::bail!("Interrupted before the game finished"),
        };

        if json {
            println!("{}", serde_json::to_string(&event)?);
        } else {
            println!("{}", renderer.render(&event)?);
        }
        if let GameEvent::GameOver { outcome } = event {
            info!(%outcome, moves = game.history().len(), "Game finished");
            return Ok(());
        }
    }
}

/// Forwards stdin lines to a channel from a dedicated thread.
fn spawn_stdin_reader() -> mpsc::UnboundedReceiver<String> {
    let (line_tx, line_rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if line_tx.send(line).is_err() {
                break;
            }
        }
    });
    line_rx
}
