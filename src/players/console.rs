//! Human player that types moves on the console.

use crate::games::oxo::{GameError, GameView, Move, MoveCallback, MoveSet, Player};
use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::{Mutex, mpsc};
use tracing::{debug, info, warn};

/// Parses `"row col"` or `"row,col"` (zero-indexed).
pub fn parse_move(line: &str) -> Result<Move> {
    let mut parts = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|p| !p.is_empty());
    let row = parts.next().context("expected `row col`")?;
    let column = parts.next().context("expected a column after the row")?;
    anyhow::ensure!(parts.next().is_none(), "expected exactly two numbers");
    Ok(Move::new(
        row.parse().with_context(|| format!("bad row {row:?}"))?,
        column.parse().with_context(|| format!("bad column {column:?}"))?,
    ))
}

/// Human player fed by a channel of input lines.
///
/// Each request spawns a task on the runtime that reads lines until
/// one is accepted, so the engine is never blocked on the console.
pub struct ConsolePlayer {
    name: String,
    input_rx: Arc<Mutex<mpsc::UnboundedReceiver<String>>>,
    runtime: Handle,
}

impl ConsolePlayer {
    /// Creates a new console player whose turns run on `runtime`.
    pub fn new(
        name: impl Into<String>,
        input_rx: Arc<Mutex<mpsc::UnboundedReceiver<String>>>,
        runtime: Handle,
    ) -> Self {
        Self {
            name: name.into(),
            input_rx,
            runtime,
        }
    }

    async fn answer(
        name: String,
        input_rx: Arc<Mutex<mpsc::UnboundedReceiver<String>>>,
        callback: MoveCallback,
    ) {
        loop {
            let line = input_rx.lock().await.recv().await;
            let Some(line) = line else {
                info!(player = %name, "Input closed, abandoning turn");
                return;
            };
            let mv = match parse_move(&line) {
                Ok(mv) => mv,
                Err(e) => {
                    println!("{e:#}, try again:");
                    continue;
                }
            };
            match callback.submit(mv) {
                Ok(()) => {
                    debug!(player = %name, %mv, "Move accepted");
                    return;
                }
                Err(e @ GameError::InvalidMove { .. }) => println!("{e}, try again:"),
                Err(e) => {
                    warn!(player = %name, error = %e, "Turn no longer open");
                    return;
                }
            }
        }
    }
}

impl Player for ConsolePlayer {
    fn make_move(&self, game: GameView, moves: MoveSet, callback: MoveCallback) {
        println!("\n{}\n", game.board());
        println!(
            "{} ({}) to move, {} cells free. Enter `row col`:",
            self.name,
            game.current_side(),
            moves.len()
        );
        self.runtime.spawn(Self::answer(
            self.name.clone(),
            Arc::clone(&self.input_rx),
            callback,
        ));
    }
}

impl std::fmt::Debug for ConsolePlayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsolePlayer")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_move_forms() {
        assert_eq!(parse_move("1 2").unwrap(), Move::new(1, 2));
        assert_eq!(parse_move(" 0,2 ").unwrap(), Move::new(0, 2));
        assert_eq!(parse_move("3, 4").unwrap(), Move::new(3, 4));
    }

    #[test]
    fn test_parse_move_rejects_garbage() {
        assert!(parse_move("").is_err());
        assert!(parse_move("1").is_err());
        assert!(parse_move("1 2 3").is_err());
        assert!(parse_move("a b").is_err());
        assert!(parse_move("-1 0").is_err());
    }
}
