//! Simple AI player for testing.

use crate::games::oxo::{GameView, MoveCallback, MoveSet, Player};
use tracing::{debug, warn};

/// Simple AI that picks the first free cell in row-major order.
#[derive(Debug, Clone)]
pub struct SimpleAi {
    name: String,
}

impl SimpleAi {
    /// Creates a new simple AI.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Returns the player's display name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Player for SimpleAi {
    fn make_move(&self, game: GameView, moves: MoveSet, callback: MoveCallback) {
        let Some(choice) = moves.iter().min().copied() else {
            warn!(ai = %self.name, "No legal moves offered");
            return;
        };
        debug!(ai = %self.name, side = %game.current_side(), %choice, "AI chose move");
        if let Err(e) = callback.submit(choice) {
            warn!(ai = %self.name, error = %e, "AI move rejected");
        }
    }
}
