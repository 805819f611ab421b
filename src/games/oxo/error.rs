//! Error types for the noughts-and-crosses engine.

use super::types::Move;
use derive_more::{Display, Error};

/// Direct board access outside the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// Coordinates fall outside `[0, size)`.
    #[display("({}, {}) is outside a {}x{} board", row, column, size, size)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        column: usize,
        /// Board dimension.
        size: usize,
    },
}

/// Errors raised by [`Game`](super::Game) construction, turn protocol, and move acceptance.
///
/// A rejected call never mutates the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// Board dimension must be at least one, and `size * size` cells
    /// must be addressable.
    #[display("Board size must be positive and its square must fit in usize, got {}", size)]
    InvalidSize {
        /// Requested dimension.
        size: usize,
    },

    /// Move is not in the current turn's legal-move set.
    #[display("Invalid move {}: not a legal move this turn", attempted)]
    InvalidMove {
        /// The rejected move.
        attempted: Move,
    },

    /// `start()` was called more than once.
    #[display("Game has already been started")]
    AlreadyStarted,

    /// The game reached its outcome; no further moves are accepted.
    #[display("Game is already over")]
    GameFinished,

    /// The callback's turn was already played (callback reused or stale).
    #[display("Move callback for turn {} is spent; game is on turn {}", turn, current)]
    StaleTurn {
        /// Turn the callback was issued for.
        turn: u64,
        /// Turn the game is currently on.
        current: u64,
    },

    /// Board access failed.
    #[display("{}", _0)]
    Board(BoardError),
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}
