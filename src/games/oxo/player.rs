//! Player capability and the handles a player receives each turn.

use super::board::BoardView;
use super::error::GameError;
use super::game::{Phase, Shared};
use super::rules::MoveSet;
use super::types::{Move, Outcome, Side};
use std::sync::Arc;
use tracing::instrument;

/// Something that chooses moves for one side.
///
/// The engine calls [`make_move`](Player::make_move) once per turn.
/// The player answers through `callback`, either before returning or
/// later from any thread. Until it answers, the game waits.
///
/// The engine holds players weakly. A player may keep its callback
/// without keeping the game alive, but an answer that arrives after the
/// [`Game`](super::Game) was dropped is recorded and no further move is
/// requested. If `make_move` panics, a callback it stored can still
/// answer the turn; a panic after answering ends the game's requests.
pub trait Player: Send + Sync {
    /// Chooses a move from `moves` and submits it through `callback`.
    fn make_move(&self, game: GameView, moves: MoveSet, callback: MoveCallback);
}

impl<F> Player for F
where
    F: Fn(GameView, MoveSet, MoveCallback) + Send + Sync,
{
    fn make_move(&self, game: GameView, moves: MoveSet, callback: MoveCallback) {
        self(game, moves, callback)
    }
}

/// Read-only handle to a running game.
#[derive(Clone)]
pub struct GameView {
    pub(crate) shared: Arc<Shared>,
}

impl GameView {
    /// Snapshot of the current board.
    pub fn board(&self) -> BoardView {
        self.shared.board()
    }

    /// Side to move, or the side that moved last once finished.
    pub fn current_side(&self) -> Side {
        self.shared.current_side()
    }

    /// Lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.shared.phase()
    }

    /// Result, once the game has finished.
    pub fn outcome(&self) -> Option<Outcome> {
        self.shared.outcome()
    }

    /// Board dimension.
    pub fn size(&self) -> usize {
        self.shared.size()
    }
}

impl std::fmt::Debug for GameView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameView")
            .field("phase", &self.phase())
            .finish_non_exhaustive()
    }
}

/// Single-turn move acceptance handle.
///
/// Only the first accepted submission counts. A rejected move leaves
/// the handle usable so the player can try again; once a move is
/// accepted every later call fails.
pub struct MoveCallback {
    pub(crate) shared: Arc<Shared>,
    pub(crate) turn: u64,
}

impl MoveCallback {
    /// Submits `mv` for the turn this callback was issued for.
    ///
    /// # Errors
    ///
    /// - [`GameError::InvalidMove`] if `mv` is not legal this turn.
    /// - [`GameError::StaleTurn`] if this turn has already been played.
    /// - [`GameError::GameFinished`] if the game is over.
    #[instrument(skip(self), fields(turn = self.turn))]
    pub fn submit(&self, mv: Move) -> Result<(), GameError> {
        self.shared.accept(self.turn, mv)
    }

    /// Turn number this callback belongs to, counting from zero.
    pub fn turn(&self) -> u64 {
        self.turn
    }
}

impl std::fmt::Debug for MoveCallback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MoveCallback")
            .field("turn", &self.turn)
            .finish_non_exhaustive()
    }
}
