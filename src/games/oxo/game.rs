//! Turn-sequencing engine for noughts and crosses.
//!
//! The engine asks one player at a time for a move and hands it a
//! [`MoveCallback`] bound to that turn. Accepting a move places the
//! cell, notifies spectators, then either finishes the game or asks the
//! other side's player.
//!
//! Players may answer synchronously (inside `make_move`) or from
//! another thread. Synchronous answers are not recursed into: the
//! request loop in [`Shared::drive`] picks up the next turn once
//! `make_move` returns, so long games do not grow the stack.

use super::board::{Board, BoardView};
use super::error::GameError;
use super::player::{GameView, MoveCallback, Player};
use super::rules::{MoveSet, has_line, is_full, valid_moves};
use super::spectator::{Spectator, SpectatorList};
use super::types::{Cell, Move, Outcome, Side};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use tracing::{debug, info, instrument, warn};

/// Lifecycle of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Constructed, `start()` not yet called.
    NotStarted,
    /// Waiting on the given side's player.
    AwaitingMove(Side),
    /// Absorbing terminal state.
    Finished(Outcome),
}

#[derive(Debug)]
struct State {
    board: Board,
    side: Side,
    phase: Phase,
    /// Number of accepted moves; identifies the turn callbacks belong to.
    turn: u64,
    /// Legal moves for `turn`. Empty while no request is outstanding.
    legal: MoveSet,
    history: Vec<(Side, Move)>,
    /// A player's `make_move` is on the stack.
    requesting: bool,
    /// The next request is owed by whoever is in `drive`.
    deferred: bool,
}

pub(crate) struct Shared {
    state: Mutex<State>,
    spectators: SpectatorList,
    // Weak so a player holding its callback does not form a cycle.
    nought: Weak<dyn Player>,
    cross: Weak<dyn Player>,
}

/// Marks a player's `make_move` as on the stack.
///
/// Dropping it without [`finish`](Requesting::finish), as happens when
/// the player unwinds, still clears the marker.
struct Requesting<'a> {
    shared: &'a Shared,
    armed: bool,
}

impl Requesting<'_> {
    /// Clears the marker and reports whether the next request is owed.
    fn finish(mut self) -> bool {
        self.armed = false;
        let shared = self.shared;
        let mut state = shared.lock();
        state.requesting = false;
        std::mem::take(&mut state.deferred)
    }
}

impl Drop for Requesting<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let mut state = self.shared.lock();
        state.requesting = false;
        if std::mem::take(&mut state.deferred) {
            warn!(turn = state.turn, "Player unwound after answering; next move not requested");
        }
    }
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn player(&self, side: Side) -> Option<Arc<dyn Player>> {
        match side {
            Side::Nought => self.nought.upgrade(),
            Side::Cross => self.cross.upgrade(),
        }
    }

    pub(crate) fn board(&self) -> BoardView {
        BoardView::snapshot(&self.lock().board)
    }

    pub(crate) fn current_side(&self) -> Side {
        self.lock().side
    }

    pub(crate) fn phase(&self) -> Phase {
        self.lock().phase
    }

    pub(crate) fn outcome(&self) -> Option<Outcome> {
        match self.lock().phase {
            Phase::Finished(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub(crate) fn size(&self) -> usize {
        self.lock().board.size()
    }

    /// Issues move requests until a player leaves its turn unanswered
    /// or the game ends.
    fn drive(self: &Arc<Self>) {
        loop {
            let (player, moves, turn, side) = {
                let mut state = self.lock();
                if !matches!(state.phase, Phase::AwaitingMove(_)) {
                    return;
                }
                let Some(player) = self.player(state.side) else {
                    warn!(side = %state.side, turn = state.turn, "Game dropped; move not requested");
                    return;
                };
                state.requesting = true;
                (player, state.legal.clone(), state.turn, state.side)
            };
            let request = Requesting {
                shared: self,
                armed: true,
            };

            debug!(%side, turn, legal = moves.len(), "Requesting move");
            let view = GameView {
                shared: Arc::clone(self),
            };
            let callback = MoveCallback {
                shared: Arc::clone(self),
                turn,
            };
            player.make_move(view, moves, callback);

            if !request.finish() {
                return;
            }
        }
    }

    #[instrument(skip(self))]
    pub(crate) fn accept(self: &Arc<Self>, turn: u64, mv: Move) -> Result<(), GameError> {
        let (side, outcome) = {
            let mut state = self.lock();
            match state.phase {
                Phase::Finished(_) => {
                    warn!(%mv, "Move submitted after game over");
                    return Err(GameError::GameFinished);
                }
                _ if turn != state.turn || state.legal.is_empty() => {
                    warn!(%mv, current = state.turn, "Move submitted on a spent callback");
                    return Err(GameError::StaleTurn {
                        turn,
                        current: state.turn,
                    });
                }
                _ => {}
            }
            if !state.legal.contains(&mv) {
                warn!(%mv, side = %state.side, "Rejected illegal move");
                return Err(GameError::InvalidMove { attempted: mv });
            }

            let side = state.side;
            state.board.put(mv.row, mv.column, Cell::Occupied(side))?;
            state.history.push((side, mv));
            state.turn += 1;
            state.legal.clear();

            // A line wins even when the same move fills the board.
            let outcome = if has_line(&state.board, side) {
                Some(Outcome::Won(side))
            } else if is_full(&state.board) {
                Some(Outcome::Draw)
            } else {
                None
            };
            if let Some(outcome) = outcome {
                state.phase = Phase::Finished(outcome);
            }
            (side, outcome)
        };

        debug!(%side, %mv, "Move accepted");
        self.spectators.move_made(side, mv);

        if let Some(outcome) = outcome {
            info!(%outcome, "Game over");
            self.spectators.game_over(outcome);
            return Ok(());
        }

        let mut state = self.lock();
        state.side = side.other();
        state.phase = Phase::AwaitingMove(state.side);
        state.legal = valid_moves(&state.board);
        if state.requesting {
            state.deferred = true;
            return Ok(());
        }
        drop(state);

        self.drive();
        Ok(())
    }
}

/// A game of noughts and crosses between two players.
///
/// Owns the board and turn cursor. Players and spectators are supplied
/// by the caller; spectators are held weakly and must be kept alive
/// elsewhere for as long as they should receive events. The players are
/// kept alive by the `Game` value itself, so dropping it abandons any
/// turns still to come.
pub struct Game {
    shared: Arc<Shared>,
    _players: [Arc<dyn Player>; 2],
}

impl Game {
    /// Creates a game on a `size`×`size` board.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidSize`] if `size` is zero or `size * size`
    /// overflows `usize`.
    #[instrument(skip(nought, cross))]
    pub fn new(
        size: usize,
        start: Side,
        nought: Arc<dyn Player>,
        cross: Arc<dyn Player>,
    ) -> Result<Self, GameError> {
        if size == 0 || size.checked_mul(size).is_none() {
            warn!("Rejected board size");
            return Err(GameError::InvalidSize { size });
        }
        debug!("Creating game");
        Ok(Self {
            shared: Arc::new(Shared {
                state: Mutex::new(State {
                    board: Board::new(size),
                    side: start,
                    phase: Phase::NotStarted,
                    turn: 0,
                    legal: MoveSet::new(),
                    history: Vec::new(),
                    requesting: false,
                    deferred: false,
                }),
                spectators: SpectatorList::default(),
                nought: Arc::downgrade(&nought),
                cross: Arc::downgrade(&cross),
            }),
            _players: [nought, cross],
        })
    }

    /// Starts the game by asking the starting side's player for a move.
    ///
    /// With players that answer synchronously the whole game runs
    /// before this returns.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::AlreadyStarted`] on any call after the first.
    #[instrument(skip(self))]
    pub fn start(&self) -> Result<(), GameError> {
        {
            let mut state = self.shared.lock();
            if state.phase != Phase::NotStarted {
                warn!("start() called twice");
                return Err(GameError::AlreadyStarted);
            }
            state.phase = Phase::AwaitingMove(state.side);
            state.legal = valid_moves(&state.board);
            info!(side = %state.side, size = state.board.size(), "Game started");
        }
        self.shared.drive();
        Ok(())
    }

    /// Adds a spectator. Takes effect from the next notification pass.
    pub fn register_spectator(&self, spectator: &Arc<dyn Spectator>) {
        self.shared.spectators.register(spectator);
    }

    /// Adds spectators in order.
    pub fn register_spectators(&self, spectators: &[Arc<dyn Spectator>]) {
        spectators.iter().for_each(|s| self.register_spectator(s));
    }

    /// Removes a spectator. A pass already in flight still reaches it.
    pub fn unregister_spectator(&self, spectator: &Arc<dyn Spectator>) {
        self.shared.spectators.unregister(spectator);
    }

    /// Removes several spectators.
    pub fn unregister_spectators(&self, spectators: &[Arc<dyn Spectator>]) {
        spectators.iter().for_each(|s| self.unregister_spectator(s));
    }

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

    /// Legal moves for the outstanding request, if any.
    pub fn legal_moves(&self) -> MoveSet {
        self.shared.lock().legal.clone()
    }

    /// Accepted moves in play order.
    pub fn history(&self) -> Vec<(Side, Move)> {
        self.shared.lock().history.clone()
    }

    /// Board dimension.
    pub fn size(&self) -> usize {
        self.shared.size()
    }

    /// Read-only handle that can be shared with other threads.
    pub fn view(&self) -> GameView {
        GameView {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.shared.lock();
        f.debug_struct("Game")
            .field("phase", &state.phase)
            .field("side", &state.side)
            .field("turn", &state.turn)
            .field("spectators", &self.shared.spectators)
            .finish_non_exhaustive()
    }
}
