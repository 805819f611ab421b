//! Noughts and crosses on an N×N board.

mod board;
mod error;
mod game;
mod player;
pub mod rules;
mod spectator;
mod types;

pub use board::{Board, BoardView};
pub use error::{BoardError, GameError};
pub use game::{Game, Phase};
pub use player::{GameView, MoveCallback, Player};
pub use rules::MoveSet;
pub use spectator::Spectator;
pub use types::{Cell, Move, Outcome, Side};
