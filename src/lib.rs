//! Strictly OXO library - noughts and crosses on an N×N board
//!
//! The engine sequences turns between two [`Player`]s, validates every
//! submitted move against the legal-move set for that turn, and reports
//! moves and the final [`Outcome`] to registered [`Spectator`]s.
//!
//! # Architecture
//!
//! - **Games**: board, rules, and the turn-sequencing [`Game`] engine
//! - **Players**: console and simple AI adapters
//! - **Events**: channel-backed spectator for front ends
//! - **Config**: TOML game settings
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use strictly_oxo::{Game, Outcome, Side, SimpleAi};
//!
//! let game = Game::new(
//!     3,
//!     Side::Cross,
//!     Arc::new(SimpleAi::new("nought")),
//!     Arc::new(SimpleAi::new("cross")),
//! )?;
//! // Both players answer synchronously, so the game runs to completion here.
//! game.start()?;
//! // Cross closes the anti-diagonal on its fourth move.
//! assert_eq!(game.outcome(), Some(Outcome::Won(Side::Cross)));
//! assert_eq!(game.history().len(), 7);
//! # Ok::<(), strictly_oxo::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod events;
mod games;
mod players;

// Crate-level exports - Configuration
pub use config::{ConfigError, OxoConfig};

// Crate-level exports - Events
pub use events::{ChannelSpectator, EventRenderer, GameEvent};

// Crate-level exports - Players
pub use players::{ConsolePlayer, PlayerKind, SimpleAi, parse_move};

// Crate-level exports - Game types
pub use games::oxo::{
    Board, BoardError, BoardView, Cell, Game, GameError, GameView, Move, MoveCallback, MoveSet,
    Outcome, Phase, Player, Side, Spectator,
};

// Crate-level exports - Rules
pub use games::oxo::rules::{has_line, is_full, valid_moves};
