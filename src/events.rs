//! Game events forwarded to front ends.

use crate::games::oxo::{Board, BoardError, Cell, Move, Outcome, Side, Spectator};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::debug;

/// Messages sent from the engine to a UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    /// A side claimed a cell.
    MoveMade {
        /// Side that moved.
        side: Side,
        /// Claimed coordinate.
        #[serde(rename = "move")]
        mv: Move,
    },
    /// The game ended.
    GameOver {
        /// Final result.
        outcome: Outcome,
    },
}

/// Text rendering of an event stream.
///
/// Keeps its own board and replays each move onto it, so the board shown
/// with an event is the one that move produced, even when the game has
/// already moved on by the time the event is read.
#[derive(Debug, Clone)]
pub struct EventRenderer {
    board: Board,
}

impl EventRenderer {
    /// Starts from an empty `size`×`size` board.
    pub fn new(size: usize) -> Self {
        Self {
            board: Board::new(size),
        }
    }

    /// Applies `event` and returns the text to show for it.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError`] if a move lies outside the board.
    pub fn render(&mut self, event: &GameEvent) -> Result<String, BoardError> {
        match *event {
            GameEvent::MoveMade { side, mv } => {
                self.board.put(mv.row, mv.column, Cell::Occupied(side))?;
                Ok(format!("{side} plays {mv}\n\n{}\n", self.board))
            }
            GameEvent::GameOver { outcome } => Ok(outcome.to_string()),
        }
    }
}

/// Spectator that forwards events into an unbounded channel.
///
/// Events are dropped once the receiver has gone away.
#[derive(Debug, Clone, derive_new::new)]
pub struct ChannelSpectator {
    event_tx: mpsc::UnboundedSender<GameEvent>,
}

impl ChannelSpectator {
    fn send(&self, event: GameEvent) {
        if self.event_tx.send(event).is_err() {
            debug!("Event receiver closed");
        }
    }
}

impl Spectator for ChannelSpectator {
    fn on_move_made(&self, side: Side, mv: Move) {
        self.send(GameEvent::MoveMade { side, mv });
    }

    fn on_game_over(&self, outcome: Outcome) {
        self.send(GameEvent::GameOver { outcome });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_json_shape() {
        let event = GameEvent::MoveMade {
            side: Side::Cross,
            mv: Move::new(1, 2),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"event": "move_made", "side": "cross", "move": {"row": 1, "column": 2}})
        );

        let over = GameEvent::GameOver {
            outcome: Outcome::Won(Side::Nought),
        };
        let json = serde_json::to_string(&over).unwrap();
        assert_eq!(json, r#"{"event":"game_over","outcome":{"won":"nought"}}"#);
        assert_eq!(serde_json::from_str::<GameEvent>(&json).unwrap(), over);
    }

    #[test]
    fn test_channel_spectator_forwards() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let spectator = ChannelSpectator::new(tx);
        spectator.on_move_made(Side::Nought, Move::new(0, 0));
        spectator.on_game_over(Outcome::Draw);

        assert_eq!(
            rx.try_recv().unwrap(),
            GameEvent::MoveMade {
                side: Side::Nought,
                mv: Move::new(0, 0)
            }
        );
        assert_eq!(
            rx.try_recv().unwrap(),
            GameEvent::GameOver {
                outcome: Outcome::Draw
            }
        );
    }

    #[test]
    fn test_renderer_shows_board_after_each_move() {
        let mut renderer = EventRenderer::new(2);
        let first = renderer
            .render(&GameEvent::MoveMade {
                side: Side::Cross,
                mv: Move::new(0, 1),
            })
            .unwrap();
        assert_eq!(first, "cross plays (0, 1)\n\n. X\n. .\n");

        let second = renderer
            .render(&GameEvent::MoveMade {
                side: Side::Nought,
                mv: Move::new(1, 0),
            })
            .unwrap();
        assert_eq!(second, "nought plays (1, 0)\n\n. X\nO .\n");

        let over = renderer
            .render(&GameEvent::GameOver {
                outcome: Outcome::Won(Side::Cross),
            })
            .unwrap();
        assert_eq!(over, "cross wins");
    }

    #[test]
    fn test_renderer_rejects_move_off_board() {
        let mut renderer = EventRenderer::new(2);
        let event = GameEvent::MoveMade {
            side: Side::Cross,
            mv: Move::new(2, 0),
        };
        assert!(matches!(
            renderer.render(&event),
            Err(BoardError::OutOfBounds { row: 2, .. })
        ));
    }

    #[test]
    fn test_closed_receiver_is_ignored() {
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        ChannelSpectator::new(tx).on_game_over(Outcome::Draw);
    }
}
