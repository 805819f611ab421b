//! Tests for the console player and channel spectator together.

use std::sync::Arc;
use strictly_oxo::{
    ChannelSpectator, ConsolePlayer, Game, GameEvent, Move, Outcome, Side, SimpleAi, Spectator,
};
use tokio::runtime::Handle;
use tokio::sync::{Mutex, mpsc};
use tokio::time::{Duration, timeout};

#[tokio::test]
async fn test_console_player_retries_until_accepted() {
    let (line_tx, line_rx) = mpsc::unbounded_channel();
    for line in ["oops", "1 1", "1 1", "0,2", "2 0"] {
        line_tx.send(line.to_string()).unwrap();
    }
    let human = ConsolePlayer::new("Human", Arc::new(Mutex::new(line_rx)), Handle::current());

    let game = Game::new(3, Side::Cross, Arc::new(SimpleAi::new("ai")), Arc::new(human)).unwrap();
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let spectator: Arc<dyn Spectator> = Arc::new(ChannelSpectator::new(event_tx));
    game.register_spectator(&spectator);
    game.start().unwrap();

    let mut events = Vec::new();
    loop {
        let event = timeout(Duration::from_secs(10), event_rx.recv())
            .await
            .expect("game stalled")
            .expect("channel open");
        let over = matches!(event, GameEvent::GameOver { .. });
        events.push(event);
        if over {
            break;
        }
    }

    let moves: Vec<_> = events
        .iter()
        .filter_map(|e| match e {
            GameEvent::MoveMade { side, mv } => Some((*side, *mv)),
            GameEvent::GameOver { .. } => None,
        })
        .collect();
    assert_eq!(
        moves,
        vec![
            (Side::Cross, Move::new(1, 1)),
            (Side::Nought, Move::new(0, 0)),
            (Side::Cross, Move::new(0, 2)),
            (Side::Nought, Move::new(0, 1)),
            (Side::Cross, Move::new(2, 0)),
        ]
    );
    assert_eq!(
        events.last(),
        Some(&GameEvent::GameOver {
            outcome: Outcome::Won(Side::Cross)
        })
    );
}
