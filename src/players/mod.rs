//! Player implementations.

mod console;
mod simple_ai;

pub use console::{ConsolePlayer, parse_move};
pub use simple_ai::SimpleAi;

use crate::games::oxo::Player;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc;

/// Kind of player, as named in config files and on the command line.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PlayerKind {
    /// Moves typed on the console.
    Human,
    /// [`SimpleAi`].
    Ai,
}

impl PlayerKind {
    /// Builds a player of this kind.
    ///
    /// Human players share `input`, so two humans at one console take
    /// turns reading it.
    pub fn build(
        self,
        name: impl Into<String>,
        input: &Arc<tokio::sync::Mutex<mpsc::UnboundedReceiver<String>>>,
        runtime: &Handle,
    ) -> Arc<dyn Player> {
        match self {
            PlayerKind::Human => Arc::new(ConsolePlayer::new(
                name,
                Arc::clone(input),
                runtime.clone(),
            )),
            PlayerKind::Ai => Arc::new(SimpleAi::new(name)),
        }
    }
}
