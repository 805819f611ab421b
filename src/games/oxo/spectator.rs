//! Spectators and notification fan-out.

use super::types::{Move, Outcome, Side};
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Mutex, PoisonError, Weak};
use tracing::{debug, error, instrument};

/// Observer of a game's moves and result.
///
/// Callbacks run synchronously on whichever thread accepted the move.
/// They may register or unregister spectators, but must not submit
/// moves of their own. A panicking callback is caught and logged; the
/// other spectators and the game carry on.
pub trait Spectator: Send + Sync {
    /// A side claimed a cell.
    fn on_move_made(&self, side: Side, mv: Move);

    /// The game ended.
    fn on_game_over(&self, outcome: Outcome);
}

/// Registration-ordered list of weakly held spectators.
///
/// Each dispatch iterates a point-in-time snapshot, so the list can be
/// changed from inside a callback without affecting the pass in flight.
#[derive(Default)]
pub(crate) struct SpectatorList {
    entries: Mutex<Vec<Weak<dyn Spectator>>>,
}

impl SpectatorList {
    pub(crate) fn register(&self, spectator: &Arc<dyn Spectator>) {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.push(Arc::downgrade(spectator));
        debug!(count = entries.len(), "Spectator registered");
    }

    /// Removes every registration of `spectator`.
    pub(crate) fn unregister(&self, spectator: &Arc<dyn Spectator>) {
        let target = Arc::downgrade(spectator);
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.retain(|w| !Weak::ptr_eq(w, &target) && w.strong_count() > 0);
        debug!(count = entries.len(), "Spectator unregistered");
    }

    fn snapshot(&self) -> Vec<Arc<dyn Spectator>> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter_map(Weak::upgrade)
            .collect()
    }

    #[instrument(skip(self))]
    pub(crate) fn move_made(&self, side: Side, mv: Move) {
        for spectator in self.snapshot() {
            isolate("on_move_made", || spectator.on_move_made(side, mv));
        }
    }

    #[instrument(skip(self))]
    pub(crate) fn game_over(&self, outcome: Outcome) {
        for spectator in self.snapshot() {
            isolate("on_game_over", || spectator.on_game_over(outcome));
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|w| w.strong_count() > 0)
            .count()
    }
}

/// Runs one spectator callback, containing any panic it raises.
fn isolate(callback: &str, f: impl FnOnce()) {
    if panic::catch_unwind(AssertUnwindSafe(f)).is_err() {
        error!(callback, "Spectator panicked; skipped");
    }
}

impl std::fmt::Debug for SpectatorList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpectatorList")
            .field("live", &self.len())
            .finish()
    }
}
