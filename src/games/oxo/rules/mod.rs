//! Game rules for noughts and crosses.
//!
//! Pure functions over a [`Board`](super::Board). The engine composes
//! them once per turn; none of them cache anything between calls.

pub mod draw;
pub mod moves;
pub mod win;

pub use draw::is_full;
pub use moves::{MoveSet, valid_moves};
pub use win::has_line;
