//! Core value types for noughts and crosses.

use derive_new::new;
use serde::{Deserialize, Serialize};

/// One of the two competing sides.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Side {
    /// Plays `O`.
    #[strum(to_string = "nought", serialize = "o")]
    Nought,
    /// Plays `X`.
    #[strum(to_string = "cross", serialize = "x")]
    Cross,
}

impl Side {
    /// Returns the opposing side.
    pub fn other(self) -> Self {
        match self {
            Side::Nought => Side::Cross,
            Side::Cross => Side::Nought,
        }
    }

    /// Board glyph for this side.
    pub fn symbol(self) -> char {
        match self {
            Side::Nought => 'O',
            Side::Cross => 'X',
        }
    }
}

/// Occupancy of a single board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Claimed by a side.
    Occupied(Side),
}

impl Cell {
    /// Returns true if nobody has played here.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns true if the cell belongs to `side`.
    pub fn is_owned_by(self, side: Side) -> bool {
        self == Cell::Occupied(side)
    }

    /// The owning side, if any.
    pub fn side(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(side) => Some(side),
        }
    }
}

impl From<Side> for Cell {
    fn from(side: Side) -> Self {
        Cell::Occupied(side)
    }
}

/// A zero-indexed board coordinate a side wants to claim.
///
/// Two moves with the same coordinates are interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, new)]
pub struct Move {
    /// Row index.
    pub row: usize,
    /// Column index.
    pub column: usize,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Terminal result of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// The side completed a line.
    Won(Side),
    /// The board filled with no line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Side> {
        match self {
            Outcome::Won(side) => Some(*side),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Won(side) => write!(f, "{} wins", side),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_other_side() {
        assert_eq!(Side::Nought.other(), Side::Cross);
        assert_eq!(Side::Cross.other(), Side::Nought);
    }

    #[test]
    fn test_side_parsing() {
        assert_eq!(Side::from_str("cross").unwrap(), Side::Cross);
        assert_eq!(Side::from_str("X").unwrap(), Side::Cross);
        assert_eq!(Side::from_str("Nought").unwrap(), Side::Nought);
        assert_eq!(Side::from_str("o").unwrap(), Side::Nought);
        assert!(Side::from_str("triangle").is_err());
        assert_eq!(Side::Cross.to_string(), "cross");
    }

    #[test]
    fn test_cell_ownership() {
        assert!(Cell::Empty.is_empty());
        assert!(!Cell::Empty.is_owned_by(Side::Cross));
        assert!(Cell::from(Side::Cross).is_owned_by(Side::Cross));
        assert!(!Cell::from(Side::Cross).is_owned_by(Side::Nought));
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(Outcome::Won(Side::Nought).to_string(), "nought wins");
        assert_eq!(Outcome::Draw.to_string(), "Draw");
        assert!(Outcome::Draw.is_draw());
        assert_eq!(Outcome::Won(Side::Cross).winner(), Some(Side::Cross));
    }
}
