//! Legal-move computation.

use super::super::{Board, Move};
use std::collections::HashSet;
use tracing::instrument;

/// Coordinates that may be claimed this turn.
pub type MoveSet = HashSet<Move>;

/// Returns every coordinate whose cell is empty.
#[instrument(skip(board), fields(size = board.size()))]
pub fn valid_moves(board: &Board) -> MoveSet {
    let size = board.size();
    board
        .cells()
        .iter()
        .enumerate()
        .filter(|(_, cell)| cell.is_empty())
        .map(|(i, _)| Move::new(i / size, i % size))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::oxo::{Cell, Side};

    #[test]
    fn test_empty_board_all_moves() {
        for size in 1..=5 {
            let moves = valid_moves(&Board::new(size));
            assert_eq!(moves.len(), size * size);
            assert!(moves.iter().all(|m| m.row < size && m.column < size));
        }
    }

    #[test]
    fn test_occupied_cells_excluded() {
        let mut board = Board::new(3);
        board.put(0, 0, Cell::Occupied(Side::Cross)).unwrap();
        board.put(2, 1, Cell::Occupied(Side::Nought)).unwrap();

        let moves = valid_moves(&board);
        assert_eq!(moves.len(), 7);
        assert!(!moves.contains(&Move::new(0, 0)));
        assert!(!moves.contains(&Move::new(2, 1)));
        assert!(moves.contains(&Move::new(1, 1)));
    }

    #[test]
    fn test_full_board_no_moves() {
        let mut board = Board::new(2);
        for r in 0..2 {
            for c in 0..2 {
                board.put(r, c, Cell::Occupied(Side::Nought)).unwrap();
            }
        }
        assert!(valid_moves(&board).is_empty());
    }
}
