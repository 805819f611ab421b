//! Board-full detection.

use super::super::Board;
use tracing::instrument;

/// Checks if no empty cell remains.
///
/// A full board with no line for the side that just moved is a draw.
#[instrument(skip(board), fields(size = board.size()))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| !c.is_empty())
}

#[cfg(test)]
mod tests {
    use super::super::win::has_line;
    use super::*;
    use crate::games::oxo::{Cell, Side};

    fn is_draw(board: &Board) -> bool {
        is_full(board) && !has_line(board, Side::Cross) && !has_line(board, Side::Nought)
    }

    fn fill(rows: [&str; 3]) -> Board {
        let mut board = Board::new(3);
        for (r, row) in rows.iter().enumerate() {
            for (c, ch) in row.chars().enumerate() {
                let cell = match ch {
                    'X' => Cell::Occupied(Side::Cross),
                    'O' => Cell::Occupied(Side::Nought),
                    _ => Cell::Empty,
                };
                board.put(r, c, cell).unwrap();
            }
        }
        board
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new(3)));
    }

    #[test]
    fn test_partial_board_not_full() {
        assert!(!is_full(&fill(["XOX", "O.X", "OXO"])));
    }

    #[test]
    fn test_draw_detection() {
        assert!(is_draw(&fill(["XOX", "OXX", "OXO"])));
    }

    #[test]
    fn test_not_draw_if_line() {
        let board = fill(["XXX", "OOX", "XOO"]);
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
