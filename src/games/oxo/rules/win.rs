//! Line detection.

use super::super::{Board, Cell, Side};
use tracing::instrument;

/// Returns true if `side` owns every cell of some row, column, or
/// either diagonal.
#[instrument(skip(board), fields(size = board.size()))]
pub fn has_line(board: &Board, side: Side) -> bool {
    let size = board.size();
    let cells = board.cells();
    let owned = |r: usize, c: usize| cells[r * size + c].is_owned_by(side);

    (0..size).any(|r| (0..size).all(|c| owned(r, c)))
        || (0..size).any(|c| (0..size).all(|r| owned(r, c)))
        || line_owned(&board.main_diagonal(), side)
        || line_owned(&board.anti_diagonal(), side)
}

fn line_owned(line: &[Cell], side: Side) -> bool {
    line.iter().all(|cell| cell.is_owned_by(side))
}
