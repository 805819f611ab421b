//! Square grid of cells with line accessors.

use super::error::BoardError;
use super::types::{Cell, Side};
use serde::{Deserialize, Serialize};
use std::ops::Deref;
use tracing::instrument;

/// An N×N board. Dimensions are fixed at construction.
///
/// The board enforces bounds but not game rules; the engine decides
/// what may be placed where.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    /// Cells in row-major order.
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board of the given dimension.
    ///
    /// # Panics
    ///
    /// Panics if `size * size` overflows `usize`. [`Game::new`](super::Game::new)
    /// rejects such sizes before building a board.
    #[instrument]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Board dimension.
    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, row: usize, column: usize) -> Result<usize, BoardError> {
        if row >= self.size || column >= self.size {
            return Err(BoardError::OutOfBounds {
                row,
                column,
                size: self.size,
            });
        }
        Ok(row * self.size + column)
    }

    /// Returns the cell at `(row, column)`.
    pub fn get(&self, row: usize, column: usize) -> Result<Cell, BoardError> {
        self.index(row, column).map(|i| self.cells[i])
    }

    /// Replaces the cell at `(row, column)`.
    #[instrument(skip(self), fields(size = self.size))]
    pub fn put(&mut self, row: usize, column: usize, cell: Cell) -> Result<(), BoardError> {
        let i = self.index(row, column)?;
        self.cells[i] = cell;
        Ok(())
    }

    /// Cells of row `i`, left to right.
    pub fn row(&self, i: usize) -> Result<Vec<Cell>, BoardError> {
        let start = self.index(i, 0)?;
        Ok(self.cells[start..start + self.size].to_vec())
    }

    /// Cells of column `i`, top to bottom.
    pub fn column(&self, i: usize) -> Result<Vec<Cell>, BoardError> {
        self.index(0, i)?;
        Ok(self.cells.iter().skip(i).step_by(self.size).copied().collect())
    }

    /// Cells where `row == column`, top-left to bottom-right.
    pub fn main_diagonal(&self) -> Vec<Cell> {
        (0..self.size)
            .map(|i| self.cells[i * self.size + i])
            .collect()
    }

    /// Cells where `row + column == size - 1`, top-right to bottom-left.
    pub fn anti_diagonal(&self) -> Vec<Cell> {
        (0..self.size)
            .map(|i| self.cells[i * self.size + (self.size - 1 - i)])
            .collect()
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.cells.chunks(self.size.max(1)).enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = row
                .iter()
                .map(|cell| match cell {
                    Cell::Empty => ".".to_string(),
                    Cell::Occupied(side) => side.symbol().to_string(),
                })
                .collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

/// Read-only snapshot of a board.
///
/// Dereferences to [`Board`] for queries but offers no way back to
/// the engine's board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct BoardView(Board);

impl BoardView {
    pub(crate) fn snapshot(board: &Board) -> Self {
        Self(board.clone())
    }

    /// Counts cells owned by `side`.
    pub fn count(&self, side: Side) -> usize {
        self.0.cells.iter().filter(|c| c.is_owned_by(side)).count()
    }
}

impl Deref for BoardView {
    type Target = Board;

    fn deref(&self) -> &Board {
        &self.0
    }
}

impl std::fmt::Display for BoardView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
