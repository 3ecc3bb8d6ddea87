//! Grid representation and utilities for Game of Life

use super::CellState;
use crate::error::GridError;
use serde::Serialize;
use std::fmt;

/// Largest number of cells a grid may hold
pub const MAX_CELLS: usize = 1 << 26;

/// Represents a finite Game of Life grid.
///
/// Dimensions are fixed at construction. A grid with zero rows or zero
/// columns is the empty grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Create a new all-dead grid.
    ///
    /// Sizes above [`MAX_CELLS`] yield the empty grid; use
    /// [`try_new`](Grid::try_new) to tell the two apart.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::try_new(rows, cols).unwrap_or_default()
    }

    /// Create a new all-dead grid, failing when it would exceed [`MAX_CELLS`]
    pub fn try_new(rows: usize, cols: usize) -> Result<Self, GridError> {
        // a zero dimension collapses both so every empty grid compares equal
        if rows == 0 || cols == 0 {
            return Ok(Self { rows: 0, cols: 0, cells: Vec::new() });
        }

        let len = rows
            .checked_mul(cols)
            .filter(|&len| len <= MAX_CELLS)
            .ok_or(GridError::TooLarge { rows, cols, max: MAX_CELLS })?;

        Ok(Self {
            rows,
            cols,
            cells: vec![CellState::Dead; len],
        })
    }

    /// The canonical empty grid
    pub fn empty() -> Self {
        Self { rows: 0, cols: 0, cells: Vec::new() }
    }

    /// Create a grid from rows of cell states. Ragged rows are padded with dead cells.
    pub fn from_rows(rows: Vec<Vec<CellState>>) -> Self {
        let height = rows.len();
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        let mut grid = Self::new(height, width);

        for (row, states) in rows.into_iter().enumerate() {
            for (col, state) in states.into_iter().enumerate() {
                grid.put(row, col, state);
            }
        }

        grid
    }

    pub(crate) fn from_cells(rows: usize, cols: usize, cells: Vec<CellState>) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        Self { rows, cols, cells }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// True for the zero-dimension grid
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Convert 2D coordinates to 1D index
    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    #[inline]
    fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Get cell state at coordinates. Out of range is dead.
    pub fn get(&self, row: usize, col: usize) -> CellState {
        if self.contains(row, col) {
            self.cells[self.index(row, col)]
        } else {
            CellState::Dead
        }
    }

    /// Set cell state at coordinates
    pub fn set(&mut self, row: usize, col: usize, state: CellState) -> Result<(), GridError> {
        if !self.contains(row, col) {
            return Err(GridError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        self.put(row, col, state);
        Ok(())
    }

    /// Set a cell, silently ignoring coordinates outside the grid
    pub(crate) fn put(&mut self, row: usize, col: usize, state: CellState) {
        if self.contains(row, col) {
            let idx = self.index(row, col);
            self.cells[idx] = state;
        }
    }

    /// Count living neighbors in the Moore neighborhood. The grid does not wrap.
    pub fn count_neighbors(&self, row: usize, col: usize) -> u8 {
        let mut count = 0;

        for dr in [-1, 0, 1] {
            for dc in [-1, 0, 1] {
                if dr == 0 && dc == 0 {
                    continue;
                }

                if self.is_neighbor_alive(row, col, dr, dc) {
                    count += 1;
                }
            }
        }

        count
    }

    fn is_neighbor_alive(&self, row: usize, col: usize, dr: isize, dc: isize) -> bool {
        match (row.checked_add_signed(dr), col.checked_add_signed(dc)) {
            (Some(r), Some(c)) => self.get(r, c).is_alive(),
            _ => false, // off the top or left edge
        }
    }

    /// Iterate over `(row, col, state)` in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, CellState)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &state)| (idx / self.cols, idx % self.cols, state))
    }

    /// Cell states of a single row; empty when out of range
    pub fn row(&self, row: usize) -> &[CellState] {
        if row < self.rows {
            let start = row * self.cols;
            &self.cells[start..start + self.cols]
        } else {
            &[]
        }
    }

    /// Get all living cell coordinates
    pub fn living_cells(&self) -> Vec<(usize, usize)> {
        self.iter()
            .filter(|(_, _, state)| state.is_alive())
            .map(|(row, col, _)| (row, col))
            .collect()
    }

    /// Count total living cells
    pub fn living_count(&self) -> usize {
        self.cells.iter().filter(|state| state.is_alive()).count()
    }

    /// True when no cell is alive
    pub fn is_extinct(&self) -> bool {
        self.cells.iter().all(|state| !state.is_alive())
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            if row > 0 {
                writeln!(f)?;
            }
            for state in self.row(row) {
                write!(f, "{}", state)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use CellState::{Alive as A, Dead as D};

    #[test]
    fn test_grid_creation() {
        let grid = Grid::new(3, 4);
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 4);
        assert_eq!(grid.living_count(), 0);
        assert!(grid.is_extinct());
        assert!(!grid.is_empty());
    }

    #[test]
    fn test_zero_dimension_is_empty() {
        assert!(Grid::new(0, 5).is_empty());
        assert!(Grid::new(5, 0).is_empty());
        assert_eq!(Grid::new(0, 5), Grid::empty());
        assert_eq!(Grid::new(5, 0).rows(), 0);
    }

    #[test]
    fn test_size_limit() {
        assert_eq!(
            Grid::try_new(usize::MAX, 2),
            Err(GridError::TooLarge { rows: usize::MAX, cols: 2, max: MAX_CELLS })
        );
        assert!(Grid::try_new(100_000, 100_000).is_err());
        assert!(Grid::new(100_000, 100_000).is_empty());

        let grid = Grid::try_new(1, MAX_CELLS).unwrap();
        assert_eq!(grid.cols(), MAX_CELLS);
        assert!(Grid::try_new(2, MAX_CELLS / 2 + 1).is_err());
    }

    #[test]
    fn test_grid_from_rows() {
        let grid = Grid::from_rows(vec![
            vec![A, D, A],
            vec![D, A, D],
            vec![A, D, A],
        ]);
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.living_count(), 5);
        assert_eq!(grid.living_cells(), vec![(0, 0), (0, 2), (1, 1), (2, 0), (2, 2)]);
    }

    #[test]
    fn test_out_of_range_is_dead() {
        let grid = Grid::from_rows(vec![vec![A, A], vec![A, A]]);
        assert_eq!(grid.get(2, 0), D);
        assert_eq!(grid.get(0, 2), D);
        assert_eq!(grid.get(usize::MAX, usize::MAX), D);
        assert_eq!(Grid::empty().get(0, 0), D);

        assert_eq!(grid.count_neighbors(usize::MAX, 0), 0);
        assert_eq!(grid.count_neighbors(2, 0), 2);
    }

    #[test]
    fn test_set_out_of_bounds() {
        let mut grid = Grid::new(2, 2);
        assert!(grid.set(1, 1, A).is_ok());
        assert_eq!(grid.get(1, 1), A);
        assert_eq!(
            grid.set(2, 0, A),
            Err(GridError::OutOfBounds { row: 2, col: 0, rows: 2, cols: 2 })
        );
    }

    #[test]
    fn test_neighbor_counting() {
        let grid = Grid::from_rows(vec![
            vec![A, A, A],
            vec![A, D, A],
            vec![A, A, A],
        ]);

        assert_eq!(grid.count_neighbors(1, 1), 8);
        // edges of the grid contribute nothing
        assert_eq!(grid.count_neighbors(0, 0), 2);
        assert_eq!(grid.count_neighbors(0, 1), 4);
        assert_eq!(grid.count_neighbors(2, 2), 2);
    }

    #[test]
    fn test_no_wrapping() {
        let grid = Grid::from_rows(vec![vec![A, D], vec![D, A]]);
        assert_eq!(grid.count_neighbors(0, 0), 1);
        assert_eq!(grid.count_neighbors(0, 1), 2);
    }

    #[test]
    fn test_display() {
        let grid = Grid::from_rows(vec![vec![A, D], vec![D, A]]);
        assert_eq!(grid.to_string(), "*.\n.*");
        assert_eq!(Grid::empty().to_string(), "");
    }
}
