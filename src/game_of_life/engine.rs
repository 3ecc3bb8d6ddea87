//! Generation-tracking engine around a single grid

use super::io::{grid_to_string, parse_grid};
use super::{CellState, GameOfLifeRules, Grid};
use log::trace;

/// First generation number when none is supplied
pub const FIRST_GENERATION: u64 = 1;

/// Highest accepted start generation
pub const MAX_START_GENERATION: u64 = u32::MAX as u64;

/// Owns the current generation of a grid and advances it.
///
/// The generation counter starts at 1 (or a supplied start value) and goes
/// up by one per [`advance`](LifeEngine::advance). Only the current cell
/// buffer is kept; earlier generations are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifeEngine {
    grid: Grid,
    generation: u64,
}

impl LifeEngine {
    pub fn new(grid: Grid) -> Self {
        Self::with_start_generation(grid, FIRST_GENERATION)
    }

    /// Start counting from `generation`, clamped to
    /// `FIRST_GENERATION..=MAX_START_GENERATION`.
    pub fn with_start_generation(grid: Grid, generation: u64) -> Self {
        Self {
            grid,
            generation: generation.clamp(FIRST_GENERATION, MAX_START_GENERATION),
        }
    }

    /// Parse `text` into a fresh engine at generation 1
    pub fn from_text(text: &str) -> Self {
        Self::new(parse_grid(text))
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// State at `(row, col)`; dead outside the grid
    pub fn cell_state(&self, row: usize, col: usize) -> CellState {
        self.grid.get(row, col)
    }

    /// Living neighbors of `(row, col)`, between 0 and 8
    pub fn living_neighbor_count(&self, row: usize, col: usize) -> u8 {
        self.grid.count_neighbors(row, col)
    }

    /// Replace the grid with its next generation and bump the counter.
    ///
    /// The counter saturates at `u64::MAX`, which the start bound keeps out
    /// of reach in practice.
    pub fn advance(&mut self) {
        self.grid = GameOfLifeRules::evolve(&self.grid);
        self.generation = self.generation.saturating_add(1);
        trace!(
            "Generation {}: {} living cells",
            self.generation,
            self.grid.living_count()
        );
    }

    /// Advance `generations` times
    pub fn advance_by(&mut self, generations: usize) {
        for _ in 0..generations {
            self.advance();
        }
    }

    /// Current generation as body text
    pub fn to_text(&self) -> String {
        grid_to_string(&self.grid)
    }
}

impl From<Grid> for LifeEngine {
    fn from(grid: Grid) -> Self {
        Self::new(grid)
    }
}
