//! Game of Life rules implementation (B3/S23)

use super::{CellState, Grid};

/// Which of the transition rules applied to a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Alive with fewer than two living neighbors
    Underpopulation,
    /// Alive with more than three living neighbors
    Overcrowding,
    /// Alive with two or three living neighbors
    Survival,
    /// Dead with exactly three living neighbors
    Birth,
    /// Dead with any other neighbor count
    Unchanged,
}

impl Transition {
    /// State the cell takes in the next generation
    pub fn outcome(self) -> CellState {
        match self {
            Transition::Survival | Transition::Birth => CellState::Alive,
            Transition::Underpopulation | Transition::Overcrowding | Transition::Unchanged => {
                CellState::Dead
            }
        }
    }
}

/// Game of Life rules engine
pub struct GameOfLifeRules;

impl GameOfLifeRules {
    /// Classify a cell by its current state and living neighbor count
    pub fn classify(state: CellState, neighbor_count: u8) -> Transition {
        match (state, neighbor_count) {
            (CellState::Alive, 0..=1) => Transition::Underpopulation,
            (CellState::Alive, 2..=3) => Transition::Survival,
            (CellState::Alive, _) => Transition::Overcrowding,
            (CellState::Dead, 3) => Transition::Birth,
            (CellState::Dead, _) => Transition::Unchanged,
        }
    }

    /// State a cell takes in the next generation
    pub fn next_state(state: CellState, neighbor_count: u8) -> CellState {
        Self::classify(state, neighbor_count).outcome()
    }

    /// Apply the rules to every cell of `current` and return the next generation.
    ///
    /// All neighbor counts are read from `current`; results go into a freshly
    /// allocated buffer so no updated cell can influence another this step.
    pub fn evolve(current: &Grid) -> Grid {
        let next_cells = current
            .iter()
            .map(|(row, col, state)| Self::next_state(state, current.count_neighbors(row, col)))
            .collect();

        Grid::from_cells(current.rows(), current.cols(), next_cells)
    }

    /// Evolve the grid for multiple generations
    pub fn evolve_generations(mut grid: Grid, generations: usize) -> Grid {
        for _ in 0..generations {
            grid = Self::evolve(&grid);
        }
        grid
    }
}
