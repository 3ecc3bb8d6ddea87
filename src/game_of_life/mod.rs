//! Game of Life core functionality

pub mod cell;
pub mod engine;
pub mod grid;
pub mod rules;
pub mod io;

pub use cell::CellState;
pub use engine::{LifeEngine, FIRST_GENERATION, MAX_START_GENERATION};
pub use grid::Grid;
pub use rules::{GameOfLifeRules, Transition};
pub use io::{
    parse_grid, grid_to_string, grid_to_string_with, grid_to_document,
    load_grid_from_file, save_grid_to_file, create_example_grids, LINE_SEPARATOR,
};
