//! Conway's Game of Life on a finite grid
//!
//! This library parses the `<rows> <cols>` text format into a grid, advances it
//! through successive generations with the classic B3/S23 rule and renders
//! generations back to text.

pub mod config;
pub mod error;
pub mod game_of_life;
pub mod utils;

pub use config::Settings;
pub use error::{GridError, HeaderError};
pub use game_of_life::{CellState, Grid, LifeEngine};

/// Parse `text` and return the engine after `generations` advances
pub fn simulate(text: &str, generations: usize) -> LifeEngine {
    let mut engine = LifeEngine::from_text(text);
    engine.advance_by(generations);
    engine
}
