//! Display and output formatting utilities

use crate::config::{OutputConfig, OutputFormat};
use crate::game_of_life::{grid_to_string_with, Grid, LifeEngine};
use anyhow::Result;
use serde::Serialize;

/// One rendered generation, as emitted in JSON output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationSnapshot {
    pub generation: u64,
    pub rows: usize,
    pub cols: usize,
    pub living_cells: usize,
    pub cells: Vec<String>,
}

impl GenerationSnapshot {
    pub fn new(generation: u64, grid: &Grid) -> Self {
        Self {
            generation,
            rows: grid.rows(),
            cols: grid.cols(),
            living_cells: grid.living_count(),
            cells: (0..grid.rows())
                .map(|row| grid.row(row).iter().map(|state| state.symbol()).collect())
                .collect(),
        }
    }
}

/// Format generations for console output
pub struct GenerationFormatter;

impl GenerationFormatter {
    /// Render the engine's current generation according to the output settings
    pub fn format(engine: &LifeEngine, output: &OutputConfig) -> Result<String> {
        match output.format {
            OutputFormat::Text => Ok(Self::format_text(
                engine.generation(),
                engine.grid(),
                output.show_generation_label,
                output.line_separator.as_str(),
            )),
            OutputFormat::Json => Self::format_json(engine.generation(), engine.grid()),
        }
    }

    /// `Generation <N>` label (optional) followed by the grid body
    pub fn format_text(generation: u64, grid: &Grid, show_label: bool, separator: &str) -> String {
        let body = grid_to_string_with(grid, separator);
        if show_label {
            format!("Generation {}{}{}", generation, separator, body)
        } else {
            body
        }
    }

    /// Single-line JSON snapshot of a generation
    pub fn format_json(generation: u64, grid: &Grid) -> Result<String> {
        Ok(serde_json::to_string(&GenerationSnapshot::new(generation, grid))?)
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err() &&
        (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}
