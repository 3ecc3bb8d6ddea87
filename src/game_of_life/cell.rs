//! Cell states and their text symbols

use serde::{Deserialize, Serialize};
use std::fmt;

pub const ALIVE_SYMBOL: char = '*';
pub const DEAD_SYMBOL: char = '.';

/// State of a single grid position
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellState {
    Alive,
    #[default]
    Dead,
}

impl CellState {
    /// Symbol used for this state in the text format
    pub fn symbol(self) -> char {
        match self {
            CellState::Alive => ALIVE_SYMBOL,
            CellState::Dead => DEAD_SYMBOL,
        }
    }

    /// Map a text symbol to a state, `None` for anything that is not a cell symbol
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            ALIVE_SYMBOL => Some(CellState::Alive),
            DEAD_SYMBOL => Some(CellState::Dead),
            _ => None,
        }
    }

    pub fn is_alive(self) -> bool {
        self == CellState::Alive
    }
}

impl From<bool> for CellState {
    fn from(alive: bool) -> Self {
        if alive { CellState::Alive } else { CellState::Dead }
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
