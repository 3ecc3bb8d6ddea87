//! Configuration management for the generation runner

pub mod settings;

pub use settings::{
    Settings, SimulationConfig, InputConfig, OutputConfig,
    OutputFormat, LineSeparator, CliOverrides, DEFAULT_GRID,
};
