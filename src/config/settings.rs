//! Configuration settings for the generation runner

use crate::game_of_life::{FIRST_GENERATION, LINE_SEPARATOR, MAX_START_GENERATION};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Grid used when no input file can be read
pub const DEFAULT_GRID: &str = "4 8\n........\n....*...\n...**...\n........";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub simulation: SimulationConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Generations to display, the initial one included
    pub generations: usize,
    pub start_generation: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    pub grid_file: Option<PathBuf>,
    pub default_grid: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub show_generation_label: bool,
    pub line_separator: LineSeparator,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineSeparator {
    Platform,
    Lf,
    Crlf,
}

impl LineSeparator {
    pub fn as_str(self) -> &'static str {
        match self {
            LineSeparator::Platform => LINE_SEPARATOR,
            LineSeparator::Lf => "\n",
            LineSeparator::Crlf => "\r\n",
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig {
                generations: 2,
                start_generation: 1,
            },
            input: InputConfig {
                grid_file: None,
                default_grid: DEFAULT_GRID.to_string(),
            },
            output: OutputConfig {
                format: OutputFormat::Text,
                show_generation_label: true,
                line_separator: LineSeparator::Platform,
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.simulation.generations == 0 {
            anyhow::bail!("Number of generations must be positive");
        }

        if !(FIRST_GENERATION..=MAX_START_GENERATION).contains(&self.simulation.start_generation) {
            anyhow::bail!(
                "Start generation must be between {} and {}",
                FIRST_GENERATION,
                MAX_START_GENERATION
            );
        }

        if self.input.default_grid.trim().is_empty() {
            anyhow::bail!("Default grid must not be empty");
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(generations) = cli_overrides.generations {
            self.simulation.generations = generations;
        }
        if let Some(start_generation) = cli_overrides.start_generation {
            self.simulation.start_generation = start_generation;
        }
        if let Some(ref grid_file) = cli_overrides.grid_file {
            self.input.grid_file = Some(grid_file.clone());
        }
        if let Some(format) = cli_overrides.format {
            self.output.format = format;
        }
        if cli_overrides.hide_generation_label {
            self.output.show_generation_label = false;
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub generations: Option<usize>,
    pub start_generation: Option<u64>,
    pub grid_file: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub hide_generation_label: bool,
}
