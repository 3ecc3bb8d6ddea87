//! Command line runner for finite Game of Life grids

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use life_generations::{
    config::{CliOverrides, OutputFormat, Settings},
    game_of_life::{create_example_grids, load_grid_from_file, parse_grid, LifeEngine},
    utils::{ColorOutput, GenerationFormatter},
};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "life_generations")]
#[command(about = "Conway's Game of Life on a finite grid")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print successive generations of a grid
    Run {
        /// Grid file in `<rows> <cols>` format (falls back to the default grid)
        input: Option<PathBuf>,

        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Generations to print, the initial one included (overrides config)
        #[arg(short, long)]
        generations: Option<usize>,

        /// Number of the initial generation (overrides config)
        #[arg(short, long)]
        start: Option<u64>,

        /// Output format (overrides config)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Omit the `Generation <N>` label
        #[arg(long)]
        no_label: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Create a default configuration and example grid files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Overwrite existing configuration and grid files
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let verbose = matches!(cli.command, Commands::Run { verbose: true, .. });
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if verbose { "debug" } else { "warn" }),
    )
    .init();

    match cli.command {
        Commands::Run {
            input, config, generations, start, format, no_label, verbose: _,
        } => {
            let overrides = CliOverrides {
                generations,
                start_generation: start,
                grid_file: input,
                format,
                hide_generation_label: no_label,
            };
            let settings = load_settings(&config, &overrides)?;
            let output = run_command(&settings)?;
            print!("{}", output);
            Ok(())
        }
        Commands::Setup { directory, force } => {
            setup_command(directory, force)
        }
    }
}

/// Load the config file (defaults when absent), apply overrides and validate
fn load_settings(config_path: &Path, overrides: &CliOverrides) -> Result<Settings> {
    let mut settings = if config_path.exists() {
        Settings::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        debug!("Config file {} not found, using defaults", config_path.display());
        Settings::default()
    };

    settings.merge_with_cli(overrides);
    settings.validate()
        .context("Configuration validation failed")?;

    debug!("Generations: {}", settings.simulation.generations);
    debug!("Start generation: {}", settings.simulation.start_generation);
    debug!("Output format: {:?}", settings.output.format);

    Ok(settings)
}

/// Read the initial grid text, falling back to the configured default grid
fn initial_engine(settings: &Settings) -> LifeEngine {
    let grid = match settings.input.grid_file {
        Some(ref path) => match load_grid_from_file(path) {
            Ok(grid) => {
                info!("Loaded {}x{} grid from {}", grid.rows(), grid.cols(), path.display());
                grid
            }
            Err(e) => {
                warn!("{:#}", e);
                eprintln!("{}", ColorOutput::warning(
                    "Unable to read the grid file provided. Using default grid as input."
                ));
                parse_grid(&settings.input.default_grid)
            }
        },
        None => parse_grid(&settings.input.default_grid),
    };

    if grid.is_empty() {
        warn!("Input produced an empty grid; nothing to simulate");
    }

    LifeEngine::with_start_generation(grid, settings.simulation.start_generation)
}

/// Render every requested generation, initial one first
fn run_command(settings: &Settings) -> Result<String> {
    let mut engine = initial_engine(settings);
    let separator = settings.output.line_separator.as_str();
    let mut rendered = Vec::with_capacity(settings.simulation.generations);

    for shown in 0..settings.simulation.generations {
        if shown > 0 {
            engine.advance();
        }
        rendered.push(GenerationFormatter::format(&engine, &settings.output)?);
    }

    let joiner = match settings.output.format {
        OutputFormat::Text => format!("{}{}", separator, separator),
        OutputFormat::Json => separator.to_string(),
    };

    Ok(format!("{}{}", rendered.join(&joiner), separator))
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up project structure..."));

    let config_dir = directory.join("config");
    let grids_dir = directory.join("grids");

    for dir in [&config_dir, &grids_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        Settings::default().to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    let default_grid_path = grids_dir.join("default.txt");
    if !default_grid_path.exists() || force {
        std::fs::write(&default_grid_path, &Settings::default().input.default_grid)
            .with_context(|| format!("Failed to write {}", default_grid_path.display()))?;
    }

    let written = create_example_grids(&grids_dir, force)
        .context("Failed to create example grids")?;
    println!("Created {} example grid(s) in: {}", written, grids_dir.display());

    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit {}", config_path.display());
    println!("2. Run: life_generations run {}", grids_dir.join("glider.txt").display());

    Ok(())
}
