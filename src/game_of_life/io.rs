//! Text encoding and file I/O for Game of Life grids
//!
//! The format is a `<rows> <cols>` header line followed by one line per row,
//! `*` for alive and `.` for dead cells:
//!
//! ```text
//! 4 8
//! ........
//! ....*...
//! ...**...
//! ........
//! ```
//!
//! Parsing is lenient. A bad header yields the empty grid, characters other
//! than `*` and `.` are skipped without taking a column, and missing rows stay
//! dead. Nothing here fails on malformed text.

use super::{CellState, Grid};
use crate::error::HeaderError;
use anyhow::{Context, Result};
use log::debug;
use std::path::Path;

/// Platform line separator used when rendering grids
pub const LINE_SEPARATOR: &str = if cfg!(windows) { "\r\n" } else { "\n" };

/// Parse a grid from its text encoding
pub fn parse_grid(text: &str) -> Grid {
    if text.trim().is_empty() {
        return Grid::empty();
    }

    let (header, body) = text.split_once('\n').unwrap_or((text, ""));

    let (rows, cols) = match parse_header(header) {
        Ok(dimensions) => dimensions,
        Err(e) => {
            debug!("Unusable grid header {:?}: {}", header, e);
            return Grid::empty();
        }
    };

    let mut grid = match Grid::try_new(rows, cols) {
        Ok(grid) if !grid.is_empty() => grid,
        Ok(grid) => return grid,
        Err(e) => {
            debug!("Unusable grid header {:?}: {}", header, e);
            return Grid::empty();
        }
    };

    let lines = body
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.is_empty());

    for (row, line) in lines.enumerate() {
        if row >= rows {
            debug!("Ignoring body lines beyond declared {} rows", rows);
            break;
        }

        let states = line.chars().filter_map(CellState::from_symbol);
        for (col, state) in states.take(cols).enumerate() {
            grid.put(row, col, state);
        }
    }

    grid
}

/// Parse the `<rows> <cols>` header line
pub fn parse_header(line: &str) -> Result<(usize, usize), HeaderError> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let (rows, cols) = line.split_once(' ').ok_or(HeaderError::MissingSeparator)?;

    Ok((parse_dimension("row", rows)?, parse_dimension("column", cols)?))
}

fn parse_dimension(axis: &'static str, token: &str) -> Result<usize, HeaderError> {
    token.parse().map_err(|source| HeaderError::InvalidDimension {
        axis,
        token: token.to_string(),
        source,
    })
}

/// Convert a grid to its body text using the platform line separator
pub fn grid_to_string(grid: &Grid) -> String {
    grid_to_string_with(grid, LINE_SEPARATOR)
}

/// Convert a grid to its body text, rows joined by `separator`.
///
/// No header and no trailing separator; the empty grid renders as `""`.
pub fn grid_to_string_with(grid: &Grid, separator: &str) -> String {
    let mut result = String::with_capacity(grid.rows() * (grid.cols() + separator.len()));

    for row in 0..grid.rows() {
        if row > 0 {
            result.push_str(separator);
        }
        result.extend(grid.row(row).iter().map(|state| state.symbol()));
    }

    result
}

/// Header plus body, suitable for writing to a file and parsing back
pub fn grid_to_document(grid: &Grid) -> String {
    format!(
        "{} {}{}{}",
        grid.rows(),
        grid.cols(),
        LINE_SEPARATOR,
        grid_to_string(grid)
    )
}

/// Load a grid from a text file
pub fn load_grid_from_file<P: AsRef<Path>>(path: P) -> Result<Grid> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read grid file: {}", path.as_ref().display()))?;

    Ok(parse_grid(&content))
}

/// Save a grid to a text file, header included
pub fn save_grid_to_file<P: AsRef<Path>>(grid: &Grid, path: P) -> Result<()> {
    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(&path, grid_to_document(grid))
        .with_context(|| format!("Failed to write grid to file: {}", path.as_ref().display()))?;

    Ok(())
}

/// Create example grid files, returning how many were written.
///
/// Existing files are left alone unless `overwrite` is set.
pub fn create_example_grids<P: AsRef<Path>>(output_dir: P, overwrite: bool) -> Result<usize> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    let examples = [
        ("glider.txt", "6 6\n.*....\n..*...\n***...\n......\n......\n......\n"),
        ("blinker.txt", "3 3\n...\n***\n...\n"),
        ("block.txt", "4 4\n....\n.**.\n.**.\n....\n"),
        ("beacon.txt", "4 4\n**..\n**..\n..**\n..**\n"),
    ];

    let mut written = 0;
    for (name, content) in examples {
        let path = dir.join(name);
        if path.exists() && !overwrite {
            debug!("Keeping existing {}", path.display());
            continue;
        }
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write {}", name))?;
        written += 1;
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn body(grid: &Grid) -> String {
        grid_to_string_with(grid, "\n")
    }

    #[test]
    fn test_parse_grid() {
        let grid = parse_grid("4 8\n........\n....*...\n...**...\n........");

        assert_eq!(grid.rows(), 4);
        assert_eq!(grid.cols(), 8);
        assert_eq!(grid.living_cells(), vec![(1, 4), (2, 3), (2, 4)]);
    }

    #[test]
    fn test_blank_input_is_empty() {
        for text in ["", "   ", "\n\n", " \t\n"] {
            let grid = parse_grid(text);
            assert!(grid.is_empty());
            assert_eq!(grid_to_string(&grid), "");
        }
    }

    #[test]
    fn test_invalid_header() {
        let grid = parse_grid("G 4\n...\n...\n...");
        assert!(grid.is_empty());
        assert_eq!(grid_to_string(&grid), "");

        assert!(parse_grid("3 X\n...").is_empty());
        assert!(parse_grid("-3 3\n...").is_empty());
        assert!(parse_grid("33\n...").is_empty());
        assert!(parse_grid("0 3\n...").is_empty());
    }

    #[test]
    fn test_oversized_header_is_empty() {
        // each dimension fits in usize, their product does not
        let grid = parse_grid("4294967296 4294967296\n*.");
        assert!(grid.is_empty());
        assert_eq!(grid_to_string(&grid), "");

        assert!(parse_grid("100000 100000\n*.").is_empty());
        assert!(parse_grid("18446744073709551616 1\n*").is_empty());
    }

    #[test]
    fn test_parse_header_errors() {
        assert_eq!(parse_header("3 4"), Ok((3, 4)));
        assert_eq!(parse_header("3 4\r"), Ok((3, 4)));
        assert_eq!(parse_header("34"), Err(HeaderError::MissingSeparator));
        assert!(matches!(
            parse_header("G 4"),
            Err(HeaderError::InvalidDimension { axis: "row", .. })
        ));
        assert!(matches!(
            parse_header("4 4 4"),
            Err(HeaderError::InvalidDimension { axis: "column", .. })
        ));
    }

    #[test]
    fn test_invalid_symbols_are_skipped() {
        let grid = parse_grid("3 3\n.*\n.&@\n.*");
        assert_eq!(body(&grid), ".*.\n...\n.*.");

        // stray characters do not take a column
        let grid = parse_grid("1 4\nx*y.*");
        assert_eq!(body(&grid), "*.*.");
    }

    #[test]
    fn test_short_and_long_bodies() {
        let grid = parse_grid("3 3\n***");
        assert_eq!(body(&grid), "***\n...\n...");

        let grid = parse_grid("2 2\n****\n**\n**");
        assert_eq!(body(&grid), "**\n**");
    }

    #[test]
    fn test_header_only() {
        let grid = parse_grid("2 5");
        assert_eq!(body(&grid), ".....\n.....");
    }

    #[test]
    fn test_crlf_input() {
        let grid = parse_grid("2 3\r\n*.*\r\n.*.\r\n");
        assert_eq!(body(&grid), "*.*\n.*.");
    }

    #[test]
    fn test_blank_lines_do_not_take_a_row() {
        let grid = parse_grid("2 2\n\n**\n\n.*\n");
        assert_eq!(body(&grid), "**\n.*");
    }

    #[test]
    fn test_fresh_grid_serializes_dead() {
        for (rows, cols) in [(1, 1), (2, 5), (4, 8)] {
            let text = grid_to_string_with(&Grid::new(rows, cols), "\n");
            let lines: Vec<&str> = text.split('\n').collect();
            assert_eq!(lines.len(), rows);
            assert!(lines.iter().all(|line| *line == ".".repeat(cols)));
        }
        assert_eq!(grid_to_string(&Grid::new(0, 3)), "");
    }

    #[test]
    fn test_grid_to_string_uses_line_separator() {
        let grid = parse_grid("2 2\n*.\n.*");
        assert_eq!(grid_to_string(&grid), format!("*.{}.*", LINE_SEPARATOR));
        assert_eq!(grid_to_string(&grid), grid_to_string(&grid));
    }

    #[test]
    fn test_round_trip() {
        let header = "3 4\n";
        let original = parse_grid(&format!("{}*..*\n.**.\n*..*", header));
        let regenerated = parse_grid(&format!("{}{}", header, grid_to_string(&original)));
        assert_eq!(original, regenerated);

        assert_eq!(parse_grid(&grid_to_document(&original)), original);
    }

    #[test]
    fn test_file_operations() {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("nested/grid.txt");

        let grid = parse_grid("2 3\n*.*\n.*.");
        save_grid_to_file(&grid, &file_path).unwrap();

        let loaded = load_grid_from_file(&file_path).unwrap();
        assert_eq!(loaded, grid);
    }

    #[test]
    fn test_missing_file_is_error() {
        let temp_dir = tempdir().unwrap();
        assert!(load_grid_from_file(temp_dir.path().join("missing.txt")).is_err());
    }

    #[test]
    fn test_create_example_grids() {
        let temp_dir = tempdir().unwrap();
        assert_eq!(create_example_grids(temp_dir.path(), false).unwrap(), 4);

        for name in ["glider.txt", "blinker.txt", "block.txt", "beacon.txt"] {
            assert!(temp_dir.path().join(name).exists());
        }

        let glider = load_grid_from_file(temp_dir.path().join("glider.txt")).unwrap();
        assert_eq!(glider.rows(), 6);
        assert_eq!(glider.cols(), 6);
        assert_eq!(glider.living_count(), 5);
    }

    #[test]
    fn test_example_grids_keep_existing_files() {
        let temp_dir = tempdir().unwrap();
        let blinker = temp_dir.path().join("blinker.txt");
        std::fs::write(&blinker, "1 1\n*").unwrap();

        assert_eq!(create_example_grids(temp_dir.path(), false).unwrap(), 3);
        assert_eq!(std::fs::read_to_string(&blinker).unwrap(), "1 1\n*");

        assert_eq!(create_example_grids(temp_dir.path(), true).unwrap(), 4);
        assert_eq!(load_grid_from_file(&blinker).unwrap().rows(), 3);
    }
}
