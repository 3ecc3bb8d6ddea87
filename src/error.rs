//! Typed errors for grid construction and header parsing

use std::num::ParseIntError;
use thiserror::Error;

/// Errors raised by grid construction and direct grid mutation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("{rows}x{cols} grid exceeds the limit of {max} cells")]
    TooLarge {
        rows: usize,
        cols: usize,
        max: usize,
    },

    #[error("Coordinates ({row}, {col}) out of bounds for {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}

/// Reasons a header dimension could not be read.
///
/// The parser never surfaces these; a failed dimension degrades to 0.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HeaderError {
    #[error("header line has no space between row and column counts")]
    MissingSeparator,

    #[error("invalid {axis} count '{token}': {source}")]
    InvalidDimension {
        axis: &'static str,
        token: String,
        #[source]
        source: ParseIntError,
    },
}
