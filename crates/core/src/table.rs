//! Readers for the plain-text numeric tables written by the Kepler example.
//!
//! Two layouts are supported:
//!
//! - whitespace-delimited values, read as one flat sequence regardless of how
//!   they are split across lines ([`read_flat`])
//! - comma-delimited rows of equal width ([`read_rows`])
//!
//! Blank lines and lines starting with `#` are ignored in both layouts.

use std::{fs, io, path::Path};

use ndarray::{Array1, Array2, ShapeError};
use thiserror::Error;

/// Errors that can occur while reading a numeric table.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("failed to read table: {0}")]
    Io(#[from] io::Error),

    #[error("invalid number {token:?} at line {line}, column {column}")]
    Parse {
        token: String,
        line: usize,
        column: usize,
    },

    #[error("line {line} has {found} columns, expected {expected}")]
    Ragged {
        line: usize,
        found: usize,
        expected: usize,
    },

    #[error("table is not rectangular: {0}")]
    Shape(#[from] ShapeError),
}

/// Reads a whitespace-delimited file into a flat array.
///
/// # Errors
///
/// Returns an error if the file cannot be read or a value is not a number.
pub fn read_flat(path: &Path) -> Result<Array1<f64>, TableError> {
    parse_flat(&fs::read_to_string(path)?)
}

/// Reads a comma-delimited file into a `rows × columns` array.
///
/// # Errors
///
/// Returns an error if the file cannot be read, a value is not a number, or
/// the rows differ in width.
pub fn read_rows(path: &Path) -> Result<Array2<f64>, TableError> {
    parse_rows(&fs::read_to_string(path)?)
}

fn data_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
}

fn parse_value(token: &str, line: usize, column: usize) -> Result<f64, TableError> {
    token.parse().map_err(|_| TableError::Parse {
        token: token.to_owned(),
        line,
        column,
    })
}

pub(crate) fn parse_flat(text: &str) -> Result<Array1<f64>, TableError> {
    let mut values = Vec::new();
    for (line, content) in data_lines(text) {
        for (i, token) in content.split_whitespace().enumerate() {
            values.push(parse_value(token, line, i + 1)?);
        }
    }
    Ok(Array1::from(values))
}

pub(crate) fn parse_rows(text: &str) -> Result<Array2<f64>, TableError> {
    let mut values = Vec::new();
    let mut width = None;
    let mut rows = 0;

    for (line, content) in data_lines(text) {
        let start = values.len();
        for (i, token) in content.split(',').enumerate() {
            values.push(parse_value(token.trim(), line, i + 1)?);
        }

        let found = values.len() - start;
        let expected = *width.get_or_insert(found);
        if found != expected {
            return Err(TableError::Ragged {
                line,
                found,
                expected,
            });
        }
        rows += 1;
    }

    Ok(Array2::from_shape_vec((rows, width.unwrap_or(0)), values)?)
}
