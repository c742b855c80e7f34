use std::path::{Path, PathBuf};

use ndarray::ShapeError;
use thiserror::Error;

use crate::{
    case::{Case, Table},
    table::{self, TableError},
    trajectory::{STATE_DIM, Trajectory},
};

/// Errors that can occur while loading a case from disk.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("{}: {source}", .path.display())]
    Table {
        path: PathBuf,
        #[source]
        source: TableError,
    },

    #[error("{}: {len} values cannot be split into rows of {}", .path.display(), STATE_DIM)]
    Shape {
        path: PathBuf,
        len: usize,
        #[source]
        source: ShapeError,
    },
}

impl LoadError {
    /// Returns the path of the file that failed to load.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            LoadError::Table { path, .. } | LoadError::Shape { path, .. } => path,
        }
    }
}

/// Loads the times, states and conserved quantities of `case` from `dir`.
///
/// The solution table is a flat sequence reshaped row-major into rows of
/// [`STATE_DIM`] values.
///
/// # Errors
///
/// Returns an error if any of the three tables is missing or malformed, or if
/// the solution length is not a multiple of [`STATE_DIM`].
pub fn load(dir: &Path, case: &Case) -> Result<Trajectory, LoadError> {
    let read_error = |table: Table| {
        let path = case.path(dir, table);
        move |source| LoadError::Table { path, source }
    };

    let times =
        table::read_flat(&case.path(dir, Table::Times)).map_err(read_error(Table::Times))?;

    let solution_path = case.path(dir, Table::Solution);
    let flat = table::read_flat(&solution_path).map_err(read_error(Table::Solution))?;
    let len = flat.len();
    let states = flat
        .into_shape_with_order((len / STATE_DIM, STATE_DIM))
        .map_err(|source| LoadError::Shape {
            path: solution_path,
            len,
            source,
        })?;

    let conserved =
        table::read_rows(&case.path(dir, Table::Conserved)).map_err(read_error(Table::Conserved))?;

    Ok(Trajectory {
        times,
        states,
        conserved,
    })
}
