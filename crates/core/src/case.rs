use std::{
    fmt,
    path::{Path, PathBuf},
};

/// Prefix shared by every file the Kepler example writes.
const PREFIX: &str = "ark_kepler";

/// Identifies one integration run on disk.
///
/// A case renders to the suffix appended to each output file name:
///
/// ```text
/// _sprk-<id>-dt-<step size, 6 decimals>   symplectic runs
/// _erk-<order>                            explicit reference runs
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Case {
    /// A symplectic partitioned Runge-Kutta run.
    Sprk { id: u32, step_size: f64 },

    /// An explicit Runge-Kutta run of the given order.
    Erk { order: u32 },
}

/// The three tables written for a single case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Times,
    Solution,
    Conserved,
}

impl Table {
    fn stem(self) -> &'static str {
        match self {
            Table::Times => "times",
            Table::Solution => "solution",
            Table::Conserved => "conserved",
        }
    }
}

impl Case {
    /// Returns the file name of `table` for this case.
    #[must_use]
    pub fn file_name(&self, table: Table) -> String {
        format!("{PREFIX}_{}{self}.txt", table.stem())
    }

    /// Returns the path of `table` for this case inside `dir`.
    #[must_use]
    pub fn path(&self, dir: &Path, table: Table) -> PathBuf {
        dir.join(self.file_name(table))
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Case::Sprk { id, step_size } => write!(f, "_sprk-{id}-dt-{step_size:.6}"),
            Case::Erk { order } => write!(f, "_erk-{order}"),
        }
    }
}

/// Returns the file name of the order plot for `order`.
#[must_use]
pub fn order_plot_name(order: u32) -> String {
    format!("{PREFIX}_order{order}.png")
}

/// Returns the file name of the energy drift plot for `order`.
#[must_use]
pub fn energy_plot_name(order: u32) -> String {
    format!("{PREFIX}_energy{order}.png")
}
