//! Assembles the runs of every catalog method into order groups.

use std::{collections::BTreeMap, path::Path};

use crate::{
    case::Case,
    catalog::Method,
    loader::{self, LoadError},
    observer::Observer,
    trajectory::{MethodSeries, StepResult, Trajectory},
};

/// Method series keyed by nominal order.
///
/// Iterates in ascending order; within a group, series keep catalog order.
pub type OrderGroups = BTreeMap<u32, Vec<MethodSeries>>;

/// Emitted after each run is loaded.
#[derive(Debug, Clone, Copy)]
pub struct Loaded<'a> {
    pub method: &'a str,
    pub step_size: f64,
    pub samples: usize,
    pub max_state: f64,
}

/// Loads every `(method, step size)` run from `dir` and groups the series by
/// order.
///
/// Runs are loaded in catalog order, then step-size order. A [`Loaded`]
/// event is emitted after each run.
///
/// # Errors
///
/// Returns the first load failure; nothing is returned for the runs loaded
/// before it.
pub fn assemble<O>(
    dir: &Path,
    methods: &[Method],
    step_sizes: &[f64],
    observer: &mut O,
) -> Result<OrderGroups, LoadError>
where
    O: for<'a> Observer<Loaded<'a>>,
{
    let mut groups = OrderGroups::new();

    for method in methods {
        let series = load_series(dir, method, step_sizes, observer)?;
        groups.entry(method.order).or_default().push(series);
    }

    Ok(groups)
}

fn load_series<O>(
    dir: &Path,
    method: &Method,
    step_sizes: &[f64],
    observer: &mut O,
) -> Result<MethodSeries, LoadError>
where
    O: for<'a> Observer<Loaded<'a>>,
{
    let mut runs = Vec::with_capacity(step_sizes.len());

    for &step_size in step_sizes {
        let case = Case::Sprk {
            id: method.id,
            step_size,
        };
        let trajectory = loader::load(dir, &case)?;

        observer.observe(&Loaded {
            method: &method.name,
            step_size,
            samples: trajectory.len(),
            max_state: trajectory.max_state(),
        });

        runs.push(StepResult {
            method: method.name.clone(),
            order: method.order,
            step_size,
            trajectory,
        });
    }

    Ok(MethodSeries {
        method: method.name.clone(),
        order: method.order,
        runs,
    })
}

/// Loads the explicit reference run of the given order.
///
/// # Errors
///
/// Returns an error if any of the reference tables fails to load.
pub fn load_reference(dir: &Path, order: u32) -> Result<Trajectory, LoadError> {
    loader::load(dir, &Case::Erk { order })
}
