//! Order-of-accuracy and energy-drift studies over grouped runs.
//!
//! An order study compares every run of every method in an order group
//! against the reference trajectory:
//!
//! ```text
//! error(h) = max|y(h) - y_ref| / max|y_ref|
//! ```
//!
//! and pairs the errors with the slope line `h^order` a method of that order
//! should follow asymptotically on log-log axes.

use thiserror::Error;
use tracing::warn;

use crate::{
    case,
    dataset::OrderGroups,
    energy,
    figure::{Figure, Scale, Series},
    norm,
    observer::Observer,
    trajectory::{MethodSeries, Trajectory},
};

/// Errors that can occur while building a study.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StudyError {
    #[error(
        "{method} at h = {step_size}: state shape {found:?} does not match reference shape {expected:?}"
    )]
    ShapeMismatch {
        method: String,
        step_size: f64,
        found: Vec<usize>,
        expected: Vec<usize>,
    },

    #[error("{method} has no run with h = {step_size}")]
    MissingRun { method: String, step_size: f64 },

    #[error("{method} at h = {step_size}: conserved table has no column {column}")]
    MissingColumn {
        method: String,
        step_size: f64,
        column: usize,
    },
}

/// Emitted after each error is computed.
#[derive(Debug, Clone, Copy)]
pub struct ErrorComputed<'a> {
    pub order: u32,
    pub method: &'a str,
    pub step_size: f64,
    pub error: f64,
}

/// The errors of one method across step sizes.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodErrors {
    pub method: String,
    /// `(step size, error)` pairs in run order.
    pub errors: Vec<(f64, f64)>,
}

/// Everything drawn in one order plot.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderPlot {
    pub order: u32,
    pub step_sizes: Vec<f64>,
    pub methods: Vec<MethodErrors>,
}

impl OrderPlot {
    /// Returns `h^order` for each step size.
    #[must_use]
    pub fn slope_line(&self) -> Vec<f64> {
        self.step_sizes
            .iter()
            .map(|h| h.powf(f64::from(self.order)))
            .collect()
    }

    /// Returns the log-log figure for this plot.
    #[must_use]
    pub fn figure(&self) -> Figure {
        let slope = self
            .step_sizes
            .iter()
            .zip(self.slope_line())
            .map(|(&h, y)| [h, y])
            .collect();

        let mut series = vec![Series::new(format!("O(h^{})", self.order), slope).dashed()];
        series.extend(self.methods.iter().map(|m| {
            let points = m.errors.iter().map(|&(h, err)| [h, err]).collect();
            Series::new(m.method.clone(), points)
        }));

        Figure {
            file_name: case::order_plot_name(self.order),
            title: format!("Order plot for O(h^{}) methods", self.order),
            x_label: "h".into(),
            y_label: "error".into(),
            x_scale: Scale::Log,
            y_scale: Scale::Log,
            series,
        }
    }
}

/// Computes the error of every run in `group` against `reference`.
///
/// # Errors
///
/// Returns [`StudyError::ShapeMismatch`] if a run's state matrix does not
/// have the reference's shape.
pub fn order_plot<O>(
    order: u32,
    group: &[MethodSeries],
    reference: &Trajectory,
    step_sizes: &[f64],
    observer: &mut O,
) -> Result<OrderPlot, StudyError>
where
    O: for<'a> Observer<ErrorComputed<'a>>,
{
    let mut methods = Vec::with_capacity(group.len());

    for series in group {
        let mut errors = Vec::with_capacity(series.runs.len());

        for run in &series.runs {
            let states = &run.trajectory.states;
            let error = norm::relative_inf_error(states, &reference.states).ok_or_else(|| {
                StudyError::ShapeMismatch {
                    method: series.method.clone(),
                    step_size: run.step_size,
                    found: states.shape().to_vec(),
                    expected: reference.states.shape().to_vec(),
                }
            })?;

            if !error.is_finite() {
                warn!(
                    method = %series.method,
                    step_size = run.step_size,
                    error,
                    "relative error is not finite"
                );
            }

            observer.observe(&ErrorComputed {
                order,
                method: &series.method,
                step_size: run.step_size,
                error,
            });
            errors.push((run.step_size, error));
        }

        methods.push(MethodErrors {
            method: series.method.clone(),
            errors,
        });
    }

    Ok(OrderPlot {
        order,
        step_sizes: step_sizes.to_vec(),
        methods,
    })
}

/// Builds an order plot for each of `orders` that has a group.
///
/// Orders without any method are skipped with a warning.
///
/// # Errors
///
/// Returns the first error from [`order_plot`].
pub fn order_plots<O>(
    groups: &OrderGroups,
    reference: &Trajectory,
    orders: &[u32],
    step_sizes: &[f64],
    observer: &mut O,
) -> Result<Vec<OrderPlot>, StudyError>
where
    O: for<'a> Observer<ErrorComputed<'a>>,
{
    let mut plots = Vec::with_capacity(orders.len());

    for &order in orders {
        let Some(group) = groups.get(&order) else {
            warn!(order, "no methods of this order, skipping");
            continue;
        };
        plots.push(order_plot(order, group, reference, step_sizes, observer)?);
    }

    Ok(plots)
}

/// The energy drift of one method.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodDrift {
    pub method: String,
    /// `(time, drift)` pairs.
    pub drift: Vec<(f64, f64)>,
}

/// Everything drawn in one energy drift plot.
#[derive(Debug, Clone, PartialEq)]
pub struct EnergyPlot {
    pub order: u32,
    pub step_size: f64,
    pub methods: Vec<MethodDrift>,
}

impl EnergyPlot {
    /// Returns the drift-vs-time figure for this plot.
    #[must_use]
    pub fn figure(&self) -> Figure {
        let series = self
            .methods
            .iter()
            .map(|m| {
                let points = m.drift.iter().map(|&(t, d)| [t, d]).collect();
                Series::new(m.method.clone(), points)
            })
            .collect();

        Figure {
            file_name: case::energy_plot_name(self.order),
            title: format!(
                "Energy drift of O(h^{}) methods, h = {}",
                self.order, self.step_size
            ),
            x_label: "t".into(),
            y_label: "|H(t) - H(0)|".into(),
            x_scale: Scale::Linear,
            y_scale: Scale::Log,
            series,
        }
    }
}

/// Computes the drift of conserved column `column` for the run of each method
/// in `group` with step size `step_size`.
///
/// # Errors
///
/// Returns an error if a method has no run with `step_size` or the run's
/// conserved table lacks `column`.
pub fn energy_plot(
    order: u32,
    group: &[MethodSeries],
    step_size: f64,
    column: usize,
) -> Result<EnergyPlot, StudyError> {
    let mut methods = Vec::with_capacity(group.len());

    for series in group {
        let run = series
            .run(step_size)
            .ok_or_else(|| StudyError::MissingRun {
                method: series.method.clone(),
                step_size,
            })?;

        let drift = energy::drift(&run.trajectory, column).ok_or_else(|| {
            StudyError::MissingColumn {
                method: series.method.clone(),
                step_size,
                column,
            }
        })?;

        methods.push(MethodDrift {
            method: series.method.clone(),
            drift: run.trajectory.times.iter().copied().zip(drift.iter().copied()).collect(),
        });
    }

    Ok(EnergyPlot {
        order,
        step_size,
        methods,
    })
}
