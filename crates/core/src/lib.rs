//! Loading and error analysis of ARK Kepler integrator runs.
//!
//! The Kepler example writes three tables per run: sample times, the
//! four-component state and the conserved quantities. This crate reads those
//! tables for every method and step size in a catalog, groups them by the
//! methods' nominal order, and measures each run against a high-order
//! reference run:
//!
//! - [`catalog`] and [`Config`]: the methods, step sizes and file layout
//! - [`Case`] and [`loader`]: file naming and table loading
//! - [`dataset`]: assembling runs into [`OrderGroups`]
//! - [`study`]: relative error and energy drift per order group
//! - [`Figure`]: a backend-independent description of each plot
//! - [`Observer`]: progress events emitted while loading and comparing

pub mod catalog;
pub mod dataset;
pub mod energy;
pub mod figure;
pub mod loader;
pub mod norm;
pub mod study;
pub mod table;

mod case;
mod config;
mod observer;
mod trajectory;

pub use case::{Case, Table, energy_plot_name, order_plot_name};
pub use config::{Config, ConfigError, EnergySettings, PlotSettings};
pub use dataset::OrderGroups;
pub use figure::Figure;
pub use observer::Observer;
pub use trajectory::{MethodSeries, STATE_DIM, StepResult, Trajectory};
