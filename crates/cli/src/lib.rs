//! Order-of-accuracy plots for the ARK Kepler symplectic integrator runs.
//!
//! [`run`] loads every configured run, compares each against the reference
//! run and writes one log-log error plot per order:
//!
//! ```text
//! ark_kepler_order1.png, ark_kepler_order2.png, …, ark_kepler_order10.png
//! ```
//!
//! Every run is loaded before the first image is written, so a missing or
//! malformed table leaves the output directory untouched.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use ark_order_core::{
    Config, Figure,
    dataset::{self, Loaded},
    study::{self, EnergyPlot, ErrorComputed, OrderPlot},
};
use tracing::{debug, info};

/// Config file read from the working directory when no path is given.
pub const CONFIG_FILE: &str = "ark_order.toml";

/// What a call to [`run`] computed and wrote.
#[derive(Debug, Clone, Default)]
pub struct Report {
    pub order_plots: Vec<OrderPlot>,
    pub energy_plots: Vec<EnergyPlot>,

    /// Paths of the written images, order plots first.
    pub images: Vec<PathBuf>,
}

impl Report {
    /// Returns the figures of every plot, in the order they were written.
    #[must_use]
    pub fn figures(&self) -> Vec<Figure> {
        self.order_plots
            .iter()
            .map(OrderPlot::figure)
            .chain(self.energy_plots.iter().map(EnergyPlot::figure))
            .collect()
    }
}

/// Returns the config at `path`, or from [`CONFIG_FILE`] in `dir` if it
/// exists, or the defaults.
///
/// # Errors
///
/// Returns an error if the chosen file cannot be read or is invalid.
pub fn load_config(path: Option<&Path>, dir: &Path) -> Result<Config> {
    let path = match path {
        Some(path) => path.to_owned(),
        None => {
            let candidate = dir.join(CONFIG_FILE);
            if !candidate.is_file() {
                debug!("no {CONFIG_FILE}, using defaults");
                return Ok(Config::default());
            }
            candidate
        }
    };

    Config::from_file(&path).with_context(|| format!("failed to load {}", path.display()))
}

fn log_loaded(event: &Loaded<'_>) {
    debug!(
        method = event.method,
        step_size = event.step_size,
        samples = event.samples,
        max_state = event.max_state,
        "loaded run"
    );
}

fn log_error(event: &ErrorComputed<'_>) {
    debug!(
        order = event.order,
        method = event.method,
        step_size = event.step_size,
        error = event.error,
        "computed error"
    );
}

/// Loads, compares and plots every run described by `config`.
///
/// # Errors
///
/// Returns the first failure: an invalid config, a missing or malformed
/// table, a run whose shape differs from the reference, or an image that
/// cannot be written.
pub fn run(config: &Config) -> Result<Report> {
    config.validate().context("invalid configuration")?;

    let groups = dataset::assemble(
        &config.input_dir,
        &config.methods,
        &config.step_sizes,
        &mut log_loaded,
    )
    .context("failed to load method runs")?;

    let reference = dataset::load_reference(&config.input_dir, config.reference_order)
        .context("failed to load reference run")?;
    // Only the reference states are compared; its conserved quantities are
    // not plotted.
    debug!(
        samples = reference.len(),
        max_state = reference.max_state(),
        "loaded reference"
    );

    let order_plots = study::order_plots(
        &groups,
        &reference,
        &config.orders,
        &config.step_sizes,
        &mut log_error,
    )?;

    let mut energy_plots = Vec::new();
    if config.energy.enabled {
        for &order in &config.orders {
            if let Some(group) = groups.get(&order) {
                energy_plots.push(study::energy_plot(
                    order,
                    group,
                    config.energy.step_size,
                    config.energy.column,
                )?);
            }
        }
    }

    let mut report = Report {
        order_plots,
        energy_plots,
        images: Vec::new(),
    };

    fs::create_dir_all(&config.output_dir)
        .with_context(|| format!("failed to create {}", config.output_dir.display()))?;
    for figure in report.figures() {
        let path = ark_order_plot::render(&figure, &config.output_dir, &config.plot)?;
        info!(path = %path.display(), "wrote plot");
        report.images.push(path);
    }

    Ok(report)
}

/// Opens the interactive viewer on the figures of `report`.
///
/// The window is titled after `config.input_dir` and shows a legend when
/// `config.plot.legend` is set.
///
/// # Errors
///
/// Returns an error if the viewer window cannot be created.
#[cfg(feature = "show")]
pub fn show(report: &Report, config: &Config) -> Result<()> {
    ark_order_plot::show(report.figures(), show_config(config))
        .map_err(|err| anyhow::anyhow!("failed to open viewer: {err}"))
}

#[cfg(feature = "show")]
fn show_config(config: &Config) -> ark_order_plot::ShowConfig {
    let show = ark_order_plot::ShowConfig::new().title(format!(
        "ARK Kepler order plots ({})",
        config.input_dir.display()
    ));
    if config.plot.legend {
        show
    } else {
        show.no_legend()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;

    #[test]
    fn explicit_path_wins() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "reference_order = 6\n").unwrap();
        let other = dir.path().join("other.toml");
        fs::write(&other, "reference_order = 4\n").unwrap();

        let config = load_config(Some(&other), dir.path()).unwrap();
        assert_eq!(config.reference_order, 4);
    }

    #[test]
    fn falls_back_to_file_in_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "reference_order = 6\n").unwrap();

        let config = load_config(None, dir.path()).unwrap();
        assert_eq!(config.reference_order, 6);
    }

    #[test]
    fn defaults_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(None, dir.path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn invalid_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "step_sizes = []\n").unwrap();

        let err = load_config(None, dir.path()).unwrap_err();
        assert!(err.to_string().contains(CONFIG_FILE));
    }
}
