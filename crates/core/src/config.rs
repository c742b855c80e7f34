use std::{
    collections::HashSet,
    fs, io,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;

use crate::catalog::{self, Method};

/// Settings for one analysis pass.
///
/// Every field has a default matching the Kepler example's standard output,
/// so an empty TOML document is a valid configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory holding the run tables.
    pub input_dir: PathBuf,

    /// Directory the images are written to.
    pub output_dir: PathBuf,

    /// Step sizes each method was run with, in plotting order.
    pub step_sizes: Vec<f64>,

    /// Orders to draw an order plot for.
    pub orders: Vec<u32>,

    /// Order of the explicit reference run.
    pub reference_order: u32,

    /// The method catalog.
    pub methods: Vec<Method>,

    pub plot: PlotSettings,

    pub energy: EnergySettings,
}

/// Image settings shared by every plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlotSettings {
    /// Image width in pixels.
    pub width: u32,

    /// Image height in pixels.
    pub height: u32,

    /// Curve thickness in pixels.
    pub line_width: u32,

    /// Whether a legend naming each series is drawn.
    pub legend: bool,
}

/// Settings for the optional energy drift plots.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnergySettings {
    pub enabled: bool,

    /// Step size of the runs whose drift is plotted.
    pub step_size: f64,

    /// Column of the conserved table holding the energy.
    pub column: usize,
}

/// Errors that can occur when reading or validating a [`Config`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] io::Error),

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("at least one step size is required")]
    NoStepSizes,

    #[error("step size {0} must be finite and positive")]
    StepSize(f64),

    #[error("step size {0} is listed twice")]
    DuplicateStepSize(f64),

    #[error("at least one method is required")]
    NoMethods,

    #[error("method id {0} is used more than once")]
    DuplicateId(u32),

    #[error("method {0:?} must have an order of at least 1")]
    ZeroOrder(String),

    #[error("method {method:?} has order {order}, which is not in the plotted orders")]
    UnplottedOrder { method: String, order: u32 },

    #[error("image size must be non-zero")]
    ImageSize,

    #[error("energy step size {0} is not one of the configured step sizes")]
    EnergyStepSize(f64),
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("."),
            output_dir: PathBuf::from("."),
            step_sizes: catalog::STEP_SIZES.to_vec(),
            orders: catalog::ORDERS.to_vec(),
            reference_order: catalog::REFERENCE_ORDER,
            methods: catalog::methods(),
            plot: PlotSettings::default(),
            energy: EnergySettings::default(),
        }
    }
}

impl Default for PlotSettings {
    /// The pixel size of a 6.4 × 4.8 inch figure at 200 dpi.
    fn default() -> Self {
        Self {
            width: 1280,
            height: 960,
            line_width: 2,
            legend: true,
        }
    }
}

impl Default for EnergySettings {
    fn default() -> Self {
        Self {
            enabled: false,
            step_size: 1e-2,
            column: 0,
        }
    }
}

impl Config {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid TOML for this type or if
    /// validation fails.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or [`Config::from_toml`]
    /// fails.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        Self::from_toml(&fs::read_to_string(path)?)
    }

    /// Checks the catalog invariants.
    ///
    /// Every method must have a unique id and an order of at least 1 that
    /// appears in [`Config::orders`], so each method lands in exactly one
    /// plotted group.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.step_sizes.is_empty() {
            return Err(ConfigError::NoStepSizes);
        }
        for (i, &h) in self.step_sizes.iter().enumerate() {
            if !h.is_finite() || h <= 0.0 {
                return Err(ConfigError::StepSize(h));
            }
            if self.step_sizes[..i].contains(&h) {
                return Err(ConfigError::DuplicateStepSize(h));
            }
        }

        if self.methods.is_empty() {
            return Err(ConfigError::NoMethods);
        }
        let mut ids = HashSet::new();
        for method in &self.methods {
            if !ids.insert(method.id) {
                return Err(ConfigError::DuplicateId(method.id));
            }
            if method.order == 0 {
                return Err(ConfigError::ZeroOrder(method.name.clone()));
            }
            if !self.orders.contains(&method.order) {
                return Err(ConfigError::UnplottedOrder {
                    method: method.name.clone(),
                    order: method.order,
                });
            }
        }

        if self.plot.width == 0 || self.plot.height == 0 {
            return Err(ConfigError::ImageSize);
        }

        if self.energy.enabled && !self.step_sizes.contains(&self.energy.step_size) {
            return Err(ConfigError::EnergyStepSize(self.energy.step_size));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.methods.len(), 12);
        assert_eq!(config.step_sizes, [1e-5, 1e-4, 1e-3, 1e-2, 1e-1]);
        assert_eq!(config.reference_order, 8);
    }

    #[test]
    fn empty_document_is_default() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn overrides_selected_fields() {
        let config = Config::from_toml(
            r#"
            input_dir = "runs"
            step_sizes = [0.01, 0.1]
            orders = [2]

            [[methods]]
            name = "Leapfrog"
            id = 2
            order = 2

            [plot]
            width = 640
            legend = false

            [energy]
            enabled = true
            step_size = 0.1
            "#,
        )
        .unwrap();

        assert_eq!(config.input_dir, PathBuf::from("runs"));
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert_eq!(config.methods, [Method::new("Leapfrog", 2, 2)]);
        assert_eq!(config.plot.width, 640);
        assert_eq!(config.plot.height, 960);
        assert!(!config.plot.legend);
        assert!(config.energy.enabled);
        assert_eq!(config.energy.column, 0);
    }

    #[test]
    fn rejects_unknown_fields() {
        let err = Config::from_toml("dpi = 200").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let mut config = Config::default();
        config.methods.push(Method::new("Another Leapfrog", 2, 2));
        assert!(matches!(config.validate(), Err(ConfigError::DuplicateId(2))));
    }

    #[test]
    fn rejects_unplotted_order() {
        let mut config = Config::default();
        config.methods.push(Method::new("Blanes7", 7, 7));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::UnplottedOrder { order: 7, .. })
        ));
    }

    #[test]
    fn rejects_bad_step_sizes() {
        let mut config = Config::default();
        config.step_sizes = vec![];
        assert!(matches!(config.validate(), Err(ConfigError::NoStepSizes)));

        config.step_sizes = vec![0.1, -0.1];
        assert!(matches!(config.validate(), Err(ConfigError::StepSize(_))));

        config.step_sizes = vec![0.1, f64::NAN];
        assert!(matches!(config.validate(), Err(ConfigError::StepSize(_))));

        config.step_sizes = vec![0.1, 0.1];
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DuplicateStepSize(_))
        ));
    }

    #[test]
    fn energy_step_size_must_be_configured() {
        let mut config = Config::default();
        config.energy.enabled = true;
        config.energy.step_size = 0.5;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EnergyStepSize(_))
        ));
    }

    #[test]
    fn reads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ark_order.toml");
        fs::write(&path, "reference_order = 6\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.reference_order, 6);
    }
}
