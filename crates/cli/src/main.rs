//! Writes the order plots for the ARK Kepler runs in the working directory.
//!
//! # Usage
//!
//! ```text
//! ark-order                 # reads ark_order.toml if present, else defaults
//! ark-order settings.toml   # reads the given config
//! RUST_LOG=debug ark-order  # also logs every loaded run and computed error
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let path = std::env::args_os().nth(1).map(PathBuf::from);
    let cwd = std::env::current_dir().context("failed to read working directory")?;
    let config = ark_order::load_config(path.as_deref(), &cwd)?;

    let report = ark_order::run(&config)?;
    tracing::info!(images = report.images.len(), "done");

    #[cfg(feature = "show")]
    ark_order::show(&report, &config)?;

    Ok(())
}
