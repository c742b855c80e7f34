//! Rendering of ARK Kepler order plots.
//!
//! [`render`] writes a [`Figure`] to a PNG file with `plotters`.
//!
//! # Features
//!
//! - `show`: Enables [`show`] for browsing the figures in an egui window.
//!   This feature adds dependencies on `eframe` and `egui_plot`.
//!
//! [`Figure`]: ark_order_core::Figure

mod render;

#[cfg(feature = "show")]
mod show;

pub use render::{Error, render};

#[cfg(feature = "show")]
pub use show::{ShowConfig, show};
