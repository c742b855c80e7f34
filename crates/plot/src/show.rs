//! Interactive viewer for rendered figures.
//!
//! See [`show`] and [`ShowConfig`] for usage.

use ark_order_core::{
    Figure,
    figure::{Scale, Style},
};
use eframe::egui;
use egui_plot::{Legend, Line, LineStyle, Plot, PlotPoints};

/// Configuration for the viewer window.
///
/// Construct with [`ShowConfig::new`] and chain builder methods as needed.
pub struct ShowConfig {
    title: String,
    legend: bool,
}

impl ShowConfig {
    /// Creates a new `ShowConfig` with defaults: a generic title and a legend.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: "Order plots".to_owned(),
            legend: true,
        }
    }

    /// Sets the window title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Hides the legend.
    #[must_use]
    pub fn no_legend(mut self) -> Self {
        self.legend = false;
        self
    }
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Opens a blocking egui window showing `figures`, one at a time.
///
/// Log axes are drawn as log₁₀ of the value; values a log axis cannot show
/// are skipped. Blocks until the window is closed.
///
/// # Errors
///
/// Returns an error if the native window cannot be created.
pub fn show(figures: Vec<Figure>, config: ShowConfig) -> Result<(), eframe::Error> {
    let ShowConfig { title, legend } = config;
    eframe::run_native(
        &title,
        eframe::NativeOptions::default(),
        Box::new(move |_cc| {
            Ok(Box::new(Viewer {
                figures,
                selected: 0,
                legend,
            }))
        }),
    )
}

/// The egui [`eframe::App`] that renders the selected figure.
struct Viewer {
    figures: Vec<Figure>,
    selected: usize,
    legend: bool,
}

fn axis_label(label: &str, scale: Scale) -> String {
    match scale {
        Scale::Linear => label.to_owned(),
        Scale::Log => format!("log₁₀ {label}"),
    }
}

fn to_axis(scale: Scale, value: f64) -> f64 {
    match scale {
        Scale::Linear => value,
        Scale::Log => value.log10(),
    }
}

impl eframe::App for Viewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("figures").show(ctx, |ui| {
            ui.horizontal(|ui| {
                for (i, figure) in self.figures.iter().enumerate() {
                    ui.selectable_value(&mut self.selected, i, &figure.title);
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let Some(figure) = self.figures.get(self.selected) else {
                return;
            };

            let mut plot = Plot::new(("figure", self.selected))
                .x_axis_label(axis_label(&figure.x_label, figure.x_scale))
                .y_axis_label(axis_label(&figure.y_label, figure.y_scale));
            if self.legend {
                plot = plot.legend(Legend::default());
            }

            plot.show(ui, |plot_ui| {
                for series in &figure.series {
                    let points: PlotPoints = figure
                        .visible(series)
                        .map(|(x, y)| [to_axis(figure.x_scale, x), to_axis(figure.y_scale, y)])
                        .collect();
                    let mut line = Line::new(points).name(&series.label);
                    if series.style == Style::Dashed {
                        line = line.style(LineStyle::dashed_loose());
                    }
                    plot_ui.line(line);
                }
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_title_and_legend() {
        let config = ShowConfig::new();
        assert_eq!(config.title, "Order plots");
        assert!(config.legend);

        let config = ShowConfig::new().title("runs").no_legend();
        assert_eq!(config.title, "runs");
        assert!(!config.legend);
    }

    #[test]
    fn log_axes_are_labelled() {
        assert_eq!(axis_label("h", Scale::Log), "log₁₀ h");
        assert_eq!(axis_label("t", Scale::Linear), "t");
    }

    #[test]
    fn log_axis_maps_decades_to_integers() {
        assert!((to_axis(Scale::Log, 1e-3) + 3.0).abs() < 1e-12);
        assert_eq!(to_axis(Scale::Linear, 1e-3), 1e-3);
    }
}
