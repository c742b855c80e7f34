//! Static image rendering of a [`Figure`] with `plotters`.

use std::{
    error::Error as StdError,
    ops::Range,
    path::{Path, PathBuf},
};

use ark_order_core::{
    Figure, PlotSettings,
    figure::{Scale, Series, Style},
};
use plotters::{coord::Shift, prelude::*};

/// Errors that can occur while rendering an image.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{}: {message}", .path.display())]
    Draw { path: PathBuf, message: String },
}

/// Line colors, assigned to solid series in order and reused cyclically.
const PALETTE: [RGBColor; 10] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
    RGBColor(227, 119, 194),
    RGBColor(127, 127, 127),
    RGBColor(188, 189, 34),
    RGBColor(23, 190, 207),
];

/// Dashes drawn per segment of a dashed series.
const DASHES_PER_SEGMENT: usize = 6;

/// Renders `figure` to `dir/<figure.file_name>` and returns the written path.
///
/// The image is a PNG of `settings.width × settings.height` pixels. Values a
/// log axis cannot show are skipped, as are non-finite values. An axis with
/// nothing to show keeps a fixed range, so the image is written even when
/// every series is hidden.
///
/// # Errors
///
/// Returns an error if drawing or writing the image fails.
pub fn render(figure: &Figure, dir: &Path, settings: &PlotSettings) -> Result<PathBuf, Error> {
    let path = dir.join(&figure.file_name);
    let (x_range, y_range) = figure.bounds();

    {
        let root = BitMapBackend::new(&path, (settings.width, settings.height)).into_drawing_area();
        draw(&root, figure, x_range, y_range, settings).map_err(|err| Error::Draw {
            path: path.clone(),
            message: err.to_string(),
        })?;
    }

    Ok(path)
}

macro_rules! draw_chart {
    ($root:expr, $figure:expr, $settings:expr, $x:expr, $y:expr) => {{
        let figure: &Figure = $figure;
        let settings: &PlotSettings = $settings;

        let mut chart = ChartBuilder::on($root)
            .caption(&figure.title, ("sans-serif", 32))
            .margin(20)
            .x_label_area_size(60)
            .y_label_area_size(90)
            .build_cartesian_2d($x, $y)?;

        let exponent_label = |v: &f64| format!("{v:.0e}");
        let mut mesh = chart.configure_mesh();
        mesh.x_desc(&figure.x_label).y_desc(&figure.y_label);
        if figure.x_scale == Scale::Log {
            mesh.x_label_formatter(&exponent_label);
        }
        if figure.y_scale == Scale::Log {
            mesh.y_label_formatter(&exponent_label);
        }
        mesh.draw()?;

        let mut next_color = PALETTE.iter().copied().cycle();
        for series in &figure.series {
            let width = settings.line_width;
            let color = match series.style {
                Style::Solid => next_color.next().unwrap_or(BLACK),
                Style::Dashed => BLACK,
            };

            let anno = match series.style {
                Style::Solid => chart.draw_series(LineSeries::new(
                    figure.visible(series),
                    color.stroke_width(width),
                ))?,
                Style::Dashed => chart.draw_series(
                    dashes(figure, series)
                        .into_iter()
                        .map(|dash| PathElement::new(dash, color.stroke_width(width))),
                )?,
            };
            anno.label(series.label.as_str()).legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(width))
            });
        }

        if settings.legend {
            chart
                .configure_series_labels()
                .position(SeriesLabelPosition::UpperLeft)
                .background_style(WHITE.mix(0.8))
                .border_style(BLACK)
                .draw()?;
        }
    }};
}

fn draw(
    root: &DrawingArea<BitMapBackend<'_>, Shift>,
    figure: &Figure,
    x: Range<f64>,
    y: Range<f64>,
    settings: &PlotSettings,
) -> Result<(), Box<dyn StdError>> {
    root.fill(&WHITE)?;

    match (figure.x_scale, figure.y_scale) {
        (Scale::Linear, Scale::Linear) => draw_chart!(root, figure, settings, x, y),
        (Scale::Linear, Scale::Log) => draw_chart!(root, figure, settings, x, y.log_scale()),
        (Scale::Log, Scale::Linear) => draw_chart!(root, figure, settings, x.log_scale(), y),
        (Scale::Log, Scale::Log) => draw_chart!(root, figure, settings, x.log_scale(), y.log_scale()),
    }

    root.present()?;
    Ok(())
}

/// Splits the visible part of `series` into dashes.
///
/// Each segment between consecutive points is cut into equal pieces in axis
/// space (log₁₀ space on a log axis) and every other piece is kept, so dashes
/// look uniform along straight lines on either scale.
fn dashes(figure: &Figure, series: &Series) -> Vec<Vec<(f64, f64)>> {
    let to_axis = |scale: Scale, v: f64| match scale {
        Scale::Linear => v,
        Scale::Log => v.log10(),
    };
    let from_axis = |scale: Scale, v: f64| match scale {
        Scale::Linear => v,
        Scale::Log => 10_f64.powf(v),
    };
    let (xs, ys) = (figure.x_scale, figure.y_scale);

    let points: Vec<(f64, f64)> = figure
        .visible(series)
        .map(|(x, y)| (to_axis(xs, x), to_axis(ys, y)))
        .collect();

    let pieces = 2 * DASHES_PER_SEGMENT - 1;
    let mut out = Vec::with_capacity(points.len().saturating_sub(1) * DASHES_PER_SEGMENT);

    for pair in points.windows(2) {
        let ((x0, y0), (x1, y1)) = (pair[0], pair[1]);
        let at = |i: usize| {
            let s = i as f64 / pieces as f64;
            (
                from_axis(xs, x0 + s * (x1 - x0)),
                from_axis(ys, y0 + s * (y1 - y0)),
            )
        };
        out.extend((0..pieces).step_by(2).map(|i| vec![at(i), at(i + 1)]));
    }

    out
}
