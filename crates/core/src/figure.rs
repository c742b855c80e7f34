//! Backend-independent description of a 2-D line plot.

use std::ops::Range;

/// Axis scaling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    Linear,
    /// Base-10 logarithmic. Only positive values can be shown.
    Log,
}

impl Scale {
    /// Returns `true` if `value` can be placed on an axis with this scale.
    #[must_use]
    pub fn shows(self, value: f64) -> bool {
        match self {
            Scale::Linear => value.is_finite(),
            Scale::Log => value.is_finite() && value > 0.0,
        }
    }

    fn pad(self, lo: f64, hi: f64) -> Range<f64> {
        match self {
            Scale::Linear => {
                let span = if hi > lo { hi - lo } else { lo.abs().max(1.0) };
                (lo - 0.05 * span)..(hi + 0.05 * span)
            }
            Scale::Log => (lo / 2.0)..(hi * 2.0),
        }
    }

    /// Range of an axis with no value to show.
    fn empty_range(self) -> Range<f64> {
        match self {
            Scale::Linear => 0.0..1.0,
            Scale::Log => 1e-16..1.0,
        }
    }

    /// Returns the padded range enclosing the shown values of `values`.
    fn range(self, values: impl Iterator<Item = f64>) -> Range<f64> {
        let bounds = values
            .filter(|&v| self.shows(v))
            .fold(None, |acc: Option<(f64, f64)>, v| match acc {
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
                None => Some((v, v)),
            });

        match bounds {
            Some((lo, hi)) => self.pad(lo, hi),
            None => self.empty_range(),
        }
    }
}

/// Line style of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    #[default]
    Solid,
    Dashed,
}

/// A labelled polyline.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub points: Vec<[f64; 2]>,
    pub style: Style,
}

impl Series {
    #[must_use]
    pub fn new(label: impl Into<String>, points: Vec<[f64; 2]>) -> Self {
        Self {
            label: label.into(),
            points,
            style: Style::Solid,
        }
    }

    #[must_use]
    pub fn dashed(mut self) -> Self {
        self.style = Style::Dashed;
        self
    }
}

/// A titled set of series destined for one image file.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub file_name: String,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub x_scale: Scale,
    pub y_scale: Scale,
    pub series: Vec<Series>,
}

impl Figure {
    /// Returns the points of `series` that both axes can show.
    ///
    /// Non-finite values, and non-positive values on a log axis, are skipped.
    pub fn visible<'a>(&self, series: &'a Series) -> impl Iterator<Item = (f64, f64)> + 'a {
        let (x_scale, y_scale) = (self.x_scale, self.y_scale);
        series
            .points
            .iter()
            .filter(move |[x, y]| x_scale.shows(*x) && y_scale.shows(*y))
            .map(|&[x, y]| (x, y))
    }

    /// Returns padded axis ranges enclosing every value each axis can show.
    ///
    /// Each axis is ranged on its own, so a series hidden by the other axis
    /// still sets this one. An axis with nothing to show gets a fixed range:
    /// `0..1` when linear, `1e-16..1` when logarithmic.
    #[must_use]
    pub fn bounds(&self) -> (Range<f64>, Range<f64>) {
        let points = || self.series.iter().flat_map(|s| s.points.iter());
        (
            self.x_scale.range(points().map(|&[x, _]| x)),
            self.y_scale.range(points().map(|&[_, y]| y)),
        )
    }
}
