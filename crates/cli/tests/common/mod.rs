//! Synthetic Kepler runs for end-to-end tests.
//!
//! The reference is a circular orbit of unit radius sampled at fixed times.
//! Method runs are the reference shifted by a caller-chosen offset, so the
//! expected relative error is known exactly.

#![allow(dead_code)]

use std::{fmt::Write as _, fs, path::Path};

use ark_order_core::{Case, Config, PlotSettings, Table, catalog::Method};

pub const SAMPLES: usize = 16;
pub const STEP_SIZES: [f64; 5] = [1e-5, 1e-4, 1e-3, 1e-2, 1e-1];

pub fn times() -> Vec<f64> {
    (0..SAMPLES).map(|i| 0.25 * i as f64).collect()
}

/// States of the circular orbit: position and velocity in the plane.
pub fn orbit() -> Vec<[f64; 4]> {
    times()
        .into_iter()
        .map(|t| [t.cos(), t.sin(), -t.sin(), t.cos()])
        .collect()
}

pub fn write_case(dir: &Path, case: &Case, states: &[[f64; 4]], energy: &[f64]) {
    let mut text = String::new();
    for t in times() {
        writeln!(text, "{t}").unwrap();
    }
    fs::write(case.path(dir, Table::Times), text).unwrap();

    let mut solution = String::new();
    for state in states {
        writeln!(solution, "{} {} {} {}", state[0], state[1], state[2], state[3]).unwrap();
    }
    fs::write(case.path(dir, Table::Solution), solution).unwrap();

    let mut conserved = String::new();
    for h in energy {
        writeln!(conserved, "{h}, 1.0").unwrap();
    }
    fs::write(case.path(dir, Table::Conserved), conserved).unwrap();
}

pub fn write_reference(dir: &Path) {
    write_case(dir, &Case::Erk { order: 8 }, &orbit(), &[-0.5; SAMPLES]);
}

/// Writes a run of `method` for every step size, offset from the reference by
/// `offset(h)` in every component.
pub fn write_method(dir: &Path, method: &Method, offset: impl Fn(f64) -> f64) {
    for h in STEP_SIZES {
        let shift = offset(h);
        let states: Vec<[f64; 4]> = orbit()
            .into_iter()
            .map(|s| s.map(|v| v + shift))
            .collect();
        let energy: Vec<f64> = (0..SAMPLES).map(|i| -0.5 + shift * i as f64).collect();

        let case = Case::Sprk {
            id: method.id,
            step_size: h,
        };
        write_case(dir, &case, &states, &energy);
    }
}

/// A config reading from and writing to `dir` with small images.
pub fn config(dir: &Path) -> Config {
    Config {
        input_dir: dir.to_owned(),
        output_dir: dir.to_owned(),
        plot: PlotSettings {
            width: 320,
            height: 240,
            line_width: 1,
            legend: true,
        },
        ..Config::default()
    }
}

pub fn png_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".png"))
        .collect();
    names.sort();
    names
}
