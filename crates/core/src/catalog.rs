//! The symplectic methods exercised by the Kepler example.

use serde::Deserialize;

/// A method in the catalog.
///
/// `id` selects the method in the example's command line and appears in the
/// case suffix of its output files. `order` is the nominal convergence order
/// the method is grouped and plotted under.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Method {
    pub name: String,
    pub id: u32,
    pub order: u32,
}

impl Method {
    #[must_use]
    pub fn new(name: impl Into<String>, id: u32, order: u32) -> Self {
        Self {
            name: name.into(),
            id,
            order,
        }
    }
}

/// Step sizes every method was run with.
pub const STEP_SIZES: [f64; 5] = [1e-5, 1e-4, 1e-3, 1e-2, 1e-1];

/// Orders an order plot is drawn for.
pub const ORDERS: [u32; 8] = [1, 2, 3, 4, 5, 6, 8, 10];

/// Order of the explicit run used as the reference solution.
pub const REFERENCE_ORDER: u32 = 8;

const METHODS: [(&str, u32, u32); 12] = [
    ("Symplectic Euler", 1, 1),
    ("Leapfrog", 2, 2),
    ("Pseudo Leapfrog", 22, 2),
    ("McLachlan2", 222, 2),
    ("Ruth3", 3, 3),
    ("McLachlan3", 33, 3),
    ("CandyRozmus4", 4, 4),
    ("McLachlan4", 44, 4),
    ("McLachlan5", 5, 5),
    ("Yoshida6", 6, 6),
    ("McLachlan8", 8, 8),
    ("Sofroniou10", 10, 10),
];

/// Returns the built-in method catalog.
#[must_use]
pub fn methods() -> Vec<Method> {
    METHODS
        .iter()
        .map(|&(name, id, order)| Method::new(name, id, order))
        .collect()
}
