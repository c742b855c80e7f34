use ndarray::{Array1, Array2};

/// Number of state components per sample: planar position and velocity.
pub const STATE_DIM: usize = 4;

/// The tables written for one integration run.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    /// Time of each sample.
    pub times: Array1<f64>,

    /// State at each sample, one row of [`STATE_DIM`] values per sample.
    pub states: Array2<f64>,

    /// Conserved quantities at each sample, one row per sample.
    pub conserved: Array2<f64>,
}

impl Trajectory {
    /// Returns the number of state samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.states.nrows()
    }

    /// Returns `true` if the run holds no state samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the largest state value, or `NaN` for an empty run.
    #[must_use]
    pub fn max_state(&self) -> f64 {
        self.states.iter().copied().fold(f64::NAN, f64::max)
    }
}

/// One integration run tagged with the method and step size that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    pub method: String,
    pub order: u32,
    pub step_size: f64,
    pub trajectory: Trajectory,
}

/// The runs of a single method, one per configured step size and in the same
/// order.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodSeries {
    pub method: String,
    pub order: u32,
    pub runs: Vec<StepResult>,
}

impl MethodSeries {
    /// Returns the step sizes of the runs, in order.
    pub fn step_sizes(&self) -> impl Iterator<Item = f64> + '_ {
        self.runs.iter().map(|run| run.step_size)
    }

    /// Returns the run with the given step size, if any.
    #[must_use]
    pub fn run(&self, step_size: f64) -> Option<&StepResult> {
        self.runs.iter().find(|run| run.step_size == step_size)
    }
}
