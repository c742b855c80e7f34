use ndarray::Array1;

use crate::trajectory::Trajectory;

/// Returns `|H(t) - H(t₀)|` for column `column` of the conserved table.
///
/// Returns `None` if the column does not exist. A run with no samples gives an
/// empty drift.
#[must_use]
pub fn drift(trajectory: &Trajectory, column: usize) -> Option<Array1<f64>> {
    if column >= trajectory.conserved.ncols() {
        return None;
    }

    let energy = trajectory.conserved.column(column);
    let Some(&initial) = energy.get(0) else {
        return Some(Array1::zeros(0));
    };

    Some(energy.mapv(|h| (h - initial).abs()))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use ndarray::{Array2, array};

    fn trajectory(conserved: Array2<f64>) -> Trajectory {
        let n = conserved.nrows();
        Trajectory {
            times: Array1::linspace(0.0, 1.0, n),
            states: Array2::zeros((n, 4)),
            conserved,
        }
    }

    #[test]
    fn drift_from_first_sample() {
        let traj = trajectory(array![[-0.5, 0.9], [-0.49, 0.9], [-0.52, 0.91]]);

        let drift = drift(&traj, 0).unwrap();
        assert_eq!(drift.len(), 3);
        assert_eq!(drift[0], 0.0);
        assert_relative_eq!(drift[1], 0.01, epsilon = 1e-12);
        assert_relative_eq!(drift[2], 0.02, epsilon = 1e-12);
    }

    #[test]
    fn selects_column() {
        let traj = trajectory(array![[-0.5, 0.9], [-0.5, 1.0]]);
        let drift = drift(&traj, 1).unwrap();
        assert_relative_eq!(drift[1], 0.1, epsilon = 1e-12);
    }

    #[test]
    fn missing_column_is_none() {
        let traj = trajectory(array![[-0.5], [-0.5]]);
        assert!(drift(&traj, 1).is_none());
    }

    #[test]
    fn empty_run_has_empty_drift() {
        let traj = trajectory(Array2::zeros((0, 2)));
        assert_eq!(drift(&traj, 0).unwrap().len(), 0);
    }
}
