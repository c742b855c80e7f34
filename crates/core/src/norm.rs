use ndarray::{ArrayBase, Data, Dimension, Zip};

/// Returns the largest absolute value in `a`, or 0 for an empty array.
pub fn max_abs<S, D>(a: &ArrayBase<S, D>) -> f64
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    a.fold(0.0_f64, |acc, &x| acc.max(x.abs()))
}

/// Returns `max|a - reference| / max|reference|` over all elements.
///
/// Returns `None` if the shapes differ. A reference of all zeros gives an
/// infinite or `NaN` result.
pub fn relative_inf_error<S1, S2, D>(
    a: &ArrayBase<S1, D>,
    reference: &ArrayBase<S2, D>,
) -> Option<f64>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
    D: Dimension,
{
    if a.shape() != reference.shape() {
        return None;
    }

    let diff = Zip::from(a)
        .and(reference)
        .fold(0.0_f64, |acc, &x, &r| acc.max((x - r).abs()));

    Some(diff / max_abs(reference))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use ndarray::{Array2, array};

    fn reference() -> Array2<f64> {
        array![
            [0.4, 0.0, 0.0, 2.0],
            [0.3, 0.25, -1.1, 1.8],
            [-0.2, 0.4, -1.5, -0.9]
        ]
    }

    #[test]
    fn identical_arrays_have_zero_error() {
        let y = reference();
        assert_eq!(relative_inf_error(&y, &y.clone()), Some(0.0));
    }

    #[test]
    fn error_is_largest_difference_over_largest_reference_value() {
        let y_ref = reference();
        let mut y = y_ref.clone();
        y[[1, 2]] += 0.01;
        y[[2, 0]] -= 0.05;

        let err = relative_inf_error(&y, &y_ref).unwrap();
        assert_relative_eq!(err, 0.05 / 2.0, epsilon = 1e-12);
    }

    #[test]
    fn error_is_invariant_under_uniform_scaling() {
        let y_ref = reference();
        let perturbation = array![
            [1.0, -2.0, 0.5, 0.0],
            [3.0, 0.0, 1.0, -1.0],
            [0.0, 2.0, 0.0, 1.0]
        ];
        let y = &y_ref + &(1e-3 * &perturbation);
        let err = relative_inf_error(&y, &y_ref).unwrap();

        for scale in [1e-6, 0.5, 3.0, 1e8] {
            let scaled = relative_inf_error(&(scale * &y), &(scale * &y_ref)).unwrap();
            assert_relative_eq!(scaled, err, max_relative = 1e-12);
        }
    }

    #[test]
    fn shape_mismatch_is_none() {
        let y_ref = reference();
        let y = Array2::zeros((2, 4));
        assert_eq!(relative_inf_error(&y, &y_ref), None);
    }

    #[test]
    fn zero_reference_is_not_finite() {
        let y_ref = Array2::<f64>::zeros((2, 4));
        let y = Array2::from_elem((2, 4), 1.0);
        assert!(relative_inf_error(&y, &y_ref).unwrap().is_infinite());
        assert!(relative_inf_error(&y_ref, &y_ref).unwrap().is_nan());
    }

    #[test]
    fn max_abs_of_empty_is_zero() {
        assert_eq!(max_abs(&Array2::<f64>::zeros((0, 4))), 0.0);
        assert_eq!(max_abs(&array![-3.0, 2.0]), 3.0);
    }
}
