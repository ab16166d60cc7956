#[cfg(test)]
mod tests {
    use crate::error::ReflectError;
    use crate::tests::{skill_incidence, toy_incidence, TOL};
    use crate::weights::{build_weights, validate_override};

    use smartcore::linalg::basic::arrays::Array;
    use smartcore::linalg::basic::matrix::DenseMatrix;

    use approx::assert_relative_eq;

    #[test]
    fn test_row_and_col_sums_are_one() {
        for incidence in [toy_incidence(), skill_incidence()] {
            let (row_w, col_w) = build_weights(&incidence).unwrap();
            let (m, n) = incidence.shape();

            for i in 0..m {
                let s: f64 = (0..n).map(|j| *row_w.get((i, j))).sum();
                assert_relative_eq!(s, 1.0, epsilon = TOL);
            }
            for j in 0..n {
                let s: f64 = (0..m).map(|i| *col_w.get((i, j))).sum();
                assert_relative_eq!(s, 1.0, epsilon = TOL);
            }
        }
    }

    #[test]
    fn test_toy_weights_exact() {
        let (row_w, col_w) = build_weights(&toy_incidence()).unwrap();

        let expected_row = [[0.5, 0.5, 0.0], [0.0, 0.5, 0.5]];
        let expected_col = [[1.0, 0.5, 0.0], [0.0, 0.5, 1.0]];
        for i in 0..2 {
            for j in 0..3 {
                assert_relative_eq!(*row_w.get((i, j)), expected_row[i][j], epsilon = TOL);
                assert_relative_eq!(*col_w.get((i, j)), expected_col[i][j], epsilon = TOL);
            }
        }
    }

    #[test]
    fn test_rectangular_weights_entrywise() {
        // Distinct entries everywhere: any row/column-major mixup in the
        // backing storage would misplace at least one quotient.
        let incidence =
            DenseMatrix::from_2d_vec(&vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        let (row_w, col_w) = build_weights(&incidence).unwrap();

        let row_totals = [6.0, 15.0];
        let col_totals = [5.0, 7.0, 9.0];
        for i in 0..2 {
            for j in 0..3 {
                let v = *incidence.get((i, j));
                assert_relative_eq!(*row_w.get((i, j)), v / row_totals[i], epsilon = TOL);
                assert_relative_eq!(*col_w.get((i, j)), v / col_totals[j], epsilon = TOL);
            }
        }
    }

    #[test]
    fn test_zero_row_rejected() {
        let incidence =
            DenseMatrix::from_2d_vec(&vec![vec![0.0, 0.0], vec![1.0, 2.0]]).unwrap();
        let err = build_weights(&incidence).unwrap_err();
        assert!(matches!(err, ReflectError::DegenerateInput { .. }));
    }

    #[test]
    fn test_zero_column_rejected() {
        let incidence =
            DenseMatrix::from_2d_vec(&vec![vec![1.0, 0.0], vec![2.0, 0.0]]).unwrap();
        let err = build_weights(&incidence).unwrap_err();
        assert!(matches!(err, ReflectError::DegenerateInput { .. }));
    }

    #[test]
    fn test_override_accepts_matching_shapes() {
        let incidence = skill_incidence();
        let (row_w, col_w) = build_weights(&incidence).unwrap();
        assert!(validate_override(&incidence, &row_w, &col_w).is_ok());
    }

    #[test]
    fn test_override_rejects_wrong_shape() {
        let incidence = skill_incidence();
        let (row_w, _) = build_weights(&incidence).unwrap();
        let wrong = DenseMatrix::from_2d_vec(&vec![vec![0.0; 3]; 2]).unwrap();
        let err = validate_override(&incidence, &row_w, &wrong).unwrap_err();
        assert!(matches!(err, ReflectError::ShapeMismatch { .. }));
    }
}
