mod test_report;
mod test_weights;

use smartcore::linalg::basic::matrix::DenseMatrix;

pub const TOL: f64 = 1e-9;

/// The 2×3 worked scenario: hand-computable weights and histories.
pub fn toy_incidence() -> DenseMatrix<f64> {
    DenseMatrix::from_2d_vec(&vec![vec![1.0, 1.0, 0.0], vec![0.0, 1.0, 1.0]]).unwrap()
}

/// A symmetric 3×3 incidence with no zero marginals and non-constant
/// iteration columns, safe for standardization at every parity.
pub fn skill_incidence() -> DenseMatrix<f64> {
    DenseMatrix::from_2d_vec(&vec![
        vec![4.0, 1.0, 0.0],
        vec![1.0, 2.0, 1.0],
        vec![0.0, 1.0, 3.0],
    ])
    .unwrap()
}
