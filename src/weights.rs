//! # Builds row- and column-normalized weight matrices from an incidence matrix
//!
//! ## Algorithm Overview
//!
//! 1. **Marginal totals**: sum the M×N incidence matrix along each axis
//! 2. **Degeneracy check**: any zero row or column total is an undefined
//!    normalization denominator and rejects the input
//! 3. **Row weights**: `rowWeights[i,j] = incidence[i,j] / rowTotal[i]`,
//!    so every row sums to 1
//! 4. **Column weights**: `colWeights[i,j] = incidence[i,j] / colTotal[j]`,
//!    so every column sums to 1
//!
//! Both outputs keep the incidence shape M×N; the reflection engine applies
//! the column weights transposed.
//!
//! An override path (`validate_override`) admits externally computed weight
//! matrices, checked by shape only. Whether overridden weights are actually
//! derived from the same incidence matrix is caller responsibility.

use smartcore::linalg::basic::arrays::{Array, Array2};
use smartcore::linalg::basic::matrix::DenseMatrix;

use log::{debug, info, trace};

use crate::error::ReflectError;

/// Builds the pair of normalized weight matrices from an M×N incidence
/// matrix of non-negative counts.
///
/// # Returns
///
/// `(row_weights, col_weights)`, both M×N: rows of `row_weights` sum to 1,
/// columns of `col_weights` sum to 1.
///
/// # Errors
///
/// `DegenerateInput` if any row or column of the incidence matrix sums to
/// zero — a disconnected entity has no defined weights and must be removed
/// upstream before calling the core.
pub fn build_weights(
    incidence: &DenseMatrix<f64>,
) -> Result<(DenseMatrix<f64>, DenseMatrix<f64>), ReflectError> {
    let (m, n) = incidence.shape();
    info!("Building weight matrices for {}x{} incidence", m, n);

    let mut row_totals = vec![0.0f64; m];
    let mut col_totals = vec![0.0f64; n];
    for i in 0..m {
        for j in 0..n {
            let v = *incidence.get((i, j));
            row_totals[i] += v;
            col_totals[j] += v;
        }
    }
    trace!("Marginal totals computed: rows={:?} cols={:?}", row_totals, col_totals);

    if let Some(i) = row_totals.iter().position(|&t| t == 0.0) {
        return Err(ReflectError::degenerate(format!(
            "incidence row {i} sums to zero; row weights undefined"
        )));
    }
    if let Some(j) = col_totals.iter().position(|&t| t == 0.0) {
        return Err(ReflectError::degenerate(format!(
            "incidence column {j} sums to zero; column weights undefined"
        )));
    }

    let mut row_data = Vec::with_capacity(m * n);
    let mut col_data = Vec::with_capacity(m * n);
    for i in 0..m {
        for j in 0..n {
            let v = *incidence.get((i, j));
            row_data.push(v / row_totals[i]);
            col_data.push(v / col_totals[j]);
        }
    }
    // Row-major data, axis 0
    let row_weights = DenseMatrix::<f64>::from_iterator(row_data.into_iter(), m, n, 0);
    let col_weights = DenseMatrix::<f64>::from_iterator(col_data.into_iter(), m, n, 0);

    debug!("Weight matrices built ({}x{} each)", m, n);
    Ok((row_weights, col_weights))
}

/// Validates caller-supplied weight matrices against the incidence shape.
///
/// The override path for pre-computed weights checks dimensions only;
/// it does not verify that rows/columns are normalized or that the weights
/// were derived from this incidence matrix.
///
/// # Errors
///
/// `ShapeMismatch` if either supplied matrix is not M×N.
pub fn validate_override(
    incidence: &DenseMatrix<f64>,
    row_weights: &DenseMatrix<f64>,
    col_weights: &DenseMatrix<f64>,
) -> Result<(), ReflectError> {
    let expected = incidence.shape();
    debug!("Validating weight override against incidence shape {:?}", expected);
    for supplied in [row_weights.shape(), col_weights.shape()] {
        if supplied != expected {
            return Err(ReflectError::shape_mismatch(expected, supplied));
        }
    }
    Ok(())
}
