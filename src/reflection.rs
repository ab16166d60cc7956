//! # Method-of-reflections engine over a bipartite incidence matrix
//!
//! ## Algorithm Overview
//!
//! 1. **Diversity seed**: column 0 of each history is the count of
//!    strictly-positive incidence entries per row entity (length M) and per
//!    column entity (length N), promoted to `f64`
//! 2. **Alternating recurrence**: for each round t = 0..K-1
//!    - `rowHistory[:, t+1] = rowWeights · colHistory[:, t]`
//!    - `colHistory[:, t+1] = colWeightsᵀ · rowHistory[:, t]`
//! 3. **Termination**: exactly K rounds; K = 0 yields seed-only histories
//!
//! Both updates of round t read column t of the *opposite* history as it
//! stood before the round began. This "last fully-completed iteration only"
//! dependency is the defining property of the recurrence: feeding the
//! freshly produced row column into the column update of the same round is
//! a different algorithm with different numbers.
//!
//! Histories are pre-sized to rows×(K+1) and filled one column per round,
//! which makes the dependency mechanically checkable: round t writes only
//! column t+1 and reads only column t.
//!
//! ## Complexity
//!
//! * **Time**: O(K × M × N) — two dense matrix-vector products per round,
//!   each parallelized across output rows with rayon
//! * **Space**: O(M×N + (M+N) × K) for the weights and both histories
//!
//! Parallelism never reorders reads and writes across rounds: each round's
//! products consume only already-finalized columns, so the parallel result
//! is bit-identical to the sequential one.

use smartcore::linalg::basic::arrays::{Array, Array2, MutArray};
use smartcore::linalg::basic::matrix::DenseMatrix;

use rayon::prelude::*;

use log::{debug, info, trace};

use crate::error::ReflectError;

/// Append-only record of one entity set's score vectors, one column per
/// iteration. Column 0 is the diversity seed; column t (t ≥ 1) is derived
/// from the opposite set's column t-1.
#[derive(Debug, Clone)]
pub struct IterationHistory {
    data: DenseMatrix<f64>,
    entities: usize,
    iterations: usize,
}

impl IterationHistory {
    /// Pre-sizes an entities×(iterations+1) history and installs the seed
    /// as column 0.
    fn seeded(seed: Vec<f64>, iterations: usize) -> Self {
        let entities = seed.len();
        let mut data: DenseMatrix<f64> = DenseMatrix::zeros(entities, iterations + 1);
        for (i, &v) in seed.iter().enumerate() {
            data.set((i, 0), v);
        }
        Self { data, entities, iterations }
    }

    /// Number of entities (rows of the history).
    pub fn entities(&self) -> usize {
        self.entities
    }

    /// Number of recorded columns, always `iterations + 1`.
    pub fn columns(&self) -> usize {
        self.iterations + 1
    }

    /// Number of recurrence rounds this history was sized for.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Copies out column `t`.
    pub fn column(&self, t: usize) -> Vec<f64> {
        assert!(t < self.columns(), "history column {t} out of bounds");
        (0..self.entities).map(|i| *self.data.get((i, t))).collect()
    }

    /// The full history as a dense entities×(iterations+1) matrix.
    pub fn matrix(&self) -> &DenseMatrix<f64> {
        &self.data
    }

    /// Installs the fully-computed column for round `t`. Rounds only ever
    /// append: column t is written once, after column t-1 is final.
    fn write_column(&mut self, t: usize, values: &[f64]) {
        assert!(t >= 1 && t < self.columns(), "round column {t} out of bounds");
        assert!(values.len() == self.entities, "column length mismatch");
        for (i, &v) in values.iter().enumerate() {
            self.data.set((i, t), v);
        }
    }
}

/// Per-row count of strictly-positive entries (`axis = 0` counts per
/// column instead).
fn diversity_seed(incidence: &DenseMatrix<f64>, per_row: bool) -> Vec<f64> {
    let (m, n) = incidence.shape();
    let len = if per_row { m } else { n };
    let mut seed = vec![0.0f64; len];
    for i in 0..m {
        for j in 0..n {
            if *incidence.get((i, j)) > 0.0 {
                seed[if per_row { i } else { j }] += 1.0;
            }
        }
    }
    seed
}

/// Dense matvec `weights · v`, one output entry per matrix row.
fn row_product(weights: &DenseMatrix<f64>, v: &[f64]) -> Vec<f64> {
    let (m, n) = weights.shape();
    (0..m)
        .into_par_iter()
        .map(|i| (0..n).map(|j| *weights.get((i, j)) * v[j]).sum())
        .collect()
}

/// Dense matvec `weightsᵀ · v`, one output entry per matrix column.
fn col_product(weights: &DenseMatrix<f64>, v: &[f64]) -> Vec<f64> {
    let (m, n) = weights.shape();
    (0..n)
        .into_par_iter()
        .map(|j| (0..m).map(|i| *weights.get((i, j)) * v[i]).sum())
        .collect()
}

/// Runs the reflection recurrence for exactly `iterations` rounds.
///
/// # Parameters
///
/// * `incidence` - M×N non-negative counts; only its strict positivity
///   pattern is read (for the diversity seeds)
/// * `row_weights` / `col_weights` - M×N weight matrices, typically from
///   [`crate::weights::build_weights`]
/// * `iterations` - number of rounds K; 0 is legal and returns seed-only
///   histories
///
/// # Returns
///
/// `(row_history, col_history)` of shapes M×(K+1) and N×(K+1). The engine
/// performs no odd/even selection; parity handling belongs to
/// [`crate::extract::extract_scores`].
///
/// # Errors
///
/// `DimensionMismatch` if either weight matrix is not M×N.
pub fn run_reflection(
    incidence: &DenseMatrix<f64>,
    row_weights: &DenseMatrix<f64>,
    col_weights: &DenseMatrix<f64>,
    iterations: usize,
) -> Result<(IterationHistory, IterationHistory), ReflectError> {
    let (m, n) = incidence.shape();
    if row_weights.shape() != (m, n) {
        return Err(ReflectError::dimension_mismatch(
            "row weights",
            (m, n),
            row_weights.shape(),
        ));
    }
    if col_weights.shape() != (m, n) {
        return Err(ReflectError::dimension_mismatch(
            "column weights",
            (m, n),
            col_weights.shape(),
        ));
    }

    info!(
        "Running method of reflections: {}x{} incidence, {} iterations",
        m, n, iterations
    );

    let mut row_history = IterationHistory::seeded(diversity_seed(incidence, true), iterations);
    let mut col_history = IterationHistory::seeded(diversity_seed(incidence, false), iterations);
    debug!(
        "Diversity seeds installed: row max={:?}, col max={:?}",
        row_history.column(0).iter().cloned().fold(f64::NEG_INFINITY, f64::max),
        col_history.column(0).iter().cloned().fold(f64::NEG_INFINITY, f64::max)
    );

    for t in 0..iterations {
        // Both products read the histories as they stood before this round.
        let row_prev = row_history.column(t);
        let col_prev = col_history.column(t);

        let row_next = row_product(row_weights, &col_prev);
        let col_next = col_product(col_weights, &row_prev);

        row_history.write_column(t + 1, &row_next);
        col_history.write_column(t + 1, &col_next);
        trace!("Round {} complete", t + 1);
    }

    info!(
        "Reflection run complete: histories {}x{} and {}x{}",
        m,
        iterations + 1,
        n,
        iterations + 1
    );
    Ok((row_history, col_history))
}
