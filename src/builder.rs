//! One-call front-end over the weight/reflection/extraction pipeline.

use smartcore::linalg::basic::matrix::DenseMatrix;

use log::{debug, info};

use crate::error::ReflectError;
use crate::extract::{extract_scores, ScoreSet};
use crate::reflection::{run_reflection, IterationHistory};
use crate::weights::{build_weights, validate_override};

/// Everything a completed run produces: both pass-through histories plus
/// the standardized score set. Owned by the caller.
#[derive(Debug, Clone)]
pub struct ReflectionOutcome {
    pub row_history: IterationHistory,
    pub col_history: IterationHistory,
    pub scores: ScoreSet,
}

/// Fluent driver for the full pipeline: derive (or accept) weights, run the
/// recurrence, extract standardized scores.
///
/// ```
/// use reflectspace::builder::ReflectionBuilder;
/// use smartcore::linalg::basic::matrix::DenseMatrix;
///
/// let incidence = DenseMatrix::from_2d_vec(&vec![
///     vec![4.0, 1.0, 0.0],
///     vec![1.0, 2.0, 1.0],
///     vec![0.0, 1.0, 3.0],
/// ]).unwrap();
///
/// let outcome = ReflectionBuilder::new()
///     .with_iterations(6)
///     .build(&incidence)
///     .unwrap();
/// assert_eq!(outcome.scores.rep, 6);
/// ```
pub struct ReflectionBuilder {
    iterations: usize,
    weight_override: Option<(DenseMatrix<f64>, DenseMatrix<f64>)>,
}

impl Default for ReflectionBuilder {
    fn default() -> Self {
        debug!("Creating ReflectionBuilder with default parameters");
        Self {
            // An even default keeps the final column itself reportable as
            // the even-parity score without rep snapping away from it.
            iterations: 20,
            weight_override: None,
        }
    }
}

impl ReflectionBuilder {
    pub fn new() -> Self {
        info!("Initializing new ReflectionBuilder");
        Self::default()
    }

    /// Number of recurrence rounds K. The builder always extracts scores,
    /// which needs an even index and its odd predecessor, so K must be at
    /// least 2; call [`run_reflection`](crate::reflection::run_reflection)
    /// directly for shorter histories.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        info!("Configuring iterations: {}", iterations);
        self.iterations = iterations;
        self
    }

    /// Supplies pre-computed weight matrices instead of normalizing the
    /// incidence matrix. Validated by shape only at build time.
    pub fn with_weight_override(
        mut self,
        row_weights: DenseMatrix<f64>,
        col_weights: DenseMatrix<f64>,
    ) -> Self {
        info!("Configuring externally supplied weight matrices");
        self.weight_override = Some((row_weights, col_weights));
        self
    }

    /// Runs the pipeline against an M×N incidence matrix.
    ///
    /// # Errors
    ///
    /// Propagates the pipeline taxonomy unchanged: `DegenerateInput` from
    /// weight normalization or score standardization, `ShapeMismatch` from
    /// an ill-sized override, `DimensionMismatch` from the engine,
    /// `InsufficientIterations` when K < 1.
    pub fn build(self, incidence: &DenseMatrix<f64>) -> Result<ReflectionOutcome, ReflectError> {
        let iterations = self.iterations;
        let (row_weights, col_weights) = match self.weight_override {
            Some((rw, cw)) => {
                validate_override(incidence, &rw, &cw)?;
                debug!("Using caller-supplied weight matrices");
                (rw, cw)
            }
            None => build_weights(incidence)?,
        };

        let (row_history, col_history) =
            run_reflection(incidence, &row_weights, &col_weights, iterations)?;
        let scores = extract_scores(&row_history, &col_history, iterations)?;

        info!(
            "Reflection pipeline complete: rep={}, {} row / {} column entities",
            scores.rep,
            row_history.entities(),
            col_history.entities()
        );
        Ok(ReflectionOutcome { row_history, col_history, scores })
    }
}
