//! Error types for the reflection pipeline.
//!
//! Every failure is a deterministic function of caller-supplied shapes and
//! values, raised at the point of detection. The core never logs-and-continues,
//! retries, or propagates NaN in place of an error.

use thiserror::Error;

/// Errors that can occur while building weights, running the recurrence,
/// or extracting scores.
#[derive(Debug, Error)]
pub enum ReflectError {
    /// A normalization denominator is zero: an all-zero incidence row or
    /// column, or a constant vector handed to the standardizer.
    #[error("degenerate input: {message}")]
    DegenerateInput {
        /// What was degenerate and where
        message: String,
    },

    /// Caller-supplied matrices or label sequences disagree with the
    /// incidence shape.
    #[error("shape mismatch: expected {expected_rows}x{expected_cols}, got {actual_rows}x{actual_cols}")]
    ShapeMismatch {
        expected_rows: usize,
        expected_cols: usize,
        actual_rows: usize,
        actual_cols: usize,
    },

    /// Weight matrices handed to the engine do not match the incidence
    /// dimensions.
    #[error("dimension mismatch for {role}: expected {expected_rows}x{expected_cols}, got {actual_rows}x{actual_cols}")]
    DimensionMismatch {
        /// Which operand was mis-sized ("row weights", "column weights", ...)
        role: &'static str,
        expected_rows: usize,
        expected_cols: usize,
        actual_rows: usize,
        actual_cols: usize,
    },

    /// Fewer than one iteration was run, so no odd-indexed column exists
    /// to standardize.
    #[error("insufficient iterations: {actual} requested, at least {required} needed")]
    InsufficientIterations { required: usize, actual: usize },
}

impl ReflectError {
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateInput { message: message.into() }
    }

    pub fn shape_mismatch(expected: (usize, usize), actual: (usize, usize)) -> Self {
        Self::ShapeMismatch {
            expected_rows: expected.0,
            expected_cols: expected.1,
            actual_rows: actual.0,
            actual_cols: actual.1,
        }
    }

    pub fn dimension_mismatch(
        role: &'static str,
        expected: (usize, usize),
        actual: (usize, usize),
    ) -> Self {
        Self::DimensionMismatch {
            role,
            expected_rows: expected.0,
            expected_cols: expected.1,
            actual_rows: actual.0,
            actual_cols: actual.1,
        }
    }

    pub fn insufficient_iterations(required: usize, actual: usize) -> Self {
        Self::InsufficientIterations { required, actual }
    }
}
