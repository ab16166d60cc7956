//! # reflectspace
//!
//! Bipartite complexity indices over dense incidence matrices via the
//! method of reflections.
//!
//! Given an M×N matrix of non-negative counts coupling two entity sets
//! (e.g. organizational units × activity categories), the crate:
//!
//! - derives row-normalized and column-normalized weight matrices
//!   ([`weights`]),
//! - runs the alternating mutual-reinforcement recurrence for a fixed
//!   number of rounds, recording one score vector per set per iteration
//!   ([`reflection`]),
//! - standardizes the settled odd/even iteration columns into zero-mean,
//!   unit-variance complexity scores and ranks full iteration trajectories
//!   ([`extract`], [`stats`]).
//!
//! The computation is synchronous and deterministic: no I/O, no shared
//! state across calls, and typed errors at every boundary instead of NaN
//! propagation. Matrix-vector products inside a round are parallelized with
//! rayon without changing the numbers.
//!
//! [`builder::ReflectionBuilder`] is the one-call entry point;
//! [`report::render_summary`] formats a finished run for humans.

pub mod builder;
pub mod error;
pub mod extract;
pub mod reflection;
pub mod report;
pub mod stats;
pub mod weights;

#[cfg(test)]
mod tests;

pub use builder::{ReflectionBuilder, ReflectionOutcome};
pub use error::ReflectError;
pub use extract::{extract_scores, rank_history, EntityRole, RankTable, ScoreSet};
pub use reflection::{run_reflection, IterationHistory};
pub use stats::{rank_desc, standardize};
pub use weights::{build_weights, validate_override};
