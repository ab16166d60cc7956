//! # Score extraction and rank tables from completed reflection histories
//!
//! The recurrence only settles into usable relative orderings at alternating
//! step counts: one entity set is conventionally read at an even iteration
//! index and the other at the preceding odd index. Which parity is the
//! "correct" one for which set is a caller convention, not a property the
//! extractor can derive, so both parities are exposed for both sets and the
//! caller picks.
//!
//! `rep` is the largest even index ≤ K. For K = 2 the odd/even scores read
//! columns 1 and 2; for K = 3 rep snaps back to 2 and column 3 is ignored
//! for extraction (it remains present in the pass-through histories).

use serde::Serialize;

use log::{debug, info};

use crate::error::ReflectError;
use crate::reflection::IterationHistory;
use crate::stats::{rank_desc, standardize};

/// Which side of the bipartite structure a history describes. Determines
/// which parity of iteration columns a rank table keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EntityRole {
    /// Row entities: rank tables keep even-indexed iterations (0, 2, ...).
    Row,
    /// Column entities: rank tables keep odd-indexed iterations (1, 3, ...).
    Column,
}

/// Standardized complexity scores for both entity sets at both parities,
/// tagged with the even iteration index `rep` they were read at.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreSet {
    /// Row-entity scores from history column `rep - 1`.
    pub row_odd: Vec<f64>,
    /// Row-entity scores from history column `rep`.
    pub row_even: Vec<f64>,
    /// Column-entity scores from history column `rep - 1`.
    pub col_odd: Vec<f64>,
    /// Column-entity scores from history column `rep`.
    pub col_even: Vec<f64>,
    /// The even iteration index actually used.
    pub rep: usize,
}

/// Dense descending ranks of a history restricted to one parity of
/// iteration columns, with one label per entity row.
#[derive(Debug, Clone, Serialize)]
pub struct RankTable {
    pub labels: Vec<String>,
    /// Iteration indices of the retained columns, in order.
    pub iterations: Vec<usize>,
    /// `ranks[i][k]` is entity i's rank (1 = largest) at `iterations[k]`.
    pub ranks: Vec<Vec<usize>>,
}

/// Extracts standardized odd/even scores for both entity sets.
///
/// `iterations` is the K the histories were run for; `rep` snaps it to the
/// largest even index ≤ K.
///
/// # Errors
///
/// * `InsufficientIterations` if `iterations < 1` (no odd column exists)
///   or `iterations == 1` (rep snaps to 0, which has no odd predecessor)
/// * `DimensionMismatch` if `iterations` exceeds what either history holds
/// * `DegenerateInput` if a selected column is constant and cannot be
///   standardized
pub fn extract_scores(
    row_history: &IterationHistory,
    col_history: &IterationHistory,
    iterations: usize,
) -> Result<ScoreSet, ReflectError> {
    if iterations < 1 {
        return Err(ReflectError::insufficient_iterations(1, iterations));
    }
    for (role, history) in [("row history", row_history), ("column history", col_history)] {
        if iterations >= history.columns() {
            return Err(ReflectError::dimension_mismatch(
                role,
                (history.entities(), iterations + 1),
                (history.entities(), history.columns()),
            ));
        }
    }

    let rep = if iterations % 2 == 0 { iterations } else { iterations - 1 };
    if rep < 1 {
        // K = 1 snaps to rep = 0, whose odd predecessor does not exist.
        return Err(ReflectError::insufficient_iterations(2, iterations));
    }
    info!("Extracting scores at rep={} (requested iterations={})", rep, iterations);

    let scores = ScoreSet {
        row_odd: standardize(&row_history.column(rep - 1))?,
        row_even: standardize(&row_history.column(rep))?,
        col_odd: standardize(&col_history.column(rep - 1))?,
        col_even: standardize(&col_history.column(rep))?,
        rep,
    };
    debug!(
        "Scores standardized: {} row entities, {} column entities",
        scores.row_even.len(),
        scores.col_even.len()
    );
    Ok(scores)
}

/// Ranks every iteration column of a history, then keeps only the columns
/// of the parity conventionally reported for `role`: even indices for row
/// entities, odd indices for column entities. Row order and column order
/// are preserved.
///
/// # Errors
///
/// `ShapeMismatch` if `labels` does not have one entry per entity row.
pub fn rank_history(
    history: &IterationHistory,
    labels: &[String],
    role: EntityRole,
) -> Result<RankTable, ReflectError> {
    let entities = history.entities();
    if labels.len() != entities {
        return Err(ReflectError::shape_mismatch(
            (entities, 1),
            (labels.len(), 1),
        ));
    }

    let keep: Vec<usize> = (0..history.columns())
        .filter(|t| match role {
            EntityRole::Row => t % 2 == 0,
            EntityRole::Column => t % 2 == 1,
        })
        .collect();
    debug!(
        "Ranking {:?} history: keeping {} of {} iteration columns",
        role,
        keep.len(),
        history.columns()
    );

    let mut ranks = vec![Vec::with_capacity(keep.len()); entities];
    for &t in &keep {
        let column_ranks = rank_desc(&history.column(t));
        for (i, r) in column_ranks.into_iter().enumerate() {
            ranks[i].push(r);
        }
    }

    Ok(RankTable {
        labels: labels.to_vec(),
        iterations: keep,
        ranks,
    })
}
