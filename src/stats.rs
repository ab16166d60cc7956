//! Leaf numeric utilities: standardization and descending dense ranks.
//!
//! Both operate on plain `&[f64]` slices and allocate their output; they are
//! the only places in the crate where score vectors are post-processed, so
//! their conventions are documented here once:
//!
//! - `standardize` uses the population standard deviation (divisor n, not
//!   n-1). A constant vector has zero spread and is rejected with
//!   `DegenerateInput` rather than producing a NaN-filled sentinel.
//! - `rank_desc` assigns rank 1 to the largest value. Ties receive the
//!   average of the positions they span, truncated toward zero before the
//!   descending inversion `n - rank + 1`.

use crate::error::ReflectError;

/// Computes the population mean and standard deviation in one pass.
#[inline]
fn moments(v: &[f64]) -> (f64, f64) {
    let n = v.len() as f64;
    let mean = v.iter().sum::<f64>() / n;
    let var = v.iter().map(|&x| (x - mean) * (x - mean)).sum::<f64>() / n;
    (mean, var.sqrt())
}

/// Standardizes a vector to zero mean and unit population variance.
///
/// Fails with `DegenerateInput` when the input is empty or constant
/// (zero standard deviation).
pub fn standardize(v: &[f64]) -> Result<Vec<f64>, ReflectError> {
    if v.is_empty() {
        return Err(ReflectError::degenerate("cannot standardize an empty vector"));
    }
    let (mean, std) = moments(v);
    if std == 0.0 {
        return Err(ReflectError::degenerate(format!(
            "constant vector (all entries = {mean}) has zero standard deviation"
        )));
    }
    Ok(v.iter().map(|&x| (x - mean) / std).collect())
}

/// Dense descending rank: rank 1 = largest value, rank n = smallest.
///
/// Equal values share the truncated average of the ascending positions they
/// occupy, so `[5.0, 5.0, 10.0]` ranks as `[3, 3, 1]`: the two ties average
/// to ascending rank 1.5, truncate to 1, and invert to 3 - 1 + 1 = 3.
pub fn rank_desc(v: &[f64]) -> Vec<usize> {
    let n = v.len();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| {
        v[a].partial_cmp(&v[b]).unwrap_or(std::cmp::Ordering::Equal)
    });

    // Ascending average ranks over tie runs, 1-based.
    let mut asc = vec![0.0f64; n];
    let mut i = 0;
    while i < n {
        let mut j = i + 1;
        while j < n && v[order[j]] == v[order[i]] {
            j += 1;
        }
        // positions i+1 ..= j span the tie run
        let avg = (i + 1 + j) as f64 / 2.0;
        for &idx in &order[i..j] {
            asc[idx] = avg;
        }
        i = j;
    }

    asc.iter().map(|&r| n - (r as usize) + 1).collect()
}
