/// Transition-matrix construction for the Rank Centrality chain.
///
/// The comparison graph becomes a random walk: from item i, the walk moves
/// to item j with probability proportional to how often j beat i, scaled by
/// the maximum out-degree so every row stays within probability mass.
use std::collections::HashMap;
use std::fmt::Write as _;

use nalgebra::DMatrix;

use crate::constants::ROW_MASS_TOLERANCE;
use crate::errors::{RankError, Result};
use crate::types::IndexedComparisons;

/// Validate an indexed comparison multiset and return the item count n.
///
/// Well-formed input comes from `ItemIndex::index_comparisons`: no
/// self-pairs, every key's reverse direction present, indices covering a
/// dense 0..n range. Anything else is rejected before any matrix work.
fn validate(comparisons: &IndexedComparisons) -> Result<usize> {
    if comparisons.is_empty() {
        return Err(RankError::empty_input("no comparisons to rank"));
    }

    let mut max_idx = 0;
    for &(i, j) in comparisons.keys() {
        if i == j {
            return Err(RankError::invalid_comparison(format!("({i}, {j}) is a self-pair")));
        }
        max_idx = max_idx.max(i).max(j);
    }

    let n = max_idx + 1;
    let mut seen = vec![false; n];
    for &(i, j) in comparisons.keys() {
        seen[i] = true;
        seen[j] = true;
        if !comparisons.contains_key(&(j, i)) {
            return Err(RankError::invalid_comparison(format!(
                "({i}, {j}) has no reverse direction ({j}, {i})"
            )));
        }
    }

    if let Some(missing) = seen.iter().position(|&s| !s) {
        return Err(RankError::invalid_comparison(format!(
            "index {missing} is unused; indices must cover 0..{n} densely"
        )));
    }

    Ok(n)
}

/// Build the n×n row-stochastic transition matrix.
///
/// Every off-diagonal entry starts at `floor`; for each compared pair,
/// P[i][j] becomes the empirical probability that j beats i, divided by the
/// maximum out-degree d. Pairs never compared keep the floor. The diagonal
/// absorbs the remaining mass so each row sums to exactly 1.
///
/// Fails with `InvalidConfig` for a non-positive floor, and with
/// `NumericalInstability` when a row's off-diagonal mass exceeds 1 (a floor
/// too large for n, or a maximum out-degree far below some row's own
/// out-degree — possible with disconnected comparison graphs).
pub fn build_transition_matrix(comparisons: &IndexedComparisons, floor: f64) -> Result<DMatrix<f64>> {
    if !(floor > 0.0) || !floor.is_finite() {
        return Err(RankError::invalid_config(format!(
            "transition floor must be a positive finite number, got {floor}"
        )));
    }

    let n = validate(comparisons)?;

    // Out-degree: distinct opponents each item has a recorded comparison
    // against, counting 0-valued directions.
    let mut out_degree: HashMap<usize, usize> = HashMap::new();
    for &(i, _) in comparisons.keys() {
        *out_degree.entry(i).or_insert(0) += 1;
    }
    let d = out_degree.values().copied().max().unwrap_or(1) as f64;

    let mut p = DMatrix::from_element(n, n, floor);
    for (&(i, j), &wins_i) in comparisons {
        // Reverse key exists after validation.
        let wins_j = comparisons[&(j, i)];
        let total = wins_i + wins_j;
        if total > 0 {
            // Walking from j toward i is as likely as i's empirical win rate.
            p[(j, i)] = wins_i as f64 / total as f64 / d;
        }
    }

    for i in 0..n {
        p[(i, i)] = 0.0;
        let row_sum: f64 = p.row(i).sum();
        if row_sum > 1.0 + ROW_MASS_TOLERANCE {
            return Err(RankError::numerical_instability(format!(
                "row {i} carries off-diagonal mass {row_sum:.6} > 1; \
                 floor {floor} is too large for {n} items or the comparison graph is degenerate"
            )));
        }
        // Summation can overshoot an exactly-full row by an ulp.
        p[(i, i)] = (1.0 - row_sum).max(0.0);
    }

    Ok(p)
}

/// Render a matrix with two decimal places per entry, one row per line.
/// Debug aid for inspecting small transition matrices.
pub fn format_matrix(matrix: &DMatrix<f64>) -> String {
    let mut out = String::new();
    for i in 0..matrix.nrows() {
        for j in 0..matrix.ncols() {
            if j > 0 {
                out.push(' ');
            }
            let _ = write!(out, "{:.2}", matrix[(i, j)]);
        }
        out.push('\n');
    }
    out
}
