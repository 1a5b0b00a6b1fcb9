/// Rank Centrality: spectral rank aggregation.
///
/// Pairwise wins define a random walk that drifts toward items that beat
/// their opponents. The walk's stationary distribution — the dominant left
/// eigenvector of the transition matrix — scores the items; min–max
/// normalization maps it onto [0, 100].
use nalgebra::{DMatrix, DVector};

use crate::constants::{DEFAULT_TRANSITION_FLOOR, EIGENVALUE_TIE_TOLERANCE, MAX_IMAGINARY_COMPONENT};
use crate::errors::{RankError, Result};
use crate::matrix::build_transition_matrix;
use crate::types::{CentralityScores, IndexedComparisons};

/// Score items with the default irreducibility floor.
pub fn rank_centrality(comparisons: &IndexedComparisons) -> Result<CentralityScores> {
    rank_centrality_with_floor(comparisons, DEFAULT_TRANSITION_FLOOR)
}

/// Score items with an explicit irreducibility floor.
///
/// The floor trades ranking fidelity against chain irreducibility: larger
/// values connect sparse comparison graphs more strongly but distort the
/// stationary distribution. See `DEFAULT_TRANSITION_FLOOR`.
pub fn rank_centrality_with_floor(
    comparisons: &IndexedComparisons,
    floor: f64,
) -> Result<CentralityScores> {
    let p = build_transition_matrix(comparisons, floor)?;
    let stationary = dominant_left_eigenvector(&p)?;
    Ok(normalize_scores(&stationary))
}

/// Dominant left eigenvector of a row-stochastic matrix.
///
/// Eigenvalues come from the Schur-based general solver; the matrix is
/// non-symmetric, so they may be complex. The dominant one must be real up
/// to tolerance and strictly separated from the runner-up, otherwise the
/// stationary distribution is not well defined and the computation fails
/// rather than return a misleading ranking. The eigenvector itself is
/// recovered as the SVD null space of (Pᵀ − λI), which keeps it real-valued
/// by construction.
fn dominant_left_eigenvector(p: &DMatrix<f64>) -> Result<DVector<f64>> {
    let n = p.nrows();
    let eigenvalues = p.clone().complex_eigenvalues();

    let mut max_idx = 0;
    for k in 1..n {
        if eigenvalues[k].re > eigenvalues[max_idx].re {
            max_idx = k;
        }
    }
    let lambda = eigenvalues[max_idx];

    if lambda.im.abs() > MAX_IMAGINARY_COMPONENT {
        return Err(RankError::numerical_instability(format!(
            "dominant eigenvalue {:.9}{:+.9}i is not real",
            lambda.re, lambda.im
        )));
    }

    for (k, ev) in eigenvalues.iter().enumerate() {
        if k != max_idx && (*ev - lambda).norm() < EIGENVALUE_TIE_TOLERANCE {
            return Err(RankError::numerical_instability(format!(
                "eigenvalues {:.12} and {:.12} are tied for dominance; \
                 the stationary distribution is not unique",
                lambda.re, ev.re
            )));
        }
    }

    // A left eigenvector satisfies vᵀP = λvᵀ, i.e. (Pᵀ − λI)v = 0. Singular
    // values are sorted descending, so the last right singular vector spans
    // the numerical null space.
    let shifted = p.transpose() - DMatrix::identity(n, n) * lambda.re;
    let svd = shifted.svd(false, true);
    let v_t = svd
        .v_t
        .ok_or_else(|| RankError::numerical_instability("SVD produced no singular vectors"))?;
    let mut v: DVector<f64> = v_t.row(n - 1).transpose();

    // The Perron vector has a single sign; orient it non-negative so that
    // min–max normalization ranks frequent winners above frequent losers.
    if v.sum() < 0.0 {
        v = -v;
    }

    Ok(v)
}

/// Min–max normalize the stationary vector onto [0, 100].
///
/// A zero spread means every item shares the same stationary probability;
/// all items then score the midpoint 50.
fn normalize_scores(stationary: &DVector<f64>) -> CentralityScores {
    let min = stationary.min();
    let max = stationary.max();
    let spread = max - min;

    stationary
        .iter()
        .enumerate()
        .map(|(idx, &value)| {
            let score = if spread > 0.0 { (value - min) / spread * 100.0 } else { 50.0 };
            (idx, score)
        })
        .collect()
}
