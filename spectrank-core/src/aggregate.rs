/// Unified aggregation entry point.
///
/// One function, one options struct: rankings in, both scoreboards out,
/// un-indexed and sorted. Pure function — no IO, no state.
use std::cmp::Ordering;
use std::hash::Hash;

use crate::borda::borda_count;
use crate::centrality::rank_centrality_with_floor;
use crate::comparisons::rankings_to_comparisons;
use crate::constants::DEFAULT_TRANSITION_FLOOR;
use crate::errors::{RankError, Result};
use crate::types::ItemIndex;

/// Options for `aggregate()`.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AggregateOptions {
    /// Irreducibility floor for the Rank Centrality transition matrix.
    pub transition_floor: f64,
}

impl Default for AggregateOptions {
    fn default() -> Self {
        AggregateOptions { transition_floor: DEFAULT_TRANSITION_FLOOR }
    }
}

/// Both scoreboards, sorted descending by score.
///
/// Ties break by the items' natural order, so equal inputs always produce
/// identical output.
#[derive(Debug, Clone)]
pub struct AggregateResult<T> {
    /// Borda Count: raw pairwise win sums.
    pub borda: Vec<(T, u64)>,
    /// Rank Centrality: stationary-distribution scores in [0, 100].
    pub centrality: Vec<(T, f64)>,
}

/// Aggregate a sequence of rankings (most-preferred first) into Borda and
/// Rank Centrality scoreboards.
///
/// Fails with `EmptyInput` when the rankings produce no pairwise
/// comparisons (no rankings, or only rankings of length 0 or 1).
pub fn aggregate<T, R>(rankings: &[R], options: &AggregateOptions) -> Result<AggregateResult<T>>
where
    T: Clone + Eq + Hash + Ord,
    R: AsRef<[T]>,
{
    let comparisons = rankings_to_comparisons(rankings);
    if comparisons.is_empty() {
        return Err(RankError::empty_input("the rankings contain no pairwise comparisons"));
    }

    let index = ItemIndex::from_comparisons(&comparisons);
    let indexed = index.index_comparisons(&comparisons);

    let borda_scores = borda_count(&indexed);
    let centrality_scores = rank_centrality_with_floor(&indexed, options.transition_floor)?;

    let mut borda: Vec<(T, u64)> = borda_scores
        .into_iter()
        .map(|(idx, score)| (index.to_item(idx).clone(), score))
        .collect();
    borda.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    let mut centrality: Vec<(T, f64)> = centrality_scores
        .into_iter()
        .map(|(idx, score)| (index.to_item(idx).clone(), score))
        .collect();
    centrality.sort_by(|a, b| {
        b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal).then_with(|| a.0.cmp(&b.0))
    });

    Ok(AggregateResult { borda, centrality })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_end_to_end() {
        let rankings = vec![vec!["b", "c", "a"], vec!["a", "b", "c"]];
        let result = aggregate(&rankings, &AggregateOptions::default()).unwrap();

        assert_eq!(result.borda, vec![("b", 3), ("a", 2), ("c", 1)]);

        let order: Vec<&str> = result.centrality.iter().map(|(item, _)| *item).collect();
        assert_eq!(order, vec!["b", "a", "c"]);
        assert!((result.centrality[0].1 - 100.0).abs() < 1e-6);
        assert!((result.centrality[1].1 - 50.0).abs() < 1e-6);
        assert!(result.centrality[2].1.abs() < 1e-6);
    }

    #[test]
    fn test_empty_ranking_list_is_a_named_error() {
        let rankings: Vec<Vec<&str>> = vec![];
        let err = aggregate(&rankings, &AggregateOptions::default()).unwrap_err();
        assert!(matches!(err, RankError::EmptyInput { .. }));
    }

    #[test]
    fn test_trivial_rankings_are_a_named_error() {
        let rankings = vec![vec!["solo"], vec![]];
        let err = aggregate(&rankings, &AggregateOptions::default()).unwrap_err();
        assert!(matches!(err, RankError::EmptyInput { .. }));
    }

    #[test]
    fn test_ties_break_by_item_order() {
        // One win each way: both Borda scores are 1, both centrality scores 50.
        let rankings = vec![vec!["z", "a"], vec!["a", "z"]];
        let result = aggregate(&rankings, &AggregateOptions::default()).unwrap();

        assert_eq!(result.borda, vec![("a", 1), ("z", 1)]);
        assert_eq!(result.centrality[0].0, "a");
        assert_eq!(result.centrality[1].0, "z");
    }

    #[test]
    fn test_recovers_order_from_noisy_rankings() {
        use rand::{rngs::SmallRng, Rng, SeedableRng};

        // Each observation is the true order with one random adjacent swap.
        let true_order: Vec<u32> = (0..6).collect();
        let mut rng = SmallRng::seed_from_u64(7);
        let mut rankings = Vec::new();
        for _ in 0..30 {
            let mut observed = true_order.clone();
            let k = rng.random_range(0..observed.len() - 1);
            observed.swap(k, k + 1);
            rankings.push(observed);
        }

        let result = aggregate(&rankings, &AggregateOptions::default()).unwrap();
        assert_eq!(result.borda[0].0, 0);
        assert_eq!(result.centrality[0].0, 0);
        assert_eq!(result.centrality.last().unwrap().0, 5);
    }
}
