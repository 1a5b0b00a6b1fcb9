/// Borda Count: raw pairwise win sums.
use crate::types::{BordaScores, IndexedComparisons};

/// Sum win counts per item across all comparisons.
///
/// Every item that appears in any key gets an entry, so an item that never
/// wins scores exactly 0. No normalization is applied — this is the simple,
/// interpretable baseline next to the spectral scorer.
pub fn borda_count(comparisons: &IndexedComparisons) -> BordaScores {
    let mut scores = BordaScores::new();

    for (&(winner, loser), &count) in comparisons {
        *scores.entry(winner).or_insert(0) += count;
        scores.entry(loser).or_insert(0);
    }

    scores
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparisons::rankings_to_comparisons;
    use crate::types::ItemIndex;

    #[test]
    fn test_scenario_scores() {
        // Rankings [b, c, a] and [a, b, c]; sorted indices a=0, b=1, c=2.
        let rankings = vec![vec!["b", "c", "a"], vec!["a", "b", "c"]];
        let comparisons = rankings_to_comparisons(&rankings);
        let index = ItemIndex::from_comparisons(&comparisons);
        let scores = borda_count(&index.index_comparisons(&comparisons));

        assert_eq!(scores[&1], 3); // b: beats c twice, a once
        assert_eq!(scores[&0], 2); // a: beats b once, c once
        assert_eq!(scores[&2], 1); // c: beats a once
    }

    #[test]
    fn test_never_winning_item_scores_zero() {
        let rankings = vec![vec!["a", "b"], vec!["a", "b"]];
        let comparisons = rankings_to_comparisons(&rankings);
        let index = ItemIndex::from_comparisons(&comparisons);
        let scores = borda_count(&index.index_comparisons(&comparisons));

        assert_eq!(scores[&0], 2);
        assert_eq!(scores[&1], 0);
    }

    #[test]
    fn test_empty_comparisons_give_empty_scores() {
        let scores = borda_count(&IndexedComparisons::new());
        assert!(scores.is_empty());
    }
}
