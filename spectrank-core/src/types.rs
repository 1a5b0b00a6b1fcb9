/// Core data model: comparison multisets and the item ↔ index bijection.
///
/// Items are any clonable, hashable, totally ordered identifiers — string
/// names, numeric ids, whatever the caller ranks. The numeric scorers work
/// on dense `usize` indices; `ItemIndex` is the bridge in both directions.
use std::collections::HashMap;
use std::hash::Hash;

/// Pairwise win counts keyed by (winner, loser).
///
/// Invariant (maintained by `rankings_to_comparisons`): whenever (i, j) is
/// present, (j, i) is present too, possibly with count 0.
pub type Comparisons<T> = HashMap<(T, T), u64>;

/// Pairwise win counts keyed by dense (winner, loser) indices.
pub type IndexedComparisons = HashMap<(usize, usize), u64>;

/// Borda scores per index: raw win-count sums.
pub type BordaScores = HashMap<usize, u64>;

/// Rank Centrality scores per index, normalized to [0, 100].
pub type CentralityScores = HashMap<usize, f64>;

/// Maps between caller item identities and internal 0..N indices.
///
/// Index assignment sorts the distinct items in their natural order, so the
/// bijection is a pure function of the item set — identical inputs index
/// identically regardless of insertion order.
pub struct ItemIndex<T> {
    items: Vec<T>,
    item_to_idx: HashMap<T, usize>,
}

impl<T: Clone + Eq + Hash + Ord> ItemIndex<T> {
    /// Build the bijection from every item appearing in a comparison key.
    pub fn from_comparisons(comparisons: &Comparisons<T>) -> Self {
        let mut items: Vec<T> = Vec::with_capacity(comparisons.len());
        for (winner, loser) in comparisons.keys() {
            items.push(winner.clone());
            items.push(loser.clone());
        }
        items.sort();
        items.dedup();

        let mut item_to_idx = HashMap::with_capacity(items.len());
        for (idx, item) in items.iter().enumerate() {
            item_to_idx.insert(item.clone(), idx);
        }
        ItemIndex { items, item_to_idx }
    }

    /// Number of distinct items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn to_idx(&self, item: &T) -> Option<usize> {
        self.item_to_idx.get(item).copied()
    }

    pub fn to_item(&self, idx: usize) -> &T {
        &self.items[idx]
    }

    /// Re-key a comparison multiset by dense indices.
    pub fn index_comparisons(&self, comparisons: &Comparisons<T>) -> IndexedComparisons {
        comparisons
            .iter()
            .map(|((winner, loser), &count)| {
                ((self.item_to_idx[winner], self.item_to_idx[loser]), count)
            })
            .collect()
    }

    /// Map an index-keyed score mapping back to item identities.
    pub fn unindex_scores<S: Copy>(&self, scores: &HashMap<usize, S>) -> HashMap<T, S> {
        scores
            .iter()
            .map(|(&idx, &score)| (self.items[idx].clone(), score))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comparisons_from_pairs(pairs: &[((&'static str, &'static str), u64)]) -> Comparisons<&'static str> {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_indices_follow_sorted_order() {
        let comparisons = comparisons_from_pairs(&[(("c", "a"), 1), (("a", "c"), 0), (("b", "c"), 2), (("c", "b"), 0)]);
        let index = ItemIndex::from_comparisons(&comparisons);

        assert_eq!(index.len(), 3);
        assert_eq!(index.to_idx(&"a"), Some(0));
        assert_eq!(index.to_idx(&"b"), Some(1));
        assert_eq!(index.to_idx(&"c"), Some(2));
        assert_eq!(index.to_item(1), &"b");
        assert_eq!(index.to_idx(&"d"), None);
    }

    #[test]
    fn test_indexing_is_insertion_order_independent() {
        let forward = comparisons_from_pairs(&[(("x", "y"), 3), (("y", "x"), 1), (("y", "z"), 2), (("z", "y"), 0)]);
        let backward = comparisons_from_pairs(&[(("z", "y"), 0), (("y", "z"), 2), (("y", "x"), 1), (("x", "y"), 3)]);

        let a = ItemIndex::from_comparisons(&forward);
        let b = ItemIndex::from_comparisons(&backward);

        for item in ["x", "y", "z"] {
            assert_eq!(a.to_idx(&item), b.to_idx(&item));
        }
    }

    #[test]
    fn test_index_comparisons_rekeys_counts() {
        let comparisons = comparisons_from_pairs(&[(("b", "a"), 4), (("a", "b"), 1)]);
        let index = ItemIndex::from_comparisons(&comparisons);
        let indexed = index.index_comparisons(&comparisons);

        assert_eq!(indexed[&(1, 0)], 4);
        assert_eq!(indexed[&(0, 1)], 1);
        assert_eq!(indexed.len(), 2);
    }

    #[test]
    fn test_unindex_round_trip() {
        let comparisons = comparisons_from_pairs(&[(("b", "a"), 4), (("a", "b"), 1)]);
        let index = ItemIndex::from_comparisons(&comparisons);

        let scores: HashMap<usize, f64> = [(0, 12.5), (1, 80.0)].into_iter().collect();
        let unindexed = index.unindex_scores(&scores);

        assert_eq!(unindexed[&"a"], 12.5);
        assert_eq!(unindexed[&"b"], 80.0);
        assert_eq!(unindexed.len(), scores.len());
    }
}
