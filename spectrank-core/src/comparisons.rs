/// Comparison extraction: total-order rankings → pairwise win counts.
use std::hash::Hash;

use crate::types::Comparisons;

/// Convert a sequence of rankings (most-preferred first) into a
/// (winner, loser) → win-count map.
///
/// Each ranking contributes one win for every ordered position pair, and
/// seeds the reverse direction at 0 so every compared pair is present in
/// both directions. Rankings of length 0 or 1 contribute nothing; rankings
/// may cover different item sets and lengths — comparisons accumulate
/// globally.
///
/// Precondition: no duplicate items within a single ranking. Duplicates are
/// not detected here; callers validate at the input boundary.
pub fn rankings_to_comparisons<T, R>(rankings: &[R]) -> Comparisons<T>
where
    T: Clone + Eq + Hash,
    R: AsRef<[T]>,
{
    let mut comparisons = Comparisons::new();

    for ranking in rankings {
        let ranking = ranking.as_ref();
        for i in 0..ranking.len() {
            for j in (i + 1)..ranking.len() {
                let win = ranking[i].clone();
                let lose = ranking[j].clone();

                *comparisons.entry((win.clone(), lose.clone())).or_insert(0) += 1;
                comparisons.entry((lose, win)).or_insert(0);
            }
        }
    }

    comparisons
}
