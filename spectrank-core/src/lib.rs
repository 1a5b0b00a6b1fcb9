/// spectrank-core: rank-aggregation engine.
///
/// Partial rankings in, two scoreboards out: Borda Count (raw pairwise win
/// sums) and Rank Centrality (the stationary distribution of a random walk
/// over the pairwise comparison graph). No IO, no persistence — just math.
///
/// Items are any clonable, hashable, totally ordered identifiers. The crate
/// handles the internal mapping to dense array indices; callers that use
/// `aggregate()` never think about indices.
///
/// # Quick start
///
/// ```rust
/// use spectrank_core::{aggregate, AggregateOptions};
///
/// let rankings = vec![
///     vec!["b", "c", "a"], // one observed finish order, winner first
///     vec!["a", "b", "c"],
/// ];
///
/// let result = aggregate(&rankings, &AggregateOptions::default()).unwrap();
///
/// for (item, score) in &result.centrality {
///     println!("{item}: {score:.2}");
/// }
/// ```

pub mod aggregate;
pub mod borda;
pub mod centrality;
pub mod comparisons;
pub mod constants;
pub mod errors;
pub mod matrix;
pub mod types;

// Re-export primary public API at crate root.
pub use aggregate::{aggregate, AggregateOptions, AggregateResult};
pub use borda::borda_count;
pub use centrality::{rank_centrality, rank_centrality_with_floor};
pub use comparisons::rankings_to_comparisons;
pub use errors::{RankError, Result};
pub use matrix::{build_transition_matrix, format_matrix};
pub use types::{BordaScores, CentralityScores, Comparisons, IndexedComparisons, ItemIndex};
