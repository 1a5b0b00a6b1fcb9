/// Probability floor applied to every off-diagonal transition entry before
/// the observed comparisons are written in.
///
/// Pairs that were never compared keep this value, which keeps the chain
/// irreducible: a structurally zero transition probability between two
/// components would make the stationary distribution non-unique. Must stay
/// small relative to 1/n, or the floors alone exhaust a row's probability
/// mass and the diagonal goes negative.
pub const DEFAULT_TRANSITION_FLOOR: f64 = 1e-4;

/// Slack allowed on a row's off-diagonal mass before the matrix is rejected.
///
/// A row whose comparison mass is mathematically exactly 1 can land an ulp
/// above it after summation; only an excess beyond this tolerance means the
/// floor or the comparison graph is actually degenerate.
pub const ROW_MASS_TOLERANCE: f64 = 1e-9;

/// Two eigenvalues closer than this are treated as tied for dominance.
///
/// A tie means the chain has no unique stationary distribution, so the
/// scorer refuses to pick one rather than return a misleading ranking.
pub const EIGENVALUE_TIE_TOLERANCE: f64 = 1e-9;

/// Largest imaginary component tolerated on the dominant eigenvalue.
///
/// The transition matrix is non-symmetric, so the general solver reports
/// complex eigenvalues; the Perron root of a valid stochastic matrix is
/// real, and anything beyond rounding noise signals degeneracy.
pub const MAX_IMAGINARY_COMPONENT: f64 = 1e-9;
