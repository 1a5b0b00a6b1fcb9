/// Error types for the rank-aggregation engine.
///
/// Every failure is a distinguishable kind; nothing panics in non-test code.
/// The computation is deterministic, so none of these are retryable — they
/// surface to the caller and terminate the invocation.
use thiserror::Error;

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, RankError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RankError {
    /// No items or comparisons to rank.
    #[error("empty input: {message}")]
    EmptyInput { message: String },

    /// An indexed comparison key is malformed: self-pair, missing reverse
    /// direction, or indices that do not cover a dense 0..n range.
    #[error("invalid comparison key: {message}")]
    InvalidComparison { message: String },

    /// A configuration value is outside its valid range.
    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// The eigen-decomposition cannot produce a well-defined stationary
    /// distribution (tied dominant eigenvalues, a complex dominant
    /// eigenvalue, or off-diagonal mass exceeding row capacity).
    #[error("numerical instability: {message}")]
    NumericalInstability { message: String },
}

impl RankError {
    pub fn empty_input(message: impl Into<String>) -> Self {
        Self::EmptyInput { message: message.into() }
    }

    pub fn invalid_comparison(message: impl Into<String>) -> Self {
        Self::InvalidComparison { message: message.into() }
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig { message: message.into() }
    }

    pub fn numerical_instability(message: impl Into<String>) -> Self {
        Self::NumericalInstability { message: message.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RankError::empty_input("no comparisons");
        assert!(err.to_string().contains("empty input"));
        assert!(err.to_string().contains("no comparisons"));

        let err = RankError::invalid_comparison("(3, 3) is a self-pair");
        assert!(err.to_string().contains("invalid comparison key"));
    }
}
