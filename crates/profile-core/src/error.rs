//! Error types for piecewise profile operations
//!
//! Provides a unified error type for all spike-profiles crates.

use thiserror::Error;

/// Core error type for profile construction, merging and queries
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Operands of a merge do not share identical domain endpoints
    #[error("Domain mismatch: [{}, {}] cannot be merged with [{}, {}]", .left.0, .left.1, .right.0, .right.1)]
    DomainMismatch { left: (f64, f64), right: (f64, f64) },

    /// Queried interval lies outside the domain or has reversed bounds
    #[error("Interval [{start}, {end}] is outside the domain [{}, {}]", .domain.0, .domain.1)]
    OutOfDomain {
        start: f64,
        end: f64,
        domain: (f64, f64),
    },

    /// Interval argument could not be interpreted
    #[error("Invalid interval argument: {0}")]
    InvalidInterval(String),

    /// Not enough profiles supplied to an averaging operation
    #[error("Insufficient input: expected at least {expected} profiles, got {actual}")]
    InsufficientInput { expected: usize, actual: usize },

    /// Construction arrays violate a structural invariant
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A discrete query selected points carrying no multiplicity
    #[error("Empty selection: no weighted points within [{start}, {end}]")]
    EmptySelection { start: f64, end: f64 },
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for size mismatch
    pub fn size_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::InvalidInput(format!(
            "Size mismatch in {context}: expected {expected}, got {actual}"
        ))
    }

    /// Create an error for a breakpoint sequence that is not strictly increasing
    pub fn not_increasing(index: usize) -> Self {
        Self::InvalidInput(format!(
            "Breakpoints must be strictly increasing (violated at index {index})"
        ))
    }

    /// Create an error for a sequence with too few entries
    pub fn too_short(minimum: usize, actual: usize, context: &str) -> Self {
        Self::InvalidInput(format!(
            "{context} needs at least {minimum} entries, got {actual}"
        ))
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::InvalidInput(format!("{context} contains NaN or infinite values"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::DomainMismatch {
            left: (0.0, 3.0),
            right: (0.0, 4.0),
        };
        assert_eq!(
            err.to_string(),
            "Domain mismatch: [0, 3] cannot be merged with [0, 4]"
        );

        let err = Error::OutOfDomain {
            start: -1.0,
            end: 2.0,
            domain: (0.0, 3.0),
        };
        assert_eq!(
            err.to_string(),
            "Interval [-1, 2] is outside the domain [0, 3]"
        );

        let err = Error::InsufficientInput {
            expected: 2,
            actual: 1,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient input: expected at least 2 profiles, got 1"
        );

        let err = Error::InvalidInterval("empty sequence".to_string());
        assert_eq!(err.to_string(), "Invalid interval argument: empty sequence");
    }

    #[test]
    fn test_error_helper_functions() {
        let err = Error::size_mismatch(3, 2, "step values");
        assert_eq!(
            err.to_string(),
            "Invalid input: Size mismatch in step values: expected 3, got 2"
        );

        let err = Error::not_increasing(4);
        assert!(err.to_string().contains("index 4"));

        let err = Error::too_short(2, 1, "breakpoints");
        assert_eq!(
            err.to_string(),
            "Invalid input: breakpoints needs at least 2 entries, got 1"
        );

        let err = Error::non_finite("multiplicities");
        assert_eq!(
            err.to_string(),
            "Invalid input: multiplicities contains NaN or infinite values"
        );
    }

    #[test]
    fn test_error_patterns() {
        fn check_profile_count(count: usize) -> Result<()> {
            if count < 2 {
                return Err(Error::InsufficientInput {
                    expected: 2,
                    actual: count,
                });
            }
            Ok(())
        }

        assert!(check_profile_count(1).is_err());
        assert!(check_profile_count(2).is_ok());
        assert_eq!(
            check_profile_count(0),
            Err(Error::InsufficientInput {
                expected: 2,
                actual: 0
            })
        );
    }
}
