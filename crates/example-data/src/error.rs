//! Error types for the example-data crate.

use thiserror::Error;

/// Errors that can occur during employee generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// Failed to generate a usable name after maximum retries.
    #[error("failed to generate a usable name after {max_attempts} attempts")]
    NameGenerationFailed {
        /// Number of attempts made before giving up.
        max_attempts: usize,
    },

    /// More employees were requested than a single seed may produce.
    #[error("requested {requested} employees; at most {max} are supported")]
    TooManyEmployees {
        /// Requested count.
        requested: usize,
        /// Upper bound.
        max: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_generation_failure_formats_correctly() {
        let err = GenerationError::NameGenerationFailed { max_attempts: 100 };
        assert_eq!(
            err.to_string(),
            "failed to generate a usable name after 100 attempts"
        );
    }

    #[test]
    fn too_many_employees_formats_correctly() {
        let err = GenerationError::TooManyEmployees {
            requested: 5000,
            max: 1000,
        };
        assert_eq!(
            err.to_string(),
            "requested 5000 employees; at most 1000 are supported"
        );
    }
}
