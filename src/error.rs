//! Crate-wide error type.

use thiserror::Error;

/// Errors reported by the solvers and the point-list loader.
#[derive(Debug, Error)]
pub enum SolverError {
    /// Every solver needs at least one place to build a tour.
    #[error("place list is empty")]
    EmptyPlaces,

    /// The greedy solver was asked to start from a nonexistent place.
    #[error("start index {index} is out of bounds for {count} places")]
    StartOutOfBounds {
        /// Requested starting index.
        index: usize,
        /// Number of places supplied.
        count: usize,
    },

    /// The exact solver received more places than its ceiling allows.
    #[error("{count} places exceed the exact-search ceiling of {max}")]
    TooManyPlaces {
        /// Number of places supplied.
        count: usize,
        /// Caller-supplied ceiling.
        max: usize,
    },

    /// A solver parameter failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A point-list record could not be parsed.
    #[error("invalid data: {0}")]
    InvalidData(String),

    /// File access failed while loading a point list.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl SolverError {
    /// Builds an [`InvalidConfig`](Self::InvalidConfig) error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }

    /// Builds an [`InvalidData`](Self::InvalidData) error.
    pub fn invalid_data(message: impl Into<String>) -> Self {
        Self::InvalidData(message.into())
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SolverError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(SolverError::EmptyPlaces.to_string(), "place list is empty");
        assert_eq!(
            SolverError::StartOutOfBounds { index: 5, count: 3 }.to_string(),
            "start index 5 is out of bounds for 3 places"
        );
        assert_eq!(
            SolverError::TooManyPlaces { count: 20, max: 10 }.to_string(),
            "20 places exceed the exact-search ceiling of 10"
        );
    }

    #[test]
    fn test_constructors() {
        let err = SolverError::invalid_config("population_size must be at least 1");
        assert!(matches!(err, SolverError::InvalidConfig(_)));
        let err = SolverError::invalid_data("line 3: expected 4 fields");
        assert!(matches!(err, SolverError::InvalidData(_)));
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: SolverError = io.into();
        assert!(matches!(err, SolverError::Io(_)));
    }
}
