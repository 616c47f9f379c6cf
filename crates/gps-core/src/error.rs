//! Error types for GPS cost terms

use thiserror::Error;

/// Main error type for GPS cost terms
#[derive(Error, Debug)]
pub enum GpsError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Dimension mismatch for {what}: expected {expected}, found {found}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("Shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),

    #[error("Invalid sample: {0}")]
    Sample(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GpsError {
    /// Shorthand for a [`GpsError::DimensionMismatch`]
    pub fn dimension(what: &'static str, expected: usize, found: usize) -> Self {
        Self::DimensionMismatch {
            what,
            expected,
            found,
        }
    }
}

impl From<config::ConfigError> for GpsError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type alias for GPS operations
pub type Result<T> = std::result::Result<T, GpsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_message() {
        let err = GpsError::dimension("wu", 2, 3);
        assert_eq!(
            err.to_string(),
            "Dimension mismatch for wu: expected 2, found 3"
        );
    }

    #[test]
    fn test_config_error_conversion() {
        let err: GpsError = config::ConfigError::Message("missing field `wu`".to_string()).into();
        assert!(matches!(err, GpsError::Config(_)));
        assert!(err.to_string().contains("wu"));
    }
}
