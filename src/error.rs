//! Error types for Propagar operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for Propagar operations.
///
/// Provides detailed context about failures including dimension mismatches,
/// invalid hyperparameters, and degenerate training inputs.
///
/// # Examples
///
/// ```
/// use propagar::error::PropagarError;
///
/// let err = PropagarError::DimensionMismatch {
///     expected: "150x4".to_string(),
///     actual: "150x3".to_string(),
/// };
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Debug)]
pub enum PropagarError {
    /// Matrix/vector dimensions don't match for the operation.
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// Invalid hyperparameter value provided.
    InvalidHyperparameter {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// Training input violates a precondition (non-finite features,
    /// no labeled samples, too few classes, ...).
    ValidationError {
        /// Validation failure message
        message: String,
    },

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for PropagarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropagarError::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "Matrix dimension mismatch: expected {expected}, got {actual}"
                )
            }
            PropagarError::InvalidHyperparameter {
                param,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid hyperparameter: {param} = {value}, expected {constraint}"
                )
            }
            PropagarError::ValidationError { message } => {
                write!(f, "Validation failed: {message}")
            }
            PropagarError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for PropagarError {}

impl From<&str> for PropagarError {
    fn from(msg: &str) -> Self {
        PropagarError::Other(msg.to_string())
    }
}

impl From<String> for PropagarError {
    fn from(msg: String) -> Self {
        PropagarError::Other(msg)
    }
}

impl PropagarError {
    /// Create a dimension mismatch error with descriptive context
    #[must_use]
    pub fn dimension_mismatch(context: &str, expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            expected: format!("{context}={expected}"),
            actual: format!("{actual}"),
        }
    }

    /// Create an invalid hyperparameter error
    #[must_use]
    pub fn invalid_hyperparameter(param: &str, value: impl fmt::Display, constraint: &str) -> Self {
        Self::InvalidHyperparameter {
            param: param.to_string(),
            value: value.to_string(),
            constraint: constraint.to_string(),
        }
    }

    /// Create an empty input error
    #[must_use]
    pub fn empty_input(context: &str) -> Self {
        Self::ValidationError {
            message: format!("empty input: {context}"),
        }
    }
}

#[allow(clippy::cmp_owned)]
impl PartialEq<&str> for PropagarError {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}

#[allow(clippy::cmp_owned)]
impl PartialEq<PropagarError> for &str {
    fn eq(&self, other: &PropagarError) -> bool {
        *self == other.to_string()
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, PropagarError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_mismatch_display() {
        let err = PropagarError::DimensionMismatch {
            expected: "150x4".to_string(),
            actual: "150x3".to_string(),
        };
        assert!(err.to_string().contains("dimension mismatch"));
        assert!(err.to_string().contains("150x4"));
        assert!(err.to_string().contains("150x3"));
    }

    #[test]
    fn test_invalid_hyperparameter_display() {
        let err = PropagarError::InvalidHyperparameter {
            param: "alpha".to_string(),
            value: "1.5".to_string(),
            constraint: "in (0, 1)".to_string(),
        };
        assert!(err.to_string().contains("Invalid hyperparameter"));
        assert!(err.to_string().contains("alpha"));
        assert!(err.to_string().contains("1.5"));
        assert!(err.to_string().contains("in (0, 1)"));
    }

    #[test]
    fn test_validation_error_display() {
        let err = PropagarError::ValidationError {
            message: "no labeled samples".to_string(),
        };
        assert!(err.to_string().contains("Validation failed"));
        assert!(err.to_string().contains("no labeled samples"));
    }

    #[test]
    fn test_from_str() {
        let err: PropagarError = "test error".into();
        assert!(matches!(err, PropagarError::Other(_)));
        assert_eq!(err.to_string(), "test error");
    }

    #[test]
    fn test_from_string() {
        let err: PropagarError = "test error".to_string().into();
        assert!(matches!(err, PropagarError::Other(_)));
        assert_eq!(err.to_string(), "test error");
    }

    #[test]
    fn test_dimension_mismatch_helper() {
        let err = PropagarError::dimension_mismatch("rows", 150, 120);
        let msg = err.to_string();
        assert!(msg.contains("rows=150"));
        assert!(msg.contains("120"));
    }

    #[test]
    fn test_invalid_hyperparameter_helper() {
        let err = PropagarError::invalid_hyperparameter("gamma", -0.5, "> 0");
        let msg = err.to_string();
        assert!(msg.contains("gamma"));
        assert!(msg.contains("-0.5"));
        assert!(msg.contains("> 0"));
    }

    #[test]
    fn test_empty_input_helper() {
        let err = PropagarError::empty_input("training data");
        let msg = err.to_string();
        assert!(msg.contains("empty input"));
        assert!(msg.contains("training data"));
    }

    #[test]
    fn test_error_eq_str() {
        let err = PropagarError::Other("test error".to_string());
        assert!(err == "test error");
        assert!("test error" == err);
    }

    #[test]
    fn test_error_debug_impl() {
        let err = PropagarError::Other("test".to_string());
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("Other"));
    }
}
