//! Error types for clickq

use thiserror::Error;

/// Result type alias for clickq operations
pub type Result<T> = std::result::Result<T, ClickqError>;

/// Unified error type for all clickq operations.
///
/// Only recoverable failures are represented here. Malformed expression trees
/// (empty tuples, empty concatenations, empty AS operands) panic at the call site.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClickqError {
    /// A query could not be rendered, e.g. a nested FROM source failed
    #[error("Query error: {0}")]
    Query(String),

    /// The builder is structurally incomplete (no selects, SAMPLE without FROM, ...)
    #[error("Validation error: {0}")]
    Validation(String),

    /// A dynamic value could not be coerced to the requested type
    #[error("Conversion error: {0}")]
    Conversion(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ClickqError {
    /// Returns true if this error was raised by a build-time structural check
    pub fn is_validation(&self) -> bool {
        matches!(self, ClickqError::Validation(_))
    }

    /// Returns true if this error was raised while rendering
    pub fn is_query(&self) -> bool {
        matches!(self, ClickqError::Query(_))
    }
}

impl From<serde_json::Error> for ClickqError {
    fn from(err: serde_json::Error) -> Self {
        ClickqError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_query() {
        let err = ClickqError::Query("build FROM clause: no selects".to_string());
        assert_eq!(err.to_string(), "Query error: build FROM clause: no selects");
    }

    #[test]
    fn test_error_display_validation() {
        let err = ClickqError::Validation("no selects".to_string());
        assert_eq!(err.to_string(), "Validation error: no selects");
    }

    #[test]
    fn test_error_display_conversion() {
        let err = ClickqError::Conversion("cannot convert string value to Float64".to_string());
        assert_eq!(
            err.to_string(),
            "Conversion error: cannot convert string value to Float64"
        );
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<String>("invalid").unwrap_err();
        let err: ClickqError = json_err.into();
        assert!(matches!(err, ClickqError::Serialization(_)));
    }

    #[test]
    fn test_result_type_err() {
        let result: Result<i32> = Err(ClickqError::Validation("no from".to_string()));
        assert!(result.is_err());
    }

    #[test]
    fn test_error_predicates() {
        assert!(ClickqError::Validation("test".to_string()).is_validation());
        assert!(!ClickqError::Query("test".to_string()).is_validation());
        assert!(ClickqError::Query("test".to_string()).is_query());
        assert!(!ClickqError::Conversion("test".to_string()).is_query());
    }
}
