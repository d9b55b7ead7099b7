// Classified error taxonomy surfaced by the event service
//
// Three kinds only: Validation (malformed/missing client input), Business
// (well-formed request unsatisfiable given current state), Internal
// (anything else). The HTTP boundary inspects only the kind and passes the
// message through verbatim.

use thiserror::Error;

/// Result type alias for service operations
pub type Result<T> = std::result::Result<T, EventError>;

/// Errors surfaced to callers of the event service
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventError {
    /// Client supplied malformed or missing input
    #[error("validation error: {field} - {message}")]
    Validation { field: String, message: String },

    /// Well-formed request that cannot be satisfied given current state
    #[error("business error: {operation} - {message}")]
    Business { operation: String, message: String },

    /// Unexpected failure not otherwise classified
    #[error("internal error: {operation} - {message}")]
    Internal { operation: String, message: String },
}

impl EventError {
    /// Create a validation error for a named field
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        EventError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a business error for a named operation
    pub fn business(operation: impl Into<String>, message: impl Into<String>) -> Self {
        EventError::Business {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// Create an internal error for a named operation
    pub fn internal(operation: impl Into<String>, message: impl Into<String>) -> Self {
        EventError::Internal {
            operation: operation.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_match_contract() {
        let err = EventError::validation("text", "event text cannot be empty");
        assert_eq!(
            err.to_string(),
            "validation error: text - event text cannot be empty"
        );

        let err = EventError::business("update_event", "event not found");
        assert_eq!(
            err.to_string(),
            "business error: update_event - event not found"
        );

        let err = EventError::internal("create_event", "store failure");
        assert_eq!(
            err.to_string(),
            "internal error: create_event - store failure"
        );
    }
}
