//! Base error type shared across the workspace.

use thiserror::Error;

/// Convenience alias for foundation results.
pub type Result<T> = std::result::Result<T, FoundationError>;

/// The base error type for foundation operations.
///
/// Higher-level crates define their own error enums (recording, compositing,
/// frame pipeline) and convert into or wrap this type where a shared
/// representation is needed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[must_use = "errors should be handled or propagated"]
pub enum FoundationError {
    /// A stale or never-valid id was dereferenced through an arena.
    #[error("invalid id {id}: {context}")]
    InvalidId {
        /// The offending raw id value.
        id: usize,
        /// What the id was expected to resolve to.
        context: String,
    },

    /// A structural invariant of a tree or arena was violated.
    #[error("invariant violation: {message}")]
    InvariantViolation {
        /// Description of the violated invariant.
        message: String,
    },
}

impl FoundationError {
    /// Creates a new invalid-id error.
    pub fn invalid_id(id: usize, context: impl Into<String>) -> Self {
        Self::InvalidId {
            id,
            context: context.into(),
        }
    }

    /// Creates a new invariant-violation error.
    pub fn invariant(message: impl Into<String>) -> Self {
        Self::InvariantViolation {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_id_display() {
        let err = FoundationError::invalid_id(3, "layer slot");
        assert_eq!(err.to_string(), "invalid id 3: layer slot");
    }

    #[test]
    fn test_invariant_display() {
        let err = FoundationError::invariant("root layer has no content");
        assert!(err.to_string().contains("root layer has no content"));
    }
}
