//! Error types for the record store boundary.

use thiserror::Error;

/// Result alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors raised by record store backends.
///
/// The HTTP layer maps every variant to a 500 response; the `Display`
/// output is the failure detail surfaced to the caller.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The record does not carry its key attribute as a string.
    #[error("record is missing the {attribute} key attribute")]
    MissingKey {
        /// Name of the required key attribute.
        attribute: &'static str,
    },
    /// A query named an index the table does not have.
    #[error("unknown index {name}")]
    UnknownIndex {
        /// Index name supplied by the caller.
        name: String,
    },
    /// The queried attribute is not the key of the named index.
    #[error("attribute {attribute} is not indexed by {index}")]
    NotIndexed {
        /// Index name supplied by the caller.
        index: String,
        /// Attribute the caller tried to query on.
        attribute: String,
    },
    /// The backing store failed.
    #[error("store operation {operation} failed: {detail}")]
    Backend {
        /// Operation identifier.
        operation: &'static str,
        /// Failure detail reported by the backend.
        detail: String,
    },
}

impl StoreError {
    /// Build a [`StoreError::Backend`] from any displayable failure.
    pub fn backend(operation: &'static str, detail: impl Into<String>) -> Self {
        Self::Backend {
            operation,
            detail: detail.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_failure_detail() {
        let missing = StoreError::MissingKey {
            attribute: "studentId",
        };
        assert_eq!(
            missing.to_string(),
            "record is missing the studentId key attribute"
        );

        let unknown = StoreError::UnknownIndex {
            name: "email-index".to_string(),
        };
        assert_eq!(unknown.to_string(), "unknown index email-index");

        let backend = StoreError::backend("put", "disk full");
        assert_eq!(backend.to_string(), "store operation put failed: disk full");
    }
}
