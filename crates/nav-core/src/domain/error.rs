//! Domain Errors
//!
//! Every failure in the core maps to one of these kinds. None of them is
//! fatal: the UI turns each into a notice and leaves state untouched.

use thiserror::Error;

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// The browser lacks the storage capability
    #[error("local storage is not supported in this browser")]
    StorageUnsupported,
    /// A storage call failed
    #[error("storage error: {0}")]
    Storage(String),
    /// Import text is not valid JSON
    #[error("malformed import file: {0}")]
    MalformedImport(String),
    /// Import JSON parsed, but the top level is not an array
    #[error("import file must contain a JSON array, found {0}")]
    NotAnArray(&'static str),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl DomainError {
    /// Whether the error came from an import file being rejected as a whole
    pub fn is_import_rejection(&self) -> bool {
        matches!(self, DomainError::MalformedImport(_) | DomainError::NotAnArray(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            DomainError::NotAnArray("object").to_string(),
            "import file must contain a JSON array, found object"
        );
        assert_eq!(
            DomainError::Storage("quota".into()).to_string(),
            "storage error: quota"
        );
    }

    #[test]
    fn test_import_rejection_kinds() {
        assert!(DomainError::NotAnArray("number").is_import_rejection());
        assert!(DomainError::MalformedImport("eof".into()).is_import_rejection());
        assert!(!DomainError::StorageUnsupported.is_import_rejection());
    }
}
