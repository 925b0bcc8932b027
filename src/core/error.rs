//! Error types for cipher validation and scanning

use thiserror::Error;

/// Raised synchronously when a definition or configuration is malformed.
///
/// Never recovered internally; always surfaced before any work begins.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("cipher body is empty")]
    EmptyCipher,

    #[error("value separator and pair separator must differ (both are '{0}')")]
    SeparatorCollision(char),

    #[error("malformed cipher body: {0}")]
    MalformedCipher(String),

    #[error("character '{0}' appears more than once in cipher")]
    DuplicateCharacter(char),

    #[error("no gematria methods supplied")]
    NoMethods,

    #[error("no methods selected for value matching")]
    NoSelectedMethods,

    #[error("unknown gematria method: {0}")]
    UnknownMethod(String),

    #[error("duplicate gematria method id: {0}")]
    DuplicateMethodId(i64),

    #[error("duplicate gematria method name: {0}")]
    DuplicateMethodName(String),

    #[error("separator list contains an empty separator")]
    EmptySeparator,
}

/// Errors returned by [`crate::scan::Scanner::scan`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("minimum words per phrase ({min}) exceeds maximum words per phrase ({max})")]
    WordBounds { min: usize, max: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            ValidationError::SeparatorCollision('=').to_string(),
            "value separator and pair separator must differ (both are '=')"
        );
        let err = ScanError::WordBounds { min: 3, max: 1 };
        assert!(err.to_string().contains("(3)"));
    }

    #[test]
    fn test_validation_converts_into_scan_error() {
        let err: ScanError = ValidationError::NoMethods.into();
        assert_eq!(err.to_string(), "no gematria methods supplied");
    }
}
