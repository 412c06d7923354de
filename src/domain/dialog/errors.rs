//! Failures a dialog turn can produce.
//!
//! Neither kind ends the session: validation failures re-ask the same
//! question, structural failures answer with a generic message and leave the
//! session exactly as it was.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// The reply did not have the shape the current question expects.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationFailure {
    #[error("Expected a positive number of children, got '{input}'")]
    InvalidCount { input: String },

    #[error("Expected 'name, birthdate', got '{input}'")]
    MalformedChildInfo { input: String },

    #[error("Birthdate '{input}' is not a valid YYYY-MM-DD date")]
    InvalidBirthdate { input: String },

    #[error("No child at position {index} to attach this answer to")]
    NoActiveChild { index: usize },
}

impl ValidationFailure {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidCount { .. } => ErrorCode::InvalidCount,
            Self::MalformedChildInfo { .. } => ErrorCode::MalformedChildInfo,
            Self::InvalidBirthdate { .. } => ErrorCode::InvalidBirthdate,
            Self::NoActiveChild { .. } => ErrorCode::NoActiveChild,
        }
    }
}

/// The turn could not be processed at all.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StructuralFailure {
    #[error("Unknown conversation state: {0}")]
    UnknownState(String),

    #[error("Child index {index} is out of range for {count} children")]
    ChildIndexOutOfRange { index: usize, count: usize },

    #[error("Activity catalog unavailable: {0}")]
    CatalogUnavailable(String),
}

impl StructuralFailure {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::UnknownState(_) => ErrorCode::UnknownState,
            Self::ChildIndexOutOfRange { .. } => ErrorCode::ChildIndexOutOfRange,
            Self::CatalogUnavailable(_) => ErrorCode::CatalogUnavailable,
        }
    }
}

/// Either failure kind, as reported alongside a turn outcome.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TurnFailure {
    #[error(transparent)]
    Validation(#[from] ValidationFailure),

    #[error(transparent)]
    Structural(#[from] StructuralFailure),
}

impl TurnFailure {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Validation(v) => v.code(),
            Self::Structural(s) => s.code(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<TurnFailure> for DomainError {
    fn from(failure: TurnFailure) -> Self {
        DomainError::new(failure.code(), failure.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_failures_map_to_codes() {
        assert_eq!(
            ValidationFailure::InvalidCount { input: "two".into() }.code(),
            ErrorCode::InvalidCount
        );
        assert_eq!(
            ValidationFailure::NoActiveChild { index: 0 }.code(),
            ErrorCode::NoActiveChild
        );
    }

    #[test]
    fn malformed_child_info_displays_input() {
        let err = ValidationFailure::MalformedChildInfo { input: "Maya".into() };
        assert_eq!(err.to_string(), "Expected 'name, birthdate', got 'Maya'");
    }

    #[test]
    fn turn_failure_wraps_both_kinds() {
        let v: TurnFailure = ValidationFailure::InvalidBirthdate { input: "soon".into() }.into();
        let s: TurnFailure = StructuralFailure::UnknownState("bogus".into()).into();
        assert!(v.is_validation());
        assert!(!s.is_validation());
        assert_eq!(s.code(), ErrorCode::UnknownState);
    }

    #[test]
    fn converts_to_domain_error() {
        let failure: TurnFailure = StructuralFailure::CatalogUnavailable("missing file".into()).into();
        let err: DomainError = failure.into();
        assert_eq!(err.code, ErrorCode::CatalogUnavailable);
        assert!(err.message.contains("missing file"));
    }
}
