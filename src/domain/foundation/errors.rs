//! Error types shared across the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors (recoverable, re-prompt)
    InvalidCount,
    MalformedChildInfo,
    InvalidBirthdate,
    NoActiveChild,

    // Structural errors (generic response, session preserved)
    UnknownState,
    ChildIndexOutOfRange,
    CatalogUnavailable,

    // State errors
    InvalidStateTransition,

    // Access errors
    AccountRequired,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::InvalidCount => "INVALID_COUNT",
            ErrorCode::MalformedChildInfo => "MALFORMED_CHILD_INFO",
            ErrorCode::InvalidBirthdate => "INVALID_BIRTHDATE",
            ErrorCode::NoActiveChild => "NO_ACTIVE_CHILD",
            ErrorCode::UnknownState => "UNKNOWN_STATE",
            ErrorCode::ChildIndexOutOfRange => "CHILD_INDEX_OUT_OF_RANGE",
            ErrorCode::CatalogUnavailable => "CATALOG_UNAVAILABLE",
            ErrorCode::InvalidStateTransition => "INVALID_STATE_TRANSITION",
            ErrorCode::AccountRequired => "ACCOUNT_REQUIRED",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Creates an invalid state transition error.
    pub fn invalid_transition(from: impl fmt::Debug, to: impl fmt::Debug) -> Self {
        Self::new(
            ErrorCode::InvalidStateTransition,
            format!("Cannot transition from {:?} to {:?}", from, to),
        )
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}
