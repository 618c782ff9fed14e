//! Error types for the cycle domain.

use std::fmt;
use thiserror::Error;

/// Errors raised by cycle construction and mutation.
///
/// Every variant is returned synchronously from the call that violated the
/// contract. State is never modified when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CycleError {
    #[error("A cycle needs at least one position")]
    EmptySequence,

    #[error("Index {index} is out of range for a cycle of {count} positions")]
    OutOfRange { index: usize, count: usize },

    #[error("Key at position {position} must be a string, got {found}")]
    InvalidKeyType { position: usize, found: String },

    #[error("Name '{name}' does not exist in this cycle")]
    UnknownName { name: String },

    #[error("Key '{key}' appears more than once")]
    DuplicateKey { key: String },
}

impl CycleError {
    /// Creates an out of range error.
    pub fn out_of_range(index: usize, count: usize) -> Self {
        CycleError::OutOfRange { index, count }
    }

    /// Creates an invalid key type error.
    pub fn invalid_key_type(position: usize, found: impl Into<String>) -> Self {
        CycleError::InvalidKeyType {
            position,
            found: found.into(),
        }
    }

    /// Creates an unknown name error.
    pub fn unknown_name(name: impl Into<String>) -> Self {
        CycleError::UnknownName { name: name.into() }
    }

    /// Creates a duplicate key error.
    pub fn duplicate_key(key: impl Into<String>) -> Self {
        CycleError::DuplicateKey { key: key.into() }
    }

    /// Returns the stable code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            CycleError::EmptySequence => ErrorCode::EmptySequence,
            CycleError::OutOfRange { .. } => ErrorCode::OutOfRange,
            CycleError::InvalidKeyType { .. } => ErrorCode::InvalidKeyType,
            CycleError::UnknownName { .. } => ErrorCode::UnknownName,
            CycleError::DuplicateKey { .. } => ErrorCode::DuplicateKey,
        }
    }
}

/// Error codes, stable across message wording changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Construction errors
    EmptySequence,
    InvalidKeyType,
    DuplicateKey,

    // Mutation errors
    OutOfRange,
    UnknownName,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::EmptySequence => "EMPTY_SEQUENCE",
            ErrorCode::InvalidKeyType => "INVALID_KEY_TYPE",
            ErrorCode::DuplicateKey => "DUPLICATE_KEY",
            ErrorCode::OutOfRange => "OUT_OF_RANGE",
            ErrorCode::UnknownName => "UNKNOWN_NAME",
        };
        write!(f, "{}", s)
    }
}
