//! Error types for the codec layer
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

use crate::key::KeyKind;
use crate::native::NativeCode;

/// Result type alias using CodecError
pub type Result<T> = std::result::Result<T, CodecError>;

/// Unified error type for codec operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    // -------------------------------------------------------------------------
    // Storage Engine Errors
    // -------------------------------------------------------------------------
    /// A native engine call returned a non-success code.
    ///
    /// Rendered as `"{context}: {code} - {description}"`.
    #[error("{context}: {code} - {description}")]
    NativeOperationFailed {
        context: String,
        code: NativeCode,
        description: String,
    },

    // -------------------------------------------------------------------------
    // Key Encoding Errors
    // -------------------------------------------------------------------------
    /// The source bytes do not have the fixed width of the requested key kind.
    #[error("Malformed {kind} key encoding: expected {expected} bytes, got {actual}")]
    MalformedKeyEncoding {
        kind: KeyKind,
        expected: usize,
        actual: usize,
    },
}

impl CodecError {
    /// Native engine code carried by this error, if any
    pub fn native_code(&self) -> Option<NativeCode> {
        match self {
            CodecError::NativeOperationFailed { code, .. } => Some(*code),
            CodecError::MalformedKeyEncoding { .. } => None,
        }
    }
}
