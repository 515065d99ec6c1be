//! Error types for gpu_handles
//!
//! This module defines the error type returned when a native resource
//! cannot be allocated or a resource is used in an invalid way.

use std::fmt;

/// Result type for gpu_handles operations
pub type Result<T> = std::result::Result<T, Error>;

/// gpu_handles errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Backend-specific error (OpenGL, mock, etc.)
    BackendError(String),

    /// Out of GPU memory
    OutOfMemory,

    /// Invalid resource (buffer without layout, unknown handle, etc.)
    InvalidResource(String),

    /// Initialization failed (context, backend, debug output)
    InitializationFailed(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::OutOfMemory => write!(f, "Out of GPU memory"),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
