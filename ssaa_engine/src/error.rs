//! Error types for the SSAA engine
//!
//! This module defines the error type used throughout the engine:
//! GPU resource creation, initialization, invalid selections and
//! calls made before `init()`.

use std::fmt;

/// Result type for SSAA engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// SSAA engine errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Backend-specific error (device call failed, lock poisoned, etc.)
    BackendError(String),

    /// Out of GPU memory
    OutOfMemory,

    /// Invalid or missing resource (texture, view, buffer, shader, etc.)
    InvalidResource(String),

    /// Initialization failed (shader load, state object creation, double init)
    InitializationFailed(String),

    /// Out-of-range selection (AA mode, render target format, scene index)
    InvalidArgument(String),

    /// Operation attempted before `init()` or after `deinit()`
    NotInitialized,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::OutOfMemory => write!(f, "Out of GPU memory"),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
            Error::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            Error::NotInitialized => write!(f, "Not initialized"),
        }
    }
}

impl std::error::Error for Error {}

/// Log an ERROR message and build an `Error::BackendError` from it
///
/// # Example
///
/// ```ignore
/// let view = views.first()
///     .ok_or_else(|| ssaa_err!("ssaa::TargetAllocator", "No view for {}", name))?;
/// ```
#[macro_export]
macro_rules! ssaa_err {
    ($source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::ssaa_error!($source, "{}", message);
        $crate::ssaa::Error::BackendError(message)
    }};
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
