//! Common error types used throughout reelvault.
//!
//! This module provides a unified error type for the failure cases the
//! pipeline can hit: missing inputs and filesystem errors.

/// Common error type for reelvault.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The requested path was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// An I/O operation failed.
    ///
    /// Covers hardlink creation across volumes, permission failures, and
    /// any other filesystem error. These terminate the run.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a new NotFound error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        Self::NotFound(msg.into())
    }
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::not_found("source directory");
        assert_eq!(err.to_string(), "Not found: source directory");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = Error::from(io_err);
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_result_type() {
        fn ok_fn() -> Result<i32> {
            Ok(42)
        }
        assert_eq!(ok_fn().unwrap(), 42);

        fn error_fn() -> Result<i32> {
            Err(Error::not_found("x"))
        }
        assert!(error_fn().is_err());
    }
}
