//! Error types for docshelf.
//!
//! This module defines the centralized error type [`DocShelfError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. Errors only
//! arise at the edges (seed files, theme files, configuration, command parsing);
//! library operations on documents never fail.

use thiserror::Error;

/// The main error type for docshelf operations.
///
/// # Examples
///
/// ```
/// use docshelf::DocShelfError;
///
/// fn validate_width(width: usize) -> Result<(), DocShelfError> {
///     if width == 0 {
///         return Err(DocShelfError::Config("width must be positive".to_string()));
///     }
///     Ok(())
/// }
///
/// assert!(validate_width(0).is_err());
/// ```
#[derive(Debug, Error)]
pub enum DocShelfError {
    /// Filesystem or I/O operation failed.
    ///
    /// Automatically converts from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Seed data could not be parsed or violates an invariant.
    ///
    /// Occurs when a seed JSON document is malformed or two documents share
    /// the same `docId`.
    #[error("Seed data error: {0}")]
    Seed(String),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or unreadable.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A text command could not be parsed into an event.
    #[error("Command error: {0}")]
    Command(String),
}

/// A specialized `Result` type for docshelf operations.
pub type Result<T> = std::result::Result<T, DocShelfError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_convert_and_display() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: DocShelfError = io.into();
        assert!(matches!(err, DocShelfError::Io(_)));
        assert_eq!(err.to_string(), "IO error: missing");
    }

    #[test]
    fn command_error_display() {
        let err = DocShelfError::Command("unknown command `fly`".to_string());
        assert_eq!(err.to_string(), "Command error: unknown command `fly`");
    }
}
