//! Error taxonomy shared by every PQA crate
//!
//! All failures are surfaced to the caller immediately and terminate the
//! current operation; nothing here is retried or recovered internally.

use thiserror::Error;

/// Errors produced by PQA components
#[derive(Debug, Error)]
pub enum Error {
    /// A required configuration value is missing or invalid
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A referenced file does not exist
    #[error("not found: {0}")]
    NotFound(String),

    /// The vector store or a remote provider is unreachable
    #[error("connection error: {0}")]
    Connection(String),

    /// A remote provider returned a non-success status or a malformed body
    #[error("provider error: {0}")]
    Provider(String),

    /// A vector store statement failed
    #[error("vector store error: {0}")]
    Store(String),

    /// The source document could not be read as a PDF
    #[error("pdf error: {0}")]
    Pdf(String),

    /// Underlying I/O failure
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the workspace
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_taxonomy_prefix() {
        let err = Error::Configuration("DATABASE_URL ausente".to_string());
        assert_eq!(
            err.to_string(),
            "configuration error: DATABASE_URL ausente"
        );

        let err = Error::NotFound("./document.pdf".to_string());
        assert_eq!(err.to_string(), "not found: ./document.pdf");
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
