//! Common error types for NVT

use thiserror::Error;

/// Common result type for NVT operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across NVT services
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Outbound HTTP transport error
    #[error("HTTP error: {0}")]
    Http(String),

    /// Feed or payload parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Invalid user input or request parameter
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}
