//! Error types for serialcmd
//!
//! Transport and setup failures only. Command-level failures (unknown
//! keyword, bad argument) are reported to the operator as an
//! [`Outcome`](crate::protocol::Outcome) and never surface here.

use thiserror::Error;

/// Result type alias using SerialError
pub type Result<T> = std::result::Result<T, SerialError>;

/// Unified error type for serialcmd operations
#[derive(Debug, Error)]
pub enum SerialError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The byte source will never produce more data (socket closed, EOF).
    #[error("Byte source disconnected")]
    Disconnected,

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // -------------------------------------------------------------------------
    // Console Errors
    // -------------------------------------------------------------------------
    #[error("Sync error: {0}")]
    Sync(String),
}
