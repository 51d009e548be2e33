//! Error types for the framebuffer bridge library.

use std::io;
use thiserror::Error;

/// Result type for bridge operations.
pub type Result<T> = std::result::Result<T, BridgeError>;

/// Errors that can occur in framebuffer-bridge operations.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The display or capture subsystem could not be opened at startup.
    #[error("Display unavailable: {0}")]
    DisplayUnavailable(String),

    /// A snapshot capture failed or produced an inconsistent buffer.
    #[error("Capture error: {0}")]
    Capture(String),
}
