//! # Error Types
//!
//! This module defines error types used throughout the ticker library.
//!
//! Every producer returns either a complete strip or one of these errors.
//! Nothing here is retryable: the same input always fails the same way.

use thiserror::Error;

/// Main error type for ticker operations
#[derive(Debug, Error)]
pub enum TickerError {
    /// Color string is not of the form `#RRGGBB`, or a packed value exceeds 24 bits
    #[error("Invalid color format: {0}")]
    InvalidColorFormat(String),

    /// Negative or disallowed size (e.g. image height other than 8)
    #[error("Invalid dimension: {0}")]
    InvalidDimension(String),

    /// Strip JSON is malformed or fails validation
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// Image bytes could not be decoded
    #[error("Decode error: {0}")]
    DecodeError(String),

    /// Join was given no strips
    #[error("Empty input: {0}")]
    EmptyInput(String),

    /// Pixel access outside the strip extents
    #[error("Pixel ({x}, {y}) out of bounds for {columns}x{rows} strip")]
    OutOfBounds {
        x: usize,
        y: usize,
        columns: usize,
        rows: usize,
    },

    /// Strips with different row counts cannot be joined
    #[error("Row count mismatch: expected {expected} rows, strip {index} has {found}")]
    RowCountMismatch {
        expected: usize,
        found: usize,
        index: usize,
    },

    /// Built-in glyph data could not be loaded
    #[error("Font error: {0}")]
    Font(String),

    /// Preview image encoding error
    #[error("Image error: {0}")]
    Image(String),

    /// Server-level errors (bind, serve)
    #[error("Transport error: {0}")]
    Transport(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, TickerError>;
