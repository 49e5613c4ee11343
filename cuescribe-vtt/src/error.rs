//! Error types for timestamp parsing and formatting.

use thiserror::Error;

/// Cue timing error variants.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum Error {
    /// Timestamp string does not match `HH:MM:SS.mmm`
    #[error("malformed timestamp: {0:?}")]
    MalformedTimestamp(String),

    /// Seconds value cannot be rendered with a two-digit hour field
    #[error("timestamp out of range: {secs}s (supported range is 0s to {max}s)")]
    OutOfRange { secs: f64, max: f64 },
}

/// Result type alias for cuescribe-vtt operations.
pub type Result<T> = std::result::Result<T, Error>;
