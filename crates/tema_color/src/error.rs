//! Error types for color decoding.

use thiserror::Error;

/// A stored or notified color string that cannot be decoded as `#rrggbb`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedColorError {
    #[error("color value is empty")]
    Empty,

    #[error("color {input:?} has {len} hex digits, expected 6")]
    Length { input: String, len: usize },

    #[error("color {input:?} contains non-hex character {found:?}")]
    Digit { input: String, found: char },
}

/// Result type for color decoding.
pub type Result<T> = std::result::Result<T, MalformedColorError>;
