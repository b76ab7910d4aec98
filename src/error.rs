// src/error.rs

//! Error type for hex color string parsing.

/// Reasons a color string could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorParseError {
    #[error("empty color string")]
    Empty,

    #[error("invalid hex length {0}, expected 3, 4, 6 or 8 digits")]
    InvalidLength(usize),

    #[error("invalid hex digit {0:?}")]
    InvalidHexDigit(char),

    #[error("unknown color name {0:?}")]
    UnknownName(String),
}
