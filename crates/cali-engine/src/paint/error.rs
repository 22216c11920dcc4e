use thiserror::Error;

/// Failure to parse a `#RRGGBBAA` color string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorKeyError {
    /// Carries the input length in bytes.
    #[error("hex color must be exactly 9 bytes (#RRGGBBAA), got {0}")]
    InvalidLength(usize),

    #[error("hex color must start with '#'")]
    MissingHash,

    #[error("invalid hexadecimal digits in {0:?}")]
    InvalidHex(String),
}
