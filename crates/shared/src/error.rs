//! Conversion error types.

use thiserror::Error;

/// Result type alias using `ConversionError`.
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Errors that can occur while normalizing or converting an amount.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// A numeric offset selector matched no known denomination.
    #[error("Unknown denomination offset: {0}")]
    UnknownOffset(i64),

    /// A named selector does not denote a convertible denomination.
    #[error("Unknown denomination: {0}")]
    UnknownDenomination(String),

    /// Amount text is not a base-10 decimal number.
    #[error("Invalid amount: {input:?} is not a base-10 decimal")]
    InvalidAmount {
        /// The rejected input text.
        input: String,
    },

    /// Value does not fit the requested target representation.
    #[error("Overflow: {0}")]
    Overflow(String),
}

impl ConversionError {
    /// Returns the stable error code for this error.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownOffset(_) => "UNKNOWN_OFFSET",
            Self::UnknownDenomination(_) => "UNKNOWN_DENOMINATION",
            Self::InvalidAmount { .. } => "INVALID_AMOUNT",
            Self::Overflow(_) => "OVERFLOW",
        }
    }

    /// Returns true if the error came from resolving the denomination
    /// rather than from the amount itself.
    #[must_use]
    pub const fn is_denomination_error(&self) -> bool {
        matches!(self, Self::UnknownOffset(_) | Self::UnknownDenomination(_))
    }
}
