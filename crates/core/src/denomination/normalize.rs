//! Input normalization.
//!
//! Callers hand amounts and denominations over in several representations.
//! Each is a variant of a closed enum, and normalization turns the pair into
//! one canonical `(Amount, Denomination)`.

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use rust_decimal::Decimal;
use weiunits_shared::{Amount, ConversionError, ConversionResult, ParseMode};

use super::registry::Denomination;

/// Supported amount representations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountInput {
    /// Exact integer.
    Integer(BigInt),
    /// Arbitrary-precision decimal.
    Decimal(BigDecimal),
    /// Base-10 decimal text, optionally with a fractional part.
    Text(String),
}

impl AmountInput {
    /// Coerces the input into an [`Amount`].
    ///
    /// Only [`AmountInput::Text`] can fail, and only in [`ParseMode::Strict`].
    pub fn normalize(self, mode: ParseMode) -> ConversionResult<Amount> {
        match self {
            Self::Integer(value) => Ok(Amount::from_integer(value)),
            Self::Decimal(value) => Ok(Amount::new(value)),
            Self::Text(text) => match mode {
                ParseMode::Strict => Amount::parse(&text),
                ParseMode::Lenient => Ok(Amount::parse_lossy(&text)),
            },
        }
    }
}

impl From<BigInt> for AmountInput {
    fn from(value: BigInt) -> Self {
        Self::Integer(value)
    }
}

impl From<BigDecimal> for AmountInput {
    fn from(value: BigDecimal) -> Self {
        Self::Decimal(value)
    }
}

impl From<Amount> for AmountInput {
    fn from(value: Amount) -> Self {
        Self::Decimal(value.into_inner())
    }
}

impl From<Decimal> for AmountInput {
    fn from(value: Decimal) -> Self {
        Self::Decimal(Amount::from(value).into_inner())
    }
}

impl From<&str> for AmountInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AmountInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

macro_rules! impl_amount_input_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for AmountInput {
                fn from(value: $ty) -> Self {
                    Self::Integer(BigInt::from(value))
                }
            }
        )*
    };
}

impl_amount_input_from_int!(u64, i64, u128, i128);

/// Supported ways of naming the source denomination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DenominationSelector {
    /// A registry member, passed through as-is.
    Named(Denomination),
    /// A decimal offset above wei, resolved through the registry.
    Offset(i64),
}

impl DenominationSelector {
    /// Resolves the selector to a convertible denomination.
    pub fn resolve(self) -> ConversionResult<Denomination> {
        match self {
            Self::Named(Denomination::Unknown) => Err(ConversionError::UnknownDenomination(
                Denomination::Unknown.to_string(),
            )),
            Self::Named(denomination) => Ok(denomination),
            Self::Offset(offset) => {
                Denomination::from_offset(offset).ok_or(ConversionError::UnknownOffset(offset))
            }
        }
    }
}

impl From<Denomination> for DenominationSelector {
    fn from(value: Denomination) -> Self {
        Self::Named(value)
    }
}

impl From<u8> for DenominationSelector {
    fn from(value: u8) -> Self {
        Self::Offset(i64::from(value))
    }
}

impl From<i32> for DenominationSelector {
    fn from(value: i32) -> Self {
        Self::Offset(i64::from(value))
    }
}

impl From<i64> for DenominationSelector {
    fn from(value: i64) -> Self {
        Self::Offset(value)
    }
}

/// Normalizes an amount and a denomination selector into a canonical pair.
///
/// The denomination is resolved first, so an unknown selector is reported
/// even when the amount text is also invalid.
pub fn normalize(
    amount: AmountInput,
    selector: DenominationSelector,
    mode: ParseMode,
) -> ConversionResult<(Amount, Denomination)> {
    let denomination = selector.resolve()?;
    let amount = amount.normalize(mode)?;
    Ok((amount, denomination))
}
