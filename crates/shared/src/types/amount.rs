//! Arbitrary-precision amount type.
//!
//! CRITICAL: Never use floating-point for amounts.
//! This type wraps `bigdecimal::BigDecimal`, so scaling by powers of ten is a
//! pure exponent shift and never loses digits.

use std::fmt;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive, Zero};
use rust_decimal::Decimal;

use crate::error::{ConversionError, ConversionResult};

/// Largest scale `rust_decimal::Decimal` can represent.
const RUST_DECIMAL_MAX_SCALE: i64 = 28;

/// A quantity in some denomination.
///
/// The denomination is not part of the value; callers supply it alongside
/// the amount for every conversion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Amount(BigDecimal);

impl Amount {
    /// Creates an amount from an arbitrary-precision decimal.
    #[must_use]
    pub const fn new(value: BigDecimal) -> Self {
        Self(value)
    }

    /// Creates a zero amount.
    #[must_use]
    pub fn zero() -> Self {
        Self(BigDecimal::zero())
    }

    /// Creates an amount from an exact integer (zero fractional part).
    #[must_use]
    pub fn from_integer(value: BigInt) -> Self {
        Self(BigDecimal::new(value, 0))
    }

    /// Parses base-10 decimal text.
    ///
    /// Accepts an optional sign, ASCII digits and at most one `.` separator.
    /// Exponents, whitespace and digit grouping are rejected.
    pub fn parse(text: &str) -> ConversionResult<Self> {
        let invalid = || ConversionError::InvalidAmount {
            input: text.to_string(),
        };

        if !is_plain_decimal(text) {
            return Err(invalid());
        }

        BigDecimal::from_str(text).map(Self).map_err(|_| invalid())
    }

    /// Parses base-10 decimal text, falling back to zero when the text is
    /// not a valid decimal.
    #[must_use]
    pub fn parse_lossy(text: &str) -> Self {
        Self::parse(text).unwrap_or_else(|err| {
            tracing::warn!(input = %text, error = %err, "Unparseable amount treated as zero");
            Self::zero()
        })
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if the amount is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    /// Multiplies the amount by `10^exp` exactly.
    ///
    /// A negative `exp` divides by `10^-exp`, still exactly. Fails with
    /// [`ConversionError::Overflow`] when the shifted exponent leaves `i64`.
    pub fn scale_by_pow10(&self, exp: i64) -> ConversionResult<Self> {
        let (digits, scale) = self.0.as_bigint_and_exponent();
        let scale = scale.checked_sub(exp).ok_or_else(|| {
            ConversionError::Overflow(format!("scaling exponent {scale} by 10^{exp}"))
        })?;
        Ok(Self(BigDecimal::new(digits, scale)))
    }

    /// Discards the fractional part, truncating toward zero.
    #[must_use]
    pub fn truncate(&self) -> BigInt {
        // No integer digits left: skip building 10^scale.
        let (_, scale) = self.0.as_bigint_and_exponent();
        if u64::try_from(scale).is_ok_and(|scale| scale >= self.0.digits()) {
            return BigInt::zero();
        }
        let (digits, _) = self.0.with_scale(0).as_bigint_and_exponent();
        digits
    }

    /// Returns the value with trailing fractional zeros removed.
    #[must_use]
    pub fn normalized(&self) -> Self {
        Self(self.0.normalized())
    }

    /// Narrows the amount into a `rust_decimal::Decimal`.
    ///
    /// Fails when the value needs more than 96 bits of mantissa or more than
    /// 28 fractional digits.
    pub fn to_rust_decimal(&self) -> ConversionResult<Decimal> {
        let overflow = || {
            ConversionError::Overflow(format!("{} does not fit in a 96-bit decimal", self.0))
        };

        let (mut digits, mut scale) = self.0.normalized().as_bigint_and_exponent();
        if scale < 0 {
            if -scale > RUST_DECIMAL_MAX_SCALE {
                return Err(overflow());
            }
            digits *= pow10(scale.unsigned_abs());
            scale = 0;
        }
        if scale > RUST_DECIMAL_MAX_SCALE {
            return Err(overflow());
        }

        let mantissa = digits.to_i128().ok_or_else(overflow)?;
        let scale = u32::try_from(scale).map_err(|_| overflow())?;
        Decimal::try_from_i128_with_scale(mantissa, scale).map_err(|_| overflow())
    }

    /// Returns a reference to the inner decimal.
    #[must_use]
    pub const fn as_big_decimal(&self) -> &BigDecimal {
        &self.0
    }

    /// Consumes the amount, returning the inner decimal.
    #[must_use]
    pub fn into_inner(self) -> BigDecimal {
        self.0
    }
}

fn pow10(exp: u64) -> BigInt {
    num_traits::pow(BigInt::from(10u8), usize::try_from(exp).unwrap_or(usize::MAX))
}

fn is_plain_decimal(text: &str) -> bool {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    let has_digit = !int_part.is_empty() || frac_part.is_some_and(|f| !f.is_empty());

    has_digit && all_digits(int_part) && frac_part.is_none_or(all_digits)
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_plain_string())
    }
}

impl FromStr for Amount {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<BigDecimal> for Amount {
    fn from(value: BigDecimal) -> Self {
        Self(value)
    }
}

impl From<BigInt> for Amount {
    fn from(value: BigInt) -> Self {
        Self::from_integer(value)
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Self(BigDecimal::new(
            BigInt::from(value.mantissa()),
            i64::from(value.scale()),
        ))
    }
}

impl From<Amount> for BigDecimal {
    fn from(value: Amount) -> Self {
        value.0
    }
}
