//! Exact base-10 scaling between denominations.
//!
//! CRITICAL: All scaling is an exponent shift on arbitrary-precision values.
//! Results toward wei are truncated toward zero, never rounded.

use num_bigint::BigInt;
use weiunits_shared::{Amount, ConversionError, ConversionResult};

use super::registry::{Denomination, ETHER_OFFSET};

fn unknown(denomination: Denomination) -> ConversionError {
    ConversionError::UnknownDenomination(denomination.to_string())
}

/// Converts an amount expressed in `from` into whole wei.
///
/// Any fractional wei left after scaling is discarded.
pub fn to_base_unit(amount: &Amount, from: Denomination) -> ConversionResult<BigInt> {
    let exp = match from {
        Denomination::Wei => return Ok(amount.truncate()),
        Denomination::Ether => ETHER_OFFSET,
        other => other.offset().ok_or_else(|| unknown(other))?,
    };

    Ok(amount.scale_by_pow10(i64::from(exp))?.truncate())
}

/// Converts an amount expressed in `from` into ether.
///
/// Ether amounts are returned unchanged. Every other denomination goes
/// through whole wei first, so sub-wei fractions are dropped.
pub fn to_whole_unit(amount: &Amount, from: Denomination) -> ConversionResult<Amount> {
    if from == Denomination::Ether {
        return Ok(amount.clone());
    }

    let wei = to_base_unit(amount, from)?;
    Ok(Amount::from_integer(wei)
        .scale_by_pow10(-i64::from(ETHER_OFFSET))?
        .normalized())
}
