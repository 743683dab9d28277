//! Denomination registry.
//!
//! The registry is a `const` table mapping each named denomination to its
//! decimal offset: the number of base-10 places between one unit of the
//! denomination and one wei. The table is the single source of truth for
//! both conversion directions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use weiunits_shared::ConversionError;

/// Offset of the whole unit (ether) above the base unit (wei).
pub const ETHER_OFFSET: u32 = 18;

/// Named denominations of an 18-decimal currency.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Denomination {
    /// Base unit, 10^-18 ether.
    Wei,
    /// KiloWei (babbage), 10^-15 ether.
    KWei,
    /// MegaWei (lovelace), 10^-12 ether.
    MWei,
    /// GigaWei (shannon), 10^-9 ether.
    GWei,
    /// Szabo (microether), 10^-6 ether.
    ///
    /// Six-decimal tokens such as USDC and USDT are szabo-denominated.
    Szabo,
    /// Finney (milliether), 10^-3 ether.
    Finney,
    /// Whole unit, 10^18 wei.
    Ether,
    /// Sentinel for a failed lookup. Never a valid conversion source.
    Unknown,
}

/// Known denominations and their offsets above wei.
const REGISTRY: [(Denomination, u32); 7] = [
    (Denomination::Wei, 0),
    (Denomination::KWei, 3),
    (Denomination::MWei, 6),
    (Denomination::GWei, 9),
    (Denomination::Szabo, 12),
    (Denomination::Finney, 15),
    (Denomination::Ether, ETHER_OFFSET),
];

impl Denomination {
    /// All known denominations, smallest first.
    pub const ALL: [Self; 7] = [
        Self::Wei,
        Self::KWei,
        Self::MWei,
        Self::GWei,
        Self::Szabo,
        Self::Finney,
        Self::Ether,
    ];

    /// Looks up the denomination whose offset above wei is exactly `offset`.
    pub fn from_offset(offset: impl Into<i64>) -> Option<Self> {
        let offset = offset.into();
        REGISTRY
            .iter()
            .find(|(_, known)| i64::from(*known) == offset)
            .map(|(denomination, _)| *denomination)
    }

    /// Looks up the denomination with `decimals` places below one ether,
    /// as ERC-20 style `decimals()` values are expressed.
    ///
    /// Ether has `0` decimals; `1` matches no denomination.
    pub fn from_decimals(decimals: impl Into<i64>) -> Option<Self> {
        i64::from(ETHER_OFFSET)
            .checked_sub(decimals.into())
            .and_then(Self::from_offset)
    }

    /// Returns the offset above wei, or `None` for [`Denomination::Unknown`].
    #[must_use]
    pub fn offset(self) -> Option<u32> {
        REGISTRY
            .iter()
            .find(|(denomination, _)| *denomination == self)
            .map(|(_, offset)| *offset)
    }

    /// Returns the number of places below one ether.
    #[must_use]
    pub fn decimals(self) -> Option<u32> {
        self.offset().map(|offset| ETHER_OFFSET - offset)
    }

    /// Returns true for every member except the sentinel.
    #[must_use]
    pub const fn is_known(self) -> bool {
        !matches!(self, Self::Unknown)
    }

    /// Returns the enum discriminant.
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self as u32
    }

    /// Returns the canonical lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wei => "wei",
            Self::KWei => "kwei",
            Self::MWei => "mwei",
            Self::GWei => "gwei",
            Self::Szabo => "szabo",
            Self::Finney => "finney",
            Self::Ether => "ether",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Denomination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Denomination {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "wei" => Ok(Self::Wei),
            "kwei" | "kilowei" | "babbage" => Ok(Self::KWei),
            "mwei" | "megawei" | "lovelace" => Ok(Self::MWei),
            "gwei" | "gigawei" | "shannon" => Ok(Self::GWei),
            "szabo" | "microether" => Ok(Self::Szabo),
            "finney" | "milliether" => Ok(Self::Finney),
            "ether" => Ok(Self::Ether),
            _ => Err(ConversionError::UnknownDenomination(s.to_string())),
        }
    }
}
