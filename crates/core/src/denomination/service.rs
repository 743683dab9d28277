//! Denomination conversion service.
//!
//! This module provides the public entry points: conversion to wei, to
//! ether, and resolution of a raw offset to a denomination. The free
//! functions use strict amount parsing; construct a [`UnitConverter`] to
//! pick another [`ParseMode`].

use num_bigint::BigInt;
use weiunits_shared::{Amount, ConversionError, ConversionResult, ConverterConfig, ParseMode};

use super::normalize::{AmountInput, DenominationSelector, normalize};
use super::registry::Denomination;
use super::scaling;

/// Converter for amounts between denominations.
///
/// Holds no state beyond its parse mode and is safe to share across
/// threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnitConverter {
    mode: ParseMode,
}

impl UnitConverter {
    /// Creates a converter with the given parse mode.
    #[must_use]
    pub const fn new(mode: ParseMode) -> Self {
        Self { mode }
    }

    /// Creates a converter from loaded configuration.
    #[must_use]
    pub const fn from_config(config: &ConverterConfig) -> Self {
        Self::new(config.parse_mode)
    }

    /// Returns the configured parse mode.
    #[must_use]
    pub const fn mode(&self) -> ParseMode {
        self.mode
    }

    /// Converts an amount into whole wei.
    ///
    /// # Example
    ///
    /// ```
    /// use num_bigint::BigInt;
    /// use weiunits_core::denomination::{Denomination, UnitConverter};
    ///
    /// let wei = UnitConverter::default()
    ///     .to_base_unit("342.5", Denomination::Ether)
    ///     .unwrap();
    /// assert_eq!(wei, "342500000000000000000".parse::<BigInt>().unwrap());
    /// ```
    pub fn to_base_unit(
        &self,
        amount: impl Into<AmountInput>,
        selector: impl Into<DenominationSelector>,
    ) -> ConversionResult<BigInt> {
        let selector = selector.into();
        let result = normalize(amount.into(), selector, self.mode)
            .and_then(|(amount, from)| scaling::to_base_unit(&amount, from));

        match &result {
            Ok(wei) => tracing::debug!(?selector, %wei, "Converted to base unit"),
            Err(err) => tracing::debug!(?selector, error = %err, "Base unit conversion failed"),
        }
        result
    }

    /// Converts an amount into ether.
    ///
    /// # Example
    ///
    /// ```
    /// use weiunits_core::denomination::{Denomination, UnitConverter};
    ///
    /// let ether = UnitConverter::default()
    ///     .to_whole_unit("342500000", 12u8)
    ///     .unwrap();
    /// assert_eq!(ether.to_string(), "342.5");
    /// ```
    pub fn to_whole_unit(
        &self,
        amount: impl Into<AmountInput>,
        selector: impl Into<DenominationSelector>,
    ) -> ConversionResult<Amount> {
        let selector = selector.into();
        let result = normalize(amount.into(), selector, self.mode)
            .and_then(|(amount, from)| scaling::to_whole_unit(&amount, from));

        match &result {
            Ok(ether) => tracing::debug!(?selector, %ether, "Converted to whole unit"),
            Err(err) => tracing::debug!(?selector, error = %err, "Whole unit conversion failed"),
        }
        result
    }

    /// Resolves a decimal offset above wei to its denomination.
    pub fn resolve(&self, offset: impl Into<i64>) -> ConversionResult<Denomination> {
        let offset = offset.into();
        Denomination::from_offset(offset).ok_or(ConversionError::UnknownOffset(offset))
    }
}

/// Converts an amount into whole wei using strict parsing.
pub fn convert_to_base_unit(
    amount: impl Into<AmountInput>,
    selector: impl Into<DenominationSelector>,
) -> ConversionResult<BigInt> {
    UnitConverter::default().to_base_unit(amount, selector)
}

/// Converts an amount into ether using strict parsing.
pub fn convert_to_whole_unit(
    amount: impl Into<AmountInput>,
    selector: impl Into<DenominationSelector>,
) -> ConversionResult<Amount> {
    UnitConverter::default().to_whole_unit(amount, selector)
}

/// Resolves a decimal offset above wei to its denomination.
pub fn resolve_denomination_from_offset(offset: impl Into<i64>) -> ConversionResult<Denomination> {
    UnitConverter::default().resolve(offset)
}
