//! Core conversion logic for weiunits.
//!
//! This crate contains pure computation with no I/O: amounts move between
//! the denominations of an 18-decimal currency by exact base-10 scaling.
//!
//! # Modules
//!
//! - `denomination` - Registry, input normalization, and scaling transform

pub mod denomination;

pub use denomination::{
    AmountInput, Denomination, DenominationSelector, UnitConverter, convert_to_base_unit,
    convert_to_whole_unit, resolve_denomination_from_offset,
};
