//! Denomination registry, input normalization, and exact scaling.

pub mod normalize;
pub mod registry;
pub mod scaling;
pub mod service;

#[cfg(test)]
mod props;

pub use normalize::{AmountInput, DenominationSelector, normalize};
pub use registry::{Denomination, ETHER_OFFSET};
pub use service::{
    UnitConverter, convert_to_base_unit, convert_to_whole_unit, resolve_denomination_from_offset,
};
