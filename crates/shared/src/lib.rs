//! Shared types, errors, and configuration for weiunits.
//!
//! This crate provides common types used across all other crates:
//! - `Amount`, an arbitrary-precision decimal quantity
//! - Conversion error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{ConverterConfig, ParseMode};
pub use error::{ConversionError, ConversionResult};
pub use types::Amount;
