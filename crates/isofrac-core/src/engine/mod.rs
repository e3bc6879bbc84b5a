//! # Engine Module
//!
//! The computational core of isofrac: resolving molecular compositions against the isotope
//! table and reducing them to isotope mass fractions.
//!
//! - **Calculation** ([`mass_fraction`]) - [`mass_fraction::MassFractionCalculator`] and its
//!   [`mass_fraction::MassFraction`] result, including the bounding interval derived from
//!   standard atomic weight limits.
//! - **Configuration** ([`config`]) - Parameters of the chain-length distribution driver and
//!   their builder.
//! - **Error Handling** ([`error`]) - Engine-specific error types.
//!
//! Undefined results (zero total mass, no bounded element) are expressed as `None` rather than
//! as errors; errors are reserved for the strict entry points and for invalid configuration.

pub mod config;
pub mod error;
pub mod mass_fraction;
