//! # Workflows Module
//!
//! High-level procedures built on the [`crate::engine`] layer.
//!
//! - **Distribution Workflow** ([`distribution`]) - Evaluates isotope mass fractions for every
//!   chain length of a hydrocarbon distribution and reduces them to weighted fractions and a
//!   combined summary across the evaluated isotopes.

pub mod distribution;
