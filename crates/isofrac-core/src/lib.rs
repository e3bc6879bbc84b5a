//! # isofrac Core Library
//!
//! Mass fractions of individual isotopes (e.g. deuterium, ¹³C) within molecules of known
//! elemental composition, together with a deterministic bounding interval derived from the
//! published limits on standard atomic weights.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer layout so the single numerical kernel stays small and
//! testable while orchestration lives elsewhere.
//!
//! - **[`core`]: The Foundation.** Stateless data: isotope reference records and the
//!   immutable [`core::isotopes::table::IsotopeTable`], molecular compositions, and the
//!   formatting of deviation reports.
//!
//! - **[`engine`]: The Logic Core.** The [`engine::mass_fraction::MassFractionCalculator`],
//!   which resolves a molecule's elements against the isotope table and reduces them to a
//!   mass fraction and its bounds, plus configuration and error types.
//!
//! - **[`workflows`]: The Public API.** Complete procedures built on the engine, such as the
//!   weighted average of isotope fractions over a distribution of hydrocarbon chain lengths.
//!
//! ## Example
//!
//! ```
//! use isofrac::core::models::molecule::MoleculeComposition;
//! use isofrac::engine::mass_fraction::MassFractionCalculator;
//!
//! let calculator = MassFractionCalculator::new();
//! let benzene = MoleculeComposition::new().with_element("C", 6).with_element("H", 6);
//!
//! let result = calculator.compute("2H", &benzene);
//! let fraction = result.fraction.unwrap();
//! assert!(fraction > 0.0 && fraction < 1e-4);
//! ```

pub mod core;
pub mod engine;
pub mod workflows;
