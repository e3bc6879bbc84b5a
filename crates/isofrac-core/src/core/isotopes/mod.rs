//! # Isotopes Module
//!
//! Reference data for the isotopes the calculator knows about.
//!
//! - [`record`] - The [`record::IsotopeRecord`] type and its measured quantities.
//! - `reference` - The compiled-in reference values (NIST relative atomic masses and
//!   abundances, IUPAC 2013 atomic weight intervals).
//! - [`table`] - The immutable [`table::IsotopeTable`] indexed by isotope name and element.

pub mod record;
pub(crate) mod reference;
pub mod table;
