//! # Core Module
//!
//! Stateless building blocks shared by the engine and the workflows.
//!
//! - **Isotope Reference Data** ([`isotopes`]) - Isotope records (relative atomic mass, natural
//!   abundance, standard atomic weight bounds) and the immutable table that indexes them.
//! - **Molecular Representation** ([`models`]) - Element-to-count compositions with a canonical
//!   display name.
//! - **Reporting** ([`report`]) - Absolute (per mille) and relative (percent) deviation of
//!   bound values from a central value, formatted as a single report line.

pub mod isotopes;
pub mod models;
pub mod report;
