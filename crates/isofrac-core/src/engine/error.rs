use thiserror::Error;

use super::config::ConfigError;
use crate::core::models::molecule::MoleculeError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Isotope '{0}' is not present in the isotope table")]
    UnknownIsotope(String),

    #[error("No isotope data tabulated for element '{element}' in molecule {molecule}")]
    UnknownElement { element: String, molecule: String },

    #[error("Invalid molecule: {source}")]
    Molecule {
        #[from]
        source: MoleculeError,
    },

    #[error("Invalid configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },
}
