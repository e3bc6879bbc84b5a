use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Invalid value for '{parameter}': {reason}")]
    InvalidValue {
        parameter: &'static str,
        reason: String,
    },
}

/// Relative weight of each carbon chain length in a hydrocarbon mixture.
///
/// Iterates in ascending chain length. Weights are not required to sum to one; the weighted
/// fractions are plain `Σ weight × fraction` sums.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChainLengthDistribution {
    weights: BTreeMap<u32, f64>,
}

impl ChainLengthDistribution {
    pub fn new(weights: impl IntoIterator<Item = (u32, f64)>) -> Self {
        Self {
            weights: weights.into_iter().collect(),
        }
    }

    /// Chain lengths 15 to 20 of the reference hydrocarbon mixture.
    pub fn reference() -> Self {
        Self::new([
            (15, 0.0),
            (16, 0.0698),
            (17, 0.306),
            (18, 0.450),
            (19, 0.174),
            (20, 0.0),
        ])
    }

    /// Sets the weight of one chain length, replacing any previous weight.
    pub fn set_weight(&mut self, chain_length: u32, weight: f64) {
        self.weights.insert(chain_length, weight);
    }

    pub fn weight(&self, chain_length: u32) -> Option<f64> {
        self.weights.get(&chain_length).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.weights.iter().map(|(n, w)| (*n, *w))
    }

    pub fn total_weight(&self) -> f64 {
        self.weights.values().sum()
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DistributionConfig {
    pub distribution: ChainLengthDistribution,
    /// Isotopes to evaluate, in report order. The first one is the reference isotope of the
    /// combined summary.
    pub isotopes: Vec<String>,
    /// Hydrogen atoms removed from `2 × n_carbon` when building each molecule.
    pub hydrogen_deficit: u32,
}

impl Default for DistributionConfig {
    fn default() -> Self {
        Self {
            distribution: ChainLengthDistribution::reference(),
            isotopes: vec!["1H".to_string(), "2H".to_string()],
            hydrogen_deficit: 6,
        }
    }
}

#[derive(Default)]
pub struct DistributionConfigBuilder {
    distribution: Option<ChainLengthDistribution>,
    isotopes: Option<Vec<String>>,
    hydrogen_deficit: Option<u32>,
}

impl DistributionConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn distribution(mut self, distribution: ChainLengthDistribution) -> Self {
        self.distribution = Some(distribution);
        self
    }
    pub fn isotopes(mut self, isotopes: Vec<String>) -> Self {
        self.isotopes = Some(isotopes);
        self
    }
    pub fn hydrogen_deficit(mut self, deficit: u32) -> Self {
        self.hydrogen_deficit = Some(deficit);
        self
    }

    pub fn build(self) -> Result<DistributionConfig, ConfigError> {
        let distribution = self
            .distribution
            .ok_or(ConfigError::MissingParameter("distribution"))?;
        let isotopes = self
            .isotopes
            .ok_or(ConfigError::MissingParameter("isotopes"))?;
        let hydrogen_deficit = self
            .hydrogen_deficit
            .ok_or(ConfigError::MissingParameter("hydrogen_deficit"))?;

        if isotopes.is_empty() {
            return Err(ConfigError::InvalidValue {
                parameter: "isotopes",
                reason: "at least one isotope is required".to_string(),
            });
        }
        if distribution.is_empty() {
            return Err(ConfigError::InvalidValue {
                parameter: "distribution",
                reason: "at least one chain length is required".to_string(),
            });
        }
        if let Some((n, w)) = distribution
            .iter()
            .find(|(_, w)| !w.is_finite() || *w < 0.0)
        {
            return Err(ConfigError::InvalidValue {
                parameter: "distribution",
                reason: format!("weight {} of chain length {} must be finite and non-negative", w, n),
            });
        }

        Ok(DistributionConfig {
            distribution,
            isotopes,
            hydrogen_deficit,
        })
    }
}
