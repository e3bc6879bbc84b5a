use isofrac::engine::config::{ChainLengthDistribution, DistributionConfig};

pub struct DefaultsConfig {
    pub isotopes: Vec<String>,
    pub hydrogen_deficit: u32,
    pub distribution: ChainLengthDistribution,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        let core = DistributionConfig::default();
        Self {
            isotopes: core.isotopes,
            hydrogen_deficit: core.hydrogen_deficit,
            distribution: core.distribution,
        }
    }
}
