pub mod defaults;

use crate::cli::DistributionArgs;
use crate::error::{CliError, Result};
use crate::utils::parser;
use defaults::DefaultsConfig;
use isofrac::engine::config::{
    ChainLengthDistribution, DistributionConfig, DistributionConfigBuilder,
};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct PartialDistributionConfig {
    isotopes: Option<Vec<String>>,
    hydrogen_deficit: Option<u32>,
    composition: Option<BTreeMap<String, f64>>,
}

impl PartialDistributionConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn merge_with_cli(mut self, args: &DistributionArgs) -> Result<DistributionConfig> {
        self.apply_set_values(&args.set_values)?;
        let defaults = DefaultsConfig::default();

        let isotopes = if args.isotopes.is_empty() {
            self.isotopes.unwrap_or(defaults.isotopes)
        } else {
            args.isotopes.clone()
        };

        let hydrogen_deficit = args
            .hydrogen_deficit
            .or(self.hydrogen_deficit)
            .unwrap_or(defaults.hydrogen_deficit);

        let mut distribution = match self.composition {
            Some(composition) => parse_composition(&composition)?,
            None => defaults.distribution,
        };
        for weight in &args.weights {
            let (chain_length, weight) = parser::parse_chain_weight(weight)?;
            distribution.set_weight(chain_length, weight);
        }

        debug!(
            ?isotopes,
            hydrogen_deficit,
            chain_lengths = distribution.len(),
            "Merged distribution configuration."
        );

        Ok(DistributionConfigBuilder::new()
            .distribution(distribution)
            .isotopes(isotopes)
            .hydrogen_deficit(hydrogen_deficit)
            .build()?)
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let (key, value_str) = parser::split_key_value(kv_pair)?;

            match key {
                "hydrogen-deficit" => {
                    self.hydrogen_deficit = Some(value_str.parse().map_err(|_| {
                        CliError::Config(format!(
                            "Invalid integer value for {}: {}",
                            key, value_str
                        ))
                    })?);
                }
                "isotopes" => {
                    let isotopes: Vec<String> = value_str
                        .split(',')
                        .map(str::trim)
                        .filter(|s| !s.is_empty())
                        .map(str::to_string)
                        .collect();
                    self.isotopes = Some(isotopes);
                }
                _ => {
                    let Some(chain_length) = key.strip_prefix("composition.") else {
                        return Err(CliError::Config(format!(
                            "Unsupported configuration key for --set: '{}'",
                            key
                        )));
                    };
                    parser::parse_chain_length(chain_length, kv_pair)?;
                    let weight = parser::parse_weight(value_str, kv_pair)?;
                    self.composition
                        .get_or_insert_with(|| {
                            DefaultsConfig::default()
                                .distribution
                                .iter()
                                .map(|(n, w)| (n.to_string(), w))
                                .collect()
                        })
                        .insert(chain_length.to_string(), weight);
                }
            }
        }
        Ok(())
    }
}

fn parse_composition(composition: &BTreeMap<String, f64>) -> Result<ChainLengthDistribution> {
    composition
        .iter()
        .map(|(length, weight)| -> Result<(u32, f64)> {
            let input = format!("composition.{}={}", length, weight);
            Ok((parser::parse_chain_length(length.trim(), &input)?, *weight))
        })
        .collect::<Result<Vec<_>>>()
        .map(ChainLengthDistribution::new)
}
