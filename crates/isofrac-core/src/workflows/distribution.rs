use crate::core::models::molecule::MoleculeComposition;
use crate::engine::config::DistributionConfig;
use crate::engine::error::EngineError;
use crate::engine::mass_fraction::{MassFraction, MassFractionCalculator};
use tracing::{info, instrument, warn};

/// Result of one isotope in one molecule of the distribution.
#[derive(Debug, Clone, PartialEq)]
pub struct MoleculeFraction {
    pub chain_length: u32,
    pub weight: f64,
    pub molecule: MoleculeComposition,
    pub result: MassFraction,
}

/// Weighted sums `Σ weight × value` over the molecules of the distribution.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WeightedFraction {
    pub central: f64,
    pub at_lower_mass_bound: f64,
    pub at_upper_mass_bound: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IsotopeSummary {
    pub isotope: String,
    pub molecules: Vec<MoleculeFraction>,
    pub weighted: WeightedFraction,
    /// Molecules left out of the weighted sums because their fraction is undefined.
    pub skipped: usize,
}

/// Weighted fractions of all evaluated isotopes taken together, relative to the first
/// (reference) isotope.
#[derive(Debug, Clone, PartialEq)]
pub struct CombinedSummary {
    pub isotopes: Vec<String>,
    pub reference_isotope: String,
    pub total: f64,
    pub total_minus_reference: f64,
    /// `reference / total`, `None` when the total is zero.
    pub reference_share: Option<f64>,
}

impl CombinedSummary {
    pub fn complement_share(&self) -> Option<f64> {
        self.reference_share.map(|share| 1.0 - share)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DistributionSummary {
    pub isotopes: Vec<IsotopeSummary>,
}

impl DistributionSummary {
    pub fn isotope(&self, name: &str) -> Option<&IsotopeSummary> {
        self.isotopes.iter().find(|s| s.isotope == name)
    }

    pub fn combined(&self) -> Option<CombinedSummary> {
        let reference = self.isotopes.first()?;
        let total: f64 = self.isotopes.iter().map(|s| s.weighted.central).sum();
        Some(CombinedSummary {
            isotopes: self.isotopes.iter().map(|s| s.isotope.clone()).collect(),
            reference_isotope: reference.isotope.clone(),
            total,
            total_minus_reference: total - reference.weighted.central,
            reference_share: (total != 0.0).then(|| reference.weighted.central / total),
        })
    }
}

/// Evaluates every configured isotope over every chain length of the distribution.
///
/// Molecules are `{C: n, H: 2n - hydrogen_deficit}`, visited in ascending chain length.
/// Molecules with an undefined fraction are kept in the per-molecule rows but left out of the
/// weighted sums; molecules whose bounds are undefined contribute their central fraction only.
#[instrument(skip_all, name = "distribution_workflow")]
pub fn run(
    calculator: &MassFractionCalculator,
    config: &DistributionConfig,
) -> Result<DistributionSummary, EngineError> {
    info!(
        "Evaluating {} isotope(s) over {} chain length(s).",
        config.isotopes.len(),
        config.distribution.len()
    );

    let molecules = config
        .distribution
        .iter()
        .map(|(chain_length, weight)| {
            MoleculeComposition::alkane_like(chain_length, config.hydrogen_deficit)
                .map(|molecule| (chain_length, weight, molecule))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let isotopes = config
        .isotopes
        .iter()
        .map(|isotope| summarize_isotope(calculator, isotope, &molecules))
        .collect();

    Ok(DistributionSummary { isotopes })
}

fn summarize_isotope(
    calculator: &MassFractionCalculator,
    isotope: &str,
    molecules: &[(u32, f64, MoleculeComposition)],
) -> IsotopeSummary {
    let mut weighted = WeightedFraction::default();
    let mut skipped = 0;
    let mut rows = Vec::with_capacity(molecules.len());

    for (chain_length, weight, molecule) in molecules {
        let result = calculator.compute(isotope, molecule);
        match result.fraction {
            Some(fraction) => {
                weighted.central += weight * fraction;
                let bounds = result.bounds.map_or((fraction, fraction), |b| {
                    (b.at_lower_mass_bound, b.at_upper_mass_bound)
                });
                weighted.at_lower_mass_bound += weight * bounds.0;
                weighted.at_upper_mass_bound += weight * bounds.1;
            }
            None => {
                warn!(
                    isotope,
                    molecule = %molecule,
                    "Undefined mass fraction; molecule left out of the weighted sums."
                );
                skipped += 1;
            }
        }
        rows.push(MoleculeFraction {
            chain_length: *chain_length,
            weight: *weight,
            molecule: molecule.clone(),
            result,
        });
    }

    info!(
        isotope,
        weighted_fraction = weighted.central,
        "Weighted isotope fraction computed."
    );

    IsotopeSummary {
        isotope: isotope.to_string(),
        molecules: rows,
        weighted,
        skipped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::isotopes::table::IsotopeTable;
    use crate::engine::config::{ChainLengthDistribution, DistributionConfigBuilder};

    const TOLERANCE: f64 = 1e-12;

    #[test]
    fn weighted_fraction_equals_sum_of_weighted_molecule_fractions() {
        let calculator = MassFractionCalculator::new();
        let config = DistributionConfig::default();
        let summary = run(&calculator, &config).unwrap();

        for isotope in ["1H", "2H"] {
            let expected: f64 = config
                .distribution
                .iter()
                .map(|(n, w)| {
                    let molecule = MoleculeComposition::alkane_like(n, 6).unwrap();
                    w * calculator.compute(isotope, &molecule).fraction.unwrap()
                })
                .sum();
            let actual = summary.isotope(isotope).unwrap().weighted.central;
            assert!((actual - expected).abs() < TOLERANCE, "{}", isotope);
        }
    }

    #[test]
    fn reference_distribution_reproduces_known_values() {
        let summary = run(&MassFractionCalculator::new(), &DistributionConfig::default()).unwrap();
        let protium = summary.isotope("1H").unwrap().weighted.central;
        let deuterium = summary.isotope("2H").unwrap().weighted.central;
        assert!((protium - 0.1222721377174952).abs() < 1e-10);
        assert!((deuterium - 2.810422179005774e-05).abs() < 1e-12);
    }

    #[test]
    fn rows_follow_ascending_chain_length_with_alkane_like_molecules() {
        let summary = run(&MassFractionCalculator::new(), &DistributionConfig::default()).unwrap();
        let protium = summary.isotope("1H").unwrap();

        let names: Vec<String> = protium.molecules.iter().map(|m| m.molecule.name()).collect();
        assert_eq!(
            names,
            vec!["C(15)H(24)", "C(16)H(26)", "C(17)H(28)", "C(18)H(30)", "C(19)H(32)", "C(20)H(34)"]
        );
        assert_eq!(protium.molecules[1].weight, 0.0698);
        assert_eq!(protium.skipped, 0);
    }

    #[test]
    fn isotopes_are_reported_in_configured_order() {
        let config = DistributionConfigBuilder::new()
            .distribution(ChainLengthDistribution::reference())
            .isotopes(vec!["2H".to_string(), "1H".to_string()])
            .hydrogen_deficit(6)
            .build()
            .unwrap();
        let summary = run(&MassFractionCalculator::new(), &config).unwrap();
        let order: Vec<&str> = summary.isotopes.iter().map(|s| s.isotope.as_str()).collect();
        assert_eq!(order, vec!["2H", "1H"]);
        assert_eq!(summary.combined().unwrap().reference_isotope, "2H");
    }

    #[test]
    fn weighted_bounds_bracket_weighted_central_fraction() {
        let summary = run(&MassFractionCalculator::new(), &DistributionConfig::default()).unwrap();
        for isotope in &summary.isotopes {
            let w = isotope.weighted;
            assert!(w.at_lower_mass_bound >= w.central);
            assert!(w.at_upper_mass_bound <= w.central);
        }
    }

    #[test]
    fn combined_summary_relates_reference_to_total() {
        let summary = run(&MassFractionCalculator::new(), &DistributionConfig::default()).unwrap();
        let combined = summary.combined().unwrap();
        let protium = summary.isotope("1H").unwrap().weighted.central;
        let deuterium = summary.isotope("2H").unwrap().weighted.central;

        assert_eq!(combined.isotopes, vec!["1H".to_string(), "2H".to_string()]);
        assert!((combined.total - (protium + deuterium)).abs() < TOLERANCE);
        assert!((combined.total_minus_reference - deuterium).abs() < TOLERANCE);
        let share = combined.reference_share.unwrap();
        assert!((share - protium / (protium + deuterium)).abs() < TOLERANCE);
        assert!((combined.complement_share().unwrap() - (1.0 - share)).abs() < TOLERANCE);
    }

    #[test]
    fn zero_total_leaves_share_undefined() {
        let summary = DistributionSummary {
            isotopes: vec![IsotopeSummary {
                isotope: "2H".to_string(),
                molecules: vec![],
                weighted: WeightedFraction::default(),
                skipped: 0,
            }],
        };
        let combined = summary.combined().unwrap();
        assert_eq!(combined.total, 0.0);
        assert!(combined.reference_share.is_none());
        assert!(combined.complement_share().is_none());
    }

    #[test]
    fn empty_summary_has_no_combined_statistics() {
        let summary = DistributionSummary { isotopes: vec![] };
        assert!(summary.combined().is_none());
    }

    #[test]
    fn undefined_fractions_are_skipped_from_weighted_sums() {
        let calculator = MassFractionCalculator::with_table(IsotopeTable::default());
        let summary = run(&calculator, &DistributionConfig::default()).unwrap();
        let protium = summary.isotope("1H").unwrap();

        assert_eq!(protium.skipped, 6);
        assert_eq!(protium.molecules.len(), 6);
        assert_eq!(protium.weighted, WeightedFraction::default());
    }

    #[test]
    fn chain_too_short_for_deficit_is_an_error() {
        let config = DistributionConfigBuilder::new()
            .distribution(ChainLengthDistribution::new([(2, 1.0)]))
            .isotopes(vec!["1H".to_string()])
            .hydrogen_deficit(6)
            .build()
            .unwrap();
        let err = run(&MassFractionCalculator::new(), &config).unwrap_err();
        assert!(matches!(err, EngineError::Molecule { .. }));
    }
}
