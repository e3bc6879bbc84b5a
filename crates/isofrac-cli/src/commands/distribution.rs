use super::render_mass_fraction;
use crate::cli::DistributionArgs;
use crate::config::PartialDistributionConfig;
use crate::error::Result;
use isofrac::core::report::ReportLine;
use isofrac::engine::mass_fraction::MassFractionCalculator;
use isofrac::workflows::distribution::{self, CombinedSummary, DistributionSummary};
use tracing::info;

pub fn run(args: DistributionArgs) -> Result<()> {
    for line in render(&args)? {
        println!("{}", line);
    }
    Ok(())
}

pub fn render(args: &DistributionArgs) -> Result<Vec<String>> {
    let partial_config = PartialDistributionConfig::load(args.config.as_deref())?;
    info!("Merging configuration from file and CLI arguments...");
    let config = partial_config.merge_with_cli(args)?;

    let calculator = MassFractionCalculator::new();
    info!("Invoking the distribution workflow...");
    let summary = distribution::run(&calculator, &config)?;

    Ok(render_summary(&summary))
}

fn render_summary(summary: &DistributionSummary) -> Vec<String> {
    let mut lines = Vec::new();
    for isotope in &summary.isotopes {
        for row in &isotope.molecules {
            let label = format!("{} {} fraction", row.molecule.name(), isotope.isotope);
            lines.push(render_mass_fraction(&label, &row.result));
        }
        let weighted = isotope.weighted;
        lines.push(
            ReportLine::new(
                format!("weighted {} fraction", isotope.isotope),
                weighted.central,
                weighted.at_lower_mass_bound,
                weighted.at_upper_mass_bound,
            )
            .to_string(),
        );
    }
    if let Some(combined) = summary.combined() {
        lines.extend(render_combined(&combined));
    }
    lines
}

fn render_combined(combined: &CombinedSummary) -> Vec<String> {
    let joined = combined.isotopes.join("+");
    let reference = &combined.reference_isotope;
    let share = match (combined.reference_share, combined.complement_share()) {
        (Some(share), Some(rest)) => format!("{} 1-rel {}", share, rest),
        _ => "undefined".to_string(),
    };
    vec![
        format!(
            "total {} weighted fraction {} total {} fraction minus {} fraction {}",
            joined, combined.total, joined, reference, combined.total_minus_reference
        ),
        format!(
            "{} fraction relative to total {} {}",
            reference, joined, share
        ),
    ]
}
