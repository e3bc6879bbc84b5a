use super::render_mass_fraction;
use crate::cli::FractionArgs;
use crate::error::Result;
use crate::utils::parser;
use isofrac::core::models::molecule::MoleculeComposition;
use isofrac::engine::mass_fraction::MassFractionCalculator;
use tracing::{info, warn};

pub fn run(args: FractionArgs) -> Result<()> {
    for line in render(&args)? {
        println!("{}", line);
    }
    Ok(())
}

pub fn render(args: &FractionArgs) -> Result<Vec<String>> {
    let molecule = args
        .elements
        .iter()
        .map(|e| parser::parse_element_count(e))
        .collect::<std::result::Result<MoleculeComposition, _>>()?;
    info!("Evaluating molecule {}.", molecule);

    let calculator = MassFractionCalculator::new();
    let mut lines = Vec::with_capacity(args.isotopes.len());
    for isotope in &args.isotopes {
        let result = calculator.compute_strict(isotope, &molecule)?;
        if !result.is_defined() {
            warn!(isotope = %isotope, "Molecule {} has no tabulated mass.", molecule);
        }
        let label = format!("{} {} fraction", molecule.name(), isotope);
        lines.push(render_mass_fraction(&label, &result));
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use isofrac::engine::error::EngineError;

    fn args(isotopes: &[&str], elements: &[&str]) -> FractionArgs {
        FractionArgs {
            isotopes: isotopes.iter().map(|s| s.to_string()).collect(),
            elements: elements.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn renders_one_line_per_isotope_in_canonical_molecule_order() {
        let lines = render(&args(&["1H", "2H"], &["H=6", "C=6"])).unwrap();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("C(6)H(6) 1H fraction 0.077405 absolute ["));
        assert!(lines[1].starts_with("C(6)H(6) 2H fraction 0.000018 absolute ["));
        assert!(lines.iter().all(|l| l.ends_with("percent")));
    }

    #[test]
    fn zero_counts_render_as_undefined() {
        let lines = render(&args(&["1H"], &["H=0"])).unwrap();
        assert_eq!(lines, vec!["H(0) 1H fraction undefined (no tabulated mass)"]);
    }

    #[test]
    fn unknown_element_is_an_error() {
        let result = render(&args(&["1H"], &["H=2", "O=1"]));
        assert!(matches!(
            result,
            Err(CliError::Engine(EngineError::UnknownElement { .. }))
        ));
    }

    #[test]
    fn unknown_isotope_is_an_error() {
        let result = render(&args(&["3H"], &["H=2"]));
        assert!(matches!(
            result,
            Err(CliError::Engine(EngineError::UnknownIsotope(_)))
        ));
    }

    #[test]
    fn malformed_element_is_an_argument_error() {
        let result = render(&args(&["1H"], &["H:2"]));
        assert!(matches!(result, Err(CliError::Argument(_))));
    }
}
