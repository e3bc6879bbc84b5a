use crate::core::isotopes::record::IsotopeRecord;
use crate::core::isotopes::table::IsotopeTable;
use crate::core::models::molecule::MoleculeComposition;
use crate::core::report::ReportLine;
use crate::engine::error::EngineError;
use tracing::{debug, instrument, trace, warn};

/// Value reported in place of an undefined fraction by [`MassFraction::to_sentinel_triple`].
pub const UNDEFINED_SENTINEL: f64 = -1.0;

/// Isotope fraction evaluated against the total-mass bounds built from standard atomic weight
/// limits.
///
/// The fields are named after the divisor: dividing by the *lower* total-mass bound yields the
/// *larger* fraction. Use [`FractionBounds::max`] and [`FractionBounds::min`] when the
/// magnitude ordering is what matters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FractionBounds {
    pub at_lower_mass_bound: f64,
    pub at_upper_mass_bound: f64,
}

impl FractionBounds {
    pub fn max(&self) -> f64 {
        self.at_lower_mass_bound.max(self.at_upper_mass_bound)
    }

    pub fn min(&self) -> f64 {
        self.at_lower_mass_bound.min(self.at_upper_mass_bound)
    }

    pub fn contains(&self, fraction: f64) -> bool {
        self.min() <= fraction && fraction <= self.max()
    }
}

/// Intermediate mass sums (in u) of a single evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MassTotals {
    pub isotope_mass: f64,
    pub total_mass: f64,
    pub total_mass_lower_bound: f64,
    pub total_mass_upper_bound: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MassFraction {
    pub isotope: String,
    /// `None` when the molecule has no tabulated mass.
    pub fraction: Option<f64>,
    /// `None` when no element of the molecule carries atomic weight bounds.
    pub bounds: Option<FractionBounds>,
    pub masses: MassTotals,
    /// Elements of the molecule without any tabulated isotope, in symbol order. They add
    /// nothing to any of the mass sums.
    pub unresolved_elements: Vec<String>,
}

impl MassFraction {
    pub fn is_defined(&self) -> bool {
        self.fraction.is_some()
    }

    /// `(fraction, fraction at lower mass bound, fraction at upper mass bound)` with
    /// [`UNDEFINED_SENTINEL`] standing in for undefined values.
    pub fn to_sentinel_triple(&self) -> (f64, f64, f64) {
        let fraction = self.fraction.unwrap_or(UNDEFINED_SENTINEL);
        match self.bounds {
            Some(b) => (fraction, b.at_lower_mass_bound, b.at_upper_mass_bound),
            None => (fraction, UNDEFINED_SENTINEL, UNDEFINED_SENTINEL),
        }
    }

    /// Report line with the larger bound fraction as upper value and the smaller one as lower
    /// value. Missing bounds collapse onto the central value.
    pub fn report_line(&self, label: impl Into<String>) -> Option<ReportLine> {
        let fraction = self.fraction?;
        let (upper, lower) = self
            .bounds
            .map(|b| (b.at_lower_mass_bound, b.at_upper_mass_bound))
            .unwrap_or((fraction, fraction));
        Some(ReportLine::new(label, fraction, upper, lower))
    }
}

/// Computes isotope mass fractions of molecules from an immutable [`IsotopeTable`].
#[derive(Debug, Clone)]
pub struct MassFractionCalculator {
    table: IsotopeTable,
}

impl Default for MassFractionCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl MassFractionCalculator {
    /// Calculator over the reference isotope table.
    pub fn new() -> Self {
        Self::with_table(IsotopeTable::reference())
    }

    pub fn with_table(table: IsotopeTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &IsotopeTable {
        &self.table
    }

    /// Mass fraction of `isotope` in `molecule`.
    ///
    /// Each tabulated isotope of an element contributes `count * abundance * mass / Σ abundance`
    /// to the molecular mass, which renormalizes elements whose isotopes are only partly
    /// tabulated. The bounding masses sum `count * lower` and `count * upper` over the elements
    /// that carry atomic weight bounds; elements without bounds add nothing to them.
    ///
    /// Never fails: an unknown isotope yields a zero isotope mass, unknown elements are listed
    /// in [`MassFraction::unresolved_elements`], and zero denominators yield `None`.
    #[instrument(skip_all, fields(isotope = isotope, molecule = %molecule))]
    pub fn compute(&self, isotope: &str, molecule: &MoleculeComposition) -> MassFraction {
        let (masses, unresolved_elements) =
            self.accumulate(molecule, |record| record.name == isotope);

        let fraction = (masses.total_mass > 0.0).then(|| masses.isotope_mass / masses.total_mass);
        let bounds = (masses.total_mass_lower_bound > 0.0).then(|| FractionBounds {
            at_lower_mass_bound: masses.isotope_mass / masses.total_mass_lower_bound,
            at_upper_mass_bound: masses.isotope_mass / masses.total_mass_upper_bound,
        });

        debug!(
            fraction = ?fraction,
            bounds = ?bounds,
            total_mass = masses.total_mass,
            "Computed isotope mass fraction."
        );

        MassFraction {
            isotope: isotope.to_string(),
            fraction,
            bounds,
            masses,
            unresolved_elements,
        }
    }

    /// Like [`Self::compute`], but rejects isotopes missing from the table and molecules with
    /// elements that have no tabulated isotope.
    pub fn compute_strict(
        &self,
        isotope: &str,
        molecule: &MoleculeComposition,
    ) -> Result<MassFraction, EngineError> {
        if self.table.get(isotope).is_none() {
            return Err(EngineError::UnknownIsotope(isotope.to_string()));
        }
        if let Some((element, _)) = molecule
            .elements()
            .find(|(element, _)| !self.table.contains_element(element))
        {
            return Err(EngineError::UnknownElement {
                element: element.to_string(),
                molecule: molecule.name(),
            });
        }
        Ok(self.compute(isotope, molecule))
    }

    /// Mass fraction of all tabulated isotopes of `element` together, i.e. the sum of the
    /// individual isotope fractions of that element.
    pub fn element_mass_fraction(&self, element: &str, molecule: &MoleculeComposition) -> Option<f64> {
        let (masses, _) = self.accumulate(molecule, |record| record.element == element);
        (masses.total_mass > 0.0).then(|| masses.isotope_mass / masses.total_mass)
    }

    fn accumulate(
        &self,
        molecule: &MoleculeComposition,
        selected: impl Fn(&IsotopeRecord) -> bool,
    ) -> (MassTotals, Vec<String>) {
        let mut masses = MassTotals::default();
        let mut unresolved = Vec::new();

        for (element, count) in molecule.elements() {
            if !self.table.contains_element(element) {
                debug!(element, "No isotope data for element; it contributes no mass.");
                unresolved.push(element.to_string());
                continue;
            }

            let n = f64::from(count);
            let total_abundance: f64 = self
                .table
                .isotopes_of(element)
                .map(|r| r.natural_abundance.value)
                .sum();
            if total_abundance <= 0.0 {
                warn!(element, "Tabulated abundances sum to zero; element mass is skipped.");
            }

            for record in self.table.isotopes_of(element) {
                if total_abundance > 0.0 {
                    let contribution = n
                        * record.natural_abundance.value
                        * record.relative_atomic_mass.value
                        / total_abundance;
                    trace!(isotope = %record.name, contribution, "Isotope mass contribution.");
                    masses.total_mass += contribution;
                    if selected(record) {
                        masses.isotope_mass += contribution;
                    }
                }
                if let Some(bounds) = record.atomic_weight_bounds {
                    masses.total_mass_lower_bound += n * bounds.lower;
                    masses.total_mass_upper_bound += n * bounds.upper;
                }
            }
        }

        (masses, unresolved)
    }
}
