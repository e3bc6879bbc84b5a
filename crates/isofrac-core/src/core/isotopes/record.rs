use std::fmt;

/// A tabulated quantity and its standard uncertainty.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measured {
    pub value: f64,
    pub uncertainty: f64,
}

impl Measured {
    pub const fn new(value: f64, uncertainty: f64) -> Self {
        Self { value, uncertainty }
    }
}

/// Interval within which the standard atomic weight of an element lies across natural sources.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtomicWeightBounds {
    pub lower: f64,
    pub upper: f64,
}

impl AtomicWeightBounds {
    pub const fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }
}

/// One known isotope.
///
/// `name` is the mass number followed by the element symbol (e.g. `"2H"`, `"13C"`) and always
/// ends with `element`. Only the most abundant isotope of an element carries
/// `atomic_weight_bounds`; those bounds describe the element, not the isotope.
#[derive(Debug, Clone, PartialEq)]
pub struct IsotopeRecord {
    pub name: String,
    pub element: String,
    pub relative_atomic_mass: Measured,
    pub natural_abundance: Measured,
    pub atomic_weight_bounds: Option<AtomicWeightBounds>,
}

impl IsotopeRecord {
    pub fn new(
        name: &str,
        element: &str,
        relative_atomic_mass: Measured,
        natural_abundance: Measured,
        atomic_weight_bounds: Option<AtomicWeightBounds>,
    ) -> Self {
        debug_assert!(
            name.ends_with(element),
            "isotope name '{}' must end with its element symbol '{}'",
            name,
            element
        );
        Self {
            name: name.to_string(),
            element: element.to_string(),
            relative_atomic_mass,
            natural_abundance,
            atomic_weight_bounds,
        }
    }

    /// Mass number parsed from the leading digits of the name, if any.
    pub fn mass_number(&self) -> Option<u32> {
        let digits: String = self
            .name
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect();
        digits.parse().ok()
    }
}

impl fmt::Display for IsotopeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}): mass {} ± {:e} u, abundance {} ± {:e}",
            self.name,
            self.element,
            self.relative_atomic_mass.value,
            self.relative_atomic_mass.uncertainty,
            self.natural_abundance.value,
            self.natural_abundance.uncertainty,
        )?;
        if let Some(bounds) = self.atomic_weight_bounds {
            write!(
                f,
                ", atomic weight [{}, {}]",
                bounds.lower, bounds.upper
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deuterium() -> IsotopeRecord {
        IsotopeRecord::new(
            "2H",
            "H",
            Measured::new(2.01410177812, 12.0e-11),
            Measured::new(0.000115, 70.0e-6),
            None,
        )
    }

    #[test]
    fn new_record_stores_all_fields() {
        let record = deuterium();
        assert_eq!(record.name, "2H");
        assert_eq!(record.element, "H");
        assert_eq!(record.relative_atomic_mass.value, 2.01410177812);
        assert_eq!(record.natural_abundance.value, 0.000115);
        assert!(record.atomic_weight_bounds.is_none());
    }

    #[test]
    fn mass_number_is_parsed_from_name_prefix() {
        assert_eq!(deuterium().mass_number(), Some(2));

        let carbon = IsotopeRecord::new(
            "13C",
            "C",
            Measured::new(13.00335483507, 23.0e-11),
            Measured::new(0.0107, 8.0e-4),
            None,
        );
        assert_eq!(carbon.mass_number(), Some(13));
    }

    #[test]
    fn display_includes_bounds_only_when_present() {
        let plain = deuterium().to_string();
        assert!(plain.starts_with("2H (H)"));
        assert!(!plain.contains("atomic weight"));

        let protium = IsotopeRecord::new(
            "1H",
            "H",
            Measured::new(1.007825032, 9.0e-11),
            Measured::new(0.999885, 70.0e-6),
            Some(AtomicWeightBounds::new(1.00784, 1.00811)),
        );
        assert!(protium.to_string().contains("atomic weight [1.00784, 1.00811]"));
    }
}
