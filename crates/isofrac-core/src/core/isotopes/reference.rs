use super::record::{AtomicWeightBounds, IsotopeRecord, Measured};
use phf::{Map, phf_map};

// Relative atomic masses and abundances: NIST Atomic Weights and Isotopic Compositions.
// Atomic weight intervals: Atomic weights of the elements 2013 (IUPAC Technical Report),
// Pure Appl. Chem. 2016, 88(3), 265-291.

pub(crate) struct ReferenceIsotope {
    pub element: &'static str,
    pub relative_atomic_mass: Measured,
    pub natural_abundance: Measured,
    pub atomic_weight_bounds: Option<AtomicWeightBounds>,
}

pub(crate) static REFERENCE_ISOTOPES: Map<&'static str, ReferenceIsotope> = phf_map! {
    "1H" => ReferenceIsotope {
        element: "H",
        relative_atomic_mass: Measured::new(1.007825032, 9.0e-11),
        natural_abundance: Measured::new(0.999885, 70.0e-6),
        atomic_weight_bounds: Some(AtomicWeightBounds::new(1.00784, 1.00811)),
    },
    "2H" => ReferenceIsotope {
        element: "H",
        relative_atomic_mass: Measured::new(2.01410177812, 12.0e-11),
        natural_abundance: Measured::new(0.000115, 70.0e-6),
        atomic_weight_bounds: None,
    },
    "12C" => ReferenceIsotope {
        element: "C",
        relative_atomic_mass: Measured::new(12.0, 0.0),
        natural_abundance: Measured::new(0.9893, 8.0e-4),
        atomic_weight_bounds: Some(AtomicWeightBounds::new(12.0096, 12.0116)),
    },
    "13C" => ReferenceIsotope {
        element: "C",
        relative_atomic_mass: Measured::new(13.00335483507, 23.0e-11),
        natural_abundance: Measured::new(0.0107, 8.0e-4),
        atomic_weight_bounds: None,
    },
};

pub(crate) fn reference_records() -> impl Iterator<Item = IsotopeRecord> {
    REFERENCE_ISOTOPES.entries().map(|(name, iso)| {
        IsotopeRecord::new(
            name,
            iso.element,
            iso.relative_atomic_mass,
            iso.natural_abundance,
            iso.atomic_weight_bounds,
        )
    })
}
