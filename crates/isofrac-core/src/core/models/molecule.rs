use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum MoleculeError {
    #[error(
        "A chain of {carbon} carbon atoms cannot lose {deficit} hydrogen atoms (only {available} available)"
    )]
    InsufficientHydrogen {
        carbon: u32,
        deficit: u32,
        available: u32,
    },
}

/// Elemental composition of a single molecule: element symbol to atom count.
///
/// Elements are kept in canonical (sorted by symbol) order, which fixes the order of
/// [`MoleculeComposition::name`] and of every reduction over the composition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoleculeComposition {
    elements: BTreeMap<String, u32>,
}

impl MoleculeComposition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `count` atoms of `element`, accumulating onto any existing count.
    pub fn with_element(mut self, element: &str, count: u32) -> Self {
        *self.elements.entry(element.to_string()).or_insert(0) += count;
        self
    }

    /// Alkane-like hydrocarbon `{C: n, H: 2n - hydrogen_deficit}`.
    pub fn alkane_like(carbon: u32, hydrogen_deficit: u32) -> Result<Self, MoleculeError> {
        let available = carbon.saturating_mul(2);
        let hydrogen =
            available
                .checked_sub(hydrogen_deficit)
                .ok_or(MoleculeError::InsufficientHydrogen {
                    carbon,
                    deficit: hydrogen_deficit,
                    available,
                })?;
        Ok(Self::new()
            .with_element("H", hydrogen)
            .with_element("C", carbon))
    }

    pub fn count(&self, element: &str) -> u32 {
        self.elements.get(element).copied().unwrap_or(0)
    }

    pub fn elements(&self) -> impl Iterator<Item = (&str, u32)> {
        self.elements.iter().map(|(e, n)| (e.as_str(), *n))
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Display name: `"<element>(<count>)"` for each element in canonical order,
    /// e.g. `"C(6)H(6)"` for benzene.
    pub fn name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for MoleculeComposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (element, count) in &self.elements {
            write!(f, "{}({})", element, count)?;
        }
        Ok(())
    }
}

impl<S: AsRef<str>> FromIterator<(S, u32)> for MoleculeComposition {
    fn from_iter<I: IntoIterator<Item = (S, u32)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |molecule, (element, count)| {
                molecule.with_element(element.as_ref(), count)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_rendered_in_symbol_order() {
        let benzene = MoleculeComposition::new()
            .with_element("H", 6)
            .with_element("C", 6);
        assert_eq!(benzene.name(), "C(6)H(6)");
    }

    #[test]
    fn name_does_not_depend_on_insertion_order() {
        let a: MoleculeComposition = [("H", 6), ("C", 6)].into_iter().collect();
        let b: MoleculeComposition = [("C", 6), ("H", 6)].into_iter().collect();
        assert_eq!(a, b);
        assert_eq!(a.name(), b.name());
    }

    #[test]
    fn repeated_elements_accumulate() {
        let molecule = MoleculeComposition::new()
            .with_element("H", 2)
            .with_element("O", 1)
            .with_element("H", 1);
        assert_eq!(molecule.count("H"), 3);
        assert_eq!(molecule.len(), 2);
    }

    #[test]
    fn count_of_absent_element_is_zero() {
        let molecule = MoleculeComposition::new().with_element("C", 1);
        assert_eq!(molecule.count("H"), 0);
    }

    #[test]
    fn alkane_like_builds_hydrogen_from_carbon_count() {
        let molecule = MoleculeComposition::alkane_like(16, 6).unwrap();
        assert_eq!(molecule.count("C"), 16);
        assert_eq!(molecule.count("H"), 26);
        assert_eq!(molecule.name(), "C(16)H(26)");
    }

    #[test]
    fn alkane_like_rejects_deficit_larger_than_available_hydrogen() {
        let err = MoleculeComposition::alkane_like(2, 6).unwrap_err();
        assert_eq!(
            err,
            MoleculeError::InsufficientHydrogen {
                carbon: 2,
                deficit: 6,
                available: 4,
            }
        );
    }

    #[test]
    fn alkane_like_allows_zero_hydrogen() {
        let molecule = MoleculeComposition::alkane_like(3, 6).unwrap();
        assert_eq!(molecule.count("H"), 0);
        assert_eq!(molecule.name(), "C(3)H(0)");
    }

    #[test]
    fn empty_molecule_has_empty_name() {
        let molecule = MoleculeComposition::new();
        assert!(molecule.is_empty());
        assert_eq!(molecule.name(), "");
    }
}
