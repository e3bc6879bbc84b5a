use super::record::IsotopeRecord;
use super::reference::reference_records;
use std::collections::BTreeMap;

/// Immutable collection of isotope records indexed by isotope name.
///
/// Iteration follows the sorted isotope names, so every query over the table is
/// deterministic. Elements are resolved through the explicit [`IsotopeRecord::element`]
/// field; a symbol matches only the isotopes whose parent element is exactly that symbol.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IsotopeTable {
    records: BTreeMap<String, IsotopeRecord>,
}

impl IsotopeTable {
    /// Builds a table from arbitrary records. A later record with the same name replaces an
    /// earlier one.
    pub fn new(records: impl IntoIterator<Item = IsotopeRecord>) -> Self {
        Self {
            records: records
                .into_iter()
                .map(|record| (record.name.clone(), record))
                .collect(),
        }
    }

    /// The compiled-in reference table: ¹H, ²H, ¹²C and ¹³C.
    pub fn reference() -> Self {
        Self::new(reference_records())
    }

    pub fn get(&self, name: &str) -> Option<&IsotopeRecord> {
        self.records.get(name)
    }

    pub fn isotopes_of<'a>(&'a self, element: &'a str) -> impl Iterator<Item = &'a IsotopeRecord> {
        self.records.values().filter(move |r| r.element == element)
    }

    pub fn contains_element(&self, element: &str) -> bool {
        self.isotopes_of(element).next().is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &IsotopeRecord> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
