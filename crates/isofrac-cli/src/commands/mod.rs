pub mod distribution;
pub mod fraction;
pub mod table;

use isofrac::engine::mass_fraction::MassFraction;

/// Report line of one calculator result, or an explicit marker when the fraction is undefined.
pub(crate) fn render_mass_fraction(label: &str, result: &MassFraction) -> String {
    match result.report_line(label) {
        Some(line) => line.to_string(),
        None => format!("{} undefined (no tabulated mass)", label),
    }
}
