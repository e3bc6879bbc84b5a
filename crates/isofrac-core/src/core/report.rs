use std::fmt;

/// Deviation of an upper and a lower value from a central value.
///
/// Absolute deviations are in parts per thousand (per mille), relative deviations in percent.
/// The relative deviations are zero when the central value is zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Deviation {
    pub upper_per_mille: f64,
    pub lower_per_mille: f64,
    pub upper_percent: f64,
    pub lower_percent: f64,
}

impl Deviation {
    pub fn between(central: f64, upper: f64, lower: f64) -> Self {
        let (upper_percent, lower_percent) = if central != 0.0 {
            (
                100.0 * (upper - central) / central,
                100.0 * (lower - central) / central,
            )
        } else {
            (0.0, 0.0)
        };
        Self {
            upper_per_mille: 1000.0 * (upper - central),
            lower_per_mille: 1000.0 * (lower - central),
            upper_percent,
            lower_percent,
        }
    }
}

/// One line of the console report: a label, a central value and its deviation interval.
///
/// Rendered as
/// `<label> <central> absolute [<lower>,<upper>] per mille, relative [<lower>,<upper>] percent`
/// with six decimals for the central value and three for the deviations.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportLine {
    pub label: String,
    pub central: f64,
    pub upper: f64,
    pub lower: f64,
    pub deviation: Deviation,
}

impl ReportLine {
    pub fn new(label: impl Into<String>, central: f64, upper: f64, lower: f64) -> Self {
        Self {
            label: label.into(),
            central,
            upper,
            lower,
            deviation: Deviation::between(central, upper, lower),
        }
    }
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = &self.deviation;
        write!(
            f,
            "{} {:.6} absolute [{:.3},{:.3}] per mille, relative [{:.3},{:.3}] percent",
            self.label,
            self.central,
            d.lower_per_mille,
            d.upper_per_mille,
            d.lower_percent,
            d.upper_percent,
        )
    }
}
