//! Child-health indicator profile for one country.

/// Indicator names, in the column order of the `child_mortality` query.
/// These double as the x-axis categories of the line chart.
pub const INDICATOR_LABELS: [&str; 3] = ["child_wasting", "non_bfeeding", "low_birth_weight"];

#[derive(Debug, Clone, PartialEq)]
pub struct CountryIndicators {
    pub iso_code: String,
    pub child_wasting: f64,
    pub non_bfeeding: f64,
    pub low_birth_weight: f64,
}

impl CountryIndicators {
    /// Values in the same order as [`INDICATOR_LABELS`].
    pub fn values(&self) -> [f64; 3] {
        [self.child_wasting, self.non_bfeeding, self.low_birth_weight]
    }
}
