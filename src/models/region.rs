//! One country's metric for the world map.

#[derive(Debug, Clone, PartialEq)]
pub struct RegionMetric {
    pub country: String,
    pub iso_code: String,
    pub value: f64,
}
