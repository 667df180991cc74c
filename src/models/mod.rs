pub mod category;
pub mod indicators;
pub mod region;
pub mod substances;

pub use category::CategoryValue;
pub use indicators::{CountryIndicators, INDICATOR_LABELS};
pub use region::RegionMetric;
pub use substances::SubstanceUse;
