//! Smoking vs alcohol deaths for one country, for the scatter chart.
//! Both measures are filtered to < 3000 by the query's WHERE clause, not
//! by the renderer.

#[derive(Debug, Clone, PartialEq)]
pub struct SubstanceUse {
    pub country: String,
    pub smoke: f64,
    pub alcohol: f64,
}
