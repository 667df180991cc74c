//! A labeled value, used by the pie and bar charts.
//! Rows arrive already ordered by the query (descending by value); renderers
//! must preserve that order.

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryValue {
    pub label: String,
    pub value: f64,
}
