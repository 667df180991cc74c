//! Ranked bar chart of drug use by country.

use crate::chart::figure::{Axis, BarTrace, Figure, Layout, Title, Trace};
use crate::errors::{AppError, AppResult};
use crate::models::CategoryValue;

pub fn drug_use_bar(rows: &[CategoryValue]) -> AppResult<Figure> {
    if rows.is_empty() {
        return Err(AppError::Render(
            "no rows to chart: the drug-use query returned nothing".to_string(),
        ));
    }

    // Rows arrive ordered by the query; the bar order must match.
    let trace = BarTrace {
        x: rows.iter().map(|r| r.label.clone()).collect(),
        y: rows.iter().map(|r| r.value).collect(),
    };

    Ok(Figure {
        data: vec![Trace::Bar(trace)],
        layout: Layout {
            title: Some(Title::new("Drug Usage of countries")),
            x_axis: Some(Axis::titled("Country")),
            y_axis: Some(Axis::titled("Drug Usage")),
            ..Layout::default()
        },
    })
}
