//! Pie chart of the ten countries with the highest air pollution.

use crate::chart::figure::{Figure, Layout, PieMarker, PieTrace, Title, Trace};
use crate::errors::{AppError, AppResult};
use crate::models::CategoryValue;

/// Radial offset applied to every wedge.
pub const EXPLODE: f64 = 0.05;

/// Pastel wedge palette, cycled when there are more wedges than colors.
const PASTEL: [&str; 7] = [
    "#a1c9f4", "#ffb482", "#8de5a1", "#ff9f9b", "#d0bbff", "#debb9b", "#fab0e4",
];

pub fn pollution_pie(rows: &[CategoryValue]) -> AppResult<Figure> {
    if rows.is_empty() {
        return Err(AppError::Render(
            "no rows to chart: the air-pollution query returned nothing".to_string(),
        ));
    }

    // Rows arrive ordered by the query; the wedge order must match.
    let trace = PieTrace {
        labels: rows.iter().map(|r| r.label.clone()).collect(),
        values: rows.iter().map(|r| r.value).collect(),
        pull: vec![EXPLODE; rows.len()],
        textinfo: "label+percent",
        marker: Some(PieMarker {
            colors: (0..rows.len())
                .map(|i| PASTEL[i % PASTEL.len()].to_string())
                .collect(),
        }),
    };

    Ok(Figure {
        data: vec![Trace::Pie(trace)],
        layout: Layout {
            title: Some(Title::new("10 Countries with the highest air pollution")),
            ..Layout::default()
        },
    })
}
