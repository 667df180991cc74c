//! Multi-series line chart of child-health indicators, one line per country.

use crate::chart::figure::{Axis, AxisValue, Figure, Layout, ScatterTrace, Title, Trace};
use crate::errors::{AppError, AppResult};
use crate::models::{CountryIndicators, INDICATOR_LABELS};

pub fn indicator_lines(profiles: &[CountryIndicators]) -> AppResult<Figure> {
    if profiles.is_empty() {
        return Err(AppError::Render(
            "no rows to chart: no indicator data matched the requested countries".to_string(),
        ));
    }

    let x: Vec<AxisValue> = INDICATOR_LABELS
        .iter()
        .map(|label| AxisValue::Cat(label.to_string()))
        .collect();

    let data = profiles
        .iter()
        .map(|p| {
            Trace::Scatter(ScatterTrace {
                x: x.clone(),
                y: p.values().to_vec(),
                mode: "lines",
                name: Some(p.iso_code.clone()),
                text: None,
                line: None,
            })
        })
        .collect();

    Ok(Figure {
        data,
        layout: Layout {
            title: Some(Title::new("Health Indicators in Different Countries")),
            x_axis: Some(Axis::titled("Health Indicators")),
            y_axis: Some(Axis::titled("Values")),
            showlegend: Some(true),
            ..Layout::default()
        },
    })
}
