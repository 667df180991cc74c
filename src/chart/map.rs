//! World choropleth of deaths linked to unsafe water and sanitation.

use crate::chart::figure::{
    ChoroplethMarker, ChoroplethTrace, ColorBar, Figure, Font, Geo, Layout, MarkerLine,
    Projection, Title, Trace,
};
use crate::errors::{AppError, AppResult};
use crate::models::RegionMetric;

/// Fixed color-scale bounds.
pub const Z_MIN: f64 = 0.0;
pub const Z_MAX: f64 = 100_000.0;

pub fn sanitation_map(rows: &[RegionMetric]) -> AppResult<Figure> {
    if rows.is_empty() {
        return Err(AppError::Render(
            "no rows to chart: the sanitation query returned nothing".to_string(),
        ));
    }

    let trace = ChoroplethTrace {
        locations: rows.iter().map(|r| r.iso_code.clone()).collect(),
        z: rows.iter().map(|r| r.value).collect(),
        text: rows.iter().map(|r| r.country.clone()).collect(),
        colorscale: "Inferno",
        autocolorscale: false,
        reversescale: true,
        marker: ChoroplethMarker {
            line: MarkerLine {
                color: "darkgray".to_string(),
                width: 0.5,
            },
        },
        colorbar: ColorBar {
            title: Title::new("Deaths/Year"),
        },
        zmin: Z_MIN,
        zmax: Z_MAX,
    };

    Ok(Figure {
        data: vec![Trace::Choropleth(trace)],
        layout: Layout {
            title: Some(Title {
                text: "<b>Deaths Caused By Unaccessible Clean Water Sources</b>".to_string(),
                font: Some(Font {
                    family: None,
                    size: Some(26),
                    color: Some("#525252".to_string()),
                }),
                x: Some(0.5),
                y: Some(0.9),
                xanchor: Some("center"),
                yanchor: Some("top"),
            }),
            width: Some(1000),
            height: Some(620),
            font: Some(Font {
                family: Some("Heebo".to_string()),
                size: Some(18),
                color: Some("#525252".to_string()),
            }),
            geo: Some(Geo {
                showframe: false,
                showcoastlines: false,
                projection: Projection {
                    kind: "equirectangular",
                },
            }),
            ..Layout::default()
        },
    })
}
