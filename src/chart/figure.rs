//! Minimal typed model of the charts this tool emits.
//! Serializes to the JSON shape plotly.js expects (`data` + `layout`), which
//! is what the HTML writer embeds in the output page.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Scatter(ScatterTrace),
    Bar(BarTrace),
    Pie(PieTrace),
    Choropleth(ChoroplethTrace),
}

/// Either a category label or a numeric coordinate on an axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AxisValue {
    Num(f64),
    Cat(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct ScatterTrace {
    pub x: Vec<AxisValue>,
    pub y: Vec<f64>,
    pub mode: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Per-point hover text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<LineStyle>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LineStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BarTrace {
    pub x: Vec<String>,
    pub y: Vec<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PieTrace {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    /// Radial offset per wedge.
    pub pull: Vec<f64>,
    pub textinfo: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<PieMarker>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PieMarker {
    pub colors: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChoroplethTrace {
    /// ISO country codes.
    pub locations: Vec<String>,
    pub z: Vec<f64>,
    /// Hover text per region.
    pub text: Vec<String>,
    pub colorscale: &'static str,
    pub autocolorscale: bool,
    pub reversescale: bool,
    pub marker: ChoroplethMarker,
    pub colorbar: ColorBar,
    pub zmin: f64,
    pub zmax: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChoroplethMarker {
    pub line: MarkerLine,
}

#[derive(Debug, Clone, Serialize)]
pub struct MarkerLine {
    pub color: String,
    pub width: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ColorBar {
    pub title: Title,
}

#[derive(Debug, Clone, Serialize)]
pub struct Title {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xanchor: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yanchor: Option<&'static str>,
}

impl Title {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font: None,
            x: None,
            y: None,
            xanchor: None,
            yanchor: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Font {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Layout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(rename = "xaxis", skip_serializing_if = "Option::is_none")]
    pub x_axis: Option<Axis>,
    #[serde(rename = "yaxis", skip_serializing_if = "Option::is_none")]
    pub y_axis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showlegend: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo: Option<Geo>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Axis {
    pub title: Title,
}

impl Axis {
    pub fn titled(text: impl Into<String>) -> Self {
        Self {
            title: Title::new(text),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Geo {
    pub showframe: bool,
    pub showcoastlines: bool,
    pub projection: Projection,
}

#[derive(Debug, Clone, Serialize)]
pub struct Projection {
    #[serde(rename = "type")]
    pub kind: &'static str,
}
