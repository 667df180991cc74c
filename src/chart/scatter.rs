//! Scatter of smoking vs alcohol deaths with a fitted trend line.
//! The < 3000 filter on both measures is applied by the query's WHERE
//! clause; the renderer accepts whatever rows it is given.

use crate::chart::figure::{Axis, AxisValue, Figure, Layout, LineStyle, ScatterTrace, Title, Trace};
use crate::errors::{AppError, AppResult};
use crate::models::SubstanceUse;

pub fn substance_scatter(rows: &[SubstanceUse]) -> AppResult<Figure> {
    if rows.is_empty() {
        return Err(AppError::Render(
            "no rows to chart: the substance-use query returned nothing".to_string(),
        ));
    }
    if rows.len() < 2 {
        return Err(AppError::Render(
            "need at least two points to fit a trend line".to_string(),
        ));
    }

    let xs: Vec<f64> = rows.iter().map(|r| r.smoke).collect();
    let ys: Vec<f64> = rows.iter().map(|r| r.alcohol).collect();
    let (slope, intercept) = linear_fit(&xs, &ys)?;

    let points = ScatterTrace {
        x: xs.iter().map(|x| AxisValue::Num(*x)).collect(),
        y: ys.clone(),
        mode: "markers",
        name: None,
        text: Some(rows.iter().map(|r| r.country.clone()).collect()),
        line: None,
    };

    // A straight line only needs its two endpoints.
    let x_min = xs.iter().cloned().fold(f64::INFINITY, f64::min);
    let x_max = xs.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let trend = ScatterTrace {
        x: vec![AxisValue::Num(x_min), AxisValue::Num(x_max)],
        y: vec![slope * x_min + intercept, slope * x_max + intercept],
        mode: "lines",
        name: None,
        text: None,
        line: Some(LineStyle {
            color: Some("#dd8452".to_string()),
            width: Some(2.0),
        }),
    };

    Ok(Figure {
        data: vec![Trace::Scatter(points), Trace::Scatter(trend)],
        layout: Layout {
            title: Some(Title::new("Scatter plot of Smoke vs Alcohol Consumption")),
            width: Some(1000),
            height: Some(800),
            x_axis: Some(Axis::titled("Smoke")),
            y_axis: Some(Axis::titled("Alcohol")),
            showlegend: Some(false),
            ..Layout::default()
        },
    })
}

/// Ordinary least squares fit; returns (slope, intercept).
pub fn linear_fit(xs: &[f64], ys: &[f64]) -> AppResult<(f64, f64)> {
    let n = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;

    let sxx: f64 = xs.iter().map(|x| (x - mean_x) * (x - mean_x)).sum();
    if sxx == 0.0 {
        return Err(AppError::Render(
            "cannot fit a trend line: all x values are identical".to_string(),
        ));
    }

    let sxy: f64 = xs
        .iter()
        .zip(ys.iter())
        .map(|(x, y)| (x - mean_x) * (y - mean_y))
        .sum();

    let slope = sxy / sxx;
    Ok((slope, mean_y - slope * mean_x))
}
