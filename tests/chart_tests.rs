use healthviz::chart::figure::{AxisValue, Trace};
use healthviz::chart::{bar, line, map, pie, scatter};
use healthviz::errors::AppError;
use healthviz::models::{
    CategoryValue, CountryIndicators, RegionMetric, SubstanceUse, INDICATOR_LABELS,
};

fn profile(iso: &str, a: f64, b: f64, c: f64) -> CountryIndicators {
    CountryIndicators {
        iso_code: iso.to_string(),
        child_wasting: a,
        non_bfeeding: b,
        low_birth_weight: c,
    }
}

fn category(label: &str, value: f64) -> CategoryValue {
    CategoryValue {
        label: label.to_string(),
        value,
    }
}

#[test]
fn line_chart_has_one_series_per_country_and_fixed_strings() {
    let profiles = vec![profile("TUR", 1.0, 2.0, 3.0), profile("USA", 4.0, 5.0, 6.0)];
    let fig = line::indicator_lines(&profiles).unwrap();

    assert_eq!(fig.data.len(), 2);
    let expected_x: Vec<AxisValue> = INDICATOR_LABELS
        .iter()
        .map(|l| AxisValue::Cat(l.to_string()))
        .collect();
    for (trace, p) in fig.data.iter().zip(&profiles) {
        match trace {
            Trace::Scatter(s) => {
                assert_eq!(s.x, expected_x);
                assert_eq!(s.y, p.values().to_vec());
                assert_eq!(s.name.as_deref(), Some(p.iso_code.as_str()));
                assert_eq!(s.mode, "lines");
            }
            other => panic!("expected a scatter trace, got {other:?}"),
        }
    }

    let layout = &fig.layout;
    assert_eq!(
        layout.title.as_ref().unwrap().text,
        "Health Indicators in Different Countries"
    );
    assert_eq!(
        layout.x_axis.as_ref().unwrap().title.text,
        "Health Indicators"
    );
    assert_eq!(layout.y_axis.as_ref().unwrap().title.text, "Values");
    assert_eq!(layout.showlegend, Some(true));
}

#[test]
fn line_chart_rejects_empty_input() {
    let err = line::indicator_lines(&[]).unwrap_err();
    assert!(matches!(err, AppError::Render(_)));
}

#[test]
fn choropleth_uses_fixed_color_scale_bounds() {
    let rows = vec![
        RegionMetric {
            country: "Turkey".to_string(),
            iso_code: "TUR".to_string(),
            value: 0.0,
        },
        RegionMetric {
            country: "Nigeria".to_string(),
            iso_code: "NGA".to_string(),
            value: 99_999.0,
        },
    ];
    let fig = map::sanitation_map(&rows).unwrap();

    assert_eq!(fig.data.len(), 1);
    match &fig.data[0] {
        Trace::Choropleth(c) => {
            assert_eq!(c.zmin, 0.0);
            assert_eq!(c.zmax, 100_000.0);
            assert!(c.reversescale);
            assert_eq!(c.colorscale, "Inferno");
            assert_eq!(c.locations, vec!["TUR", "NGA"]);
            assert_eq!(c.text, vec!["Turkey", "Nigeria"]);
            for z in &c.z {
                assert!(*z >= c.zmin && *z <= c.zmax);
            }
        }
        other => panic!("expected a choropleth trace, got {other:?}"),
    }
    assert_eq!(
        fig.layout.title.as_ref().unwrap().text,
        "<b>Deaths Caused By Unaccessible Clean Water Sources</b>"
    );
}

#[test]
fn choropleth_rejects_empty_input() {
    assert!(matches!(
        map::sanitation_map(&[]).unwrap_err(),
        AppError::Render(_)
    ));
}

#[test]
fn pie_has_one_exploded_wedge_per_row_in_input_order() {
    let rows = vec![
        category("India", 300.0),
        category("China", 200.0),
        category("Nigeria", 100.0),
    ];
    let fig = pie::pollution_pie(&rows).unwrap();

    match &fig.data[0] {
        Trace::Pie(p) => {
            assert_eq!(p.labels, vec!["India", "China", "Nigeria"]);
            assert_eq!(p.values, vec![300.0, 200.0, 100.0]);
            assert_eq!(p.pull, vec![pie::EXPLODE; 3]);
            assert!(p.pull.iter().all(|&pull| pull == 0.05));
            assert_eq!(p.textinfo, "label+percent");

            // Percentage labels are derived from the values; they must sum
            // to 100 within floating-point tolerance.
            let total: f64 = p.values.iter().sum();
            let pct_sum: f64 = p.values.iter().map(|v| v / total * 100.0).sum();
            assert!((pct_sum - 100.0).abs() < 1e-9);
        }
        other => panic!("expected a pie trace, got {other:?}"),
    }
    assert_eq!(
        fig.layout.title.as_ref().unwrap().text,
        "10 Countries with the highest air pollution"
    );
}

#[test]
fn pie_rejects_empty_input() {
    assert!(matches!(
        pie::pollution_pie(&[]).unwrap_err(),
        AppError::Render(_)
    ));
}

#[test]
fn bar_chart_preserves_input_order_and_fixed_strings() {
    let rows = vec![
        category("USA", 500.0),
        category("GBR", 400.0),
        category("FIN", 300.0),
        category("VNM", 200.0),
        category("BGR", 100.0),
    ];
    let fig = bar::drug_use_bar(&rows).unwrap();

    match &fig.data[0] {
        Trace::Bar(b) => {
            assert_eq!(b.x, vec!["USA", "GBR", "FIN", "VNM", "BGR"]);
            assert_eq!(b.y, vec![500.0, 400.0, 300.0, 200.0, 100.0]);
        }
        other => panic!("expected a bar trace, got {other:?}"),
    }
    let layout = &fig.layout;
    assert_eq!(layout.title.as_ref().unwrap().text, "Drug Usage of countries");
    assert_eq!(layout.x_axis.as_ref().unwrap().title.text, "Country");
    assert_eq!(layout.y_axis.as_ref().unwrap().title.text, "Drug Usage");
}

#[test]
fn scatter_accepts_boundary_rows_and_fits_through_them() {
    // Values strictly below 3000 are included by the query filter upstream;
    // the renderer must accept them as-is.
    let rows = vec![
        SubstanceUse {
            country: "A".to_string(),
            smoke: 100.0,
            alcohol: 50.0,
        },
        SubstanceUse {
            country: "B".to_string(),
            smoke: 2999.0,
            alcohol: 2999.0,
        },
    ];
    let fig = scatter::substance_scatter(&rows).unwrap();
    assert_eq!(fig.data.len(), 2);

    match &fig.data[0] {
        Trace::Scatter(points) => {
            assert_eq!(points.mode, "markers");
            assert_eq!(points.y, vec![50.0, 2999.0]);
            assert_eq!(
                points.text.as_ref().unwrap(),
                &vec!["A".to_string(), "B".to_string()]
            );
        }
        other => panic!("expected a scatter trace, got {other:?}"),
    }

    // With exactly two points the trend line passes through both.
    match &fig.data[1] {
        Trace::Scatter(trend) => {
            assert_eq!(trend.mode, "lines");
            assert_eq!(trend.x, vec![AxisValue::Num(100.0), AxisValue::Num(2999.0)]);
            assert!((trend.y[0] - 50.0).abs() < 1e-6);
            assert!((trend.y[1] - 2999.0).abs() < 1e-6);
        }
        other => panic!("expected a scatter trace, got {other:?}"),
    }

    let layout = &fig.layout;
    assert_eq!(
        layout.title.as_ref().unwrap().text,
        "Scatter plot of Smoke vs Alcohol Consumption"
    );
    assert_eq!(layout.x_axis.as_ref().unwrap().title.text, "Smoke");
    assert_eq!(layout.y_axis.as_ref().unwrap().title.text, "Alcohol");
}

#[test]
fn scatter_rejects_empty_and_single_point_input() {
    assert!(matches!(
        scatter::substance_scatter(&[]).unwrap_err(),
        AppError::Render(_)
    ));

    let one = vec![SubstanceUse {
        country: "A".to_string(),
        smoke: 1.0,
        alcohol: 2.0,
    }];
    assert!(matches!(
        scatter::substance_scatter(&one).unwrap_err(),
        AppError::Render(_)
    ));
}

#[test]
fn linear_fit_recovers_exact_line() {
    let xs = [1.0, 2.0, 3.0, 4.0];
    let ys = [3.0, 5.0, 7.0, 9.0]; // y = 2x + 1
    let (slope, intercept) = scatter::linear_fit(&xs, &ys).unwrap();
    assert!((slope - 2.0).abs() < 1e-12);
    assert!((intercept - 1.0).abs() < 1e-12);
}

#[test]
fn linear_fit_rejects_vertical_data() {
    let xs = [5.0, 5.0, 5.0];
    let ys = [1.0, 2.0, 3.0];
    assert!(matches!(
        scatter::linear_fit(&xs, &ys).unwrap_err(),
        AppError::Render(_)
    ));
}

#[test]
fn write_figure_emits_a_self_contained_page() {
    let rows = vec![category("India", 2.0), category("China", 1.0)];
    let fig = pie::pollution_pie(&rows).unwrap();

    let mut path = std::env::temp_dir();
    path.push("healthviz_pie_out.html");
    let _ = std::fs::remove_file(&path);

    healthviz::chart::html::write_figure(&fig, &path).unwrap();
    let page = std::fs::read_to_string(&path).unwrap();
    assert!(page.contains("Plotly.newPlot"));
    assert!(page.contains("\"type\":\"pie\""));
    assert!(page.contains("cdn.plot.ly"));
}

#[test]
fn figures_serialize_to_plotly_shaped_json() {
    let rows = vec![category("India", 2.0), category("China", 1.0)];
    let fig = pie::pollution_pie(&rows).unwrap();
    let json = serde_json::to_value(&fig).unwrap();

    assert_eq!(json["data"][0]["type"], "pie");
    assert_eq!(json["data"][0]["pull"][0], 0.05);
    assert_eq!(
        json["layout"]["title"]["text"],
        "10 Countries with the highest air pollution"
    );

    let fig = line::indicator_lines(&[profile("TUR", 1.0, 2.0, 3.0)]).unwrap();
    let json = serde_json::to_value(&fig).unwrap();
    assert_eq!(json["data"][0]["type"], "scatter");
    assert_eq!(json["data"][0]["x"][0], "child_wasting");
    assert_eq!(json["layout"]["xaxis"]["title"]["text"], "Health Indicators");

    let rows = vec![RegionMetric {
        country: "Turkey".to_string(),
        iso_code: "TUR".to_string(),
        value: 1.0,
    }];
    let fig = map::sanitation_map(&rows).unwrap();
    let json = serde_json::to_value(&fig).unwrap();
    assert_eq!(json["data"][0]["type"], "choropleth");
    assert_eq!(json["data"][0]["zmax"], 100000.0);
    assert_eq!(json["layout"]["geo"]["projection"]["type"], "equirectangular");
}
