use healthviz::db::table::{Scalar, Table};
use healthviz::errors::AppError;

fn sample_table() -> Table {
    Table {
        columns: vec![
            "countries_name".to_string(),
            "iso_code".to_string(),
            "total_sanitation".to_string(),
        ],
        rows: vec![
            vec![
                Scalar::Text("Turkey".to_string()),
                Scalar::Text("TUR".to_string()),
                Scalar::Num(123.5),
            ],
            vec![
                Scalar::Text("Finland".to_string()),
                Scalar::Text("FIN".to_string()),
                // DECIMAL columns arrive as text on the wire.
                Scalar::Text("42.25".to_string()),
            ],
        ],
    }
}

#[test]
fn scalar_numeric_views() {
    assert_eq!(Scalar::Num(1.5).as_f64(), Some(1.5));
    assert_eq!(Scalar::Text("12.5".to_string()).as_f64(), Some(12.5));
    assert_eq!(Scalar::Text(" 7 ".to_string()).as_f64(), Some(7.0));
    assert_eq!(Scalar::Text("Turkey".to_string()).as_f64(), None);
    assert_eq!(Scalar::Null.as_f64(), None);
}

#[test]
fn table_accessors_follow_column_names() {
    let t = sample_table();
    assert_eq!(t.len(), 2);
    assert_eq!(t.text(0, "countries_name").unwrap(), "Turkey");
    assert_eq!(t.num(0, "total_sanitation").unwrap(), 123.5);
    // Text that parses as a number counts as numeric.
    assert_eq!(t.num(1, "total_sanitation").unwrap(), 42.25);
}

#[test]
fn missing_column_is_a_render_error() {
    let t = sample_table();
    let err = t
        .require_columns(&["countries_name", "no_such_column"])
        .unwrap_err();
    match err {
        AppError::Render(msg) => assert!(msg.contains("no_such_column")),
        other => panic!("expected a render error, got {other}"),
    }
}

#[test]
fn non_numeric_cell_is_a_render_error() {
    let t = sample_table();
    assert!(matches!(
        t.num(0, "countries_name").unwrap_err(),
        AppError::Render(_)
    ));
}

#[test]
fn out_of_range_row_is_a_render_error() {
    let t = sample_table();
    assert!(matches!(
        t.text(99, "iso_code").unwrap_err(),
        AppError::Render(_)
    ));
}
