//! Tabular query results: ordered named columns plus rows of scalar values.
//! Produced once by the query runner, consumed once by the renderer path.

use crate::errors::{AppError, AppResult};
use mysql::Value;

/// One cell of a query result.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Num(f64),
    Text(String),
    Null,
}

impl Scalar {
    /// Numeric view of the cell. DECIMAL columns arrive as text on the wire,
    /// so text that parses as a number counts too.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Scalar::Num(n) => Some(*n),
            Scalar::Text(s) => s.trim().parse().ok(),
            Scalar::Null => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Scalar::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<Value> for Scalar {
    fn from(v: Value) -> Self {
        match v {
            Value::NULL => Scalar::Null,
            Value::Int(n) => Scalar::Num(n as f64),
            Value::UInt(n) => Scalar::Num(n as f64),
            Value::Float(n) => Scalar::Num(n as f64),
            Value::Double(n) => Scalar::Num(n),
            Value::Bytes(b) => Scalar::Text(String::from_utf8_lossy(&b).into_owned()),
            // Temporal values never occur in this schema.
            other => Scalar::Text(format!("{other:?}")),
        }
    }
}

/// An ordered result set. Column order matches the query's SELECT clause.
#[derive(Debug, Clone, Default)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Scalar>>,
}

impl Table {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Verify the column set a renderer expects. A mismatch is classified as
    /// a render-time error, since the query itself succeeded.
    pub fn require_columns(&self, expected: &[&str]) -> AppResult<()> {
        for name in expected {
            if self.column_index(name).is_none() {
                return Err(AppError::Render(format!(
                    "result set is missing column '{}' (have: {})",
                    name,
                    self.columns.join(", ")
                )));
            }
        }
        Ok(())
    }

    fn cell(&self, row: usize, col: &str) -> AppResult<&Scalar> {
        let idx = self.column_index(col).ok_or_else(|| {
            AppError::Render(format!("result set is missing column '{col}'"))
        })?;
        self.rows
            .get(row)
            .and_then(|r| r.get(idx))
            .ok_or_else(|| AppError::Render(format!("row {row} is out of range")))
    }

    pub fn num(&self, row: usize, col: &str) -> AppResult<f64> {
        self.cell(row, col)?.as_f64().ok_or_else(|| {
            AppError::Render(format!("column '{col}' in row {row} is not numeric"))
        })
    }

    pub fn text(&self, row: usize, col: &str) -> AppResult<String> {
        self.cell(row, col)?
            .as_text()
            .map(str::to_string)
            .ok_or_else(|| AppError::Render(format!("column '{col}' in row {row} is not text")))
    }
}
