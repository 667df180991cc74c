//! Fixed query text and typed row mapping for each chart.
//! Every query is read-only. The per-country filter is parameter-bound; the
//! country codes come from a fixed default list or validated CLI input.

use crate::db::connection::Db;
use crate::db::table::{Scalar, Table};
use crate::errors::{AppError, AppResult};
use crate::models::{CategoryValue, CountryIndicators, RegionMetric, SubstanceUse};
use mysql::prelude::Queryable;
use mysql::{Params, Value};

const INDICATORS_SQL: &str = "SELECT child_wasting, non_bfeeding, low_birth_weight \
     FROM child_mortality \
     WHERE iso_code = ?";

const SANITATION_SQL: &str = "SELECT c.countries_name, c.iso_code, \
            env.unsafe_water + env.unsafe_sanitation + env.hand_washing AS total_sanitation \
     FROM countries c \
     JOIN env_factor env ON c.iso_code = env.iso_code";

const POLLUTION_SQL: &str = "SELECT countries.countries_name, \
            air_pol.indoor + air_pol.outdoor AS total_pollution \
     FROM countries \
     JOIN air_pol ON countries.iso_code = air_pol.iso_code \
     ORDER BY total_pollution DESC \
     LIMIT 10";

const DRUG_USE_SQL: &str = "SELECT c.countries_name, a.drug_use \
     FROM addiction a \
     JOIN countries c ON a.iso_code = c.iso_code \
     ORDER BY a.drug_use DESC \
     LIMIT 5";

const SUBSTANCES_SQL: &str = "SELECT c.countries_name, a.smoke, a.alcohol \
     FROM addiction a \
     JOIN countries c ON a.iso_code = c.iso_code \
     WHERE a.smoke < 3000 AND a.alcohol < 3000";

/// Execute one SQL string and collect the full result set.
/// Column names and order are taken from the result metadata, so they match
/// the SELECT clause.
pub fn run_query(db: &mut Db, sql: &str, params: Params) -> AppResult<Table> {
    let result = db.conn.exec_iter(sql, params).map_err(AppError::Query)?;

    let mut columns: Vec<String> = Vec::new();
    let mut rows: Vec<Vec<Scalar>> = Vec::new();

    for row in result {
        let row = row.map_err(AppError::Query)?;
        if columns.is_empty() {
            columns = row
                .columns_ref()
                .iter()
                .map(|c| c.name_str().into_owned())
                .collect();
        }
        rows.push(row.unwrap().into_iter().map(Scalar::from).collect());
    }

    Ok(Table { columns, rows })
}

/// The three child-health indicators for one country, or None when the
/// country has no row (the caller decides whether that is fatal).
pub fn country_indicators(db: &mut Db, iso_code: &str) -> AppResult<Option<CountryIndicators>> {
    let params = Params::Positional(vec![Value::from(iso_code.to_string())]);
    let table = run_query(db, INDICATORS_SQL, params)?;

    if table.is_empty() {
        return Ok(None);
    }

    table.require_columns(&["child_wasting", "non_bfeeding", "low_birth_weight"])?;
    Ok(Some(CountryIndicators {
        iso_code: iso_code.to_string(),
        child_wasting: table.num(0, "child_wasting")?,
        non_bfeeding: table.num(0, "non_bfeeding")?,
        low_birth_weight: table.num(0, "low_birth_weight")?,
    }))
}

/// Deaths attributable to unsafe water, sanitation and hygiene, per country.
pub fn sanitation_by_country(db: &mut Db) -> AppResult<Vec<RegionMetric>> {
    let table = run_query(db, SANITATION_SQL, Params::Empty)?;
    if table.is_empty() {
        return Ok(Vec::new());
    }

    table.require_columns(&["countries_name", "iso_code", "total_sanitation"])?;
    (0..table.len())
        .map(|i| {
            Ok(RegionMetric {
                country: table.text(i, "countries_name")?,
                iso_code: table.text(i, "iso_code")?,
                value: table.num(i, "total_sanitation")?,
            })
        })
        .collect()
}

/// The ten countries with the highest air-pollution deaths, descending.
pub fn top_air_pollution(db: &mut Db) -> AppResult<Vec<CategoryValue>> {
    category_values(db, POLLUTION_SQL, "total_pollution")
}

/// The five countries with the highest drug use, descending.
pub fn top_drug_use(db: &mut Db) -> AppResult<Vec<CategoryValue>> {
    category_values(db, DRUG_USE_SQL, "drug_use")
}

fn category_values(db: &mut Db, sql: &str, value_column: &str) -> AppResult<Vec<CategoryValue>> {
    let table = run_query(db, sql, Params::Empty)?;
    if table.is_empty() {
        return Ok(Vec::new());
    }

    table.require_columns(&["countries_name", value_column])?;
    (0..table.len())
        .map(|i| {
            Ok(CategoryValue {
                label: table.text(i, "countries_name")?,
                value: table.num(i, value_column)?,
            })
        })
        .collect()
}

/// Smoking vs alcohol deaths, pre-filtered to < 3000 by the WHERE clause.
pub fn substance_use(db: &mut Db) -> AppResult<Vec<SubstanceUse>> {
    let table = run_query(db, SUBSTANCES_SQL, Params::Empty)?;
    if table.is_empty() {
        return Ok(Vec::new());
    }

    table.require_columns(&["countries_name", "smoke", "alcohol"])?;
    (0..table.len())
        .map(|i| {
            Ok(SubstanceUse {
                country: table.text(i, "countries_name")?,
                smoke: table.num(i, "smoke")?,
                alcohol: table.num(i, "alcohol")?,
            })
        })
        .collect()
}
