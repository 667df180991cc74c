//! Handle the `indicators` command: one query per requested country,
//! overlaid as lines on a single chart.

use crate::chart::line;
use crate::cli::commands::{finish, RenderOpts};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::connection::Db;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::ui::messages;

pub fn handle(cmd: &Commands, cfg: &Config, opts: &RenderOpts) -> AppResult<()> {
    if let Commands::Indicators { countries } = cmd {
        let codes = validate_codes(countries)?;

        let mut db = Db::connect(cfg)?;
        let mut profiles = Vec::new();
        for code in &codes {
            match queries::country_indicators(&mut db, code)? {
                Some(profile) => profiles.push(profile),
                None => messages::warning(format!("no indicator data for {code}, skipping")),
            }
        }

        let figure = line::indicator_lines(&profiles)?;
        finish(&figure, "health_indicators.html", opts)?;
    }
    Ok(())
}

/// Country codes come from the CLI, so check the shape before they reach
/// the query layer.
fn validate_codes(raw: &[String]) -> AppResult<Vec<String>> {
    raw.iter()
        .map(|c| {
            let code = c.trim().to_ascii_uppercase();
            if code.len() == 3 && code.chars().all(|ch| ch.is_ascii_alphabetic()) {
                Ok(code)
            } else {
                Err(AppError::InvalidCountryCode(c.clone()))
            }
        })
        .collect()
}
