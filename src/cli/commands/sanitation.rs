//! Handle the `sanitation` command: world map of deaths linked to unsafe
//! water, sanitation and hygiene.

use crate::chart::map;
use crate::cli::commands::{finish, RenderOpts};
use crate::config::Config;
use crate::db::connection::Db;
use crate::db::queries;
use crate::errors::AppResult;

pub fn handle(cfg: &Config, opts: &RenderOpts) -> AppResult<()> {
    let mut db = Db::connect(cfg)?;
    let rows = queries::sanitation_by_country(&mut db)?;
    let figure = map::sanitation_map(&rows)?;
    finish(&figure, "sanitation_deaths.html", opts)
}
