//! Handle the `drugs` command: bar chart of the five countries with the
//! highest drug use.

use crate::chart::bar;
use crate::cli::commands::{finish, RenderOpts};
use crate::config::Config;
use crate::db::connection::Db;
use crate::db::queries;
use crate::errors::AppResult;

pub fn handle(cfg: &Config, opts: &RenderOpts) -> AppResult<()> {
    let mut db = Db::connect(cfg)?;
    let rows = queries::top_drug_use(&mut db)?;
    let figure = bar::drug_use_bar(&rows)?;
    finish(&figure, "drug_use.html", opts)
}
