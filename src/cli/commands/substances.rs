//! Handle the `substances` command: scatter of smoking vs alcohol deaths
//! with a fitted trend line.

use crate::chart::scatter;
use crate::cli::commands::{finish, RenderOpts};
use crate::config::Config;
use crate::db::connection::Db;
use crate::db::queries;
use crate::errors::AppResult;

pub fn handle(cfg: &Config, opts: &RenderOpts) -> AppResult<()> {
    let mut db = Db::connect(cfg)?;
    let rows = queries::substance_use(&mut db)?;
    let figure = scatter::substance_scatter(&rows)?;
    finish(&figure, "smoke_vs_alcohol.html", opts)
}
