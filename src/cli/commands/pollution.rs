//! Handle the `pollution` command: pie chart of the ten countries with the
//! highest air-pollution deaths.

use crate::chart::pie;
use crate::cli::commands::{finish, RenderOpts};
use crate::config::Config;
use crate::db::connection::Db;
use crate::db::queries;
use crate::errors::AppResult;

pub fn handle(cfg: &Config, opts: &RenderOpts) -> AppResult<()> {
    let mut db = Db::connect(cfg)?;
    let rows = queries::top_air_pollution(&mut db)?;
    let figure = pie::pollution_pie(&rows)?;
    finish(&figure, "air_pollution.html", opts)
}
