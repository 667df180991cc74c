//! Handle the `init` command: create the configuration directory and a
//! default configuration file. The database itself is external and is never
//! created or migrated by this tool.

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages;

pub fn handle(cli: &Cli) -> AppResult<()> {
    let path = Config::init_all(cli.config.as_deref())?;
    messages::success(format!("Configuration written to {}", path.display()));
    println!(
        "Edit it to point at your database, or set the HEALTHVIZ_DB_* environment variables."
    );
    Ok(())
}
