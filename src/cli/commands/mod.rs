pub mod config;
pub mod drugs;
pub mod indicators;
pub mod init;
pub mod pollution;
pub mod sanitation;
pub mod substances;

use crate::chart::figure::Figure;
use crate::chart::html;
use crate::errors::AppResult;
use crate::ui::messages;
use std::path::PathBuf;

/// Output options shared by every chart command.
pub struct RenderOpts {
    pub out: Option<PathBuf>,
    pub open: bool,
}

impl RenderOpts {
    pub fn target(&self, default_name: &str) -> PathBuf {
        self.out
            .clone()
            .unwrap_or_else(|| PathBuf::from(default_name))
    }
}

/// Write the figure, report the artifact path, optionally open it.
pub(crate) fn finish(figure: &Figure, default_name: &str, opts: &RenderOpts) -> AppResult<()> {
    let path = opts.target(default_name);
    html::write_figure(figure, &path)?;
    messages::success(format!("Chart written to {}", path.display()));
    if opts.open {
        html::open_in_browser(&path)?;
    }
    Ok(())
}
