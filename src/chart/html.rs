//! Writes a figure into a self-contained HTML page rendered by plotly.js.
//! The page is the interactive display surface; no server is involved.

use crate::chart::figure::Figure;
use crate::errors::AppResult;
use std::fs;
use std::path::Path;
use std::process::Command;

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

pub fn write_figure(figure: &Figure, path: &Path) -> AppResult<()> {
    let json = serde_json::to_string(figure)?;
    let page = format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>healthviz</title>\n\
         <script src=\"{PLOTLY_CDN}\"></script>\n\
         </head>\n\
         <body>\n\
         <div id=\"chart\"></div>\n\
         <script>\n\
         const figure = {json};\n\
         Plotly.newPlot(\"chart\", figure.data, figure.layout);\n\
         </script>\n\
         </body>\n\
         </html>\n"
    );

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, page)?;
    Ok(())
}

/// Launch the platform opener so the chart shows up in the default browser.
pub fn open_in_browser(path: &Path) -> AppResult<()> {
    #[cfg(target_os = "macos")]
    let mut cmd = Command::new("open");

    #[cfg(target_os = "windows")]
    let mut cmd = {
        let mut c = Command::new("cmd");
        c.args(["/C", "start", ""]);
        c
    };

    #[cfg(all(unix, not(target_os = "macos")))]
    let mut cmd = Command::new("xdg-open");

    cmd.arg(path).spawn()?;
    Ok(())
}
