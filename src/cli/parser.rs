//! Command-line interface definition for healthviz.
//! One subcommand per chart, plus config maintenance.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "healthviz",
    version = env!("CARGO_PKG_VERSION"),
    about = "Render charts from a global-health mortality database",
    long_about = None
)]
pub struct Cli {
    /// Override the configuration file path
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    /// Output path for the chart artifact (default depends on the chart)
    #[arg(global = true, long = "out")]
    pub out: Option<String>,

    /// Open the rendered chart in the default browser
    #[arg(global = true, long = "open")]
    pub open: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration directory and a default configuration file
    Init,

    /// Inspect the configuration (connection credentials)
    Config {
        #[arg(long = "print", help = "Print the resolved configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check the configuration for missing fields")]
        check: bool,
    },

    /// Line chart of child-health indicators for a set of countries
    Indicators {
        /// ISO country codes to overlay, comma separated (three letters each)
        #[arg(
            long = "countries",
            value_delimiter = ',',
            default_values_t = ["TUR", "USA", "GBR", "VNM", "FIN", "BGR"].map(String::from)
        )]
        countries: Vec<String>,
    },

    /// World map of deaths linked to unsafe water and sanitation
    Sanitation,

    /// Pie chart of the ten countries with the highest air pollution
    Pollution,

    /// Bar chart of the five countries with the highest drug use
    Drugs,

    /// Scatter of smoking vs alcohol deaths with a fitted trend line
    Substances,
}
