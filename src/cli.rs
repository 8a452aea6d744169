use clap::Parser;
use std::path::PathBuf;

/// Chipselect - demo host for the searchable multi-select widget
#[derive(Parser, Debug, Clone)]
#[command(name = "chipselect", version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, env = "CHIPSELECT_CONFIG", default_value = "chipselect.toml")]
    pub config: PathBuf,

    /// Server host address
    #[arg(long, env = "CHIPSELECT_HOST")]
    pub host: Option<String>,

    /// Server port
    #[arg(long, env = "CHIPSELECT_PORT")]
    pub port: Option<u16>,

    /// JSON file with the selectable users (bundled dataset when omitted)
    #[arg(long, env = "CHIPSELECT_DATASET")]
    pub dataset: Option<PathBuf>,
}
