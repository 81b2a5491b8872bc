use clap::Parser;
use std::path::PathBuf;

/// Command-line configuration. Endpoint, credentials, storage path and
/// page size can also come from a TOML file (`--config`); flags given
/// here win over file values.
#[derive(Debug, Clone, Parser)]
#[command(name = "recipe-finder")]
#[command(about = "Pick a cuisine and search recipes for it")]
pub struct CliConfig {
    /// Recipe service endpoint
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Application id credential
    #[arg(long, env = "EDAMAM_APP_ID")]
    pub app_id: Option<String>,

    /// Application key credential
    #[arg(long, env = "EDAMAM_APP_KEY")]
    pub app_key: Option<String>,

    /// Path of the persisted cuisine selection
    #[arg(long)]
    pub selection_path: Option<PathBuf>,

    /// TOML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Skip the selector and search this cuisine
    #[arg(long)]
    pub cuisine: Option<String>,

    /// Free-text search submitted with the first fetch
    #[arg(long)]
    pub query: Option<String>,

    /// Result window size
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Use the legacy keyword query shape
    #[arg(long)]
    pub keyword_search: bool,

    /// Open the Nth result (1-based) in the system browser
    #[arg(long)]
    pub open: Option<usize>,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,
}
