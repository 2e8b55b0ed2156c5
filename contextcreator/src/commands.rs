use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "contextcreator", version, about = "Context creator CLI")]
pub struct Cli {
    /// TOML file holding the local plugin configuration
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// Log every dispatched action
    #[arg(long, short, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the plugin tree built from a registry
    Tree {
        #[arg(long)]
        registry: Option<PathBuf>,
    },
    /// Replay an action log and print the resulting editing state
    Replay(ReplayArgs),
    /// Replay an action log and print the context resource it produces
    Export(ReplayArgs),
}

#[derive(Args)]
pub struct ReplayArgs {
    /// JSON plugin registry (`{"plugins": [...]}`)
    #[arg(long)]
    pub registry: Option<PathBuf>,
    /// JSON array of actions
    #[arg(long)]
    pub actions: Option<PathBuf>,
    /// Persisted context to load before replaying
    #[arg(long)]
    pub resource: Option<PathBuf>,
    /// JSON array of available templates
    #[arg(long)]
    pub templates: Option<PathBuf>,
    /// Write the result here instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,
}
