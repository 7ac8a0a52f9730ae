use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "cb")]
#[command(about = "Share recipes from the command line")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Server URL (defaults to the configured server address)
    #[arg(long, global = true, conflicts_with = "local")]
    pub server: Option<String>,

    /// Keep accounts and recipes in a local JSON file instead of a server
    #[arg(long, global = true)]
    pub local: bool,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
