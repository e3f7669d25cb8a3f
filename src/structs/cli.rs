use std::path::PathBuf;
use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "contract-review")]
#[clap(about = "Review contract edits change by change and merge the approved ones", long_about = None)]
pub struct Cli {
    /// Configuration file (defaults to ~/contract-review/config.toml)
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Commands,
}
