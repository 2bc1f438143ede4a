use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "stockz",
    bin_name = "stockz",
    version,
    disable_help_subcommand = true,
    after_help = "Type `help` inside a session to list the stock commands."
)]
#[command(about = "Interactive stock list: add products, edit quantities, search", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Read session lines from a file instead of stdin
    #[arg(long, value_name = "FILE", help_heading = "Options")]
    pub script: Option<PathBuf>,

    /// Answer yes to every confirmation
    #[arg(short, long, help_heading = "Options")]
    pub yes: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputMode::Text, help_heading = "Options")]
    pub output: OutputMode,

    /// Disable colored output
    #[arg(long, help_heading = "Options")]
    pub no_color: bool,

    /// Smallest accepted quantity (overrides configuration)
    #[arg(long, value_name = "N", help_heading = "Configuration")]
    pub min_quantity: Option<f64>,

    /// Search debounce in milliseconds (overrides configuration)
    #[arg(long, value_name = "MS", help_heading = "Configuration")]
    pub debounce_ms: Option<u64>,

    /// Verbose logging to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true, help_heading = "Options")]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Show the resolved configuration
    Config,
}
