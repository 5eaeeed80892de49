//! CLI argument definitions using clap

use clap::Parser;
use clap_complete::Shell;

/// Detective Quest: explore the mansion's binary-tree map from your terminal
#[derive(Parser, Debug)]
#[command(name = "dquest")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging (-d, -dd, -ddd)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Generate shell completions
    #[arg(long = "generate", value_enum)]
    pub generator: Option<Shell>,

    /// Print author and version information
    #[arg(long)]
    pub info: bool,
}
