use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "reelvault")]
#[command(author, version, about = "Movie library hardlink organizer")]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan a movie folder and hardlink releases under canonical names
    Link {
        /// Source directory to scan
        #[arg(required = true)]
        source: PathBuf,

        /// Destination library root
        #[arg(required = true)]
        dest: PathBuf,

        /// Show what would be linked without touching the filesystem
        #[arg(long)]
        dry_run: bool,
    },

    /// Parse a release name and display the extracted fields
    Parse {
        /// Release name to parse
        #[arg(required = true)]
        name: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Display version information
    Version,
}
