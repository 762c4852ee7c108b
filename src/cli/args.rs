//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub const DEFAULT_DB: &str = "LISTS/master_oui.min.json";

#[derive(Parser, Debug)]
#[command(name = "ouidb", version, about = "Merged OUI vendor database: build and query")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Merge all source files into the master database artifacts
    Build {
        /// Directory containing the downloaded source files
        #[arg(long, default_value = "sources")]
        sources: PathBuf,

        /// Directory to write the output artifacts into
        #[arg(long, default_value = "LISTS")]
        output: PathBuf,
    },

    /// Look up the vendor for a MAC address
    Lookup {
        /// MAC address in any common notation
        mac: String,

        /// Path to the compact JSON database
        #[arg(long, default_value = DEFAULT_DB)]
        db: PathBuf,
    },

    /// Search vendors by name
    Search {
        /// Case-insensitive substring to match
        term: String,

        /// Path to the compact JSON database
        #[arg(long, default_value = DEFAULT_DB)]
        db: PathBuf,

        /// Maximum number of matches to display
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },

    /// Extract and look up every MAC address found in a text file
    Extract {
        /// File to scan
        file: PathBuf,

        /// Path to the compact JSON database
        #[arg(long, default_value = DEFAULT_DB)]
        db: PathBuf,
    },

    /// Show database statistics
    Stats {
        /// Path to the compact JSON database
        #[arg(long, default_value = DEFAULT_DB)]
        db: PathBuf,
    },
}
