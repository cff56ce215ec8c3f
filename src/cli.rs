use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[clap(bin_name = env!("CARGO_PKG_NAME"), version = env!("CARGO_PKG_VERSION"), about = env!("CARGO_PKG_DESCRIPTION"))]
pub struct Cli {
    /// Path to the configuration file
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Abort on the first row whose date cannot be read
    #[arg(long, global = true)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the tables and events of a calendar page
    Tables {
        /// Calendar page URL or the name of a configured site
        site: String,
    },
    /// Write the events of a calendar page as an iCalendar file
    Export {
        /// Calendar page URL or the name of a configured site
        #[arg(required_unless_present = "preset")]
        site: Option<String>,

        /// Read the events from a JSON preset instead of the site
        #[arg(long, conflicts_with = "site")]
        preset: Option<PathBuf>,

        /// Only export these tables (repeatable); all tables by default
        #[arg(long = "table", short)]
        tables: Vec<String>,

        #[arg(long, short)]
        output: PathBuf,
    },
    /// Write a JSON preset for every configured site
    Json {
        /// Output directory
        #[arg(long, short)]
        output: PathBuf,
    },
}
