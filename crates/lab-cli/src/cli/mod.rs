use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod global;

pub use global::{GlobalFlags, OutputFormat};

/// Top-level CLI parser for the `labsync` binary.
#[derive(Debug, Parser)]
#[command(
    name = "labsync",
    version,
    about = "Track lab specimens and pull their results from the portal"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Extra configuration file, layered over labsync.toml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Register a specimen as pending.
    Add {
        /// Holder name; must appear in the configured roster
        #[arg(long)]
        name: String,
        /// Specimen barcode as printed on the collection kit
        #[arg(long)]
        barcode: String,
    },
    /// Show the most recently updated specimens.
    List {
        #[arg(long, default_value_t = 10)]
        limit: u32,
    },
    /// Show the names in the configured roster.
    Roster,
    /// Run one reconciliation pass and print its report.
    Sync,
    /// Reconcile on the configured interval until interrupted.
    Run,
}

impl Cli {
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            config: self.config.clone(),
        }
    }
}
