//! Command-line argument definitions for the prereqs CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control the catalog and output locations,
//! configuration file selection, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the prerequisite graph exporter
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the persisted catalog (JSON)
    #[arg(help = "Path to the catalog file")]
    pub catalog: String,

    /// Directory receiving one sub-directory per institution and department
    #[arg(short, long, default_value = "output")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Freshly fetched listings (JSON) merged into the catalog, which is then rewritten
    #[arg(long)]
    pub merge: Option<String>,

    /// Only process these institutions (repeatable)
    #[arg(long = "institution", value_name = "CODE")]
    pub institutions: Vec<String>,

    /// Seed pinning department colors
    #[arg(long)]
    pub seed: Option<u64>,

    /// Template directory copied into new department directories
    #[arg(long)]
    pub template: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
