//! Command-line argument definitions for the Chronoline CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, the reference instant, hidden categories, and logging
//! verbosity.

use clap::Parser;

/// Command-line arguments for the Chronoline timeline renderer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input timeline JSON file
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Instant used when the document has no view start, e.g. `2025-03-01`
    #[arg(long)]
    pub now: Option<String>,

    /// Category to hide; may be repeated
    #[arg(long = "hide", value_name = "CATEGORY")]
    pub hidden_categories: Vec<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
