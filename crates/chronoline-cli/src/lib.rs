//! CLI logic for the Chronoline timeline renderer.
//!
//! Reads a timeline JSON file, lays it out and writes the SVG.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::{info, warn};

use chronoline::{ChronolineError, TimelineBuilder};
use chronoline_parser::parse_instant;

use error_adapter::render_warnings;

/// Run the Chronoline CLI application
///
/// This function processes the input file through the Chronoline pipeline
/// and writes the resulting SVG to the output file. Entities skipped while
/// loading are reported as warnings.
///
/// # Errors
///
/// Returns `ChronolineError` for:
/// - File I/O errors
/// - Configuration loading errors, including an unreadable `--now`
/// - Parsing errors
/// - Layout errors
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), ChronolineError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing timeline"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let mut builder = TimelineBuilder::new(app_config)
        .with_hidden_categories(args.hidden_categories.iter().cloned());
    if let Some(now) = &args.now {
        let now = parse_instant(now)
            .map_err(|err| ChronolineError::Config(format!("--now: {err}")))?;
        builder = builder.with_now(now);
    }

    let source = fs::read_to_string(&args.input)?;

    let parsed = builder.parse(&source)?;
    for report in render_warnings(parsed.warnings(), &source) {
        warn!("{report}");
    }

    let svg = builder.render_svg(parsed.document())?;

    fs::write(&args.output, svg)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}
