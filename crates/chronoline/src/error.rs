//! Error types for Chronoline operations.
//!
//! This module provides the main error type [`ChronolineError`] which wraps
//! the error conditions that can occur while loading, laying out and
//! exporting a timeline.

use std::io;

use thiserror::Error;

use chronoline_parser::ParseError;

use crate::{step::StepError, window::WindowError};

/// The main error type for Chronoline operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant keeps the source text next to the diagnostics so
/// that callers can render source snippets for each of them.
#[derive(Debug, Error)]
pub enum ChronolineError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Layout error: {0}")]
    Layout(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for ChronolineError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

impl From<WindowError> for ChronolineError {
    fn from(error: WindowError) -> Self {
        Self::Config(error.to_string())
    }
}

impl From<StepError> for ChronolineError {
    fn from(error: StepError) -> Self {
        Self::Layout(error.to_string())
    }
}

impl ChronolineError {
    /// Create a new `Parse` error with the associated source text.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
