//! Collector for accumulating diagnostics while loading a document.

use log::debug;

use crate::error::{Diagnostic, ParseError};

/// Accumulates diagnostics so that one load reports every problem.
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
    has_errors: bool,
}

impl DiagnosticCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a diagnostic to this collector.
    pub fn emit(&mut self, diagnostic: Diagnostic) {
        if diagnostic.severity().is_error() {
            self.has_errors = true;
        } else {
            debug!(
                code = diagnostic.code().map(|c| c.as_str()).unwrap_or("-"),
                subject = diagnostic.subject().unwrap_or("-");
                "{}", diagnostic.message()
            );
        }
        self.diagnostics.push(diagnostic);
    }

    /// Returns `true` if an error has been emitted.
    pub fn has_errors(&self) -> bool {
        self.has_errors
    }

    /// Finish collection.
    ///
    /// - If there are errors, returns `Err(ParseError)` with all diagnostics.
    /// - Otherwise returns the warnings.
    pub fn finish(self) -> Result<Vec<Diagnostic>, ParseError> {
        if self.has_errors {
            Err(ParseError::new(self.diagnostics))
        } else {
            Ok(self.diagnostics)
        }
    }
}
