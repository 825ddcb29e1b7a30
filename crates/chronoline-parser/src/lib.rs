//! # Chronoline Parser
//!
//! Loads timeline documents from their JSON form. The payload mirrors what
//! timeline viewers serve for a timeline file:
//!
//! ```json
//! {
//!   "view": {"start": "2025-01-01 00:00:00", "end": "2025-03-01 00:00:00"},
//!   "categories": {"Politics": {"color": "200,60,60", "font_color": "255,255,255"}},
//!   "eras": [{"name": "Winter", "start": "2025-01-01", "end": "2025-03-20", "color": "173,216,230"}],
//!   "events": [{"start": "2025-01-20 12:00:00", "text": "Inauguration", "category": "Politics"}],
//!   "hidden_categories": []
//! }
//! ```
//!
//! ## Usage
//!
//! ```
//! # use chronoline_parser::{parse, ParseError};
//! fn main() -> Result<(), ParseError> {
//!     let source = r#"{
//!         "view": {"start": "2025-01-01", "end": "2025-02-01"},
//!         "events": [
//!             {"start": "2025-01-10 09:00:00", "text": "Kickoff"},
//!             {"start": "someday", "text": "Skipped"}
//!         ]
//!     }"#;
//!
//!     let parsed = parse(source)?;
//!     assert_eq!(parsed.document().events().len(), 1);
//!     assert_eq!(parsed.warnings().len(), 1);
//!     Ok(())
//! }
//! ```

pub mod error;

mod elaborate;
mod literal;
mod raw;
mod span;

pub use error::ParseError;
pub use literal::{LiteralError, parse_color, parse_instant};
pub use span::Span;

use chronoline_core::document::TimelineDocument;

use error::Diagnostic;

/// A loaded document together with the warnings raised while loading it.
#[derive(Debug)]
pub struct Parsed {
    document: TimelineDocument,
    warnings: Vec<Diagnostic>,
}

impl Parsed {
    fn new(document: TimelineDocument, warnings: Vec<Diagnostic>) -> Self {
        Self { document, warnings }
    }

    /// The loaded document.
    pub fn document(&self) -> &TimelineDocument {
        &self.document
    }

    /// Warnings for skipped entities and ignored attributes.
    pub fn warnings(&self) -> &[Diagnostic] {
        &self.warnings
    }

    /// Splits into the document and its warnings.
    pub fn into_parts(self) -> (TimelineDocument, Vec<Diagnostic>) {
        (self.document, self.warnings)
    }
}

/// Parse a JSON timeline into a [`TimelineDocument`].
///
/// The pipeline has two steps:
///
/// 1. **Deserialize** - read the JSON payload; malformed JSON is fatal
/// 2. **Elaborate** - read instants and colors, skipping entities that
///    cannot be placed on the timeline
///
/// # Errors
///
/// Returns a [`ParseError`] when the JSON is malformed or a view bound
/// cannot be read. Problems with individual eras and events are reported
/// through [`Parsed::warnings`] instead.
pub fn parse(source: &str) -> Result<Parsed, ParseError> {
    let raw = raw::from_json(source)?;
    elaborate::Builder::new(source).build(raw)
}
