//! Error codes for the Chronoline diagnostic system.
//!
//! Error codes are organized by phase:
//! - `E1xx` - Document structure errors
//! - `E2xx` - Instant errors
//! - `E3xx` - Attribute errors

use std::fmt;

/// Error codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Document Errors (E1xx)
    // =========================================================================
    /// Malformed JSON.
    ///
    /// The source is not syntactically valid JSON.
    E100,

    /// Incomplete input.
    ///
    /// The source ended before the JSON document was complete.
    E101,

    /// Invalid document structure.
    ///
    /// The JSON is valid but a field has the wrong type, e.g. `events`
    /// is an object instead of an array.
    E102,

    // =========================================================================
    // Instant Errors (E2xx)
    // =========================================================================
    /// Invalid instant.
    ///
    /// An instant literal is not in a recognized format or names a date
    /// that does not exist.
    E200,

    /// Missing instant.
    ///
    /// An event has no `start` instant.
    E201,

    /// Invalid view bound.
    ///
    /// A `view.start` or `view.end` literal cannot be read. Unlike entity
    /// instants this is fatal, since the whole layout depends on it.
    E202,

    // =========================================================================
    // Attribute Errors (E3xx)
    // =========================================================================
    /// Invalid color.
    ///
    /// A color is neither an `r,g,b` triple nor a CSS color.
    E300,

    /// Inverted event span.
    ///
    /// An event's `end` is before its `start`.
    E301,

    /// Unknown category.
    ///
    /// An event references a category that is not declared.
    E302,
}

impl ErrorCode {
    /// Returns the numeric code as a string (e.g., "E200").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
            ErrorCode::E200 => "E200",
            ErrorCode::E201 => "E201",
            ErrorCode::E202 => "E202",
            ErrorCode::E300 => "E300",
            ErrorCode::E301 => "E301",
            ErrorCode::E302 => "E302",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "malformed JSON",
            ErrorCode::E101 => "incomplete input",
            ErrorCode::E102 => "invalid document structure",
            ErrorCode::E200 => "invalid instant",
            ErrorCode::E201 => "missing instant",
            ErrorCode::E202 => "invalid view bound",
            ErrorCode::E300 => "invalid color",
            ErrorCode::E301 => "inverted event span",
            ErrorCode::E302 => "unknown category",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
