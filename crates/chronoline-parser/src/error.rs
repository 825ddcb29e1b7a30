//! Error and diagnostic system for the Chronoline timeline loader.
//!
//! Loading a timeline reports everything it finds instead of stopping at the
//! first problem:
//! - Malformed JSON and unusable view bounds are errors and abort loading.
//! - Entities with unreadable instants are skipped and reported as warnings.
//! - Unreadable colors and unknown categories are reported as warnings and
//!   fall back to defaults.
//!
//! # Example
//!
//! ```
//! # use chronoline_parser::error::{Diagnostic, ErrorCode};
//! # use chronoline_parser::Span;
//!
//! let diag = Diagnostic::warning("invalid instant `2025-13-01`")
//!     .with_code(ErrorCode::E200)
//!     .with_subject("events[2].start")
//!     .with_label(Span::new(120..130), "not a calendar date")
//!     .with_help("use `YYYY-MM-DD HH:MM:SS`");
//!
//! assert_eq!(diag.to_string(), "warning[E200]: invalid instant `2025-13-01`");
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod label;
mod parse_error;
mod severity;

pub(crate) use collector::DiagnosticCollector;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;
pub use severity::Severity;
