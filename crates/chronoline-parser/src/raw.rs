//! Serde mirror of the timeline JSON payload.
//!
//! Every field is optional here; deciding what a missing or malformed value
//! means is left to elaboration, which can report it with a diagnostic.

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::error::Category;

use crate::{
    error::{Diagnostic, ErrorCode},
    span::Span,
};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawDocument {
    pub view: Option<RawView>,
    pub eras: Vec<RawEra>,
    pub events: Vec<RawEvent>,
    pub categories: IndexMap<String, RawCategory>,
    pub hidden_categories: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawView {
    pub start: Option<String>,
    pub end: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawEra {
    pub name: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub color: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawEvent {
    pub start: Option<String>,
    pub end: Option<String>,
    pub text: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub color: Option<String>,
    pub milestone: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawCategory {
    pub color: Option<String>,
    pub font_color: Option<String>,
}

/// Deserializes the payload, mapping `serde_json` failures to a fatal
/// diagnostic pointing at the reported line and column.
pub(crate) fn from_json(source: &str) -> Result<RawDocument, Diagnostic> {
    serde_json::from_str(source).map_err(|err| {
        let span = Span::at_line_column(source, err.line(), err.column());
        let (code, label, help) = match err.classify() {
            Category::Eof => (
                ErrorCode::E101,
                "input ends here",
                "close every open object and array",
            ),
            Category::Data => (
                ErrorCode::E102,
                "unexpected value",
                "`eras` and `events` are arrays, `view` and `categories` are objects",
            ),
            Category::Syntax | Category::Io => (
                ErrorCode::E100,
                "here",
                "the timeline must be a single JSON object",
            ),
        };
        Diagnostic::error(err.to_string())
            .with_code(code)
            .with_label(span, label)
            .with_help(help)
    })
}

/// Treats blank strings the same as absent values.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_accepts_empty_object() {
        let raw = from_json("{}").unwrap();
        assert!(raw.view.is_none());
        assert!(raw.events.is_empty());
        assert!(raw.categories.is_empty());
    }

    #[test]
    fn test_from_json_ignores_unknown_fields() {
        let source = r#"{
            "version": "2.9.0",
            "timetype": "gregoriantime",
            "events": [{"start": "2025-01-01", "duration": "x"}]
        }"#;
        let raw = from_json(source).unwrap();
        assert_eq!(raw.events.len(), 1);
    }

    #[test]
    fn test_from_json_keeps_category_order() {
        let raw = from_json(r#"{"categories": {"b": {}, "a": {"color": "1,2,3"}}}"#).unwrap();
        let names: Vec<&str> = raw.categories.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn test_from_json_syntax_error() {
        let diag = from_json("{\n  \"events\": [\n    oops\n  ]\n}").unwrap_err();
        assert_eq!(diag.code(), Some(ErrorCode::E100));
        assert!(diag.severity().is_error());

        // Third line starts at byte 16; the label lands on `oops`
        let start = diag.labels()[0].span().start();
        assert!((16..=21).contains(&start), "label starts at {start}");
    }

    #[test]
    fn test_from_json_eof() {
        let diag = from_json("{\"events\": [").unwrap_err();
        assert_eq!(diag.code(), Some(ErrorCode::E101));
    }

    #[test]
    fn test_from_json_wrong_type() {
        let diag = from_json(r#"{"events": {"start": "2025-01-01"}}"#).unwrap_err();
        assert_eq!(diag.code(), Some(ErrorCode::E102));
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(Some("  ".to_string())), None);
        assert_eq!(non_blank(Some("x".to_string())).as_deref(), Some("x"));
        assert_eq!(non_blank(None), None);
    }
}
