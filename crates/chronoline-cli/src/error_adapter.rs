//! Error adapter for converting ChronolineError to miette diagnostics.
//!
//! Library errors and parse diagnostics are plain types; this module wraps
//! them so that the CLI can render them with miette's graphical handler.
//!
//! # Multi-Error Support
//!
//! A [`chronoline_parser::error::ParseError`] carries every diagnostic found
//! in the document, including entity warnings. Each one becomes its own
//! [`Reportable`]. Warnings of a successful parse are rendered through
//! [`render_warnings`].

use std::fmt;

use miette::{
    Diagnostic as MietteDiagnostic, GraphicalReportHandler, LabeledSpan, Severity as MietteSeverity,
    SourceSpan,
};

use chronoline::ChronolineError;
use chronoline_parser::{
    Span,
    error::{Diagnostic, Severity},
};

/// A single timeline diagnostic together with the JSON it points into.
pub struct DiagnosticAdapter<'a> {
    diag: &'a Diagnostic,
    src: &'a str,
}

impl<'a> DiagnosticAdapter<'a> {
    pub fn new(diag: &'a Diagnostic, src: &'a str) -> Self {
        Self { diag, src }
    }
}

impl fmt::Debug for DiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiagnosticAdapter")
            .field("diag", &self.diag)
            .finish()
    }
}

impl fmt::Display for DiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.diag.subject() {
            Some(subject) => write!(f, "{subject}: {}", self.diag.message()),
            None => f.write_str(self.diag.message()),
        }
    }
}

impl std::error::Error for DiagnosticAdapter<'_> {}

impl MietteDiagnostic for DiagnosticAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diag
            .code()
            .map(|c| Box::new(c) as Box<dyn fmt::Display>)
    }

    fn severity(&self) -> Option<MietteSeverity> {
        Some(match self.diag.severity() {
            Severity::Error => MietteSeverity::Error,
            Severity::Warning => MietteSeverity::Warning,
        })
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diag
            .help()
            .map(|h| Box::new(h) as Box<dyn fmt::Display>)
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let labels = self.diag.labels();
        if labels.is_empty() {
            return None;
        }

        Some(Box::new(labels.iter().map(|label| {
            let span = span_to_miette(label.span());
            let message = Some(label.message().to_string());
            if label.is_primary() {
                LabeledSpan::new_primary_with_span(message, span)
            } else {
                LabeledSpan::new_with_span(message, span)
            }
        })))
    }
}

/// A [`ChronolineError`] without source locations: I/O, configuration,
/// layout and export failures.
pub struct ErrorAdapter<'a>(pub &'a ChronolineError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            ChronolineError::Io(_) => "chronoline::io",
            ChronolineError::Parse { .. } => return None,
            ChronolineError::Config(_) => "chronoline::config",
            ChronolineError::Layout(_) => "chronoline::layout",
            ChronolineError::Export(_) => "chronoline::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match &self.0 {
            ChronolineError::Config(_) => Some(Box::new(
                "check the [layout] and [style] sections of the configuration file",
            )),
            _ => None,
        }
    }
}

/// Either a located diagnostic or a plain error.
#[derive(Debug)]
pub enum Reportable<'a> {
    Diagnostic(DiagnosticAdapter<'a>),
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Diagnostic(d) => fmt::Display::fmt(d, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Diagnostic(_) => None,
            Reportable::Error(e) => e.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic(d) => d.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn severity(&self) -> Option<MietteSeverity> {
        match self {
            Reportable::Diagnostic(d) => d.severity(),
            Reportable::Error(_) => Some(MietteSeverity::Error),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic(d) => d.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Diagnostic(d) => d.source_code(),
            Reportable::Error(e) => e.source_code(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Diagnostic(d) => d.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

fn span_to_miette(span: Span) -> SourceSpan {
    SourceSpan::new(span.start().into(), span.len())
}

/// Splits a [`ChronolineError`] into independently renderable reports.
///
/// A parse error yields one report per diagnostic, errors first. Every other
/// variant yields a single report.
pub fn to_reportables(err: &ChronolineError) -> Vec<Reportable<'_>> {
    match err {
        ChronolineError::Parse {
            err: parse_err,
            src,
        } => {
            let mut diagnostics: Vec<&Diagnostic> = parse_err.diagnostics().iter().collect();
            diagnostics.sort_by_key(|d| d.severity().is_warning());
            diagnostics
                .into_iter()
                .map(|d| Reportable::Diagnostic(DiagnosticAdapter::new(d, src)))
                .collect()
        }
        _ => vec![Reportable::Error(ErrorAdapter(err))],
    }
}

/// Renders the warnings of a successful parse, one string per warning.
pub fn render_warnings(warnings: &[Diagnostic], src: &str) -> Vec<String> {
    let reporter = GraphicalReportHandler::new();
    warnings
        .iter()
        .map(|warning| {
            let adapter = DiagnosticAdapter::new(warning, src);
            let mut writer = String::new();
            match reporter.render_report(&mut writer, &adapter) {
                Ok(()) => writer,
                Err(_) => adapter.to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chronoline_parser::error::{ErrorCode, ParseError};

    use super::*;

    const SOURCE: &str = r#"{"events": [{"start": "2025-02-30"}]}"#;

    fn instant_warning() -> Diagnostic {
        Diagnostic::warning("invalid instant `2025-02-30`")
            .with_code(ErrorCode::E200)
            .with_subject("events[0].start")
            .with_label(Span::new(23..33), "not a calendar date")
    }

    #[test]
    fn test_single_diagnostic() {
        let diag = Diagnostic::error("invalid view bound")
            .with_code(ErrorCode::E202)
            .with_label(Span::new(0..5), "here")
            .with_help("use YYYY-MM-DD");
        let err = ChronolineError::new_parse_error(ParseError::from(diag), "hello");

        let reportables = to_reportables(&err);
        assert_eq!(reportables.len(), 1);

        match &reportables[0] {
            Reportable::Diagnostic(d) => {
                assert_eq!(d.to_string(), "invalid view bound");
                assert_eq!(d.severity(), Some(MietteSeverity::Error));
            }
            Reportable::Error(_) => panic!("Expected Diagnostic"),
        }
    }

    #[test]
    fn test_errors_come_before_warnings() {
        let diags = vec![
            instant_warning(),
            Diagnostic::error("invalid view bound")
                .with_code(ErrorCode::E202)
                .with_subject("view.start")
                .with_label(Span::new(0..5), "view"),
        ];
        let err = ChronolineError::new_parse_error(ParseError::from(diags), SOURCE);

        let reportables = to_reportables(&err);
        assert_eq!(reportables.len(), 2);
        assert_eq!(reportables[0].to_string(), "view.start: invalid view bound");
        assert_eq!(
            reportables[1].to_string(),
            "events[0].start: invalid instant `2025-02-30`"
        );
        assert_eq!(reportables[1].severity(), Some(MietteSeverity::Warning));
    }

    #[test]
    fn test_non_parse_error() {
        let err = ChronolineError::Config("layout width must be a positive number".to_string());

        let reportables = to_reportables(&err);

        assert_eq!(reportables.len(), 1);
        match &reportables[0] {
            Reportable::Error(e) => {
                assert_eq!(
                    e.to_string(),
                    "Configuration error: layout width must be a positive number"
                );
                assert!(e.help().is_some());
            }
            Reportable::Diagnostic(_) => panic!("Expected Error"),
        }
    }

    #[test]
    fn test_all_labels_returned() {
        let diag = Diagnostic::warning("event ends before it starts")
            .with_code(ErrorCode::E301)
            .with_label(Span::new(0..5), "end")
            .with_secondary_label(Span::new(10..15), "start");

        let adapter = DiagnosticAdapter::new(&diag, "some source code");

        let labels: Vec<_> = adapter.labels().unwrap().collect();
        assert_eq!(labels.len(), 2);
        assert_eq!(labels[0].label(), Some("end"));
        assert!(labels[0].primary());
        assert!(!labels[1].primary());
    }

    #[test]
    fn test_render_warnings() {
        let rendered = render_warnings(&[instant_warning()], SOURCE);
        assert_eq!(rendered.len(), 1);
        assert!(rendered[0].contains("2025-02-30"));
    }
}
