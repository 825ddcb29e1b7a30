//! Elaboration from the raw JSON mirror to a [`TimelineDocument`].
//!
//! Elaboration never fails on a single entity. An era or event whose
//! instants cannot be read is dropped with a warning, an unreadable color is
//! dropped with a warning, and only a broken view window is fatal.

use indexmap::IndexMap;
use log::{debug, info};

use chronoline_core::{
    color::Color,
    document::{Category, Era, Event, Instant, TimelineDocument, ViewWindow},
};

use crate::{
    Parsed,
    error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError},
    literal::{parse_color, parse_instant},
    raw::{RawCategory, RawDocument, RawEra, RawEvent, RawView, non_blank},
    span::Span,
};

const INSTANT_HELP: &str = "use `YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DDTHH:MM:SS` or `YYYY-MM-DD`";
const COLOR_HELP: &str = "use an `r,g,b` triple such as `173,216,230` or a CSS color";

/// Builds a document from the raw payload, collecting diagnostics.
pub(crate) struct Builder<'src> {
    source: &'src str,
    collector: DiagnosticCollector,
}

impl<'src> Builder<'src> {
    pub(crate) fn new(source: &'src str) -> Self {
        Self {
            source,
            collector: DiagnosticCollector::new(),
        }
    }

    pub(crate) fn build(mut self, raw: RawDocument) -> Result<Parsed, ParseError> {
        let view = self.build_view(raw.view.unwrap_or_default());
        let categories = self.build_categories(raw.categories);

        let mut document = TimelineDocument::new().with_view(view);
        for (name, category) in &categories {
            document = document.with_category(name.clone(), *category);
        }

        for (index, raw_era) in raw.eras.into_iter().enumerate() {
            if let Some(era) = self.build_era(index, raw_era) {
                document = document.with_era(era);
            }
        }

        for (index, raw_event) in raw.events.into_iter().enumerate() {
            if let Some(event) = self.build_event(index, raw_event, &categories) {
                document = document.with_event(event);
            }
        }

        for name in raw.hidden_categories {
            document = document.with_hidden_category(name);
        }

        let warnings = self.collector.finish()?;

        info!(
            eras = document.eras().len(),
            events = document.events().len(),
            categories = document.categories().len(),
            warnings = warnings.len();
            "Timeline document loaded"
        );

        Ok(Parsed::new(document, warnings))
    }

    fn build_view(&mut self, raw: RawView) -> ViewWindow {
        let start = self.view_bound("view.start", raw.start);
        let end = self.view_bound("view.end", raw.end);
        ViewWindow::new(start, end)
    }

    fn view_bound(&mut self, subject: &str, text: Option<String>) -> Option<Instant> {
        let text = non_blank(text)?;
        match parse_instant(&text) {
            Ok(instant) => Some(instant),
            Err(err) => {
                let diag = Diagnostic::error(err.to_string())
                    .with_code(ErrorCode::E202)
                    .with_subject(subject)
                    .with_optional_label(self.span_of(&text), "cannot read this view bound")
                    .with_help(INSTANT_HELP);
                self.collector.emit(diag);
                None
            }
        }
    }

    fn build_categories(&mut self, raw: IndexMap<String, RawCategory>) -> IndexMap<String, Category> {
        let mut categories = IndexMap::with_capacity(raw.len());
        for (name, raw_category) in raw {
            let color = self.color(&format!("categories.{name}.color"), raw_category.color);
            let font_color =
                self.color(&format!("categories.{name}.font_color"), raw_category.font_color);

            let mut category = Category::new(color);
            if let Some(font_color) = font_color {
                category = category.with_font_color(font_color);
            }
            categories.insert(name, category);
        }
        categories
    }

    fn build_era(&mut self, index: usize, raw: RawEra) -> Option<Era> {
        let subject = format!("eras[{index}]");

        let start = self.optional_instant(&format!("{subject}.start"), raw.start)?;
        let end = self.optional_instant(&format!("{subject}.end"), raw.end)?;
        let color = self.color(&format!("{subject}.color"), raw.color);

        let mut era = Era::new(start, end);
        if let Some(name) = non_blank(raw.name) {
            era = era.with_name(name);
        }
        if let Some(color) = color {
            era = era.with_color(color);
        }

        debug!(index = index, name = era.name().unwrap_or("-"); "Era elaborated");
        Some(era)
    }

    fn build_event(
        &mut self,
        index: usize,
        raw: RawEvent,
        categories: &IndexMap<String, Category>,
    ) -> Option<Event> {
        let subject = format!("events[{index}]");

        let Some(start_text) = non_blank(raw.start) else {
            self.collector.emit(
                Diagnostic::warning("event has no start instant; it is skipped")
                    .with_code(ErrorCode::E201)
                    .with_subject(subject)
                    .with_help("add a `start` field"),
            );
            return None;
        };
        let start = self.entity_instant(&format!("{subject}.start"), &start_text)?;
        let end_text = non_blank(raw.end);
        let end = self.optional_instant(&format!("{subject}.end"), end_text.clone())?;

        let mut event = Event::new(start).with_milestone(raw.milestone.unwrap_or(false));

        if let (Some(end), Some(end_text)) = (end, end_text) {
            if end < start {
                let mut diag = Diagnostic::warning("event ends before it starts")
                    .with_code(ErrorCode::E301)
                    .with_subject(subject.clone())
                    .with_optional_label(self.span_of(&end_text), "ends here")
                    .with_help("its box is drawn with the minimum width; swap `start` and `end`");
                if let Some(span) = self.span_of(&start_text) {
                    diag = diag.with_secondary_label(span, "starts here");
                }
                self.collector.emit(diag);
            }
            event = event.with_end(end);
        }

        if let Some(text) = non_blank(raw.text) {
            event = event.with_text(text);
        }
        if let Some(description) = non_blank(raw.description) {
            event = event.with_description(description);
        }
        if let Some(category) = non_blank(raw.category) {
            if !categories.contains_key(&category) {
                let diag = Diagnostic::warning(format!("unknown category `{category}`"))
                    .with_code(ErrorCode::E302)
                    .with_subject(format!("{subject}.category"))
                    .with_optional_label(self.span_of(&category), "not declared in `categories`")
                    .with_help("declare it in `categories` to give it a color");
                self.collector.emit(diag);
            }
            event = event.with_category(category);
        }
        if let Some(color) = self.color(&format!("{subject}.color"), raw.color) {
            event = event.with_color(color);
        }

        Some(event)
    }

    /// Reads an optional entity instant.
    ///
    /// Returns `None` when the literal is present but unreadable, in which
    /// case the entity is skipped, and `Some(None)` when it is absent.
    fn optional_instant(&mut self, subject: &str, text: Option<String>) -> Option<Option<Instant>> {
        match non_blank(text) {
            Some(text) => self.entity_instant(subject, &text).map(Some),
            None => Some(None),
        }
    }

    fn entity_instant(&mut self, subject: &str, text: &str) -> Option<Instant> {
        match parse_instant(text) {
            Ok(instant) => Some(instant),
            Err(err) => {
                let diag = Diagnostic::warning(format!("{err}; the entity is skipped"))
                    .with_code(ErrorCode::E200)
                    .with_subject(subject)
                    .with_optional_label(self.span_of(text), "not a recognized instant")
                    .with_help(INSTANT_HELP);
                self.collector.emit(diag);
                None
            }
        }
    }

    fn color(&mut self, subject: &str, text: Option<String>) -> Option<Color> {
        let text = non_blank(text)?;
        match parse_color(&text) {
            Ok(color) => Some(color),
            Err(err) => {
                let diag = Diagnostic::warning(err.to_string())
                    .with_code(ErrorCode::E300)
                    .with_subject(subject)
                    .with_optional_label(self.span_of(&text), "ignored")
                    .with_help(COLOR_HELP);
                self.collector.emit(diag);
                None
            }
        }
    }

    fn span_of(&self, literal: &str) -> Option<Span> {
        Span::find_string_literal(self.source, literal)
    }
}
