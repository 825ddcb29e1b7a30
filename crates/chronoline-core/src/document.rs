//! The timeline document model.
//!
//! A [`TimelineDocument`] is the immutable input of one render pass: the
//! requested view window, background eras, the events themselves and the
//! category palette. Documents are usually produced by `chronoline-parser`
//! but can be assembled directly with the builder-style methods below.
//!
//! # Example
//!
//! ```
//! # use chrono::NaiveDate;
//! # use chronoline_core::document::{Category, Event, TimelineDocument, ViewWindow};
//! # use chronoline_core::color::Color;
//! let day = |d| NaiveDate::from_ymd_opt(2025, 1, d).unwrap().and_hms_opt(0, 0, 0).unwrap();
//!
//! let document = TimelineDocument::new()
//!     .with_view(ViewWindow::new(Some(day(1)), Some(day(31))))
//!     .with_category("Politics", Category::new(Some(Color::new("red").unwrap())))
//!     .with_event(
//!         Event::new(day(10))
//!             .with_text("Inauguration")
//!             .with_category("Politics"),
//!     );
//!
//! assert_eq!(document.events().len(), 1);
//! assert!(document.category("Politics").is_some());
//! ```

use chrono::NaiveDateTime;
use indexmap::IndexMap;

use crate::color::Color;

/// A wall-clock point in time.
///
/// Timelines carry no time zone; instants are interpreted as local
/// calendar time both for layout and for labels.
pub type Instant = NaiveDateTime;

/// Label used for events that carry no text.
pub const PLACEHOLDER_TEXT: &str = "Untitled event";

/// The requested visible range. Either bound may be absent and is then
/// defaulted when the window is resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewWindow {
    start: Option<Instant>,
    end: Option<Instant>,
}

impl ViewWindow {
    pub fn new(start: Option<Instant>, end: Option<Instant>) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> Option<Instant> {
        self.start
    }

    pub fn end(&self) -> Option<Instant> {
        self.end
    }
}

/// A named background span. Missing bounds clamp to the view window.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Era {
    name: Option<String>,
    start: Option<Instant>,
    end: Option<Instant>,
    color: Option<Color>,
}

impl Era {
    pub fn new(start: Option<Instant>, end: Option<Instant>) -> Self {
        Self {
            start,
            end,
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn start(&self) -> Option<Instant> {
        self.start
    }

    pub fn end(&self) -> Option<Instant> {
        self.end
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }
}

/// A single timestamped event.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    start: Instant,
    end: Option<Instant>,
    text: Option<String>,
    description: Option<String>,
    category: Option<String>,
    color: Option<Color>,
    milestone: bool,
}

impl Event {
    /// Creates an event starting at `start` with no other attributes.
    pub fn new(start: Instant) -> Self {
        Self {
            start,
            end: None,
            text: None,
            description: None,
            category: None,
            color: None,
            milestone: false,
        }
    }

    pub fn with_end(mut self, end: Instant) -> Self {
        self.end = Some(end);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Overrides the category color for this event only.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_milestone(mut self, milestone: bool) -> Self {
        self.milestone = milestone;
        self
    }

    pub fn start(&self) -> Instant {
        self.start
    }

    pub fn end(&self) -> Option<Instant> {
        self.end
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Returns the text shown in the event box, falling back to
    /// [`PLACEHOLDER_TEXT`].
    pub fn label(&self) -> &str {
        self.text.as_deref().unwrap_or(PLACEHOLDER_TEXT)
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }

    pub fn is_milestone(&self) -> bool {
        self.milestone
    }
}

/// Display attributes of a category.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Category {
    color: Option<Color>,
    font_color: Option<Color>,
}

impl Category {
    pub fn new(color: Option<Color>) -> Self {
        Self {
            color,
            font_color: None,
        }
    }

    pub fn with_font_color(mut self, font_color: Color) -> Self {
        self.font_color = Some(font_color);
        self
    }

    /// Fill color of events in this category.
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    /// Label color of events in this category.
    pub fn font_color(&self) -> Option<Color> {
        self.font_color
    }
}

/// A complete timeline: view window, eras, events and categories.
///
/// Categories keep their declaration order so that sidebars and legends
/// list them the way the author wrote them.
#[derive(Debug, Clone, Default)]
pub struct TimelineDocument {
    view: ViewWindow,
    eras: Vec<Era>,
    events: Vec<Event>,
    categories: IndexMap<String, Category>,
    hidden_categories: Vec<String>,
}

impl TimelineDocument {
    /// Creates an empty document with an unset view window.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_view(mut self, view: ViewWindow) -> Self {
        self.view = view;
        self
    }

    pub fn with_era(mut self, era: Era) -> Self {
        self.eras.push(era);
        self
    }

    pub fn with_event(mut self, event: Event) -> Self {
        self.events.push(event);
        self
    }

    /// Declares a category. Redeclaring a name replaces its attributes but
    /// keeps its original position.
    pub fn with_category(mut self, name: impl Into<String>, category: Category) -> Self {
        self.categories.insert(name.into(), category);
        self
    }

    /// Marks a category as hidden; its events are left out of the layout.
    pub fn with_hidden_category(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !self.hidden_categories.contains(&name) {
            self.hidden_categories.push(name);
        }
        self
    }

    pub fn view(&self) -> ViewWindow {
        self.view
    }

    pub fn eras(&self) -> &[Era] {
        &self.eras
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn categories(&self) -> &IndexMap<String, Category> {
        &self.categories
    }

    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.get(name)
    }

    pub fn hidden_categories(&self) -> &[String] {
        &self.hidden_categories
    }

    /// Returns `true` if `name` is listed as hidden in this document.
    pub fn is_category_hidden(&self, name: &str) -> bool {
        self.hidden_categories.iter().any(|hidden| hidden == name)
    }
}
