//! Chronoline - collision-free timeline layout with adaptive time axes.
//!
//! Loading, layout, and rendering of timelines: events are stacked around a
//! centerline so that they never overlap, eras are drawn as background
//! bands, and two synchronized axes (an adaptive fine axis and a weekly
//! axis) label the view window.

pub mod axis;
pub mod config;
pub mod export;
pub mod interaction;
pub mod label;
pub mod layout;
pub mod scale;
pub mod scene;
pub mod step;
pub mod window;

mod error;

pub use chronoline_core::{color, document, draw, geometry, measure};
pub use chronoline_parser::{Parsed, error::Diagnostic};

pub use error::ChronolineError;

use chrono::Local;
use log::{debug, info, trace, warn};

use chronoline_core::{
    document::{Instant, TimelineDocument},
    draw::TextDefinition,
    measure::{CosmicTextMeasure, TextMeasure},
};

use config::AppConfig;
use export::svg::SvgExporter;
use layout::TimelineLayout;
use scene::{EVENT_FONT_SIZE, Scene};

/// Builder for loading and rendering Chronoline timelines.
///
/// This provides an API for processing timelines through parsing, layout,
/// and rendering stages.
///
/// # Examples
///
/// ```rust,no_run
/// use chronoline::{TimelineBuilder, config::AppConfig};
///
/// let source = r#"{"view": {"start": "2025-01-01", "end": "2025-02-01"},
///                  "events": [{"start": "2025-01-10", "text": "Launch"}]}"#;
///
/// let builder = TimelineBuilder::new(AppConfig::default());
///
/// // Parse source to a timeline document
/// let parsed = builder.parse(source)
///     .expect("Failed to parse");
///
/// // Render the document to SVG
/// let svg = builder.render_svg(parsed.document())
///     .expect("Failed to render");
///
/// // Or use default config
/// let builder = TimelineBuilder::default();
/// ```
#[derive(Debug, Clone, Default)]
pub struct TimelineBuilder {
    config: AppConfig,
    now: Option<Instant>,
    hidden_categories: Vec<String>,
}

impl TimelineBuilder {
    /// Create a new timeline builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including layout and style settings
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Fixes the instant used for a missing view start. Without it the
    /// local wall clock is read on every layout.
    pub fn with_now(mut self, now: Instant) -> Self {
        self.now = Some(now);
        self
    }

    /// Hides events of the given categories, in addition to the categories
    /// the document hides itself.
    pub fn with_hidden_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.hidden_categories
            .extend(categories.into_iter().map(Into::into));
        self
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse JSON source into a timeline document.
    ///
    /// Entities that cannot be read are skipped and reported in
    /// [`Parsed::warnings`].
    ///
    /// # Errors
    ///
    /// Returns `ChronolineError::Parse` for malformed JSON or an unusable
    /// view window.
    pub fn parse(&self, source: &str) -> Result<Parsed, ChronolineError> {
        info!("Parsing timeline");

        let parsed = chronoline_parser::parse(source)
            .map_err(|err| ChronolineError::new_parse_error(err, source))?;

        if !parsed.warnings().is_empty() {
            warn!(warnings = parsed.warnings().len(); "Some timeline entries were skipped or defaulted");
        }
        debug!("Timeline parsed successfully");
        trace!(document:? = parsed.document(); "Parsed timeline");

        Ok(parsed)
    }

    /// Lay out a document, measuring labels with the configured font.
    ///
    /// # Errors
    ///
    /// Returns `ChronolineError::Config` for an unusable canvas or view
    /// window.
    pub fn layout<'a>(
        &self,
        document: &'a TimelineDocument,
    ) -> Result<TimelineLayout<'a>, ChronolineError> {
        self.layout_with(document, self.font_measure())
    }

    /// Lay out a document with the given text measurement.
    ///
    /// # Errors
    ///
    /// See [`TimelineBuilder::layout`].
    pub fn layout_with<'a, M: TextMeasure>(
        &self,
        document: &'a TimelineDocument,
        measure: M,
    ) -> Result<TimelineLayout<'a>, ChronolineError> {
        let now = self.now.unwrap_or_else(|| Local::now().naive_local());
        TimelineLayout::compute(
            document,
            self.config.layout(),
            measure,
            now,
            &self.hidden_categories,
        )
    }

    /// Turn a layout into styled primitives.
    ///
    /// # Errors
    ///
    /// Returns `ChronolineError::Config` if a configured color is invalid.
    pub fn scene(&self, layout: &TimelineLayout<'_>) -> Result<Scene, ChronolineError> {
        Scene::build(layout, self.config.style())
    }

    /// Render a document to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns `ChronolineError` for layout, style or rendering errors.
    pub fn render_svg(&self, document: &TimelineDocument) -> Result<String, ChronolineError> {
        self.render_svg_with(document, self.font_measure())
    }

    /// Render a document to an SVG string with the given text measurement.
    ///
    /// # Errors
    ///
    /// See [`TimelineBuilder::render_svg`].
    pub fn render_svg_with<M: TextMeasure>(
        &self,
        document: &TimelineDocument,
        measure: M,
    ) -> Result<String, ChronolineError> {
        let layout = self.layout_with(document, measure)?;
        let scene = self.scene(&layout)?;
        let svg = SvgExporter::new().render_string(&scene)?;

        info!(bytes = svg.len(); "SVG rendered successfully");
        Ok(svg)
    }

    fn font_measure(&self) -> CosmicTextMeasure {
        CosmicTextMeasure::new(TextDefinition::with_font(
            self.config.style().font_family(),
            EVENT_FONT_SIZE,
        ))
    }
}
