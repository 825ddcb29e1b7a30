//! Text style definitions and font-backed text measurement.
//!
//! - [`TextDefinition`] - Reusable text style configuration
//! - [`FontWeight`] - Normal or bold, used for weekend emphasis on axis labels
//!
//! Measurement is performed by a process-wide `TextManager` wrapping a
//! `cosmic-text` [`FontSystem`]; it is reached through
//! [`CosmicTextMeasure`](crate::measure::CosmicTextMeasure).

use std::sync::{Mutex, OnceLock};

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping, Weight};
use log::info;

use crate::{color::Color, geometry::Size, measure::MeasureError};

/// Font weight of a label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

impl FontWeight {
    /// Returns the SVG `font-weight` value
    pub fn to_svg_value(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Bold => "bold",
        }
    }
}

/// Defines the visual style for text elements in timelines.
///
/// # Default Values
///
/// | Property | Default |
/// |----------|---------|
/// | Font family | `"sans-serif"` |
/// | Font size | `12` |
/// | Font weight | [`FontWeight::Normal`] |
/// | Text color | `None` (SVG default, typically black) |
///
/// # Examples
///
/// ```
/// # use chronoline_core::draw::{FontWeight, TextDefinition};
/// let mut style = TextDefinition::with_font("monospace", 10);
/// style.set_font_weight(FontWeight::Bold);
/// assert_eq!(style.font_size(), 10);
/// assert_eq!(style.font_weight(), FontWeight::Bold);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TextDefinition {
    font_family: String,
    font_size: u16,
    font_weight: FontWeight,
    color: Option<Color>,
}

impl TextDefinition {
    /// Creates a new text definition with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a text definition with the given family and size.
    pub fn with_font(family: &str, size: u16) -> Self {
        Self {
            font_family: family.to_string(),
            font_size: size,
            ..Self::default()
        }
    }

    /// Sets the font weight for the text.
    pub fn set_font_weight(&mut self, weight: FontWeight) {
        self.font_weight = weight;
    }

    /// Sets the text color. `None` keeps the renderer default.
    pub fn set_color(&mut self, color: Option<Color>) {
        self.color = color;
    }

    /// Returns the font size in points.
    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    /// Returns the font family name.
    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    /// Returns the font weight.
    pub fn font_weight(&self) -> FontWeight {
        self.font_weight
    }

    /// Returns a reference to the text color, if set.
    pub fn color(&self) -> Option<&Color> {
        self.color.as_ref()
    }
}

impl Default for TextDefinition {
    fn default() -> Self {
        Self {
            font_family: "sans-serif".to_string(),
            font_size: 12,
            font_weight: FontWeight::Normal,
            color: None,
        }
    }
}

/// TextManager handles text measurement and font operations
/// It maintains a reusable FontSystem instance to avoid expensive recreation
pub(crate) struct TextManager {
    font_system: Mutex<FontSystem>,
}

impl TextManager {
    /// Returns the process-wide manager, creating the FontSystem on first use.
    pub(crate) fn global() -> &'static TextManager {
        TEXT_MANAGER.get_or_init(TextManager::new)
    }

    fn new() -> Self {
        info!("Initializing FontSystem");
        Self {
            font_system: Mutex::new(FontSystem::new()),
        }
    }

    /// Calculate the size of text in pixels using cosmic-text shaping.
    ///
    /// Each layout run contributes one line height; the width is the
    /// rightmost glyph edge across runs.
    pub(crate) fn calculate_text_size(
        &self,
        text: &str,
        text_def: &TextDefinition,
    ) -> Result<Size, MeasureError> {
        if text.is_empty() {
            return Ok(Size::default());
        }

        let mut font_system = self
            .font_system
            .lock()
            .map_err(|_| MeasureError::Unavailable("font system lock poisoned".to_string()))?;

        // Points to pixels at standard DPI
        let font_size_px = text_def.font_size() as f32 * 1.33;
        let line_height = font_size_px * 1.15;
        let metrics = Metrics::new(font_size_px, line_height);

        let mut buffer = Buffer::new(&mut font_system, metrics);
        let mut buffer = buffer.borrow_with(&mut font_system);

        let weight = match text_def.font_weight() {
            FontWeight::Normal => Weight::NORMAL,
            FontWeight::Bold => Weight::BOLD,
        };
        let attrs = Attrs::new()
            .family(Family::Name(text_def.font_family()))
            .weight(weight);

        buffer.set_size(None, None);
        buffer.set_text(text, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(true);

        let mut max_width: f32 = 0.0;
        let mut total_height: f32 = 0.0;

        let layout_runs: Vec<_> = buffer.layout_runs().collect();
        if !layout_runs.is_empty() {
            for last in layout_runs.iter().map(|run| run.glyphs.last()) {
                if let Some(last) = last {
                    max_width = max_width.max(last.x + last.w);
                }
                total_height += metrics.line_height;
            }
        } else {
            // No fonts available: approximate with an average glyph width
            max_width = text.chars().count() as f32 * (font_size_px * 0.55);
            total_height = metrics.line_height;
        }

        Ok(Size::new(max_width, total_height))
    }
}

static TEXT_MANAGER: OnceLock<TextManager> = OnceLock::new();
