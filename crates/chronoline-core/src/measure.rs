//! Text measurement capability used by the layout engines.
//!
//! Event boxes are sized from their label, so every layout pass needs a way
//! to ask "how large is this string?". The [`TextMeasure`] trait is that
//! seam:
//!
//! - [`CosmicTextMeasure`] shapes text with real font metrics via `cosmic-text`.
//! - [`FixedMetrics`] returns deterministic sizes from a per-character width
//!   and a per-line height, for tests and headless environments.

use thiserror::Error;

use crate::{
    draw::{TextDefinition, text::TextManager},
    geometry::Size,
};

/// Errors reported by a [`TextMeasure`] implementation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeasureError {
    /// The measurement backend could not be used.
    #[error("text measurement unavailable: {0}")]
    Unavailable(String),

    /// The backend refused this particular string.
    #[error("cannot measure `{text}`: {reason}")]
    Rejected { text: String, reason: String },
}

/// Measures the rendered size of a label.
pub trait TextMeasure {
    /// Returns the width and height `text` occupies when rendered.
    ///
    /// # Errors
    ///
    /// Returns [`MeasureError`] when the text cannot be measured. Callers
    /// treat this as a failure of the single element being laid out.
    fn measure(&self, text: &str) -> Result<Size, MeasureError>;
}

impl<T: TextMeasure + ?Sized> TextMeasure for &T {
    fn measure(&self, text: &str) -> Result<Size, MeasureError> {
        (**self).measure(text)
    }
}

/// Font-backed measurement through `cosmic-text`.
///
/// # Examples
///
/// ```
/// # use chronoline_core::draw::TextDefinition;
/// # use chronoline_core::measure::{CosmicTextMeasure, TextMeasure};
/// let measure = CosmicTextMeasure::new(TextDefinition::default());
/// let size = measure.measure("Coronation").unwrap();
/// assert!(size.height() > 0.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CosmicTextMeasure {
    definition: TextDefinition,
}

impl CosmicTextMeasure {
    /// Creates a measurer for labels rendered with `definition`.
    pub fn new(definition: TextDefinition) -> Self {
        Self { definition }
    }

    /// Returns the text style used for measurement.
    pub fn definition(&self) -> &TextDefinition {
        &self.definition
    }
}

impl TextMeasure for CosmicTextMeasure {
    fn measure(&self, text: &str) -> Result<Size, MeasureError> {
        TextManager::global().calculate_text_size(text, &self.definition)
    }
}

/// Deterministic measurement from fixed glyph metrics.
///
/// Width is `char_width` times the longest line's character count, height is
/// `line_height` times the number of lines.
///
/// ```
/// # use chronoline_core::measure::{FixedMetrics, TextMeasure};
/// let measure = FixedMetrics::new(6.0, 14.0);
/// let size = measure.measure("Battle\nof Hastings").unwrap();
/// assert_eq!(size.width(), 66.0);
/// assert_eq!(size.height(), 28.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedMetrics {
    char_width: f32,
    line_height: f32,
}

impl FixedMetrics {
    /// Creates a measurer with the given per-character width and line height.
    pub fn new(char_width: f32, line_height: f32) -> Self {
        Self {
            char_width,
            line_height,
        }
    }
}

impl Default for FixedMetrics {
    fn default() -> Self {
        Self::new(7.0, 15.0)
    }
}

impl TextMeasure for FixedMetrics {
    fn measure(&self, text: &str) -> Result<Size, MeasureError> {
        if text.is_empty() {
            return Ok(Size::default());
        }

        let (lines, longest) = text.lines().fold((0usize, 0usize), |(count, longest), line| {
            (count + 1, longest.max(line.chars().count()))
        });

        Ok(Size::new(
            longest as f32 * self.char_width,
            lines.max(1) as f32 * self.line_height,
        ))
    }
}
