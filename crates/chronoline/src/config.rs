//! Configuration types for Chronoline timeline rendering.
//!
//! This module provides configuration structures that control how timelines
//! are laid out and styled. All types implement [`serde::Deserialize`] for
//! loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration combining layout and style settings.
//! - [`LayoutConfig`] - Canvas size, label locale and event stacking rules.
//! - [`StyleConfig`] - Colors and font family of the rendered output.
//!
//! # Example
//!
//! ```
//! # use chronoline::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert_eq!(config.layout().width(), 2000.0);
//! assert!(config.style().background_color().is_ok());
//! ```

use serde::Deserialize;

use chronoline_core::color::Color;

use crate::{label::Locale, layout::ConflictPolicy};

/// Default layout width in user units.
pub const DEFAULT_WIDTH: f32 = 2000.0;
/// Default layout height in user units.
pub const DEFAULT_HEIGHT: f32 = 800.0;
/// Fill used for events without an event or category color.
pub const DEFAULT_EVENT_COLOR: &str = "#ccc";
/// Font family of all labels unless configured.
pub const DEFAULT_FONT_FAMILY: &str = "sans-serif";

/// Top-level application configuration combining layout and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout and style configurations.
    pub fn new(layout: LayoutConfig, style: StyleConfig) -> Self {
        Self { layout, style }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Canvas and stacking configuration.
///
/// ```
/// # use chronoline::{config::LayoutConfig, label::Locale, layout::ConflictPolicy};
/// let config = LayoutConfig::default()
///     .with_size(1200.0, 600.0)
///     .with_locale(Locale::PtBr)
///     .with_conflict_policy(ConflictPolicy::Legacy);
/// assert_eq!(config.centerline(), 300.0);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    width: f32,
    height: f32,
    locale: Locale,
    conflict_policy: ConflictPolicy,
    max_levels: Option<usize>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            locale: Locale::default(),
            conflict_policy: ConflictPolicy::default(),
            max_levels: None,
        }
    }
}

impl LayoutConfig {
    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn with_conflict_policy(mut self, policy: ConflictPolicy) -> Self {
        self.conflict_policy = policy;
        self
    }

    pub fn with_max_levels(mut self, max_levels: Option<usize>) -> Self {
        self.max_levels = max_levels;
        self
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Vertical position of the centerline, half the height.
    pub fn centerline(&self) -> f32 {
        self.height / 2.0
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn conflict_policy(&self) -> ConflictPolicy {
        self.conflict_policy
    }

    /// Optional cap on the number of stacking levels.
    pub fn max_levels(&self) -> Option<usize> {
        self.max_levels
    }

    /// Checks that the canvas has a usable size.
    ///
    /// # Errors
    ///
    /// Returns a message naming the offending dimension.
    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(format!("layout {name} must be a positive number, got {value}"));
            }
        }
        Ok(())
    }
}

/// Visual styling configuration for rendered timelines.
///
/// Fields that are not set fall back to renderer defaults.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Background [`Color`] of the canvas, as a color string.
    #[serde(default)]
    background_color: Option<String>,

    /// Fill of events that have no event or category color.
    #[serde(default)]
    default_event_color: Option<String>,

    /// Font family of all labels.
    #[serde(default)]
    font_family: Option<String>,
}

impl StyleConfig {
    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }

    /// Returns the parsed default event fill.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn default_event_color(&self) -> Result<Color, String> {
        Color::new(
            self.default_event_color
                .as_deref()
                .unwrap_or(DEFAULT_EVENT_COLOR),
        )
        .map_err(|err| format!("Invalid default event color in config: {err}"))
    }

    pub fn font_family(&self) -> &str {
        self.font_family.as_deref().unwrap_or(DEFAULT_FONT_FAMILY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_layout_section_keeps_defaults() {
        let config: AppConfig = serde_json::from_str(
            r#"{"layout": {"height": 600.0, "conflict_policy": "legacy", "max_levels": 12}}"#,
        )
        .unwrap();

        let layout = config.layout();
        assert_eq!(layout.width(), DEFAULT_WIDTH);
        assert_eq!(layout.centerline(), 300.0);
        assert_eq!(layout.locale(), Locale::EnUs);
        assert_eq!(layout.conflict_policy(), ConflictPolicy::Legacy);
        assert_eq!(layout.max_levels(), Some(12));
    }

    #[test]
    fn test_style_defaults() {
        let style = StyleConfig::default();
        assert_eq!(style.background_color(), Ok(None));
        assert_eq!(
            style.default_event_color(),
            Ok(Color::new(DEFAULT_EVENT_COLOR).unwrap())
        );
        assert_eq!(style.font_family(), DEFAULT_FONT_FAMILY);
    }

    #[test]
    fn test_invalid_style_color() {
        let style: StyleConfig =
            serde_json::from_str(r#"{"default_event_color": "not-a-color"}"#).unwrap();
        assert!(style.default_event_color().is_err());
    }

    #[test]
    fn test_validate_rejects_degenerate_canvas() {
        assert!(LayoutConfig::default().validate().is_ok());
        assert!(LayoutConfig::default().with_size(0.0, 800.0).validate().is_err());
        assert!(LayoutConfig::default().with_size(100.0, f32::NAN).validate().is_err());
    }
}
