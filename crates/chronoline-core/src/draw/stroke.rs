//! Stroke and line-style definitions.
//!
//! Era boundaries, the centerline, gridlines, week boundaries and event
//! borders are all drawn with a [`StrokeDefinition`]. The
//! [`apply_stroke!`](crate::apply_stroke!) macro maps one onto any SVG element.
//!
//! | Rust Property | SVG Attribute | Example Values |
//! |--------------|---------------|----------------|
//! | `color` | `stroke`, `stroke-opacity` | `"#222"`, `1` |
//! | `width` | `stroke-width` | `3.0` |
//! | `style` | `stroke-dasharray` | `"2,2"` |

use crate::color::Color;

/// Line pattern of a stroke.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StrokeStyle {
    /// Solid continuous line (default)
    #[default]
    Solid,
    /// Dotted line (2px dot, 2px gap), used for fine-axis gridlines
    Dotted,
}

impl StrokeStyle {
    /// Returns the SVG dasharray value for this style, or None for solid lines
    pub fn to_svg_value(self) -> Option<&'static str> {
        match self {
            Self::Solid => None,
            Self::Dotted => Some("2,2"),
        }
    }
}

/// A stroke definition for rendering lines and borders.
///
/// # Examples
///
/// ```
/// use chronoline_core::draw::{StrokeDefinition, StrokeStyle};
/// use chronoline_core::color::Color;
///
/// let boundary = StrokeDefinition::solid(Color::new("#222").unwrap(), 3.0);
/// let grid = StrokeDefinition::dotted(Color::new("#ccc").unwrap(), 1.0);
/// assert_eq!(*grid.style(), StrokeStyle::Dotted);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
    style: StrokeStyle,
}

impl StrokeDefinition {
    /// Creates a new solid stroke with the given color and width.
    pub fn new(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            style: StrokeStyle::Solid,
        }
    }

    /// Creates a solid stroke (convenience constructor).
    pub fn solid(color: Color, width: f32) -> Self {
        Self::new(color, width)
    }

    /// Creates a dotted stroke (convenience constructor).
    pub fn dotted(color: Color, width: f32) -> Self {
        let mut stroke = Self::new(color, width);
        stroke.set_style(StrokeStyle::Dotted);
        stroke
    }

    /// Returns the stroke color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the stroke width.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Returns the stroke style.
    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }

    /// Sets the stroke style.
    pub fn set_style(&mut self, style: StrokeStyle) {
        self.style = style;
    }
}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self::new(Color::default(), 1.0)
    }
}

/// Apply all stroke attributes to an SVG element.
///
/// # Examples
///
/// ```
/// use chronoline_core::draw::StrokeDefinition;
/// use chronoline_core::color::Color;
/// use svg::node::element as svg_element;
///
/// let stroke = StrokeDefinition::dotted(Color::new("#ccc").unwrap(), 1.0);
/// let line = svg_element::Line::new()
///     .set("x1", 10)
///     .set("x2", 10)
///     .set("y1", 0)
///     .set("y2", 800);
///
/// let line = chronoline_core::apply_stroke!(line, &stroke);
/// assert!(line.to_string().contains("stroke-dasharray=\"2,2\""));
/// ```
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        let mut elem = $element
            .set("stroke", $stroke.color().to_string())
            .set("stroke-opacity", $stroke.color().alpha())
            .set("stroke-width", $stroke.width());

        if let Some(dasharray) = $stroke.style().to_svg_value() {
            elem = elem.set("stroke-dasharray", dasharray);
        }

        elem
    }};
}
