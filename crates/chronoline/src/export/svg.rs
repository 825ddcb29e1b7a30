//! SVG rendering of a [`Scene`].
//!
//! Every primitive becomes one SVG element placed on its
//! [`RenderLayer`](chronoline_core::draw::RenderLayer). Event rectangles and
//! labels carry a `data-shape` attribute with their [`ShapeId`], and event
//! rectangles a `class="event-{category}"`, so that a page can attach hover
//! handlers to them.
//!
//! [`ShapeId`]: crate::layout::ShapeId

use log::{debug, info};
use svg::{Document, node::element as svg_element};

use chronoline_core::{
    apply_stroke,
    draw::{LayeredOutput, SvgNode},
};

use super::{Error, Exporter};
use crate::scene::{Primitive, Role, Scene, SceneItem};

/// Class suffix of events without a category.
const DEFAULT_EVENT_CLASS: &str = "default";

/// Renders scenes into standalone SVG documents.
///
/// # Example
///
/// ```
/// # use chronoline::{export::svg::SvgExporter, scene::Scene};
/// # use chronoline_core::geometry::Size;
/// let scene = Scene::new(Size::new(200.0, 100.0), Vec::new());
/// let svg = SvgExporter::new().render_string(&scene).unwrap();
/// assert!(svg.contains("viewBox=\"0 0 200 100\""));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgExporter;

impl SvgExporter {
    pub fn new() -> Self {
        Self
    }

    /// Renders `scene` and serializes the document.
    ///
    /// # Errors
    ///
    /// See [`Exporter::export_scene`].
    pub fn render_string(&self, scene: &Scene) -> Result<String, Error> {
        let document = self.export_scene(scene)?;
        Ok(document.to_string())
    }

    fn render_item(&self, item: &SceneItem) -> Result<SvgNode, Error> {
        check_finite(item)?;

        let node: SvgNode = match item.primitive() {
            Primitive::Rect {
                bounds,
                fill,
                stroke,
            } => {
                let mut rect = svg_element::Rectangle::new()
                    .set("x", bounds.min_x())
                    .set("y", bounds.min_y())
                    .set("width", bounds.width())
                    .set("height", bounds.height())
                    .set("fill", fill.to_string())
                    .set("fill-opacity", fill.alpha());
                if let Some(stroke) = stroke {
                    rect = apply_stroke!(rect, stroke);
                }

                match item.role() {
                    Role::EventRect {
                        shape,
                        category,
                        milestone,
                    } => {
                        let mut class = format!(
                            "event-{}",
                            category.as_deref().unwrap_or(DEFAULT_EVENT_CLASS)
                        );
                        if *milestone {
                            class.push_str(" milestone");
                        }
                        rect = rect.set("class", class).set("data-shape", shape.to_string());
                    }
                    Role::EraBand { .. } => rect = rect.set("class", "era"),
                    _ => {}
                }
                Box::new(rect)
            }
            Primitive::Line { from, to, stroke } => {
                let line = svg_element::Line::new()
                    .set("x1", from.x())
                    .set("y1", from.y())
                    .set("x2", to.x())
                    .set("y2", to.y());
                Box::new(apply_stroke!(line, stroke))
            }
            Primitive::Label {
                position,
                text,
                style,
            } => {
                let mut label = svg_element::Text::new(text.as_str())
                    .set("x", position.x())
                    .set("y", position.y())
                    .set("font-family", style.font_family())
                    .set("font-size", style.font_size())
                    .set("font-weight", style.font_weight().to_svg_value());
                if let Some(color) = style.color() {
                    label = label.set("fill", color.to_string());
                }
                if let Some(shape) = item.role().shape() {
                    label = label.set("data-shape", shape.to_string());
                }
                Box::new(label)
            }
        };
        Ok(node)
    }
}

impl Exporter for SvgExporter {
    type Output = Document;

    /// Builds the SVG document for `scene`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the canvas size or any primitive
    /// coordinate is not finite.
    fn export_scene(&self, scene: &Scene) -> Result<Document, Error> {
        let size = scene.size();
        if !size.width().is_finite() || !size.height().is_finite() {
            return Err(Error::Render(format!(
                "canvas size {}x{} is not finite",
                size.width(),
                size.height()
            )));
        }

        info!(items = scene.items().len(); "Rendering SVG document");

        let mut output = LayeredOutput::new();
        for item in scene.items() {
            output.add_to_layer(item.layer(), self.render_item(item)?);
        }

        let mut document = Document::new()
            .set("viewBox", format!("0 0 {} {}", size.width(), size.height()))
            .set("width", size.width())
            .set("height", size.height());

        for node in output.render() {
            document = document.add(node);
        }

        debug!("SVG document rendered");
        Ok(document)
    }
}

fn check_finite(item: &SceneItem) -> Result<(), Error> {
    let coordinates = match item.primitive() {
        Primitive::Rect { bounds, .. } => vec![
            bounds.min_x(),
            bounds.min_y(),
            bounds.max_x(),
            bounds.max_y(),
        ],
        Primitive::Line { from, to, .. } => vec![from.x(), from.y(), to.x(), to.y()],
        Primitive::Label { position, .. } => vec![position.x(), position.y()],
    };

    if coordinates.iter().all(|value| value.is_finite()) {
        Ok(())
    } else {
        Err(Error::Render(format!(
            "{:?} has a non-finite coordinate",
            item.role()
        )))
    }
}

#[cfg(test)]
mod tests {
    use chronoline_core::{
        color::Color,
        draw::{StrokeDefinition, TextDefinition},
        geometry::{Bounds, Point, Size},
    };

    use super::*;
    use crate::layout::ShapeId;

    fn scene(items: Vec<SceneItem>) -> Scene {
        Scene::new(Size::new(400.0, 200.0), items)
    }

    fn gridline(x: f32) -> SceneItem {
        SceneItem::new(
            Role::Gridline,
            Primitive::Line {
                from: Point::new(x, 0.0),
                to: Point::new(x, 200.0),
                stroke: StrokeDefinition::dotted(Color::new("#ccc").unwrap(), 1.0),
            },
        )
    }

    #[test]
    fn test_layers_are_ordered() {
        let label = SceneItem::new(
            Role::TickLabel { emphasized: false },
            Primitive::Label {
                position: Point::new(3.0, 95.0),
                text: "Mon 3".to_string(),
                style: TextDefinition::default(),
            },
        );
        let band = SceneItem::new(
            Role::EraBand { era: 0 },
            Primitive::Rect {
                bounds: Bounds::new_from_top_left(Point::default(), Size::new(50.0, 200.0)),
                fill: Color::new("lightblue").unwrap().with_alpha(0.3),
                stroke: None,
            },
        );

        let svg = SvgExporter::new()
            .render_string(&scene(vec![label, gridline(10.0), band]))
            .unwrap();

        let era = svg.find("data-layer=\"era\"").unwrap();
        let grid = svg.find("data-layer=\"grid\"").unwrap();
        let text = svg.find("data-layer=\"text\"").unwrap();
        assert!(era < grid && grid < text);
        assert!(svg.contains("class=\"era\""));
        assert!(svg.contains("stroke-dasharray=\"2,2\""));
        assert!(svg.contains("Mon 3"));
    }

    #[test]
    fn test_event_attributes() {
        let event_rect = |shape, category: Option<&str>, milestone, x| {
            SceneItem::new(
                Role::EventRect {
                    shape: ShapeId::new(shape),
                    category: category.map(str::to_string),
                    milestone,
                },
                Primitive::Rect {
                    bounds: Bounds::new_from_top_left(Point::new(x, 100.0), Size::new(60.0, 20.0)),
                    fill: Color::new("red").unwrap(),
                    stroke: Some(StrokeDefinition::solid(Color::new("#555").unwrap(), 1.0)),
                },
            )
        };
        let items = vec![
            event_rect(0, Some("war"), true, 100.0),
            event_rect(1, None, false, 200.0),
        ];

        let svg = SvgExporter::new().render_string(&scene(items)).unwrap();
        assert!(svg.contains("class=\"event-war milestone\""));
        assert!(svg.contains("class=\"event-default\""));
        assert!(svg.contains("data-shape=\"shape-0\""));
        assert!(svg.contains("data-shape=\"shape-1\""));
    }

    #[test]
    fn test_non_finite_coordinates_are_rejected() {
        let result = SvgExporter::new().render_string(&scene(vec![gridline(f32::NAN)]));
        assert!(matches!(result, Err(Error::Render(_))));

        let infinite = Scene::new(Size::new(f32::INFINITY, 10.0), Vec::new());
        assert!(SvgExporter::new().export_scene(&infinite).is_err());
    }
}
