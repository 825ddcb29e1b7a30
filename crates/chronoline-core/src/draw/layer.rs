//! Layer-based rendering for SVG output.
//!
//! Timeline primitives are emitted in drawing order (eras, centerline,
//! events, axes), but painted bottom-to-top by [`RenderLayer`] so that axis
//! labels stay readable on top of era bands and event boxes.
//!
//! # Example
//!
//! ```
//! # use chronoline_core::draw::{RenderLayer, LayeredOutput};
//! # use svg::node::element::Rectangle;
//!
//! let mut output = LayeredOutput::new();
//!
//! let band = Rectangle::new().set("fill", "lightblue");
//! output.add_to_layer(RenderLayer::Era, Box::new(band));
//!
//! let label = svg::node::element::Text::new("1999");
//! output.add_to_layer(RenderLayer::Text, Box::new(label));
//!
//! let svg_nodes = output.render();
//! assert_eq!(svg_nodes.len(), 2);
//! ```

use svg::node::element as svg_element;

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// Rendering layers, bottom to top in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    /// Canvas background
    Background,
    /// Era bands and their boundary markers
    Era,
    /// Fine-axis gridlines and week boundaries
    Grid,
    /// Centerline and event rectangles
    Content,
    /// Labels of any kind
    Text,
}

impl RenderLayer {
    /// Returns a human-readable name for this layer.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Era => "era",
            Self::Grid => "grid",
            Self::Content => "content",
            Self::Text => "text",
        }
    }
}

/// SVG nodes grouped by rendering layer.
///
/// Nodes are kept in insertion order within a layer; [`LayeredOutput::render`]
/// groups them into one `<g data-layer="...">` per non-empty layer.
#[derive(Debug, Default)]
pub struct LayeredOutput {
    items: Vec<(RenderLayer, SvgNode)>,
}

impl LayeredOutput {
    /// Creates a new empty `LayeredOutput`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single node to the specified layer.
    pub fn add_to_layer(&mut self, layer: RenderLayer, node: SvgNode) {
        self.items.push((layer, node));
    }

    /// Returns `true` if there are no nodes in any layer.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Renders all layers to SVG groups, consuming the output.
    ///
    /// Layers are emitted from bottom to top; the sort is stable so nodes
    /// keep their insertion order inside a layer.
    pub fn render(mut self) -> Vec<SvgNode> {
        if self.is_empty() {
            return Vec::new();
        }

        self.items.sort_by_key(|(layer, _)| *layer);

        let mut result = Vec::new();
        let mut current_layer = self.items[0].0;
        let mut current_group = svg_element::Group::new().set("data-layer", current_layer.name());

        for (layer, node) in self.items {
            if layer != current_layer {
                result.push(Box::new(current_group) as SvgNode);

                current_layer = layer;
                current_group = svg_element::Group::new().set("data-layer", layer.name());
            }

            current_group = current_group.add(node);
        }

        result.push(Box::new(current_group) as SvgNode);

        result
    }
}
