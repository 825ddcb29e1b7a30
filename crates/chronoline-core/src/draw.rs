//! Drawing definitions shared by the layout and export stages.
//!
//! Layout produces primitives that reference these definitions; the SVG
//! exporter maps them onto elements and groups them by [`RenderLayer`].

mod layer;
mod stroke;
pub(crate) mod text;

pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use stroke::{StrokeDefinition, StrokeStyle};
pub use text::{FontWeight, TextDefinition};
