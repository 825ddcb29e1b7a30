//! Export functionality for Chronoline timelines.
//!
//! This module provides the [`Exporter`] trait that defines the interface for
//! converting a [`Scene`] into an output format. It is the final stage in
//! the Chronoline processing pipeline.
//!
//! # Pipeline Position
//!
//! ```text
//! JSON document
//!     ↓ parse
//! TimelineDocument
//!     ↓ layout
//! TimelineLayout
//!     ↓ scene
//! Scene (ordered primitives)
//!     ↓ export (this module)
//! Output
//! ```
//!
//! # Available Backends
//!
//! - [`svg`]: SVG output via [`svg::SvgExporter`]
//!
//! # Error Handling
//!
//! Export operations return [`Error`]. [`Error`] converts into
//! [`ChronolineError::Export`] at the crate boundary.
//!
//! [`ChronolineError::Export`]: crate::ChronolineError::Export

/// SVG export backend.
pub mod svg;

use thiserror::Error;

use crate::scene::Scene;

/// Abstraction for timeline export backends.
pub trait Exporter {
    /// The rendered output.
    type Output;

    /// Exports a scene to the backend's output format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the scene cannot be converted to the
    /// target format.
    fn export_scene(&self, scene: &Scene) -> Result<Self::Output, Error>;
}

/// Errors that can occur during timeline export.
#[derive(Debug, Error)]
pub enum Error {
    /// A rendering or conversion failure described by the message.
    #[error("Render error: {0}")]
    Render(String),
}
