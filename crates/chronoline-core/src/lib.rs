//! Chronoline Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Chronoline
//! timeline crates. It includes:
//!
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Draw**: Stroke and text definitions and render layers ([`draw`] module)
//! - **Document**: The timeline document model ([`document`] module)
//! - **Measure**: The text measurement capability ([`measure`] module)

pub mod color;
pub mod document;
pub mod draw;
pub mod geometry;
pub mod measure;
