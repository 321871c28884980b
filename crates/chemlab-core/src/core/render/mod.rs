//! # Geometry Renderer
//!
//! Turns a molecule into 2-D drawing primitives in a fixed 600 × 400 logical
//! canvas and serializes them as SVG.
//!
//! - [`geometry`] - Direction, perpendicular offset and point-to-segment helpers
//! - [`scene`] - Bond and atom glyphs, selection highlighting and hit testing
//! - [`svg`] - SVG serialization of a scene

pub mod geometry;
pub mod scene;
pub mod svg;

pub use scene::{Hit, Scene, render};
pub use svg::to_svg;
