//! Rendering backends for tile geometry
//!
//! All tile geometry is expressed as calls against the [`vector::VectorSink`]
//! trait in a shape-local coordinate frame centered on the shape. Nested
//! mirror transforms are folded into a [`vector::Frame`] so that sinks only
//! ever see pre-transformed coordinates.

/// Pixel rasterization of vector primitives into RGBA images
pub mod raster;
/// Vector primitive sink trait and axis-flip coordinate frames
pub mod vector;

pub use vector::{Frame, TransformedSink, VectorSink};
