//! Procedural generation and interactive editing of mirror-symmetric tile grids
//!
//! The engine composes geometric shapes into 2x2 quadrant tiles, quadrant tiles
//! into reflected supertiles, and supertiles into a grid that is mirror-symmetric
//! by construction. Pointer hits are mapped back through the nested reflections
//! to the logical tile the user intended, edits propagate according to a scope
//! rule, and two bounded history stacks provide undo/redo for both generation
//! parameters and fine-grained tile edits.

#![forbid(unsafe_code)]

/// Shape registry with orientation transforms, families, and draw procedures
pub mod catalog;
/// Bounded undo/redo stacks for generation parameters and tile edits
pub mod history;
/// Pointer hit mapping, edit scope resolution, and the interactive session
pub mod interact;
/// Input/output operations, CLI, and error handling
pub mod io;
/// Raster and vector rendering backends
pub mod render;
/// Quadrant tiles, supertiles, and symmetric grid generation
pub mod spatial;

pub use io::error::{EngineError, Result};
