//! Shape registry with orientation transforms, families, and draw procedures
//!
//! The catalog is an explicitly constructed value owned by the application
//! root and injected wherever shape identity matters. Each shape carries a
//! draw procedure plus a precomputed orientation table describing which shape
//! it becomes under a horizontal flip, a vertical flip, or both. The combined
//! entry is stored rather than derived, because for asymmetric shapes the
//! composition of the single-axis entries is not always the double flip.

use crate::io::error::{EngineError, Result};
use crate::render::vector::VectorSink;

/// Allowed-shape set backed by a bit vector
pub mod shapeset;
/// Built-in shape draw procedures and the standard catalog
pub mod shapes;

pub use shapeset::ShapeSet;

/// Handle into a [`TileCatalog`]; unique and contiguous from 0
pub type ShapeId = usize;

/// Draw procedure: emits primitives for a shape of the given width/height,
/// centered on the sink's local origin, respecting the padding inset
pub type DrawFn = fn(&mut dyn VectorSink, f64, f64, f64);

/// Orientation table entry for one shape
///
/// Each field names the shape produced by the corresponding reflection.
/// Every flip is an involution: applying the same flip to the result
/// returns the original id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrientationTransform {
    /// Shape after a horizontal flip
    pub flip_x: ShapeId,
    /// Shape after a vertical flip
    pub flip_y: ShapeId,
    /// Shape after flipping both axes (precomputed, not composed)
    pub flip_both: ShapeId,
}

impl OrientationTransform {
    /// Table entry for a fully symmetric shape (all flips map to itself)
    pub const fn symmetric(id: ShapeId) -> Self {
        Self {
            flip_x: id,
            flip_y: id,
            flip_both: id,
        }
    }
}

/// A registered shape: name, draw procedure, orientation table, family link
#[derive(Debug)]
struct ShapeDef {
    name: &'static str,
    draw: DrawFn,
    transform: OrientationTransform,
    family: Option<usize>,
}

/// Immutable registry of tile shapes
///
/// Built once at startup through [`CatalogBuilder`]; mis-registration is a
/// configuration error surfaced at build time, never mid-session.
#[derive(Debug)]
pub struct TileCatalog {
    shapes: Vec<ShapeDef>,
    families: Vec<Vec<ShapeId>>,
}

impl TileCatalog {
    /// Number of registered shapes
    pub const fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Test whether an id refers to a registered shape
    pub const fn contains(&self, id: ShapeId) -> bool {
        id < self.shapes.len()
    }

    /// Display name of a shape
    pub fn name(&self, id: ShapeId) -> Option<&'static str> {
        self.shapes.get(id).map(|s| s.name)
    }

    /// Shape id resulting from the requested reflection
    ///
    /// When both flips are requested the precomputed combined entry is
    /// returned. Unknown ids pass through unchanged so a stale reference
    /// degrades to identity instead of corrupting orientation math.
    pub fn transform(&self, id: ShapeId, flip_x: bool, flip_y: bool) -> ShapeId {
        let Some(shape) = self.shapes.get(id) else {
            return id;
        };
        match (flip_x, flip_y) {
            (true, true) => shape.transform.flip_both,
            (true, false) => shape.transform.flip_x,
            (false, true) => shape.transform.flip_y,
            (false, false) => id,
        }
    }

    /// Family index of a shape, if it belongs to one
    pub fn family_of(&self, id: ShapeId) -> Option<usize> {
        self.shapes.get(id).and_then(|s| s.family)
    }

    /// Member ids of a family
    pub fn family_members(&self, family: usize) -> &[ShapeId] {
        self.families.get(family).map_or(&[], Vec::as_slice)
    }

    /// Cyclic successor within the shape's family, or the id unchanged when
    /// the shape has no family
    pub fn next_in_family(&self, id: ShapeId) -> ShapeId {
        let Some(family) = self.family_of(id) else {
            return id;
        };
        let members = self.family_members(family);
        let Some(position) = members.iter().position(|&m| m == id) else {
            return id;
        };
        members
            .get((position + 1) % members.len())
            .copied()
            .unwrap_or(id)
    }

    /// Emit the shape's geometry into a sink
    ///
    /// Returns `false` for unknown ids: the slot renders as nothing rather
    /// than aborting the frame.
    pub fn draw(&self, id: ShapeId, sink: &mut dyn VectorSink, w: f64, h: f64, padding: f64) -> bool {
        self.shapes.get(id).is_some_and(|shape| {
            (shape.draw)(sink, w, h, padding);
            true
        })
    }
}

/// Incremental catalog construction with validation at build time
///
/// Shapes are appended and receive the next unused id. A shape must be
/// registered either as symmetric or with explicit orientation entries;
/// the two registration methods make omitting both impossible.
#[derive(Default)]
pub struct CatalogBuilder {
    shapes: Vec<ShapeDef>,
    families: Vec<Vec<ShapeId>>,
}

impl CatalogBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a fully symmetric shape; returns its assigned id
    pub fn symmetric(&mut self, name: &'static str, draw: DrawFn) -> ShapeId {
        let id = self.shapes.len();
        self.shapes.push(ShapeDef {
            name,
            draw,
            transform: OrientationTransform::symmetric(id),
            family: None,
        });
        id
    }

    /// Register a shape with explicit orientation entries; returns its id
    pub fn oriented(
        &mut self,
        name: &'static str,
        draw: DrawFn,
        transform: OrientationTransform,
    ) -> ShapeId {
        let id = self.shapes.len();
        self.shapes.push(ShapeDef {
            name,
            draw,
            transform,
            family: None,
        });
        id
    }

    /// Group previously registered shapes into a cycling family
    pub fn family(&mut self, members: &[ShapeId]) {
        self.families.push(members.to_vec());
    }

    /// Validate and freeze the catalog
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::CatalogConfiguration`] when an orientation entry
    /// references an unknown id, a flip fails to be an involution, a family
    /// names an unknown shape, or a shape appears in more than one family.
    pub fn build(mut self) -> Result<TileCatalog> {
        let count = self.shapes.len();

        for (id, shape) in self.shapes.iter().enumerate() {
            let t = shape.transform;
            for entry in [t.flip_x, t.flip_y, t.flip_both] {
                if entry >= count {
                    return Err(config_error(format!(
                        "shape {id} ('{}') transform references unknown id {entry}",
                        shape.name
                    )));
                }
            }
        }

        // Each flip must be its own inverse
        for id in 0..count {
            for (fx, fy) in [(true, false), (false, true), (true, true)] {
                let once = transform_of(&self.shapes, id, fx, fy);
                let twice = transform_of(&self.shapes, once, fx, fy);
                if twice != id {
                    return Err(config_error(format!(
                        "flip ({fx}, {fy}) of shape {id} is not an involution: {id} -> {once} -> {twice}"
                    )));
                }
            }
        }

        for (family, members) in self.families.iter().enumerate() {
            for &member in members {
                let Some(shape) = self.shapes.get_mut(member) else {
                    return Err(config_error(format!(
                        "family {family} references unknown shape {member}"
                    )));
                };
                if let Some(existing) = shape.family {
                    return Err(config_error(format!(
                        "shape {member} belongs to both family {existing} and family {family}"
                    )));
                }
                shape.family = Some(family);
            }
        }

        Ok(TileCatalog {
            shapes: self.shapes,
            families: self.families,
        })
    }
}

fn transform_of(shapes: &[ShapeDef], id: ShapeId, flip_x: bool, flip_y: bool) -> ShapeId {
    shapes.get(id).map_or(id, |shape| match (flip_x, flip_y) {
        (true, true) => shape.transform.flip_both,
        (true, false) => shape.transform.flip_x,
        (false, true) => shape.transform.flip_y,
        (false, false) => id,
    })
}

fn config_error(reason: String) -> EngineError {
    EngineError::CatalogConfiguration { reason }
}
