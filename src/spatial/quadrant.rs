//! Quadrant tile: four shape instances in a 2x2 arrangement
//!
//! The rendered image is memoized against the current type array and pixel
//! size; any type mutation drops the cache so the next render rebuilds it.

use crate::catalog::{ShapeId, TileCatalog};
use crate::io::configuration::{SUBTILE_PADDING_RATIO, TILE_COLOR};
use crate::render::raster::RasterSink;
use crate::render::vector::{Frame, TransformedSink};
use image::{Rgba, RgbaImage};

/// Number of shape slots per quadrant tile (row-major 2x2)
pub const SUBTILE_COUNT: usize = 4;

/// A 2x2 arrangement of shapes with a cached rendering
#[derive(Debug, Clone)]
pub struct QuadrantTile {
    types: [ShapeId; SUBTILE_COUNT],
    cache: Option<RgbaImage>,
}

impl QuadrantTile {
    /// Create a quadrant tile from exactly four shape ids
    pub const fn new(types: [ShapeId; SUBTILE_COUNT]) -> Self {
        Self { types, cache: None }
    }

    /// The four shape ids, row-major
    pub const fn types(&self) -> &[ShapeId; SUBTILE_COUNT] {
        &self.types
    }

    /// Shape id at a subtile slot
    ///
    /// # Panics
    ///
    /// Panics when `subtile` is not in `0..4`; an out-of-range slot is a
    /// programming error, not a recoverable condition.
    pub fn type_at(&self, subtile: usize) -> ShapeId {
        assert!(
            subtile < SUBTILE_COUNT,
            "subtile index {subtile} out of range"
        );
        self.types.get(subtile).copied().unwrap_or_default()
    }

    /// Replace the shape at a subtile slot, invalidating the cached image
    ///
    /// # Panics
    ///
    /// Panics when `subtile` is not in `0..4`.
    pub fn set_type(&mut self, subtile: usize, id: ShapeId) {
        assert!(
            subtile < SUBTILE_COUNT,
            "subtile index {subtile} out of range"
        );
        if let Some(slot) = self.types.get_mut(subtile)
            && *slot != id
        {
            *slot = id;
            self.cache = None;
        }
    }

    /// Drop the memoized image
    pub fn invalidate(&mut self) {
        self.cache = None;
    }

    /// Memoized rendering of the quadrant at the given pixel size
    ///
    /// Idempotent: repeated calls with unchanged types and size return the
    /// cached image. Unknown shape ids leave their slot blank.
    pub fn image(&mut self, catalog: &TileCatalog, width: u32, height: u32) -> &RgbaImage {
        let stale = !self
            .cache
            .as_ref()
            .is_some_and(|img| img.width() == width && img.height() == height);
        if stale {
            self.cache = None;
        }
        self.cache
            .get_or_insert_with(|| render_quadrant(&self.types, catalog, width, height))
    }
}

/// Render four subtiles into a fresh transparent canvas
fn render_quadrant(
    types: &[ShapeId; SUBTILE_COUNT],
    catalog: &TileCatalog,
    width: u32,
    height: u32,
) -> RgbaImage {
    let mut canvas = RgbaImage::new(width.max(1), height.max(1));
    let sub_w = width as f64 / 2.0;
    let sub_h = height as f64 / 2.0;
    let padding = sub_w.min(sub_h) * SUBTILE_PADDING_RATIO;

    let mut raster = RasterSink::new(&mut canvas, Rgba(TILE_COLOR));
    for (index, &shape) in types.iter().enumerate() {
        let cx = ((index % 2) as f64).mul_add(sub_w, sub_w / 2.0);
        let cy = ((index / 2) as f64).mul_add(sub_h, sub_h / 2.0);
        let mut sink = TransformedSink::new(&mut raster, Frame::at(cx, cy));
        catalog.draw(shape, &mut sink, sub_w, sub_h, padding);
    }
    canvas
}
