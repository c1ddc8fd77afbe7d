//! Supertile: a 2x2 reflected arrangement of quadrant tiles
//!
//! The top-left quadrant renders unreflected; top-right, bottom-left, and
//! bottom-right render flipped across x, y, and both respectively. All four
//! quadrants hold independent type arrays initialized to the same seed types,
//! so the visual symmetry comes from the rendering transforms while edits can
//! diverge per quadrant. An additional mirror flag pair reflects the whole
//! supertile for grid-level symmetry.

use crate::catalog::{ShapeId, ShapeSet, TileCatalog};
use crate::io::configuration::SUBTILE_PADDING_RATIO;
use crate::render::vector::{Frame, TransformedSink, VectorSink};
use crate::spatial::quadrant::{QuadrantTile, SUBTILE_COUNT};
use image::RgbaImage;
use image::imageops;
use rand::Rng;

/// Number of quadrants per supertile (0=TL, 1=TR, 2=BL, 3=BR)
pub const QUADRANT_COUNT: usize = 4;

/// Fixed reflection applied when rendering quadrant `quadrant`
///
/// Returns `(flip_x, flip_y)`: identity for TL, x for TR, y for BL, both
/// for BR. The quadrant index encodes its cell position, so the flips fall
/// out of the index bits.
pub const fn quadrant_reflection(quadrant: usize) -> (bool, bool) {
    (quadrant & 1 == 1, quadrant & 2 == 2)
}

/// Pack a mirror flag pair into position bits (x in bit 0, y in bit 1)
pub const fn mirror_bits(mirror_x: bool, mirror_y: bool) -> usize {
    (mirror_x as usize) | ((mirror_y as usize) << 1)
}

/// A 2x2 arrangement of quadrant tiles with grid-level mirror flags
#[derive(Debug, Clone)]
pub struct SuperTile {
    quadrants: [QuadrantTile; QUADRANT_COUNT],
    /// Grid-level horizontal mirror (set on tiles in the reflected column half)
    pub mirror_x: bool,
    /// Grid-level vertical mirror (set on tiles in the reflected row half)
    pub mirror_y: bool,
    center: [f64; 2],
    width: f64,
    height: f64,
}

impl SuperTile {
    /// Generate a fresh supertile from the caller's seeded random stream
    ///
    /// Draws four seed shapes uniformly from `allowed`, falling back to the
    /// full catalog when the set is empty, then initializes all four
    /// quadrants to independent copies of those seed types.
    pub fn generate<R: Rng>(
        center: [f64; 2],
        width: f64,
        height: f64,
        allowed: &ShapeSet,
        catalog: &TileCatalog,
        rng: &mut R,
    ) -> Self {
        let mut seed_types = [0; SUBTILE_COUNT];
        for slot in &mut seed_types {
            *slot = allowed.choose_or_any(catalog, rng);
        }
        Self {
            quadrants: [
                QuadrantTile::new(seed_types),
                QuadrantTile::new(seed_types),
                QuadrantTile::new(seed_types),
                QuadrantTile::new(seed_types),
            ],
            mirror_x: false,
            mirror_y: false,
            center,
            width,
            height,
        }
    }

    /// Build a mirrored copy of a source supertile at a new position
    ///
    /// Type arrays are copied by value into independent storage, so later
    /// single-scope edits never alias across mirrored siblings.
    pub fn mirrored_from(
        source: &Self,
        center: [f64; 2],
        width: f64,
        height: f64,
        mirror_x: bool,
        mirror_y: bool,
    ) -> Self {
        let quadrants = [
            QuadrantTile::new(*source.quadrant(0).types()),
            QuadrantTile::new(*source.quadrant(1).types()),
            QuadrantTile::new(*source.quadrant(2).types()),
            QuadrantTile::new(*source.quadrant(3).types()),
        ];
        Self {
            quadrants,
            mirror_x,
            mirror_y,
            center,
            width,
            height,
        }
    }

    /// Center position in canvas coordinates
    pub const fn center(&self) -> [f64; 2] {
        self.center
    }

    /// Supertile width
    pub const fn width(&self) -> f64 {
        self.width
    }

    /// Supertile height
    pub const fn height(&self) -> f64 {
        self.height
    }

    /// Left edge in canvas coordinates
    pub const fn left(&self) -> f64 {
        self.center[0] - self.width / 2.0
    }

    /// Top edge in canvas coordinates
    pub const fn top(&self) -> f64 {
        self.center[1] - self.height / 2.0
    }

    /// Borrow a quadrant
    ///
    /// # Panics
    ///
    /// Panics when `quadrant` is not in `0..4`.
    pub fn quadrant(&self, quadrant: usize) -> &QuadrantTile {
        assert!(
            quadrant < QUADRANT_COUNT,
            "quadrant index {quadrant} out of range"
        );
        self.quadrants
            .get(quadrant)
            .unwrap_or_else(unreachable_quadrant)
    }

    /// Mutably borrow a quadrant
    ///
    /// # Panics
    ///
    /// Panics when `quadrant` is not in `0..4`.
    pub fn quadrant_mut(&mut self, quadrant: usize) -> &mut QuadrantTile {
        assert!(
            quadrant < QUADRANT_COUNT,
            "quadrant index {quadrant} out of range"
        );
        self.quadrants
            .get_mut(quadrant)
            .unwrap_or_else(unreachable_quadrant)
    }

    /// Shape id at a logical quadrant/subtile address
    ///
    /// # Panics
    ///
    /// Panics when either index is out of range.
    pub fn type_at(&self, quadrant: usize, subtile: usize) -> ShapeId {
        self.quadrant(quadrant).type_at(subtile)
    }

    /// Write a shape id at a logical quadrant/subtile address
    ///
    /// # Panics
    ///
    /// Panics when either index is out of range.
    pub fn set_type(&mut self, quadrant: usize, subtile: usize, id: ShapeId) {
        self.quadrant_mut(quadrant).set_type(subtile, id);
    }

    /// Snapshot of all sixteen shape ids, quadrant-major
    pub fn types_snapshot(&self) -> [[ShapeId; SUBTILE_COUNT]; QUADRANT_COUNT] {
        [
            *self.quadrant(0).types(),
            *self.quadrant(1).types(),
            *self.quadrant(2).types(),
            *self.quadrant(3).types(),
        ]
    }

    /// Overwrite all quadrants and mirror flags from a snapshot
    ///
    /// Quadrants are rebuilt from fresh copies, dropping any cached images.
    pub fn restore(
        &mut self,
        types: &[[ShapeId; SUBTILE_COUNT]; QUADRANT_COUNT],
        mirror_x: bool,
        mirror_y: bool,
    ) {
        for (quadrant, snapshot) in self.quadrants.iter_mut().zip(types.iter()) {
            *quadrant = QuadrantTile::new(*snapshot);
        }
        self.mirror_x = mirror_x;
        self.mirror_y = mirror_y;
    }

    /// Composite this supertile into a canvas
    ///
    /// Each logical quadrant is rendered unreflected by its cache, then
    /// flipped by the fixed quadrant reflection combined with the supertile
    /// mirror flags, and blitted at its display position (the logical cell
    /// position reflected by the mirror flags).
    pub fn render_into(&mut self, canvas: &mut RgbaImage, catalog: &TileCatalog) {
        let quad_w = (self.width / 2.0).round() as u32;
        let quad_h = (self.height / 2.0).round() as u32;
        if quad_w == 0 || quad_h == 0 {
            return;
        }
        let left = self.left();
        let top = self.top();
        let mirror = mirror_bits(self.mirror_x, self.mirror_y);

        for logical in 0..QUADRANT_COUNT {
            let (qx, qy) = quadrant_reflection(logical);
            let flip_x = qx ^ self.mirror_x;
            let flip_y = qy ^ self.mirror_y;

            let Some(quadrant) = self.quadrants.get_mut(logical) else {
                continue;
            };
            let base = quadrant.image(catalog, quad_w, quad_h);
            let flipped = match (flip_x, flip_y) {
                (false, false) => base.clone(),
                (true, false) => imageops::flip_horizontal(base),
                (false, true) => imageops::flip_vertical(base),
                (true, true) => imageops::rotate180(base),
            };

            let display = logical ^ mirror;
            let px = ((display & 1) as f64).mul_add(f64::from(quad_w), left);
            let py = (((display >> 1) & 1) as f64).mul_add(f64::from(quad_h), top);
            imageops::overlay(canvas, &flipped, px.round() as i64, py.round() as i64);
        }
    }

    /// Emit this supertile's geometry as pre-transformed vector primitives
    ///
    /// Same traversal as the raster path, expressed through nested frames:
    /// the root frame carries the supertile mirror, each quadrant frame adds
    /// the fixed reflection, and subtiles draw centered in their cells.
    pub fn render_vector(&self, catalog: &TileCatalog, sink: &mut dyn VectorSink) {
        let root = Frame {
            origin: self.center,
            flip: [self.mirror_x, self.mirror_y],
        };
        let sub_w = self.width / 4.0;
        let sub_h = self.height / 4.0;
        let padding = sub_w.min(sub_h) * SUBTILE_PADDING_RATIO;

        for (logical, quadrant) in self.quadrants.iter().enumerate() {
            let (flip_x, flip_y) = quadrant_reflection(logical);
            let offset = [
                if logical & 1 == 1 { sub_w } else { -sub_w },
                if logical & 2 == 2 { sub_h } else { -sub_h },
            ];
            let quad_frame = root.child(offset, flip_x, flip_y);

            for (index, &shape) in quadrant.types().iter().enumerate() {
                let sub_offset = [
                    if index % 2 == 1 { sub_w / 2.0 } else { -sub_w / 2.0 },
                    if index / 2 == 1 { sub_h / 2.0 } else { -sub_h / 2.0 },
                ];
                let mut transformed =
                    TransformedSink::new(sink, quad_frame.child(sub_offset, false, false));
                catalog.draw(shape, &mut transformed, sub_w, sub_h, padding);
            }
        }
    }
}

#[cold]
fn unreachable_quadrant<T>() -> T {
    // The asserts above guarantee the index is in range
    unreachable!("quadrant index validated")
}
