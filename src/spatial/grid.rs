//! Seeded symmetric grid construction
//!
//! The grid is mirror-symmetric by construction: only the top-left
//! `ceil(rows/2) x ceil(cols/2)` block draws from the random stream, in
//! row-major order, and every other cell is a mirrored copy of its reflected
//! source. With odd dimensions the center row and column belong to the
//! generating block and carry no mirror flags. Because the generating cells
//! consume the stream in a fixed order, the whole grid is a pure function of
//! the seed and parameters.

use crate::catalog::{ShapeSet, TileCatalog};
use crate::history::{EditSnapshot, TileState};
use crate::io::configuration::BACKGROUND_COLOR;
use crate::io::error::{EngineError, Result};
use crate::render::vector::VectorSink;
use crate::spatial::supertile::SuperTile;
use image::{Rgba, RgbaImage};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Everything that determines a grid's generated content and geometry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridParams {
    /// Random seed
    pub seed: u64,
    /// Number of supertile rows
    pub rows: usize,
    /// Number of supertile columns
    pub cols: usize,
    /// Blank border around the grid, in canvas units
    pub margin: f64,
    /// Canvas width
    pub width: f64,
    /// Canvas height
    pub height: f64,
}

/// A rows x cols arrangement of supertiles, mirror-symmetric by construction
#[derive(Debug, Clone)]
pub struct Grid {
    params: GridParams,
    tile_width: f64,
    tile_height: f64,
    supertiles: Vec<SuperTile>,
}

impl Grid {
    /// Generate a grid from seeded parameters
    ///
    /// An empty allowed set produces a grid with no supertiles, the blank
    /// canvas state. Otherwise the top-left generating block draws fresh
    /// supertiles row-major from a `StdRng` seeded with `params.seed`, and
    /// the remaining cells copy their reflected source with the matching
    /// mirror flags.
    pub fn generate(params: GridParams, allowed: &ShapeSet, catalog: &TileCatalog) -> Self {
        let drawable_w = 2.0f64.mul_add(-params.margin, params.width).max(0.0);
        let drawable_h = 2.0f64.mul_add(-params.margin, params.height).max(0.0);
        let tile_width = if params.cols > 0 {
            drawable_w / params.cols as f64
        } else {
            0.0
        };
        let tile_height = if params.rows > 0 {
            drawable_h / params.rows as f64
        } else {
            0.0
        };

        let mut grid = Self {
            params,
            tile_width,
            tile_height,
            supertiles: Vec::new(),
        };
        if allowed.is_empty() || params.rows == 0 || params.cols == 0 {
            return grid;
        }

        let mut rng = StdRng::seed_from_u64(params.seed);
        let center_row = params.rows.div_ceil(2);
        let center_col = params.cols.div_ceil(2);
        grid.supertiles.reserve(params.rows * params.cols);

        for row in 0..params.rows {
            for col in 0..params.cols {
                let source_row = if row < center_row {
                    row
                } else {
                    params.rows - 1 - row
                };
                let source_col = if col < center_col {
                    col
                } else {
                    params.cols - 1 - col
                };
                let center = [
                    (col as f64).mul_add(tile_width, params.margin) + tile_width / 2.0,
                    (row as f64).mul_add(tile_height, params.margin) + tile_height / 2.0,
                ];

                let tile = if source_row == row && source_col == col {
                    SuperTile::generate(center, tile_width, tile_height, allowed, catalog, &mut rng)
                } else {
                    // Sources precede their copies in row-major order, so the
                    // lookup succeeds; generating keeps the vector dense.
                    let source_index = source_row * params.cols + source_col;
                    grid.supertiles.get(source_index).map_or_else(
                        || {
                            SuperTile::generate(
                                center,
                                tile_width,
                                tile_height,
                                allowed,
                                catalog,
                                &mut rng,
                            )
                        },
                        |source| {
                            SuperTile::mirrored_from(
                                source,
                                center,
                                tile_width,
                                tile_height,
                                source_col != col,
                                source_row != row,
                            )
                        },
                    )
                };
                grid.supertiles.push(tile);
            }
        }
        grid
    }

    /// Parameters this grid was generated with
    pub const fn params(&self) -> &GridParams {
        &self.params
    }

    /// Number of supertile rows
    pub const fn rows(&self) -> usize {
        self.params.rows
    }

    /// Number of supertile columns
    pub const fn cols(&self) -> usize {
        self.params.cols
    }

    /// Width of one supertile in canvas units
    pub const fn tile_width(&self) -> f64 {
        self.tile_width
    }

    /// Height of one supertile in canvas units
    pub const fn tile_height(&self) -> f64 {
        self.tile_height
    }

    /// Number of supertiles
    pub const fn len(&self) -> usize {
        self.supertiles.len()
    }

    /// Test whether the grid holds no supertiles
    pub const fn is_empty(&self) -> bool {
        self.supertiles.is_empty()
    }

    /// Borrow a supertile by row-major index
    pub fn supertile(&self, index: usize) -> Option<&SuperTile> {
        self.supertiles.get(index)
    }

    /// Mutably borrow a supertile by row-major index
    pub fn supertile_mut(&mut self, index: usize) -> Option<&mut SuperTile> {
        self.supertiles.get_mut(index)
    }

    /// All supertiles, row-major
    pub fn supertiles(&self) -> &[SuperTile] {
        &self.supertiles
    }

    /// Deep copy of every supertile's mutable state
    pub fn capture(&self) -> EditSnapshot {
        EditSnapshot {
            tiles: self
                .supertiles
                .iter()
                .map(|tile| TileState {
                    mirror_x: tile.mirror_x,
                    mirror_y: tile.mirror_y,
                    types: tile.types_snapshot(),
                })
                .collect(),
        }
    }

    /// Overwrite every supertile's mutable state from a snapshot
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::SnapshotMismatch`] when the snapshot was taken
    /// from a grid with a different supertile count; the grid is untouched.
    pub fn restore(&mut self, snapshot: &EditSnapshot) -> Result<()> {
        if snapshot.tiles.len() != self.supertiles.len() {
            return Err(EngineError::SnapshotMismatch {
                snapshot_tiles: snapshot.tiles.len(),
                grid_tiles: self.supertiles.len(),
            });
        }
        for (tile, state) in self.supertiles.iter_mut().zip(snapshot.tiles.iter()) {
            tile.restore(&state.types, state.mirror_x, state.mirror_y);
        }
        Ok(())
    }

    /// Render the whole grid to a fresh raster canvas
    pub fn render(&mut self, catalog: &TileCatalog) -> RgbaImage {
        let width = (self.params.width.max(1.0)).round() as u32;
        let height = (self.params.height.max(1.0)).round() as u32;
        let mut canvas = RgbaImage::from_pixel(width, height, Rgba(BACKGROUND_COLOR));
        for tile in &mut self.supertiles {
            tile.render_into(&mut canvas, catalog);
        }
        canvas
    }

    /// Emit the whole grid as vector primitives
    pub fn render_vector(&self, catalog: &TileCatalog, sink: &mut dyn VectorSink) {
        for tile in &self.supertiles {
            tile.render_vector(catalog, sink);
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::catalog::shapes;

    fn params(seed: u64, rows: usize, cols: usize) -> GridParams {
        GridParams {
            seed,
            rows,
            cols,
            margin: 0.0,
            width: 400.0,
            height: 400.0,
        }
    }

    #[test]
    fn test_empty_allowed_set_yields_blank_grid() {
        let catalog = shapes::standard().unwrap();
        let grid = Grid::generate(params(1, 3, 3), &ShapeSet::new(catalog.shape_count()), &catalog);
        assert!(grid.is_empty());
        assert_eq!(grid.rows(), 3);
    }

    #[test]
    fn test_generation_is_deterministic() {
        let catalog = shapes::standard().unwrap();
        let allowed = ShapeSet::all(catalog.shape_count());
        let a = Grid::generate(params(99, 4, 5), &allowed, &catalog);
        let b = Grid::generate(params(99, 4, 5), &allowed, &catalog);
        for (x, y) in a.supertiles().iter().zip(b.supertiles()) {
            assert_eq!(x.types_snapshot(), y.types_snapshot());
            assert_eq!(x.mirror_x, y.mirror_x);
            assert_eq!(x.mirror_y, y.mirror_y);
        }
    }

    #[test]
    fn test_mirror_pairing_even_grid() {
        let catalog = shapes::standard().unwrap();
        let allowed = ShapeSet::all(catalog.shape_count());
        let grid = Grid::generate(params(7, 4, 4), &allowed, &catalog);
        let source = grid.supertile(1).unwrap();
        let mirrored = grid.supertile(2).unwrap();
        assert_eq!(source.types_snapshot(), mirrored.types_snapshot());
        assert!(!source.mirror_x);
        assert!(mirrored.mirror_x);
        assert!(!mirrored.mirror_y);
    }

    #[test]
    fn test_center_cells_unmirrored_in_odd_grid() {
        let catalog = shapes::standard().unwrap();
        let allowed = ShapeSet::all(catalog.shape_count());
        let grid = Grid::generate(params(7, 3, 3), &allowed, &catalog);
        // center of a 3x3 grid is its own source
        let center = grid.supertile(4).unwrap();
        assert!(!center.mirror_x);
        assert!(!center.mirror_y);
    }

    #[test]
    fn test_restore_rejects_mismatched_snapshot() {
        let catalog = shapes::standard().unwrap();
        let allowed = ShapeSet::all(catalog.shape_count());
        let mut grid = Grid::generate(params(7, 2, 2), &allowed, &catalog);
        let other = Grid::generate(params(7, 3, 3), &allowed, &catalog);
        let before = grid.capture();
        let err = grid.restore(&other.capture()).unwrap_err();
        assert!(matches!(err, EngineError::SnapshotMismatch { .. }));
        assert_eq!(grid.capture(), before);
    }
}
