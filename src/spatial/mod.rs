//! Quadrant tiles, supertiles, and symmetric grid generation

/// Seeded symmetric grid construction and wholesale rebuilds
pub mod grid;
/// 2x2 shape arrangement with a memoized raster cache
pub mod quadrant;
/// 2x2 reflected arrangement of quadrant tiles
pub mod supertile;

pub use grid::{Grid, GridParams};
pub use quadrant::QuadrantTile;
pub use supertile::SuperTile;
