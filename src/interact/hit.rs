//! Pointer-to-address mapping through two layers of mirroring
//!
//! A screen point is first resolved to a supertile, then to a quadrant and a
//! subtile slot within it. The slot the user sees is the *visual* address;
//! the array slot they intend to edit is the *logical* address, obtained by
//! undoing the supertile mirror on the raw coordinates and then inverting the
//! fixed per-quadrant reflection on the sub-cell indices.

use crate::catalog::ShapeId;
use crate::spatial::grid::Grid;
use crate::spatial::supertile::quadrant_reflection;

/// Resolved pointer hit: logical edit address plus the visual slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitInfo {
    /// Row-major supertile index
    pub supertile_index: usize,
    /// Logical quadrant (the array actually edited)
    pub quadrant: usize,
    /// Logical subtile slot within the quadrant
    pub subtile: usize,
    /// Shape id currently stored at the logical address
    pub old_type: ShapeId,
    /// Quadrant as displayed on screen, before any inversion
    pub visual_quadrant: usize,
    /// Subtile slot as displayed on screen, before any inversion
    pub visual_subtile: usize,
}

/// Map a canvas coordinate to a hit address
///
/// Returns `None` when either coordinate is not finite, the point falls in
/// the margin or outside the drawable rectangle, or the grid is empty.
/// Never panics on any input coordinate.
pub fn locate(grid: &Grid, x: f64, y: f64) -> Option<HitInfo> {
    let params = grid.params();
    let tile_w = grid.tile_width();
    let tile_h = grid.tile_height();
    if !x.is_finite() || !y.is_finite() || grid.is_empty() || tile_w <= 0.0 || tile_h <= 0.0 {
        return None;
    }
    let gx = x - params.margin;
    let gy = y - params.margin;
    if gx < 0.0 || gy < 0.0 {
        return None;
    }
    let col = (gx / tile_w).floor() as usize;
    let row = (gy / tile_h).floor() as usize;
    if col >= params.cols || row >= params.rows {
        return None;
    }

    let supertile_index = row * params.cols + col;
    let tile = grid.supertile(supertile_index)?;
    let local_x = x - tile.left();
    let local_y = y - tile.top();

    let (visual_quadrant, visual_subtile) =
        derive_address(local_x, local_y, tile.width(), tile.height());

    // Undo the supertile mirror on the raw coordinates, then re-derive.
    let unmirrored_x = if tile.mirror_x {
        tile.width() - local_x
    } else {
        local_x
    };
    let unmirrored_y = if tile.mirror_y {
        tile.height() - local_y
    } else {
        local_y
    };
    let (quadrant, display_subtile) =
        derive_address(unmirrored_x, unmirrored_y, tile.width(), tile.height());

    // Invert the fixed per-quadrant reflection on the sub-cell indices.
    let (flip_x, flip_y) = quadrant_reflection(quadrant);
    let mut sub_col = display_subtile % 2;
    let mut sub_row = display_subtile / 2;
    if flip_x {
        sub_col = 1 - sub_col;
    }
    if flip_y {
        sub_row = 1 - sub_row;
    }
    let subtile = sub_row * 2 + sub_col;

    Some(HitInfo {
        supertile_index,
        quadrant,
        subtile,
        old_type: tile.type_at(quadrant, subtile),
        visual_quadrant,
        visual_subtile,
    })
}

/// Derive (quadrant, subtile) from coordinates local to a supertile
///
/// In-quadrant coordinates are clamped into `[0, half)` so floating-point
/// rounding at cell boundaries cannot push an index out of range.
fn derive_address(local_x: f64, local_y: f64, width: f64, height: f64) -> (usize, usize) {
    let half_w = width / 2.0;
    let half_h = height / 2.0;
    let quad_col = usize::from(local_x >= half_w);
    let quad_row = usize::from(local_y >= half_h);

    let in_x = (quad_col as f64).mul_add(-half_w, local_x).clamp(0.0, half_w);
    let in_y = (quad_row as f64).mul_add(-half_h, local_y).clamp(0.0, half_h);
    let sub_col = usize::from(in_x >= half_w / 2.0);
    let sub_row = usize::from(in_y >= half_h / 2.0);

    (quad_row * 2 + quad_col, sub_row * 2 + sub_col)
}
