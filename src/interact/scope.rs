//! Edit-scope resolution and orientation-corrected type computation
//!
//! A hit address plus the current interaction mode and scope expand into a
//! concrete plan: the full set of addresses to mutate and the shape id to
//! write at each. Paint-mode writes are orientation-corrected per target so
//! the shape on screen always matches the brush's canonical orientation no
//! matter how many mirror layers sit between the data and the display.

use crate::catalog::{ShapeId, ShapeSet, TileCatalog};
use crate::interact::hit::HitInfo;
use crate::spatial::grid::Grid;
use crate::spatial::quadrant::SUBTILE_COUNT;
use crate::spatial::supertile::{QUADRANT_COUNT, SuperTile, quadrant_reflection};
use rand::Rng;

/// How a pointer edit chooses the replacement shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    /// Cycle the hit slot to the next shape in its family
    #[default]
    CycleFamily,
    /// Write the selected brush shape, orientation-corrected per target
    Paint,
}

/// How far a pointer edit propagates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditScope {
    /// Exactly the one logical address hit
    #[default]
    Single,
    /// The same subtile slot in all four quadrants of the hit supertile
    Supertile,
    /// Every slot in the grid whose current type equals the hit's old type
    GlobalExact,
    /// The visually-equivalent slot in every supertile
    GlobalPosition,
    /// The same logical slot in all four quadrants of every supertile
    GlobalPositionSymmetric,
}

/// Interaction settings read at resolve time
#[derive(Debug, Clone, Copy, Default)]
pub struct EditRequest {
    /// Replacement selection mode
    pub mode: EditMode,
    /// Propagation scope
    pub scope: EditScope,
    /// Canonical brush shape for paint mode
    pub brush: ShapeId,
    /// Cycle mode: draw a fresh random shape instead of the family successor
    pub randomize: bool,
}

/// One planned mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditTarget {
    /// Row-major supertile index
    pub supertile: usize,
    /// Logical quadrant
    pub quadrant: usize,
    /// Logical subtile slot
    pub subtile: usize,
    /// Shape id to write
    pub new_type: ShapeId,
}

/// Complete set of mutations for one pointer edit
#[derive(Debug, Clone, Default)]
pub struct EditPlan {
    /// Planned writes, in grid order
    pub targets: Vec<EditTarget>,
}

impl EditPlan {
    /// Test whether the plan mutates nothing
    pub const fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

/// Expand a hit into the full set of addresses to mutate
///
/// Cycle-family edits that would rewrite the old type to itself resolve to
/// an empty plan; paint edits always produce targets, even when repainting
/// the same shape.
pub fn resolve<R: Rng>(
    grid: &Grid,
    catalog: &TileCatalog,
    allowed: &ShapeSet,
    hit: &HitInfo,
    request: &EditRequest,
    rng: &mut R,
) -> EditPlan {
    let cycled = match request.mode {
        EditMode::CycleFamily => {
            let next = if request.randomize {
                allowed.choose_or_any(catalog, rng)
            } else {
                catalog.next_in_family(hit.old_type)
            };
            if next == hit.old_type {
                return EditPlan::default();
            }
            Some(next)
        }
        EditMode::Paint => None,
    };

    let new_type = |tile: &SuperTile, quadrant: usize| -> ShapeId {
        cycled.unwrap_or_else(|| {
            let (flip_x, flip_y) = quadrant_reflection(quadrant);
            catalog.transform(request.brush, flip_x ^ tile.mirror_x, flip_y ^ tile.mirror_y)
        })
    };

    let mut targets = Vec::new();
    match request.scope {
        EditScope::Single => {
            if let Some(tile) = grid.supertile(hit.supertile_index) {
                targets.push(EditTarget {
                    supertile: hit.supertile_index,
                    quadrant: hit.quadrant,
                    subtile: hit.subtile,
                    new_type: new_type(tile, hit.quadrant),
                });
            }
        }
        EditScope::Supertile => {
            if let Some(tile) = grid.supertile(hit.supertile_index) {
                for quadrant in 0..QUADRANT_COUNT {
                    targets.push(EditTarget {
                        supertile: hit.supertile_index,
                        quadrant,
                        subtile: hit.subtile,
                        new_type: new_type(tile, quadrant),
                    });
                }
            }
        }
        EditScope::GlobalExact => {
            for (index, tile) in grid.supertiles().iter().enumerate() {
                for quadrant in 0..QUADRANT_COUNT {
                    for subtile in 0..SUBTILE_COUNT {
                        if tile.type_at(quadrant, subtile) == hit.old_type {
                            targets.push(EditTarget {
                                supertile: index,
                                quadrant,
                                subtile,
                                new_type: new_type(tile, quadrant),
                            });
                        }
                    }
                }
            }
        }
        EditScope::GlobalPosition => {
            for (index, tile) in grid.supertiles().iter().enumerate() {
                let (quadrant, subtile) =
                    position_in(tile, hit.visual_quadrant, hit.visual_subtile);
                targets.push(EditTarget {
                    supertile: index,
                    quadrant,
                    subtile,
                    new_type: new_type(tile, quadrant),
                });
            }
        }
        EditScope::GlobalPositionSymmetric => {
            for (index, tile) in grid.supertiles().iter().enumerate() {
                for quadrant in 0..QUADRANT_COUNT {
                    targets.push(EditTarget {
                        supertile: index,
                        quadrant,
                        subtile: hit.subtile,
                        new_type: new_type(tile, quadrant),
                    });
                }
            }
        }
    }
    EditPlan { targets }
}

/// Map a visual slot through one supertile's own mirror flags
///
/// Different supertiles carry different mirror flags, so the logical address
/// of "the slot displayed here" must be derived per supertile: undo that
/// tile's mirror on the displayed quadrant and sub-cell, then invert the
/// fixed per-quadrant reflection.
fn position_in(tile: &SuperTile, visual_quadrant: usize, visual_subtile: usize) -> (usize, usize) {
    let mut quad_col = visual_quadrant & 1;
    let mut quad_row = (visual_quadrant >> 1) & 1;
    let mut sub_col = visual_subtile % 2;
    let mut sub_row = visual_subtile / 2;
    if tile.mirror_x {
        quad_col = 1 - quad_col;
        sub_col = 1 - sub_col;
    }
    if tile.mirror_y {
        quad_row = 1 - quad_row;
        sub_row = 1 - sub_row;
    }

    let quadrant = quad_row * 2 + quad_col;
    let (flip_x, flip_y) = quadrant_reflection(quadrant);
    if flip_x {
        sub_col = 1 - sub_col;
    }
    if flip_y {
        sub_row = 1 - sub_row;
    }
    (quadrant, sub_row * 2 + sub_col)
}
