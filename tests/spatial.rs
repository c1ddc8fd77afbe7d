//! Validates grid generation symmetry, determinism, and snapshot restore

// Test assertions unwrap freely
#![allow(clippy::unwrap_used)]

use mirrortile::catalog::{ShapeSet, shapes};
use mirrortile::spatial::grid::{Grid, GridParams};

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
fn test_generation_is_deterministic() {
    let catalog = shapes::standard().unwrap();
    let allowed = ShapeSet::all(catalog.shape_count());
    let a = Grid::generate(params(123, 5, 3), &allowed, &catalog);
    let b = Grid::generate(params(123, 5, 3), &allowed, &catalog);
    assert_eq!(a.len(), b.len());
    for (x, y) in a.supertiles().iter().zip(b.supertiles()) {
        assert_eq!(x.types_snapshot(), y.types_snapshot());
    }
}

#[test]
fn test_different_seeds_differ() {
    let catalog = shapes::standard().unwrap();
    let allowed = ShapeSet::all(catalog.shape_count());
    let a = Grid::generate(params(1, 4, 4), &allowed, &catalog);
    let b = Grid::generate(params(2, 4, 4), &allowed, &catalog);
    let same = a
        .supertiles()
        .iter()
        .zip(b.supertiles())
        .all(|(x, y)| x.types_snapshot() == y.types_snapshot());
    assert!(!same);
}

#[test]
fn test_point_symmetry_after_generation() {
    let catalog = shapes::standard().unwrap();
    let allowed = ShapeSet::all(catalog.shape_count());
    for (rows, cols) in [(4, 4), (3, 5), (2, 2), (1, 6)] {
        let grid = Grid::generate(params(7, rows, cols), &allowed, &catalog);
        for i in 0..rows {
            for j in 0..cols {
                let tile = grid.supertile(i * cols + j).unwrap();
                let opposite = grid
                    .supertile((rows - 1 - i) * cols + (cols - 1 - j))
                    .unwrap();
                assert_eq!(
                    tile.types_snapshot(),
                    opposite.types_snapshot(),
                    "({i},{j}) breaks symmetry in {rows}x{cols}"
                );
            }
        }
    }
}

#[test]
fn test_mirror_flags_match_grid_halves() {
    let catalog = shapes::standard().unwrap();
    let allowed = ShapeSet::all(catalog.shape_count());
    let grid = Grid::generate(params(9, 4, 4), &allowed, &catalog);
    for i in 0..4 {
        for j in 0..4 {
            let tile = grid.supertile(i * 4 + j).unwrap();
            assert_eq!(tile.mirror_x, j >= 2);
            assert_eq!(tile.mirror_y, i >= 2);
        }
    }
}

#[test]
fn test_odd_center_row_and_column_unmirrored() {
    let catalog = shapes::standard().unwrap();
    let allowed = ShapeSet::all(catalog.shape_count());
    let grid = Grid::generate(params(9, 3, 3), &allowed, &catalog);
    let center = grid.supertile(4).unwrap();
    assert!(!center.mirror_x && !center.mirror_y);
    // center column of every row carries no horizontal mirror
    for row in 0..3 {
        assert!(!grid.supertile(row * 3 + 1).unwrap().mirror_x);
    }
}

#[test]
fn test_every_cell_is_filled_row_major() {
    let catalog = shapes::standard().unwrap();
    let allowed = ShapeSet::all(catalog.shape_count());
    for (rows, cols) in [(1, 1), (2, 3), (4, 1), (5, 5)] {
        let grid = Grid::generate(params(13, rows, cols), &allowed, &catalog);
        assert_eq!(grid.len(), rows * cols, "{rows}x{cols} grid is not dense");
        for i in 0..rows {
            for j in 0..cols {
                let tile = grid.supertile(i * cols + j).unwrap();
                let expected_x = (j as f64).mul_add(400.0 / cols as f64, 200.0 / cols as f64);
                assert!(
                    (tile.center()[0] - expected_x).abs() < 1e-9,
                    "cell ({i},{j}) sits at the wrong column"
                );
            }
        }
    }
}

#[test]
fn test_empty_allowed_set_is_blank_canvas() {
    let catalog = shapes::standard().unwrap();
    let grid = Grid::generate(params(5, 4, 4), &ShapeSet::new(catalog.shape_count()), &catalog);
    assert!(grid.is_empty());
    assert_eq!(grid.len(), 0);
}

#[test]
fn test_mirrored_tiles_do_not_alias() {
    let catalog = shapes::standard().unwrap();
    let allowed = ShapeSet::all(catalog.shape_count());
    let mut grid = Grid::generate(params(7, 2, 2), &allowed, &catalog);
    let before = grid.supertile(3).unwrap().types_snapshot();
    let source = grid.supertile_mut(0).unwrap();
    let old = source.type_at(0, 0);
    source.set_type(0, 0, (old + 1) % 28);
    assert_eq!(grid.supertile(3).unwrap().types_snapshot(), before);
}

#[test]
fn test_capture_restore_round_trip() {
    let catalog = shapes::standard().unwrap();
    let allowed = ShapeSet::all(catalog.shape_count());
    let mut grid = Grid::generate(params(11, 3, 3), &allowed, &catalog);
    let baseline = grid.capture();

    let tile = grid.supertile_mut(0).unwrap();
    tile.set_type(2, 3, 27);
    tile.mirror_x = true;
    assert_ne!(grid.capture(), baseline);

    grid.restore(&baseline).unwrap();
    assert_eq!(grid.capture(), baseline);
}

#[test]
fn test_rendered_canvas_is_horizontally_symmetric() {
    let catalog = shapes::standard().unwrap();
    let allowed = ShapeSet::all(catalog.shape_count());
    let mut grid = Grid::generate(params(7, 2, 2), &allowed, &catalog);
    let rendered = grid.render(&catalog);
    assert_eq!(rendered.width(), 400);
    assert_eq!(rendered.height(), 400);
    // Mirrored copies blit pixel-flipped versions of the same cached
    // quadrant images, so the symmetry is exact, not approximate.
    for y in 0..400 {
        for x in 0..200 {
            assert_eq!(
                rendered.get_pixel(x, y),
                rendered.get_pixel(399 - x, y),
                "asymmetry at ({x}, {y})"
            );
        }
    }
}

#[test]
fn test_render_vector_emits_geometry() {
    use mirrortile::io::svg::SvgSink;
    let catalog = shapes::standard().unwrap();
    let allowed = ShapeSet::all(catalog.shape_count());
    let grid = Grid::generate(params(7, 2, 2), &allowed, &catalog);
    let mut sink = SvgSink::new(400.0, 400.0);
    grid.render_vector(&catalog, &mut sink);
    let doc = sink.finish();
    assert!(doc.len() > 200, "expected geometry in the document");
}
