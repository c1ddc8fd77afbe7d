//! End-to-end scenario: generate, click, verify symmetry, and export

// Test assertions unwrap and index freely
#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use mirrortile::catalog::{ShapeSet, shapes};
use mirrortile::interact::EditorSession;
use mirrortile::io::image::{export_grid_png, export_grid_svg};
use mirrortile::spatial::grid::{Grid, GridParams};

fn params() -> GridParams {
    GridParams {
        seed: 7,
        rows: 2,
        cols: 2,
        margin: 0.0,
        width: 400.0,
        height: 400.0,
    }
}

#[test]
fn test_single_cycle_click_edits_one_slot() {
    let catalog = shapes::standard().unwrap();
    let allowed = ShapeSet::from_ids(&[0, 1], catalog.shape_count());
    let mut session = EditorSession::new(&catalog, params(), allowed).unwrap();

    // The far corner supertile is a byte-identical double mirror of the first
    let source_types = session.grid().supertile(0).unwrap().types_snapshot();
    let mirrored = session.grid().supertile(3).unwrap();
    assert_eq!(mirrored.types_snapshot(), source_types);
    assert!(mirrored.mirror_x && mirrored.mirror_y);

    // Click the top-left subtile of the top-left quadrant of supertile 0
    let hit = session.locate(25.0, 25.0).unwrap();
    assert_eq!(
        (hit.supertile_index, hit.quadrant, hit.subtile),
        (0, 0, 0)
    );
    let old = hit.old_type;
    let mirrored_before = session.grid().supertile(3).unwrap().types_snapshot();

    session.press(25.0, 25.0, false);
    session.release();

    let edited = session.grid().supertile(0).unwrap();
    assert_eq!(edited.type_at(0, 0), catalog.next_in_family(old));
    // Every other slot of the hit supertile is untouched
    for quadrant in 0..4 {
        for subtile in 0..4 {
            if (quadrant, subtile) != (0, 0) {
                let expected = source_types[quadrant][subtile];
                assert_eq!(edited.type_at(quadrant, subtile), expected);
            }
        }
    }
    // The mirrored sibling keeps its own storage
    assert_eq!(
        session.grid().supertile(3).unwrap().types_snapshot(),
        mirrored_before
    );
}

#[test]
fn test_restricted_allowed_set_limits_generation() {
    let catalog = shapes::standard().unwrap();
    let allowed = ShapeSet::from_ids(&[0, 1], catalog.shape_count());
    let grid = Grid::generate(params(), &allowed, &catalog);
    for tile in grid.supertiles() {
        for quadrant in tile.types_snapshot() {
            for id in quadrant {
                assert!(id <= 1, "generated shape {id} outside the allowed set");
            }
        }
    }
}

#[test]
fn test_png_export_writes_decodable_file() {
    let catalog = shapes::standard().unwrap();
    let allowed = ShapeSet::all(catalog.shape_count());
    let mut grid = Grid::generate(params(), &allowed, &catalog);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("out.png");
    export_grid_png(&mut grid, &catalog, &path).unwrap();

    let decoded = image::open(&path).unwrap();
    assert_eq!(decoded.width(), 400);
    assert_eq!(decoded.height(), 400);
}

#[test]
fn test_svg_export_writes_document() {
    let catalog = shapes::standard().unwrap();
    let allowed = ShapeSet::all(catalog.shape_count());
    let grid = Grid::generate(params(), &allowed, &catalog);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.svg");
    export_grid_svg(&grid, &catalog, &path).unwrap();

    let document = std::fs::read_to_string(&path).unwrap();
    assert!(document.starts_with("<svg"));
    assert!(document.trim_end().ends_with("</svg>"));
}

#[test]
fn test_set_allowed_rebuilds_grid() {
    let catalog = shapes::standard().unwrap();
    let allowed = ShapeSet::all(catalog.shape_count());
    let mut session = EditorSession::new(&catalog, params(), allowed).unwrap();
    assert_eq!(session.grid().len(), 4);

    session.set_allowed(ShapeSet::new(catalog.shape_count()));
    assert!(session.grid().is_empty());
    // Blank canvas is a state, not an error: pointer events are no-ops
    session.press(25.0, 25.0, false);
    session.release();
    assert!(session.grid().is_empty());

    session.set_allowed(ShapeSet::from_ids(&[5], catalog.shape_count()));
    assert_eq!(session.grid().len(), 4);
}
