//! Validates history bounds, undo/redo cursor movement, and restore guards

// Test assertions unwrap freely
#![allow(clippy::unwrap_used)]

use mirrortile::catalog::{ShapeSet, shapes};
use mirrortile::history::{EditSnapshot, GenerationState, HistoryManager, TileState};
use mirrortile::interact::EditorSession;
use mirrortile::spatial::grid::GridParams;

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

fn snapshot(tag: usize) -> EditSnapshot {
    EditSnapshot {
        tiles: vec![TileState {
            mirror_x: false,
            mirror_y: false,
            types: [[tag; 4]; 4],
        }],
    }
}

#[test]
fn test_edit_stack_caps_at_fifty() {
    let mut history = HistoryManager::new();
    for i in 0..60 {
        history.push_edit(snapshot(i));
    }
    assert_eq!(history.edit_len(), 50);
    assert_eq!(history.edit_cursor(), 49);
    // The oldest ten were evicted: stepping all the way back lands on #10
    let mut oldest = None;
    while let Some(s) = history.undo_edit() {
        oldest = Some(s);
    }
    assert_eq!(oldest.unwrap(), snapshot(10));
}

#[test]
fn test_generation_stack_caps_at_twenty() {
    let mut history = HistoryManager::new();
    for seed in 0..30u64 {
        history.push_generation(GenerationState::from_params(&params(seed, 2, 2)));
    }
    assert_eq!(history.generation_len(), 20);
    assert_eq!(history.generation_cursor(), 19);
}

#[test]
fn test_new_push_prunes_redo_tail() {
    let mut history = HistoryManager::new();
    for i in 0..5 {
        history.push_edit(snapshot(i));
    }
    history.undo_edit();
    history.undo_edit();
    assert!(history.can_redo());
    history.push_edit(snapshot(99));
    assert!(!history.can_redo());
    assert_eq!(history.edit_len(), 4);
}

#[test]
fn test_undo_redo_round_trip_restores_types() {
    let catalog = shapes::standard().unwrap();
    let allowed = ShapeSet::all(catalog.shape_count());
    let mut session = EditorSession::new(&catalog, params(7, 2, 2), allowed).unwrap();

    let baseline = session.grid().capture();
    session.press(25.0, 25.0, false);
    session.release();
    let edited = session.grid().capture();
    assert_ne!(baseline, edited);

    assert!(session.undo().unwrap());
    assert_eq!(session.grid().capture(), baseline);

    assert!(session.redo().unwrap());
    assert_eq!(session.grid().capture(), edited);
}

#[test]
fn test_undo_at_baseline_is_a_no_op() {
    let catalog = shapes::standard().unwrap();
    let allowed = ShapeSet::all(catalog.shape_count());
    let mut session = EditorSession::new(&catalog, params(7, 2, 2), allowed).unwrap();
    assert!(!session.undo().unwrap());
    assert!(!session.redo().unwrap());
}

#[test]
fn test_jump_to_generation_restores_params_without_pushing() {
    let catalog = shapes::standard().unwrap();
    let allowed = ShapeSet::all(catalog.shape_count());
    let mut session = EditorSession::new(&catalog, params(7, 2, 2), allowed).unwrap();

    session.apply_params(params(8, 3, 3)).unwrap();
    assert_eq!(session.history().generation_len(), 2);
    assert_eq!(session.params().seed, 8);

    assert!(session.jump_to_generation(0));
    assert_eq!(session.params().seed, 7);
    assert_eq!(session.grid().rows(), 2);
    // Restoring must not grow the generation stack
    assert_eq!(session.history().generation_len(), 2);
    assert_eq!(session.history().generation_cursor(), 0);

    assert!(!session.jump_to_generation(5));
}

#[test]
fn test_undo_across_grid_shape_change_is_refused() {
    let catalog = shapes::standard().unwrap();
    let allowed = ShapeSet::all(catalog.shape_count());
    let mut session = EditorSession::new(&catalog, params(7, 2, 2), allowed).unwrap();

    session.press(25.0, 25.0, false);
    session.release();
    session.apply_params(params(7, 3, 3)).unwrap();
    let current = session.grid().capture();

    // The previous snapshot holds 4 supertiles, the live grid 9
    assert!(session.undo().is_err());
    assert_eq!(session.grid().capture(), current);
    assert_eq!(session.grid().len(), 9);
}

#[test]
fn test_apply_params_rejects_invalid_values() {
    let catalog = shapes::standard().unwrap();
    let allowed = ShapeSet::all(catalog.shape_count());
    let mut session = EditorSession::new(&catalog, params(7, 2, 2), allowed).unwrap();

    assert!(session.apply_params(params(7, 0, 2)).is_err());
    assert!(
        session
            .apply_params(GridParams {
                width: -5.0,
                ..params(7, 2, 2)
            })
            .is_err()
    );
    assert!(
        session
            .apply_params(GridParams {
                margin: 300.0,
                ..params(7, 2, 2)
            })
            .is_err()
    );
    // Session untouched by the refused changes
    assert_eq!(session.params().seed, 7);
    assert_eq!(session.history().generation_len(), 1);
}
