//! Interactive editing session: pointer gestures, parameters, and history
//!
//! Owns the grid, the allowed-shape set, the interaction settings, and the
//! history manager, and wires them together the way an interactive surface
//! drives them: press/drag/release/leave pointer events, parameter changes
//! that rebuild the grid wholesale, and undo/redo/jump history commands.

use crate::catalog::{ShapeId, ShapeSet, TileCatalog};
use crate::history::{GenerationState, HistoryManager};
use crate::interact::hit::{self, HitInfo};
use crate::interact::scope::{self, EditMode, EditPlan, EditRequest, EditScope};
use crate::io::configuration::{MAX_CANVAS_SIZE, MAX_GRID_DIMENSION};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::grid::{Grid, GridParams};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Per-gesture tracking state, live between press and release
#[derive(Debug, Clone, Copy)]
struct GestureState {
    /// Last mutated logical address, for drag deduplication
    last: Option<(usize, usize, usize)>,
    /// Whether the gesture has produced at least one completed edit
    dirty: bool,
}

/// Single-threaded interactive editing session over one grid
#[derive(Debug)]
pub struct EditorSession<'a> {
    catalog: &'a TileCatalog,
    grid: Grid,
    history: HistoryManager,
    allowed: ShapeSet,
    params: GridParams,
    mode: EditMode,
    scope: EditScope,
    brush: ShapeId,
    rng: StdRng,
    gesture: Option<GestureState>,
}

impl<'a> EditorSession<'a> {
    /// Start a session: build the grid and seed both history stacks
    ///
    /// # Errors
    ///
    /// Returns [`crate::EngineError::InvalidParameter`] when the parameters
    /// fail validation.
    pub fn new(catalog: &'a TileCatalog, params: GridParams, allowed: ShapeSet) -> Result<Self> {
        validate_params(&params)?;
        let grid = Grid::generate(params, &allowed, catalog);
        let mut history = HistoryManager::new();
        history.push_generation(GenerationState::from_params(&params));
        history.push_edit(grid.capture());
        Ok(Self {
            catalog,
            grid,
            history,
            allowed,
            params,
            mode: EditMode::default(),
            scope: EditScope::default(),
            brush: 0,
            rng: StdRng::seed_from_u64(params.seed),
            gesture: None,
        })
    }

    /// Apply new generation parameters and rebuild the grid
    ///
    /// Pushes the parameters onto the generation stack and a fresh baseline
    /// snapshot onto the edit stack.
    ///
    /// # Errors
    ///
    /// Returns [`crate::EngineError::InvalidParameter`] when validation
    /// fails; the session is untouched.
    pub fn apply_params(&mut self, params: GridParams) -> Result<()> {
        validate_params(&params)?;
        self.params = params;
        self.history
            .push_generation(GenerationState::from_params(&params));
        self.rebuild();
        Ok(())
    }

    /// Replace the allowed-shape set and rebuild the grid
    ///
    /// Not recorded on the generation stack; only the resulting baseline
    /// snapshot lands on the edit stack.
    pub fn set_allowed(&mut self, allowed: ShapeSet) {
        self.allowed = allowed;
        self.rebuild();
    }

    /// Set the interaction mode
    pub const fn set_mode(&mut self, mode: EditMode) {
        self.mode = mode;
    }

    /// Set the edit propagation scope
    pub const fn set_scope(&mut self, scope: EditScope) {
        self.scope = scope;
    }

    /// Select the paint brush shape
    ///
    /// # Errors
    ///
    /// Returns [`crate::EngineError::UnknownShape`] when the id is not
    /// registered.
    pub fn set_brush(&mut self, brush: ShapeId) -> Result<()> {
        if !self.catalog.contains(brush) {
            return Err(crate::EngineError::UnknownShape {
                id: brush,
                shape_count: self.catalog.shape_count(),
            });
        }
        self.brush = brush;
        Ok(())
    }

    /// Pointer press: start a gesture and apply the first edit
    pub fn press(&mut self, x: f64, y: f64, randomize: bool) {
        self.gesture = Some(GestureState {
            last: None,
            dirty: false,
        });
        self.apply_at(x, y, randomize);
    }

    /// Pointer drag: apply edits to newly entered slots
    ///
    /// A drag with no prior press is a no-op. Repeated events over the same
    /// logical slot are suppressed so a slow drag does not stutter-edit one
    /// cell.
    pub fn drag(&mut self, x: f64, y: f64, randomize: bool) {
        if self.gesture.is_some() {
            self.apply_at(x, y, randomize);
        }
    }

    /// Pointer release: flush the gesture to the edit stack
    ///
    /// Pushes exactly one snapshot if the gesture completed at least one
    /// edit. A release with no prior press is a no-op.
    pub fn release(&mut self) {
        self.flush_gesture();
    }

    /// Pointer left the interactive surface: same flush as a release
    pub fn leave(&mut self) {
        self.flush_gesture();
    }

    /// Undo one edit step
    ///
    /// Returns `Ok(false)` when there is nothing to undo.
    ///
    /// # Errors
    ///
    /// Returns [`crate::EngineError::SnapshotMismatch`] when the snapshot
    /// predates a grid-shape change; the grid and cursor are left untouched.
    pub fn undo(&mut self) -> Result<bool> {
        let Some(snapshot) = self.history.undo_edit() else {
            return Ok(false);
        };
        self.history.begin_restore();
        let outcome = self.grid.restore(&snapshot);
        self.history.end_restore();
        if outcome.is_err() {
            self.history.redo_edit();
        }
        outcome.map(|()| true)
    }

    /// Redo one edit step
    ///
    /// Returns `Ok(false)` when there is nothing to redo.
    ///
    /// # Errors
    ///
    /// Returns [`crate::EngineError::SnapshotMismatch`] when the snapshot
    /// predates a grid-shape change; the grid and cursor are left untouched.
    pub fn redo(&mut self) -> Result<bool> {
        let Some(snapshot) = self.history.redo_edit() else {
            return Ok(false);
        };
        self.history.begin_restore();
        let outcome = self.grid.restore(&snapshot);
        self.history.end_restore();
        if outcome.is_err() {
            self.history.undo_edit();
        }
        outcome.map(|()| true)
    }

    /// Jump to a stored generation state and rebuild the grid
    ///
    /// The restore itself pushes nothing onto the generation stack; a fresh
    /// baseline snapshot is pushed onto the edit stack afterwards so undo
    /// stays consistent with the rebuilt grid.
    pub fn jump_to_generation(&mut self, index: usize) -> bool {
        let Some(state) = self.history.jump_generation(index) else {
            return false;
        };
        self.history.begin_restore();
        self.params = state.to_params();
        self.grid = Grid::generate(self.params, &self.allowed, self.catalog);
        self.gesture = None;
        self.history.end_restore();
        self.history.push_edit(self.grid.capture());
        true
    }

    /// The live grid
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable access to the live grid, for rendering
    pub const fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Current generation parameters
    pub const fn params(&self) -> &GridParams {
        &self.params
    }

    /// History cursors and lengths, for UI enablement
    pub const fn history(&self) -> &HistoryManager {
        &self.history
    }

    /// Current allowed-shape set
    pub const fn allowed(&self) -> &ShapeSet {
        &self.allowed
    }

    /// Resolve a coordinate without editing
    pub fn locate(&self, x: f64, y: f64) -> Option<HitInfo> {
        hit::locate(&self.grid, x, y)
    }

    /// Resolve and apply one edit at a coordinate
    fn apply_at(&mut self, x: f64, y: f64, randomize: bool) {
        let Some(hit) = hit::locate(&self.grid, x, y) else {
            return;
        };
        let address = (hit.supertile_index, hit.quadrant, hit.subtile);
        let Some(gesture) = self.gesture.as_mut() else {
            return;
        };
        if gesture.last == Some(address) {
            return;
        }
        gesture.last = Some(address);

        let request = EditRequest {
            mode: self.mode,
            scope: self.scope,
            brush: self.brush,
            randomize,
        };
        let plan = scope::resolve(
            &self.grid,
            self.catalog,
            &self.allowed,
            &hit,
            &request,
            &mut self.rng,
        );
        let mutated = apply_plan(&mut self.grid, &plan);

        // Paint counts as a completed edit even when it rewrites the same
        // type; cycle edits only dirty the gesture when something changed.
        let completed = match self.mode {
            EditMode::Paint => !plan.is_empty(),
            EditMode::CycleFamily => mutated > 0,
        };
        if completed
            && let Some(gesture) = self.gesture.as_mut()
        {
            gesture.dirty = true;
        }
    }

    fn flush_gesture(&mut self) {
        if let Some(gesture) = self.gesture.take()
            && gesture.dirty
        {
            self.history.push_edit(self.grid.capture());
        }
    }

    fn rebuild(&mut self) {
        self.grid = Grid::generate(self.params, &self.allowed, self.catalog);
        self.gesture = None;
        self.history.push_edit(self.grid.capture());
    }
}

/// Apply a plan to the grid, returning how many slots actually changed
fn apply_plan(grid: &mut Grid, plan: &EditPlan) -> usize {
    let mut mutated = 0;
    for target in &plan.targets {
        let Some(tile) = grid.supertile_mut(target.supertile) else {
            continue;
        };
        if tile.type_at(target.quadrant, target.subtile) != target.new_type {
            tile.set_type(target.quadrant, target.subtile, target.new_type);
            mutated += 1;
        }
    }
    mutated
}

/// Validate generation parameters against the configured safety limits
fn validate_params(params: &GridParams) -> Result<()> {
    if params.rows == 0 || params.rows > MAX_GRID_DIMENSION {
        return Err(invalid_parameter(
            "rows",
            &params.rows,
            &format!("must be between 1 and {MAX_GRID_DIMENSION}"),
        ));
    }
    if params.cols == 0 || params.cols > MAX_GRID_DIMENSION {
        return Err(invalid_parameter(
            "cols",
            &params.cols,
            &format!("must be between 1 and {MAX_GRID_DIMENSION}"),
        ));
    }
    if !params.width.is_finite() || params.width <= 0.0 || params.width > f64::from(MAX_CANVAS_SIZE)
    {
        return Err(invalid_parameter(
            "width",
            &params.width,
            &format!("must be positive and at most {MAX_CANVAS_SIZE}"),
        ));
    }
    if !params.height.is_finite()
        || params.height <= 0.0
        || params.height > f64::from(MAX_CANVAS_SIZE)
    {
        return Err(invalid_parameter(
            "height",
            &params.height,
            &format!("must be positive and at most {MAX_CANVAS_SIZE}"),
        ));
    }
    if !params.margin.is_finite()
        || params.margin < 0.0
        || 2.0 * params.margin >= params.width.min(params.height)
    {
        return Err(invalid_parameter(
            "margin",
            &params.margin,
            &"must be non-negative and leave a drawable area",
        ));
    }
    Ok(())
}
