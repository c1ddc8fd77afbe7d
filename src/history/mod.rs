//! Bounded undo/redo stacks for generation parameters and tile edits
//!
//! Two independent capped stacks, each with a position cursor. Moving the
//! cursor never deletes entries; a new push while the cursor sits behind the
//! top truncates the abandoned future first. Restores run inside an explicit
//! `Restoring` phase so that re-applying stored state can never trigger a
//! nested push.

use crate::catalog::ShapeId;
use crate::io::configuration::{EDIT_HISTORY_CAP, GENERATION_HISTORY_CAP};
use crate::spatial::grid::GridParams;
use std::collections::VecDeque;
use std::time::SystemTime;

/// Immutable snapshot of coarse generation parameters
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationState {
    /// Random seed
    pub seed: u64,
    /// Grid rows
    pub rows: usize,
    /// Grid columns
    pub cols: usize,
    /// Margin around the grid
    pub margin: f64,
    /// Canvas width
    pub width: f64,
    /// Canvas height
    pub height: f64,
    /// Wall-clock time the snapshot was taken
    pub timestamp: SystemTime,
}

impl GenerationState {
    /// Snapshot the given parameters at the current time
    pub fn from_params(params: &GridParams) -> Self {
        Self {
            seed: params.seed,
            rows: params.rows,
            cols: params.cols,
            margin: params.margin,
            width: params.width,
            height: params.height,
            timestamp: SystemTime::now(),
        }
    }

    /// Convert back into grid parameters
    pub const fn to_params(&self) -> GridParams {
        GridParams {
            seed: self.seed,
            rows: self.rows,
            cols: self.cols,
            margin: self.margin,
            width: self.width,
            height: self.height,
        }
    }
}

/// Mutable state of one supertile at one instant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileState {
    /// Grid-level horizontal mirror flag
    pub mirror_x: bool,
    /// Grid-level vertical mirror flag
    pub mirror_y: bool,
    /// Shape ids per quadrant, quadrant-major
    pub types: [[ShapeId; 4]; 4],
}

/// Full deep copy of the grid's mutable state at one instant
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditSnapshot {
    /// One entry per supertile, row-major
    pub tiles: Vec<TileState>,
}

/// Capped stack with a movable cursor
///
/// The cursor points at the entry representing current state. Undo and redo
/// move the cursor without deleting; pushing evicts the oldest entry past the
/// capacity and prunes everything after the cursor.
#[derive(Debug, Clone)]
pub struct BoundedStack<T> {
    entries: VecDeque<T>,
    cursor: usize,
    capacity: usize,
}

impl<T> BoundedStack<T> {
    /// Create an empty stack with a fixed capacity
    pub const fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            cursor: 0,
            capacity,
        }
    }

    /// Number of retained entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Test whether no entries are retained
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Cursor position (index of the entry representing current state)
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Entry at the cursor
    pub fn current(&self) -> Option<&T> {
        self.entries.get(self.cursor)
    }

    /// Push a new entry, pruning any redo tail and evicting past capacity
    pub fn push(&mut self, entry: T) {
        if !self.entries.is_empty() {
            self.entries.truncate(self.cursor + 1);
        }
        self.entries.push_back(entry);
        if self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
        self.cursor = self.entries.len().saturating_sub(1);
    }

    /// Move the cursor back one entry and return it
    pub fn step_back(&mut self) -> Option<&T> {
        if self.cursor == 0 || self.entries.is_empty() {
            return None;
        }
        self.cursor -= 1;
        self.entries.get(self.cursor)
    }

    /// Move the cursor forward one entry and return it
    pub fn step_forward(&mut self) -> Option<&T> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        self.entries.get(self.cursor)
    }

    /// Move the cursor to an absolute position and return the entry
    pub fn jump(&mut self, index: usize) -> Option<&T> {
        if index >= self.entries.len() {
            return None;
        }
        self.cursor = index;
        self.entries.get(self.cursor)
    }
}

/// Restore state machine: restoring forbids nested pushes by construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RestorePhase {
    /// Normal operation; pushes are accepted
    #[default]
    Idle,
    /// A restore is in flight; pushes are silently dropped
    Restoring,
}

/// Dual history: coarse generation parameters and fine-grained edits
#[derive(Debug, Clone)]
pub struct HistoryManager {
    generation: BoundedStack<GenerationState>,
    edits: BoundedStack<EditSnapshot>,
    phase: RestorePhase,
}

impl Default for HistoryManager {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryManager {
    /// Create empty generation and edit stacks at their configured caps
    pub const fn new() -> Self {
        Self {
            generation: BoundedStack::new(GENERATION_HISTORY_CAP),
            edits: BoundedStack::new(EDIT_HISTORY_CAP),
            phase: RestorePhase::Idle,
        }
    }

    /// Whether a restore is currently in flight
    pub fn is_restoring(&self) -> bool {
        self.phase == RestorePhase::Restoring
    }

    /// Enter the restoring phase; pushes are dropped until [`Self::end_restore`]
    pub const fn begin_restore(&mut self) {
        self.phase = RestorePhase::Restoring;
    }

    /// Leave the restoring phase
    pub const fn end_restore(&mut self) {
        self.phase = RestorePhase::Idle;
    }

    /// Record a generation-parameter change; ignored while restoring
    pub fn push_generation(&mut self, state: GenerationState) {
        if self.phase == RestorePhase::Idle {
            self.generation.push(state);
        }
    }

    /// Record an edit snapshot; ignored while restoring
    pub fn push_edit(&mut self, snapshot: EditSnapshot) {
        if self.phase == RestorePhase::Idle {
            self.edits.push(snapshot);
        }
    }

    /// Step the edit cursor back and return the snapshot to restore
    pub fn undo_edit(&mut self) -> Option<EditSnapshot> {
        self.edits.step_back().cloned()
    }

    /// Step the edit cursor forward and return the snapshot to restore
    pub fn redo_edit(&mut self) -> Option<EditSnapshot> {
        self.edits.step_forward().cloned()
    }

    /// Move the generation cursor to `index` and return the stored parameters
    pub fn jump_generation(&mut self, index: usize) -> Option<GenerationState> {
        self.generation.jump(index).cloned()
    }

    /// Number of retained edit snapshots
    pub fn edit_len(&self) -> usize {
        self.edits.len()
    }

    /// Edit cursor position
    pub const fn edit_cursor(&self) -> usize {
        self.edits.cursor()
    }

    /// Number of retained generation states
    pub fn generation_len(&self) -> usize {
        self.generation.len()
    }

    /// Generation cursor position
    pub const fn generation_cursor(&self) -> usize {
        self.generation.cursor()
    }

    /// Whether an undo step is available
    pub fn can_undo(&self) -> bool {
        self.edits.cursor() > 0 && !self.edits.is_empty()
    }

    /// Whether a redo step is available
    pub fn can_redo(&self) -> bool {
        self.edits.cursor() + 1 < self.edits.len()
    }
}
