//! Allowed-shape set used to constrain generation and randomized edits
//!
//! Backed by a bit vector for O(1) membership and cheap iteration in id
//! order, which keeps seeded draws deterministic.

use crate::catalog::{ShapeId, TileCatalog};
use bitvec::prelude::{BitVec, bitvec};
use rand::Rng;
use std::fmt;

/// Set of shape ids a generator is allowed to draw from
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShapeSet {
    bits: BitVec,
}

impl ShapeSet {
    /// Create an empty set over a catalog of `shape_count` shapes
    pub fn new(shape_count: usize) -> Self {
        Self {
            bits: bitvec![0; shape_count],
        }
    }

    /// Create a set containing every shape of the catalog
    pub fn all(shape_count: usize) -> Self {
        Self {
            bits: bitvec![1; shape_count],
        }
    }

    /// Build a set from explicit ids; out-of-range ids are ignored
    pub fn from_ids(ids: &[ShapeId], shape_count: usize) -> Self {
        let mut set = Self::new(shape_count);
        for &id in ids {
            set.insert(id);
        }
        set
    }

    /// Insert a shape id; out-of-range ids are ignored
    pub fn insert(&mut self, id: ShapeId) {
        if id < self.bits.len() {
            self.bits.set(id, true);
        }
    }

    /// Remove a shape id
    pub fn remove(&mut self, id: ShapeId) {
        if id < self.bits.len() {
            self.bits.set(id, false);
        }
    }

    /// Test shape membership
    pub fn contains(&self, id: ShapeId) -> bool {
        self.bits.get(id).as_deref() == Some(&true)
    }

    /// Test if no shapes are allowed
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Number of allowed shapes
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// All allowed ids in ascending order
    pub fn to_vec(&self) -> Vec<ShapeId> {
        self.bits.iter_ones().collect()
    }

    /// Draw one allowed id uniformly, or `None` when the set is empty
    ///
    /// Consumes exactly one value from the random stream, so generation order
    /// determines reproducibility.
    pub fn choose<R: Rng>(&self, rng: &mut R) -> Option<ShapeId> {
        let count = self.count();
        if count == 0 {
            return None;
        }
        let pick = rng.random_range(0..count);
        self.bits.iter_ones().nth(pick)
    }

    /// Draw one allowed id, falling back to the whole catalog when the set
    /// is empty
    ///
    /// Serves the randomized paths that must always yield a shape. Returns
    /// shape 0 when the catalog itself has no shapes.
    pub fn choose_or_any<R: Rng>(&self, catalog: &TileCatalog, rng: &mut R) -> ShapeId {
        if let Some(id) = self.choose(rng) {
            return id;
        }
        let count = catalog.shape_count();
        if count == 0 {
            0
        } else {
            rng.random_range(0..count)
        }
    }
}

impl fmt::Display for ShapeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ShapeSet({} shapes: {:?})", self.count(), self.to_vec())
    }
}
