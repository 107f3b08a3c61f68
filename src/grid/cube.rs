//! The 8x8x8 binary voxel grid.

use crate::grid::plane::{Axis, Plane};

/// Edge length of the cube on every axis.
pub const SIZE: usize = 8;

/// Total voxel count.
pub const VOXELS: usize = SIZE * SIZE * SIZE;

/// An 8x8x8 grid of on/off voxels.
///
/// Coordinate access is a caller contract: every coordinate must lie in
/// `[0, 8)` on its axis. Out-of-range access panics (fail-fast); this applies
/// uniformly to direct and plane-relative accessors, including a plane whose
/// offset has been advanced outside the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cube {
    state: [[[bool; SIZE]; SIZE]; SIZE],
}

impl Default for Cube {
    fn default() -> Self {
        Self::new()
    }
}

impl Cube {
    /// A fully cleared cube.
    pub fn new() -> Self {
        Self {
            state: [[[false; SIZE]; SIZE]; SIZE],
        }
    }

    /// Read the voxel at (x, y, z).
    pub fn get(&self, x: usize, y: usize, z: usize) -> bool {
        self.state[x][y][z]
    }

    /// Write the voxel at (x, y, z).
    pub fn set(&mut self, x: usize, y: usize, z: usize, value: bool) {
        self.state[x][y][z] = value;
    }

    /// Read the (i, j) voxel of the slice selected by the plane's axis and
    /// offset. The plane's direction is ignored.
    ///
    /// Canonical free-coordinate order: axis X => (i=Y, j=Z); axis Y =>
    /// (i=X, j=Z); axis Z => (i=X, j=Y).
    pub fn get_at(&self, plane: Plane, i: usize, j: usize) -> bool {
        let (x, y, z) = resolve(plane, i, j);
        self.get(x, y, z)
    }

    /// Write the (i, j) voxel of the slice selected by the plane's axis and
    /// offset. The plane's direction is ignored.
    pub fn set_at(&mut self, plane: Plane, i: usize, j: usize, value: bool) {
        let (x, y, z) = resolve(plane, i, j);
        self.set(x, y, z, value);
    }

    /// Set all 64 cells of the slice selected by the plane to `value`.
    pub fn fill(&mut self, plane: Plane, value: bool) {
        for i in 0..SIZE {
            for j in 0..SIZE {
                self.set_at(plane, i, j, value);
            }
        }
    }

    /// Turn every voxel off.
    pub fn clear(&mut self) {
        for z in 0..SIZE {
            self.fill(Plane::Z.at(z as i32), false);
        }
    }

    /// Shift the whole grid one step along the plane's direction.
    ///
    /// No-op for a still plane. Otherwise every layer takes the content of
    /// the neighboring layer behind it (relative to the direction of travel)
    /// and the vacated trailing layer is cleared. Layers are copied in travel
    /// order so each copy reads pre-shift data.
    pub fn shift(&mut self, plane: Plane) {
        let step = plane.direction().step();
        if step == 0 {
            return;
        }

        let mut k: i32 = if step < 0 { 0 } else { 7 };
        while (step < 0 && k < 7) || (step > 0 && k > 0) {
            for i in 0..SIZE {
                for j in 0..SIZE {
                    let v = self.get_at(plane.at(k - step), i, j);
                    self.set_at(plane.at(k), i, j, v);
                }
            }
            k -= step;
        }

        // Clear out the trailing layer.
        self.fill(plane.at(if step < 0 { 7 } else { 0 }), false);
    }

    /// Number of voxels currently lit.
    pub fn count_lit(&self) -> usize {
        self.state
            .iter()
            .flatten()
            .flatten()
            .filter(|&&v| v)
            .count()
    }
}

/// Resolve a plane-relative (i, j) into absolute (x, y, z).
fn resolve(plane: Plane, i: usize, j: usize) -> (usize, usize, usize) {
    let o = plane.offset() as usize;
    match plane.axis() {
        Axis::X => (o, i, j),
        Axis::Y => (i, o, j),
        Axis::Z => (i, j, o),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/grid/cube.rs"]
mod tests;
