//! Single travelling voxel.

use rand::RngCore;

use crate::effects::cadence::Cadence;
use crate::effects::Effect;
use crate::grid::cube::{Cube, SIZE};

/// Advances one lit cell through all 512 coordinates in raster order
/// (x fastest, then y, then z), wrapping each axis at 8. Mostly useful to
/// verify the physical wiring of a cube.
pub struct VoxelExplorer {
    cadence: Cadence,
    x: usize,
    y: usize,
    z: usize,
}

impl VoxelExplorer {
    /// An explorer starting at the origin.
    pub fn new(interval_ms: u64) -> Self {
        Self {
            cadence: Cadence::new(interval_ms),
            x: 0,
            y: 0,
            z: 0,
        }
    }
}

impl Effect for VoxelExplorer {
    fn cadence_mut(&mut self) -> &mut Cadence {
        &mut self.cadence
    }

    fn step(&mut self, cube: &mut Cube, _rng: &mut dyn RngCore) {
        cube.clear();
        cube.set(self.x, self.y, self.z, true);

        self.x += 1;
        if self.x >= SIZE {
            self.x = 0;
            self.y += 1;
        }
        if self.y >= SIZE {
            self.y = 0;
            self.z += 1;
        }
        if self.z >= SIZE {
            self.z = 0;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/explorer.rs"]
mod tests;
