//! Whole-cube fill and drain effects.

use rand::{Rng, RngCore};

use crate::effects::cadence::Cadence;
use crate::effects::Effect;
use crate::grid::cube::{Cube, SIZE, VOXELS};
use crate::grid::plane::Plane;

/// Random fill/drain: while glowing, each tick turns on one randomly chosen
/// still-off voxel; once all 512 have been touched the flag flips and the
/// cube drains the same way. The touch counter resets on every flip.
pub struct Glowing {
    cadence: Cadence,
    glowing: bool,
    count: usize,
}

impl Glowing {
    /// A glow starting in the filling phase. An interval of zero (one voxel
    /// per loop iteration) is the usual choice.
    pub fn new(interval_ms: u64) -> Self {
        Self {
            cadence: Cadence::new(interval_ms),
            glowing: true,
            count: 0,
        }
    }
}

impl Effect for Glowing {
    fn cadence_mut(&mut self) -> &mut Cadence {
        &mut self.cadence
    }

    fn step(&mut self, cube: &mut Cube, rng: &mut dyn RngCore) {
        if self.count >= VOXELS {
            self.glowing = !self.glowing;
            self.count = 0;
            return;
        }

        // Uniform pick among the voxels this phase has not touched yet.
        let pick = rng.gen_range(0..VOXELS - self.count);
        self.count += 1;

        let mut seen = 0;
        for x in 0..SIZE {
            for y in 0..SIZE {
                for z in 0..SIZE {
                    if cube.get(x, y, z) != self.glowing {
                        if seen == pick {
                            cube.set(x, y, z, self.glowing);
                            return;
                        }
                        seen += 1;
                    }
                }
            }
        }
    }
}

/// Static full-on: activation lights every voxel; steps do nothing.
pub struct FullyOn {
    cadence: Cadence,
}

impl FullyOn {
    /// A fully lit cube.
    pub fn new() -> Self {
        Self {
            cadence: Cadence::new(1000),
        }
    }
}

impl Default for FullyOn {
    fn default() -> Self {
        Self::new()
    }
}

impl Effect for FullyOn {
    fn cadence_mut(&mut self) -> &mut Cadence {
        &mut self.cadence
    }

    fn activate(&mut self, cube: &mut Cube, _rng: &mut dyn RngCore) {
        for z in 0..SIZE {
            cube.fill(Plane::Z.at(z as i32), true);
        }
    }

    fn step(&mut self, _cube: &mut Cube, _rng: &mut dyn RngCore) {}
}

#[cfg(test)]
#[path = "../../tests/unit/effects/glow.rs"]
mod tests;
