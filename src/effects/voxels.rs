//! Voxels sent between opposite faces.

use rand::{Rng, RngCore};

use crate::effects::cadence::Cadence;
use crate::effects::Effect;
use crate::grid::cube::{Cube, SIZE};
use crate::grid::plane::{Axis, Direction, Plane};

/// Seeds the two boundary layers of an axis (each (i, j) lands randomly on
/// layer 0 or 7), then repeatedly picks a random column and walks its lit
/// voxel one step per tick to the opposite face.
pub struct SendVoxels {
    cadence: Cadence,
    plane: Plane,
    i: usize,
    j: usize,
    sending: bool,
}

impl SendVoxels {
    /// Send voxels along the given axis.
    pub fn new(interval_ms: u64, axis: Axis) -> Self {
        Self {
            cadence: Cadence::new(interval_ms),
            plane: Plane::new(axis, 0, Direction::Still),
            i: 0,
            j: 0,
            sending: false,
        }
    }
}

impl Effect for SendVoxels {
    fn cadence_mut(&mut self) -> &mut Cadence {
        &mut self.cadence
    }

    fn activate(&mut self, cube: &mut Cube, rng: &mut dyn RngCore) {
        // Scatter every column's voxel onto one of the two boundary layers.
        for i in 0..SIZE {
            for j in 0..SIZE {
                let k = if rng.gen_range(0..2u32) == 1 { 0 } else { 7 };
                cube.set_at(self.plane.at(k), i, j, true);
            }
        }
    }

    fn step(&mut self, cube: &mut Cube, rng: &mut dyn RngCore) {
        if !self.sending {
            // Pick a column and send its voxel away from whichever face
            // currently holds it.
            self.i = rng.gen_range(0..SIZE);
            self.j = rng.gen_range(0..SIZE);

            if cube.get_at(self.plane.at(0), self.i, self.j) {
                self.plane = self.plane.at(0).forward();
            } else {
                self.plane = self.plane.at(7).backward();
            }

            self.sending = true;
            return;
        }

        cube.set_at(self.plane, self.i, self.j, false);
        self.plane = self.plane.advanced();
        cube.set_at(self.plane, self.i, self.j, true);

        if self.plane.offset() <= 0 || self.plane.offset() >= 7 {
            self.sending = false;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/voxels.rs"]
mod tests;
