//! Growing and shrinking wireframe cubes.

use rand::{Rng, RngCore};

use crate::effects::cadence::Cadence;
use crate::effects::Effect;
use crate::grid::cube::Cube;

/// Light only the 12-edge outline of a cube of edge length `size` whose
/// lowest corner sits at (x, y, z). All touched coordinates must stay inside
/// the grid; a size of zero draws nothing.
pub fn draw_wire_cube(cube: &mut Cube, x: usize, y: usize, z: usize, size: usize) {
    for i in 0..size {
        cube.set(x, y + i, z, true);
        cube.set(x + i, y, z, true);
        cube.set(x, y, z + i, true);
        cube.set(x + size - 1, y + i, z + size - 1, true);
        cube.set(x + i, y + size - 1, z + size - 1, true);
        cube.set(x + size - 1, y + size - 1, z + i, true);
        cube.set(x + size - 1, y + i, z, true);
        cube.set(x, y + i, z + size - 1, true);
        cube.set(x + i, y + size - 1, z, true);
        cube.set(x + i, y, z + size - 1, true);
        cube.set(x + size - 1, y, z + i, true);
        cube.set(x, y + size - 1, z + i, true);
    }
}

/// Pulsed wireframe cube: a centered outline whose size oscillates between
/// 2 and 8 in steps of 2, alternating growth and shrink.
pub struct WoopWoop {
    cadence: Cadence,
    size: usize,
    expanding: bool,
}

impl WoopWoop {
    /// A pulse starting at the minimum size, growing.
    pub fn new(interval_ms: u64) -> Self {
        Self {
            cadence: Cadence::new(interval_ms),
            size: 2,
            expanding: true,
        }
    }
}

impl Effect for WoopWoop {
    fn cadence_mut(&mut self) -> &mut Cadence {
        &mut self.cadence
    }

    fn step(&mut self, cube: &mut Cube, _rng: &mut dyn RngCore) {
        if self.expanding {
            self.size += 2;
            if self.size == 8 {
                self.expanding = false;
            }
        } else {
            self.size -= 2;
            if self.size == 2 {
                self.expanding = true;
            }
        }

        cube.clear();
        let corner = 4 - self.size / 2;
        draw_wire_cube(cube, corner, corner, corner, self.size);
    }
}

/// Corner-anchored wireframe cube that shrinks from full size to nothing and
/// grows back; every completed cycle re-picks one of the eight grid corners
/// at random.
pub struct CubeJump {
    cadence: Cadence,
    size: usize,
    expanding: bool,
    x_pos: usize,
    y_pos: usize,
    z_pos: usize,
}

impl CubeJump {
    /// A jumping cube; the first corner is picked on activation.
    pub fn new(interval_ms: u64) -> Self {
        Self {
            cadence: Cadence::new(interval_ms),
            size: 2,
            expanding: true,
            x_pos: 0,
            y_pos: 0,
            z_pos: 0,
        }
    }

    fn restart(&mut self, rng: &mut dyn RngCore) {
        self.x_pos = rng.gen_range(0..2usize) * 7;
        self.y_pos = rng.gen_range(0..2usize) * 7;
        self.z_pos = rng.gen_range(0..2usize) * 7;
        self.size = 8;
        self.expanding = false;
    }
}

impl Effect for CubeJump {
    fn cadence_mut(&mut self) -> &mut Cadence {
        &mut self.cadence
    }

    fn activate(&mut self, _cube: &mut Cube, rng: &mut dyn RngCore) {
        self.restart(rng);
    }

    fn step(&mut self, cube: &mut Cube, rng: &mut dyn RngCore) {
        cube.clear();

        // Anchor each axis at the picked corner: a high corner grows inward.
        let anchor = |pos: usize, size: usize| if pos == 7 { pos + 1 - size } else { pos };
        draw_wire_cube(
            cube,
            anchor(self.x_pos, self.size),
            anchor(self.y_pos, self.size),
            anchor(self.z_pos, self.size),
            self.size,
        );

        if self.expanding {
            let reached_max = self.size == 8;
            self.size += 1;
            if reached_max {
                self.restart(rng);
            }
        } else {
            let reached_min = self.size == 1;
            self.size -= 1;
            if reached_min {
                self.expanding = true;
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/cubes.rs"]
mod tests;
