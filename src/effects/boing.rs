//! Oscillating layer sweep.

use rand::RngCore;

use crate::effects::cadence::Cadence;
use crate::effects::Effect;
use crate::grid::cube::Cube;
use crate::grid::plane::Plane;

/// A single lit slice that sweeps its offset 0..7 and back along one axis at
/// a time. Direction reverses at offset 7; when the sweep lands back past 0
/// the plane resets to a forward sweep at offset 0 on the next axis in the
/// X -> Y -> Z rotation.
pub struct PlaneBoing {
    cadence: Cadence,
    current: usize,
    planes: [Plane; 3],
}

impl PlaneBoing {
    /// A sweep starting on the X axis.
    pub fn new(interval_ms: u64) -> Self {
        Self {
            cadence: Cadence::new(interval_ms),
            current: 0,
            planes: [Plane::X.forward(), Plane::Y.forward(), Plane::Z.forward()],
        }
    }
}

impl Effect for PlaneBoing {
    fn cadence_mut(&mut self) -> &mut Cadence {
        &mut self.cadence
    }

    fn activate(&mut self, cube: &mut Cube, _rng: &mut dyn RngCore) {
        // Start with the selected plane lit at offset 0.
        cube.fill(self.planes[self.current].at(0), true);
    }

    fn step(&mut self, cube: &mut Cube, _rng: &mut dyn RngCore) {
        let p = self.planes[self.current];

        // The whole grid holds a single slice, so shifting moves it.
        cube.shift(p);
        let p = p.advanced();

        if p.offset() >= 7 {
            // Turn around at the far boundary.
            self.planes[self.current] = p.reversed();
        } else if p.offset() < 0 {
            // Back past the near boundary: reset this plane, move to the next
            // axis and light its first layer.
            self.planes[self.current] = p.at(0).forward();
            self.current = (self.current + 1) % 3;
            cube.fill(self.planes[self.current].at(0), true);
        } else {
            self.planes[self.current] = p;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/boing.rs"]
mod tests;
