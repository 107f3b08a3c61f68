//! Falling droplets.

use rand::{Rng, RngCore};

use crate::effects::cadence::Cadence;
use crate::effects::Effect;
use crate::grid::cube::{Cube, SIZE};
use crate::grid::plane::{Direction, Plane};

/// Droplet fall: each tick shifts the whole grid one step along the
/// configured plane, then lights a random number of cells (uniform in
/// `[0, max_droplets)`) at random positions on the leading layer.
pub struct Rain {
    cadence: Cadence,
    max_droplets: u32,
    plane: Plane,
}

impl Rain {
    /// Rain along `plane` (the direction decides which layer is the leading
    /// edge: offset 0 when travelling forward, 7 when travelling backward).
    ///
    /// `max_droplets` must be at least 1; the show loader validates this.
    pub fn new(interval_ms: u64, max_droplets: u32, plane: Plane) -> Self {
        Self {
            cadence: Cadence::new(interval_ms),
            max_droplets,
            plane,
        }
    }
}

impl Effect for Rain {
    fn cadence_mut(&mut self) -> &mut Cadence {
        &mut self.cadence
    }

    fn step(&mut self, cube: &mut Cube, rng: &mut dyn RngCore) {
        cube.shift(self.plane);

        let leading = if self.plane.direction() == Direction::Forward {
            0
        } else {
            7
        };

        let drops = rng.gen_range(0..self.max_droplets);
        for _ in 0..drops {
            let i = rng.gen_range(0..SIZE);
            let j = rng.gen_range(0..SIZE);
            cube.set_at(self.plane.at(leading), i, j, true);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/rain.rs"]
mod tests;
