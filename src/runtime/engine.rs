//! Owns the cube, the scheduler and the driver, and runs one cooperative
//! iteration at a time.

use std::time::Instant;

use rand::RngCore;

use crate::display::bus::Bus;
use crate::display::driver::DisplayDriver;
use crate::grid::cube::Cube;
use crate::schedule::scheduler::Scheduler;

/// A monotonically non-decreasing millisecond counter, sampled once per loop
/// iteration. No component reads time on its own.
pub trait Clock {
    /// Milliseconds elapsed from the clock's epoch.
    fn now_ms(&self) -> u64;
}

/// Wall clock counting from its creation.
pub struct SystemClock {
    epoch: Instant,
}

impl SystemClock {
    /// A clock whose epoch is now.
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.epoch.elapsed().as_millis() as u64
    }
}

/// One cube, one scheduler, one driver.
///
/// Each [`Engine::tick`] runs the full mutate-then-render sequence to
/// completion: the scheduler may rotate effects, the active effect may
/// compute a frame, and the driver serializes the result. The cube is never
/// read and written concurrently; the two phases are strictly sequential
/// within a tick.
pub struct Engine<B: Bus> {
    cube: Cube,
    scheduler: Scheduler,
    driver: DisplayDriver<B>,
}

impl<B: Bus> Engine<B> {
    /// Assemble an engine from its parts.
    pub fn new(scheduler: Scheduler, driver: DisplayDriver<B>) -> Self {
        Self {
            cube: Cube::new(),
            scheduler,
            driver,
        }
    }

    /// First activation: clears the cube and runs the initial effect's hook.
    /// Call once before ticking.
    pub fn start(&mut self, rng: &mut dyn RngCore) {
        self.scheduler.kickoff(&mut self.cube, rng);
    }

    /// Run one loop iteration at the given timestamp.
    pub fn tick(&mut self, now_ms: u64, rng: &mut dyn RngCore) {
        self.scheduler.service(now_ms, &mut self.cube, rng);
        self.scheduler
            .current_mut()
            .service(now_ms, &mut self.cube, rng);
        self.driver.render(&self.cube);
    }

    /// The grid as of the last tick.
    pub fn cube(&self) -> &Cube {
        &self.cube
    }

    /// The scheduler.
    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    /// Mutable scheduler access, for the pin/policy/solo configuration
    /// actions.
    pub fn scheduler_mut(&mut self) -> &mut Scheduler {
        &mut self.scheduler
    }

    /// The display driver.
    pub fn driver_mut(&mut self) -> &mut DisplayDriver<B> {
        &mut self.driver
    }
}

#[cfg(test)]
#[path = "../../tests/unit/runtime/engine.rs"]
mod tests;
