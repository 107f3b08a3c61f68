//! Rotates the active effect on its own cadence.

use rand::{Rng, RngCore};

use crate::effects::cadence::Cadence;
use crate::effects::Effect;
use crate::grid::cube::Cube;

/// How the scheduler picks the next effect on each of its cadence ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Policy {
    /// Advance the index by one, wrapping around.
    Sequential,
    /// Draw a fresh index uniformly at random.
    Random,
    /// Never change the index. Handy to pin one effect while debugging.
    Fixed,
}

/// An ordered pool of effects with a current index, a rotation policy and its
/// own cadence gate.
///
/// On every index change, including the first activation via
/// [`Scheduler::kickoff`], the cube is cleared and the newly selected
/// effect's [`Effect::activate`] hook runs. An empty pool is a caller
/// contract violation; the scheduler does not detect it at runtime.
pub struct Scheduler {
    cadence: Cadence,
    policy: Policy,
    idx: usize,
    effects: Vec<Box<dyn Effect>>,
}

impl Scheduler {
    /// A scheduler over a non-empty effect pool.
    pub fn new(interval_ms: u64, effects: Vec<Box<dyn Effect>>, policy: Policy) -> Self {
        Self {
            cadence: Cadence::new(interval_ms),
            policy,
            idx: 0,
            effects,
        }
    }

    /// A scheduler over a sentinel-terminated entry list: the pool size is
    /// discovered by scanning for the first `None`, and entries past it are
    /// discarded.
    pub fn from_terminated(
        interval_ms: u64,
        entries: Vec<Option<Box<dyn Effect>>>,
        policy: Policy,
    ) -> Self {
        let effects = entries.into_iter().map_while(|e| e).collect();
        Self::new(interval_ms, effects, policy)
    }

    /// Number of effects in the pool.
    pub fn len(&self) -> usize {
        self.effects.len()
    }

    /// Whether the pool is empty (a misconfigured scheduler).
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Index of the active effect.
    pub fn index(&self) -> usize {
        self.idx
    }

    /// The rotation policy.
    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// The active effect.
    pub fn current_mut(&mut self) -> &mut dyn Effect {
        self.effects[self.idx].as_mut()
    }

    /// Pin the active effect by index.
    pub fn set_index(&mut self, idx: usize) {
        self.idx = idx;
    }

    /// Replace the rotation policy.
    pub fn set_policy(&mut self, policy: Policy) {
        self.policy = policy;
    }

    /// Replace the whole pool with a single ad-hoc effect; the policy is
    /// forced to [`Policy::Fixed`] and the index reset to 0.
    pub fn solo(&mut self, effect: Box<dyn Effect>) {
        self.effects = vec![effect];
        self.idx = 0;
        self.policy = Policy::Fixed;
    }

    /// First activation: clear the cube and run the current effect's hook.
    pub fn kickoff(&mut self, cube: &mut Cube, rng: &mut dyn RngCore) {
        cube.clear();
        self.effects[self.idx].activate(cube, rng);
    }

    /// Check the cadence gate and rotate if it fires.
    pub fn service(&mut self, now_ms: u64, cube: &mut Cube, rng: &mut dyn RngCore) {
        if self.cadence.ready(now_ms) {
            self.rotate(cube, rng);
        }
    }

    fn rotate(&mut self, cube: &mut Cube, rng: &mut dyn RngCore) {
        match self.policy {
            Policy::Fixed => return,
            Policy::Random => self.idx = rng.gen_range(0..self.effects.len()),
            Policy::Sequential => self.idx = (self.idx + 1) % self.effects.len(),
        }

        tracing::debug!(index = self.idx, pool = self.effects.len(), "switching effect");

        cube.clear();
        self.effects[self.idx].activate(cube, rng);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schedule/scheduler.rs"]
mod tests;
