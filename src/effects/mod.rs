//! Visual-pattern generators and the cadence gate they share.
//!
//! Each effect is an independently-instantiated state machine: dormant after
//! construction, active while the scheduler has it selected, dormant again on
//! deselection. No hook fires on deselection; internal progression state
//! persists across re-selection unless [`Effect::activate`] resets it.

use rand::RngCore;

use crate::effects::cadence::Cadence;
use crate::grid::cube::Cube;

pub mod boing;
pub mod cadence;
pub mod cubes;
pub mod explorer;
pub mod glow;
pub mod glyphs;
pub mod rain;
pub mod voxels;

/// A time-gated frame generator.
///
/// Implementors own a [`Cadence`] and expose it through [`Effect::cadence_mut`];
/// the provided [`Effect::ready`] and [`Effect::service`] methods build the
/// gating on top of it. Randomness is an explicit collaborator so seeded runs
/// replay deterministically.
pub trait Effect {
    /// The effect's cadence gate.
    fn cadence_mut(&mut self) -> &mut Cadence;

    /// One-time hook, run by the scheduler when this effect is selected. May
    /// seed initial cube content. Default: no-op.
    fn activate(&mut self, cube: &mut Cube, rng: &mut dyn RngCore) {
        let _ = (cube, rng);
    }

    /// Compute the next frame into the cube.
    fn step(&mut self, cube: &mut Cube, rng: &mut dyn RngCore);

    /// Whether the cadence interval has elapsed; fires and re-arms the gate.
    fn ready(&mut self, now_ms: u64) -> bool {
        self.cadence_mut().ready(now_ms)
    }

    /// Run [`Effect::step`] iff [`Effect::ready`], otherwise do nothing.
    fn service(&mut self, now_ms: u64, cube: &mut Cube, rng: &mut dyn RngCore) {
        if self.ready(now_ms) {
            self.step(cube, rng);
        }
    }
}
