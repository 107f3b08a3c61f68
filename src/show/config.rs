//! JSON show model: which effects run, at what cadences, under which
//! rotation policy.

use crate::effects::boing::PlaneBoing;
use crate::effects::cubes::{CubeJump, WoopWoop};
use crate::effects::explorer::VoxelExplorer;
use crate::effects::glow::{FullyOn, Glowing};
use crate::effects::glyphs::Glyphs;
use crate::effects::rain::Rain;
use crate::effects::voxels::SendVoxels;
use crate::effects::Effect;
use crate::foundation::error::{LuxelError, LuxelResult};
use crate::grid::plane::{Axis, Plane};
use crate::schedule::scheduler::{Policy, Scheduler};

/// A complete show: rotation settings plus an ordered effect list.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Show {
    /// Seed for the run's random source; a fresh entropy seed is drawn when
    /// absent.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Scheduler cadence and policy.
    pub rotation: Rotation,
    /// The effect pool, in rotation order.
    pub effects: Vec<EffectConfig>,
}

/// Scheduler settings.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Rotation {
    /// Milliseconds between rotation checks.
    pub interval_ms: u64,
    /// Rotation policy.
    pub policy: Policy,
}

/// One configured effect. Planes are spelled as strings (`"x"`, `"+y"`,
/// `"-z"`); direction signs pick the travel direction, offsets always start
/// at the edge the effect expects.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EffectConfig {
    /// Falling droplets along a plane.
    Rain {
        /// Tick interval.
        interval_ms: u64,
        /// Exclusive upper bound on droplets spawned per tick; must be >= 1.
        max_droplets: u32,
        /// Travel plane, e.g. `"-z"` for rain falling down Z.
        plane: Plane,
    },
    /// Single voxel walking the whole grid in raster order.
    Explorer {
        /// Tick interval.
        interval_ms: u64,
    },
    /// Lit slice sweeping back and forth, cycling the axes.
    PlaneBoing {
        /// Tick interval.
        interval_ms: u64,
    },
    /// Voxels travelling between two opposite faces.
    SendVoxels {
        /// Tick interval.
        interval_ms: u64,
        /// Travel axis.
        axis: Axis,
    },
    /// Centered wireframe cube pulsing between sizes 2 and 8.
    WoopWoop {
        /// Tick interval.
        interval_ms: u64,
    },
    /// Corner-anchored wireframe cube, re-picking a corner every cycle.
    CubeJump {
        /// Tick interval.
        interval_ms: u64,
    },
    /// Random voxel-by-voxel fill and drain.
    Glowing {
        /// Tick interval; zero means one voxel per loop iteration.
        #[serde(default)]
        interval_ms: u64,
    },
    /// Every voxel on, statically.
    FullyOn,
    /// Digit glyphs scrolling through the cube.
    Glyphs {
        /// Tick interval.
        interval_ms: u64,
        /// Travel plane, e.g. `"+y"`.
        plane: Plane,
    },
}

impl EffectConfig {
    fn build(&self) -> Box<dyn Effect> {
        match *self {
            Self::Rain {
                interval_ms,
                max_droplets,
                plane,
            } => Box::new(Rain::new(interval_ms, max_droplets, plane)),
            Self::Explorer { interval_ms } => Box::new(VoxelExplorer::new(interval_ms)),
            Self::PlaneBoing { interval_ms } => Box::new(PlaneBoing::new(interval_ms)),
            Self::SendVoxels { interval_ms, axis } => Box::new(SendVoxels::new(interval_ms, axis)),
            Self::WoopWoop { interval_ms } => Box::new(WoopWoop::new(interval_ms)),
            Self::CubeJump { interval_ms } => Box::new(CubeJump::new(interval_ms)),
            Self::Glowing { interval_ms } => Box::new(Glowing::new(interval_ms)),
            Self::FullyOn => Box::new(FullyOn::new()),
            Self::Glyphs { interval_ms, plane } => Box::new(Glyphs::new(interval_ms, plane)),
        }
    }
}

impl Show {
    /// Parse a show from JSON.
    pub fn from_json(json: &str) -> LuxelResult<Self> {
        serde_json::from_str(json).map_err(|e| LuxelError::config(format!("parse show: {e}")))
    }

    /// Check the parts of the show the type system cannot.
    pub fn validate(&self) -> LuxelResult<()> {
        if self.effects.is_empty() {
            return Err(LuxelError::validation("show must list at least one effect"));
        }
        for (i, effect) in self.effects.iter().enumerate() {
            if let EffectConfig::Rain { max_droplets, .. } = effect {
                if *max_droplets == 0 {
                    return Err(LuxelError::validation(format!(
                        "effect #{i}: rain max_droplets must be >= 1"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Build the configured scheduler. Call [`Show::validate`] first.
    pub fn build_scheduler(&self) -> Scheduler {
        let effects = self.effects.iter().map(EffectConfig::build).collect();
        Scheduler::new(self.rotation.interval_ms, effects, self.rotation.policy)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/show/config.rs"]
mod tests;
