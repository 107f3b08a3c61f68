//! Luxel drives an 8x8x8 addressable LED voxel cube, frame by frame.
//!
//! The engine computes which voxels are lit and hands the result to a serial
//! shift-register display. Everything runs single-threaded and cooperatively:
//! time-gated components simply decline to act until their interval elapses.
//!
//! # Pipeline overview
//!
//! 1. **Schedule**: a [`Scheduler`] rotates among independent [`Effect`]s on
//!    its own cadence, clearing the [`Cube`] and activating the newcomer on
//!    every switch.
//! 2. **Animate**: the active effect's cadence gate decides whether to compute
//!    a new frame into the cube.
//! 3. **Encode**: a [`DisplayDriver`] serializes the cube layer by layer onto
//!    a [`Bus`], applying a caller-supplied wiring remap first.
//!
//! Data flows one way: Scheduler -> Effect -> Cube -> DisplayDriver.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: all randomness flows through an explicit
//!   [`rand::RngCore`] collaborator, so a seeded run is reproducible.
//! - **No IO in the core**: the physical bus lives behind the [`Lines`] and
//!   [`Transfer`] collaborator traits; the core never touches hardware.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod display;
mod effects;
mod foundation;
mod grid;
mod runtime;
mod schedule;
mod show;

pub use display::bus::{BitOrder, Bus, BusEvent, Lines, PulseBus, RecordingBus, SerialBus, Transfer};
pub use display::driver::{identity_mapping, DisplayDriver, Mapping};
pub use effects::boing::PlaneBoing;
pub use effects::cadence::Cadence;
pub use effects::cubes::{draw_wire_cube, CubeJump, WoopWoop};
pub use effects::explorer::VoxelExplorer;
pub use effects::glow::{FullyOn, Glowing};
pub use effects::glyphs::{Glyphs, GLYPHS};
pub use effects::rain::Rain;
pub use effects::voxels::SendVoxels;
pub use effects::Effect;
pub use foundation::error::{LuxelError, LuxelResult};
pub use grid::cube::{Cube, SIZE, VOXELS};
pub use grid::plane::{Axis, Direction, Plane};
pub use runtime::engine::{Clock, Engine, SystemClock};
pub use schedule::scheduler::{Policy, Scheduler};
pub use show::config::{EffectConfig, Rotation, Show};
