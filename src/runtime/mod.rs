//! The cooperative control loop.

pub mod engine;
