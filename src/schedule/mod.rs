//! Effect rotation.

pub mod scheduler;
