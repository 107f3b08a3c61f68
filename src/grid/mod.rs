//! The voxel grid and its plane/axis/direction addressing algebra.

pub mod cube;
pub mod plane;
