//! Crate-wide building blocks: the error type.

pub mod error;
