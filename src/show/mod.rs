//! Declarative show configuration.

pub mod config;
