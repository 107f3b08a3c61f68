//! Frame encoding onto a serial shift-register bus.

pub mod bus;
pub mod driver;
