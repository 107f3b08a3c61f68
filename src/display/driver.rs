//! Layer-by-layer frame encoding.

use crate::display::bus::Bus;
use crate::grid::cube::{Cube, SIZE};

/// Pure coordinate remapping representing the physical wiring: maps a logical
/// (x, y, z) lookup to whatever the wiring actually connects there. Applied
/// before bit-packing.
pub type Mapping = fn(&Cube, usize, usize, usize) -> bool;

/// The default mapping: logical coordinates are wired straight through.
pub fn identity_mapping(cube: &Cube, x: usize, y: usize, z: usize) -> bool {
    cube.get(x, y, z)
}

/// Serializes the cube onto a [`Bus`], one depth layer at a time.
///
/// Wire contract per layer `z` (0..8, in order): assert select, transmit a
/// layer-select byte with only bit `z` set, then for `x` 0..8 transmit a row
/// byte whose bit `y` is the remapped voxel (x, y, z), then deassert select.
pub struct DisplayDriver<B: Bus> {
    bus: B,
    mapping: Mapping,
}

impl<B: Bus> DisplayDriver<B> {
    /// A driver with the identity wiring.
    pub fn new(bus: B) -> Self {
        Self {
            bus,
            mapping: identity_mapping,
        }
    }

    /// A driver with a caller-supplied wiring remap.
    pub fn with_mapping(bus: B, mapping: Mapping) -> Self {
        Self { bus, mapping }
    }

    /// Replace the wiring remap.
    pub fn set_mapping(&mut self, mapping: Mapping) {
        self.mapping = mapping;
    }

    /// Borrow the underlying bus.
    pub fn bus(&self) -> &B {
        &self.bus
    }

    /// Mutably borrow the underlying bus.
    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    /// Encode and transmit one full frame.
    pub fn render(&mut self, cube: &Cube) {
        for z in 0..SIZE {
            self.bus.select();

            self.bus.transmit(1 << z);

            for x in 0..SIZE {
                let mut row = 0u8;
                for y in 0..SIZE {
                    if (self.mapping)(cube, x, y, z) {
                        row |= 1 << y;
                    }
                }
                self.bus.transmit(row);
            }

            self.bus.deselect();
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/display/driver.rs"]
mod tests;
