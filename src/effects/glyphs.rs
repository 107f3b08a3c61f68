//! Scrolling glyphs.

use rand::RngCore;

use crate::effects::cadence::Cadence;
use crate::effects::Effect;
use crate::grid::cube::{Cube, SIZE};
use crate::grid::plane::{Direction, Plane};

/// 8x8 bitmaps of the digits 0-9, one byte per row, most significant bit on
/// the left.
pub const GLYPHS: [[u8; SIZE]; 10] = [
    [
        0b0001_1000,
        0b0010_0100,
        0b0100_0010,
        0b0100_0010,
        0b0100_0010,
        0b0100_0010,
        0b0010_0100,
        0b0001_1000,
    ],
    [
        0b0001_1000,
        0b0011_1000,
        0b1101_1000,
        0b1001_1000,
        0b0001_1000,
        0b0001_1000,
        0b0001_1000,
        0b0111_1110,
    ],
    [
        0b1111_1111,
        0b0000_0001,
        0b0000_0001,
        0b0000_0001,
        0b1111_1111,
        0b1000_0000,
        0b1000_0000,
        0b1111_1111,
    ],
    [
        0b1111_1111,
        0b0000_0001,
        0b0000_0001,
        0b0000_0001,
        0b1111_1111,
        0b0000_0001,
        0b0000_0001,
        0b1111_1111,
    ],
    [
        0b1000_0001,
        0b1000_0001,
        0b1000_0001,
        0b1000_0001,
        0b1111_1111,
        0b0000_0001,
        0b0000_0001,
        0b0000_0001,
    ],
    [
        0b1111_1111,
        0b1000_0000,
        0b1000_0000,
        0b1000_0000,
        0b1111_1111,
        0b0000_0001,
        0b0000_0001,
        0b1111_1111,
    ],
    [
        0b1111_1111,
        0b1100_0000,
        0b1100_0000,
        0b1111_1111,
        0b1111_1111,
        0b1100_0011,
        0b1100_0011,
        0b1111_1111,
    ],
    [
        0b1111_1111,
        0b1111_1111,
        0b0000_0110,
        0b0000_1100,
        0b0001_1000,
        0b0011_0000,
        0b0110_0000,
        0b1100_0000,
    ],
    [
        0b1111_1111,
        0b1100_0011,
        0b1100_0011,
        0b1111_1111,
        0b1111_1111,
        0b1100_0011,
        0b1100_0011,
        0b1111_1111,
    ],
    [
        0b1111_1111,
        0b1100_0011,
        0b1100_0011,
        0b1111_1111,
        0b1111_1111,
        0b0000_0011,
        0b0000_0011,
        0b0000_0011,
    ],
];

/// Scrolling glyph: renders the current glyph onto the leading slice of the
/// configured plane, shifts the grid one step per tick, and advances to the
/// next glyph in the cyclic table once the slice reaches the trailing edge.
pub struct Glyphs {
    cadence: Cadence,
    plane: Plane,
    idx: usize,
}

impl Glyphs {
    /// Scroll along `plane`; the offset is reset to the leading edge for the
    /// plane's direction (7 when travelling backward, 0 otherwise).
    pub fn new(interval_ms: u64, plane: Plane) -> Self {
        let leading = if plane.direction() == Direction::Backward {
            7
        } else {
            0
        };
        Self {
            cadence: Cadence::new(interval_ms),
            plane: plane.at(leading),
            idx: 0,
        }
    }

    /// Index of the glyph currently scrolling.
    pub fn glyph_index(&self) -> usize {
        self.idx
    }
}

impl Effect for Glyphs {
    fn cadence_mut(&mut self) -> &mut Cadence {
        &mut self.cadence
    }

    fn step(&mut self, cube: &mut Cube, _rng: &mut dyn RngCore) {
        let backward = self.plane.direction() == Direction::Backward;
        let leading = if backward { 7 } else { 0 };
        let trailing = if backward { 0 } else { 7 };

        if self.plane.offset() == leading {
            // Fresh pass: draw the current glyph on the leading slice.
            cube.clear();
            for i in 0..SIZE {
                for j in 0..SIZE {
                    let lit = GLYPHS[self.idx][j] & (1 << (7 - i)) != 0;
                    cube.set_at(self.plane, i, 7 - j, lit);
                }
            }
        }

        self.plane = self.plane.advanced();
        cube.shift(self.plane);

        if self.plane.offset() == trailing {
            self.plane = self.plane.at(leading);
            self.idx = (self.idx + 1) % GLYPHS.len();
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/glyphs.rs"]
mod tests;
