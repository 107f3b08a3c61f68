//! Plane addressing: (axis, offset, direction) values.
//!
//! A [`Plane`] selects a 2-D slice of the cube (axis + offset) and optionally
//! carries a direction of travel. Geometric operations (shift, fill, sweep)
//! are written once against this algebra instead of being duplicated per axis
//! and per direction. All operations are pure and value-returning.

use std::fmt;
use std::str::FromStr;

use crate::foundation::error::LuxelError;

/// One of the three cube axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// The X axis. Free slice coordinates are (i=Y, j=Z).
    X,
    /// The Y axis. Free slice coordinates are (i=X, j=Z).
    Y,
    /// The Z axis. Free slice coordinates are (i=X, j=Y).
    Z,
}

/// Direction of travel along an axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// No direction: the plane only addresses a static slice. Shifting and
    /// advancing are no-ops.
    Still,
    /// Toward increasing offsets (+1 per step).
    Forward,
    /// Toward decreasing offsets (-1 per step).
    Backward,
}

impl Direction {
    /// Signed step this direction contributes to an offset: 0, +1 or -1.
    pub fn step(self) -> i32 {
        match self {
            Self::Still => 0,
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }

    /// Forward and Backward swap; Still is unaffected.
    pub fn reversed(self) -> Self {
        match self {
            Self::Still => Self::Still,
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }
}

/// An immutable (axis, offset, direction) addressing value.
///
/// The offset conceptually lies in `[0, 8)` but is deliberately not clamped:
/// sweeping effects walk it one step past the boundary and use the overflow
/// as their turnaround signal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Plane {
    axis: Axis,
    offset: i32,
    direction: Direction,
}

impl Plane {
    /// The X plane at offset 0 with no direction.
    pub const X: Plane = Plane::new(Axis::X, 0, Direction::Still);
    /// The Y plane at offset 0 with no direction.
    pub const Y: Plane = Plane::new(Axis::Y, 0, Direction::Still);
    /// The Z plane at offset 0 with no direction.
    pub const Z: Plane = Plane::new(Axis::Z, 0, Direction::Still);

    /// Build a plane from its three components.
    pub const fn new(axis: Axis, offset: i32, direction: Direction) -> Self {
        Self {
            axis,
            offset,
            direction,
        }
    }

    /// The axis component.
    pub fn axis(self) -> Axis {
        self.axis
    }

    /// The offset component.
    pub fn offset(self) -> i32 {
        self.offset
    }

    /// The direction component.
    pub fn direction(self) -> Direction {
        self.direction
    }

    /// Same axis and direction, at the given offset.
    pub fn at(self, offset: i32) -> Self {
        Self { offset, ..self }
    }

    /// Same axis and offset, travelling forward.
    pub fn forward(self) -> Self {
        Self {
            direction: Direction::Forward,
            ..self
        }
    }

    /// Same axis and offset, travelling backward.
    pub fn backward(self) -> Self {
        Self {
            direction: Direction::Backward,
            ..self
        }
    }

    /// Direction reversed; a still plane stays still.
    pub fn reversed(self) -> Self {
        Self {
            direction: self.direction.reversed(),
            ..self
        }
    }

    /// Offset moved one step in the current direction; no-op when still.
    pub fn advanced(self) -> Self {
        Self {
            offset: self.offset + self.direction.step(),
            ..self
        }
    }
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = match self.direction {
            Direction::Still => "",
            Direction::Forward => "+",
            Direction::Backward => "-",
        };
        let axis = match self.axis {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        };
        write!(f, "{sign}{axis}")
    }
}

impl FromStr for Plane {
    type Err = LuxelError;

    /// Parses `"x"`, `"+y"`, `"-z"` and friends: an optional direction sign
    /// followed by an axis letter. The offset always starts at 0.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (direction, axis) = match s.strip_prefix(['+', '-']) {
            Some(rest) if s.starts_with('+') => (Direction::Forward, rest),
            Some(rest) => (Direction::Backward, rest),
            None => (Direction::Still, s),
        };
        let axis = match axis {
            "x" | "X" => Axis::X,
            "y" | "Y" => Axis::Y,
            "z" | "Z" => Axis::Z,
            other => {
                return Err(LuxelError::config(format!(
                    "unknown plane '{other}' (expected x, y or z with optional +/- prefix)"
                )))
            }
        };
        Ok(Plane::new(axis, 0, direction))
    }
}

impl serde::Serialize for Plane {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for Plane {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/grid/plane.rs"]
mod tests;
