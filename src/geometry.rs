//! Floor-plane geometry shared by the catalog, the layout strategies and the
//! renderers.
//!
//! All values are meters. Positions are room-center relative: `x` grows toward
//! the right wall and `z` grows toward the front wall, so the back wall sits at
//! `z = -depth / 2`.

use serde::{Deserialize, Serialize};

/// Tolerance applied to fit and overlap comparisons.
pub const FIT_EPSILON: f64 = 1e-9;

/// Physical size of a furniture archetype.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub depth: f64,
    pub height: f64,
}

impl Dimensions {
    pub const fn new(width: f64, depth: f64, height: f64) -> Self {
        Self {
            width,
            depth,
            height,
        }
    }

    pub fn is_valid(&self) -> bool {
        [self.width, self.depth, self.height]
            .iter()
            .all(|value| value.is_finite() && *value > 0.0)
    }

    /// Extent along the `x` and `z` axes once the item is turned by `rotation`.
    pub fn floor_extent(&self, rotation: QuarterTurn) -> (f64, f64) {
        if rotation.swaps_axes() {
            (self.depth, self.width)
        } else {
            (self.width, self.depth)
        }
    }
}

/// Point on the floor plane.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub z: f64,
}

impl Position {
    pub const fn new(x: f64, z: f64) -> Self {
        Self { x, z }
    }
}

/// Axis-aligned rectangle covered by an item on the floor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Footprint {
    pub x: f64,
    pub z: f64,
    pub width: f64,
    pub depth: f64,
}

impl Footprint {
    pub const fn new(x: f64, z: f64, width: f64, depth: f64) -> Self {
        Self { x, z, width, depth }
    }

    pub fn centered(center: Position, width: f64, depth: f64) -> Self {
        Self::new(center.x - width / 2.0, center.z - depth / 2.0, width, depth)
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn back(&self) -> f64 {
        self.z
    }

    pub fn front(&self) -> f64 {
        self.z + self.depth
    }

    pub fn center(&self) -> Position {
        Position::new(self.x + self.width / 2.0, self.z + self.depth / 2.0)
    }

    /// True when the two rectangles share area. Touching edges do not count.
    pub fn intersects(&self, other: &Footprint) -> bool {
        self.left() < other.right() - FIT_EPSILON
            && other.left() < self.right() - FIT_EPSILON
            && self.back() < other.front() - FIT_EPSILON
            && other.back() < self.front() - FIT_EPSILON
    }

    pub fn contains(&self, other: &Footprint) -> bool {
        other.left() >= self.left() - FIT_EPSILON
            && other.right() <= self.right() + FIT_EPSILON
            && other.back() >= self.back() - FIT_EPSILON
            && other.front() <= self.front() + FIT_EPSILON
    }
}

/// Yaw rotation restricted to multiples of 90 degrees.
///
/// Yaw zero faces `+z`, i.e. away from the back wall and into the room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
pub enum QuarterTurn {
    #[default]
    Zero,
    Quarter,
    Half,
    ThreeQuarter,
}

impl QuarterTurn {
    pub const ALL: [QuarterTurn; 4] = [
        QuarterTurn::Zero,
        QuarterTurn::Quarter,
        QuarterTurn::Half,
        QuarterTurn::ThreeQuarter,
    ];

    pub fn degrees(self) -> u16 {
        match self {
            QuarterTurn::Zero => 0,
            QuarterTurn::Quarter => 90,
            QuarterTurn::Half => 180,
            QuarterTurn::ThreeQuarter => 270,
        }
    }

    pub fn radians(self) -> f64 {
        f64::from(self.degrees()).to_radians()
    }

    pub fn from_degrees(degrees: u16) -> Option<Self> {
        match degrees % 360 {
            0 => Some(QuarterTurn::Zero),
            90 => Some(QuarterTurn::Quarter),
            180 => Some(QuarterTurn::Half),
            270 => Some(QuarterTurn::ThreeQuarter),
            _ => None,
        }
    }

    pub fn swaps_axes(self) -> bool {
        matches!(self, QuarterTurn::Quarter | QuarterTurn::ThreeQuarter)
    }

    pub fn is_zero(&self) -> bool {
        *self == QuarterTurn::Zero
    }
}

impl From<QuarterTurn> for u16 {
    fn from(turn: QuarterTurn) -> Self {
        turn.degrees()
    }
}

impl TryFrom<u16> for QuarterTurn {
    type Error = String;

    fn try_from(degrees: u16) -> std::result::Result<Self, Self::Error> {
        QuarterTurn::from_degrees(degrees)
            .ok_or_else(|| format!("rotation must be a multiple of 90 degrees, got {degrees}"))
    }
}

/// The four walls of a rectangular room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Wall {
    Back,
    Front,
    Left,
    Right,
}

impl Wall {
    /// Rotation that turns an item backed onto this wall toward the room.
    pub fn facing(self) -> QuarterTurn {
        match self {
            Wall::Back => QuarterTurn::Zero,
            Wall::Left => QuarterTurn::Quarter,
            Wall::Front => QuarterTurn::Half,
            Wall::Right => QuarterTurn::ThreeQuarter,
        }
    }
}

/// Interval check used by every wall-span predicate.
pub fn fits_within(extent: f64, span: f64) -> bool {
    extent <= span + FIT_EPSILON
}

/// Convert a back-left-corner origin position to the room-center convention.
pub fn corner_to_center(corner: Position, room_width: f64, room_depth: f64) -> Position {
    Position::new(corner.x - room_width / 2.0, corner.z - room_depth / 2.0)
}

/// Convert a room-center position to the back-left-corner origin.
pub fn center_to_corner(center: Position, room_width: f64, room_depth: f64) -> Position {
    Position::new(center.x + room_width / 2.0, center.z + room_depth / 2.0)
}
