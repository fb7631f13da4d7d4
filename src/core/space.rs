//! World-space primitives: points, facing directions and block coordinates.
//!
//! - `Location`: a continuous point in the world
//! - `Direction`: a unit facing vector
//! - `BlockLocation`: an integer block coordinate
//!
//! These are value types owned by the engine; the host converts its own
//! coordinate types into them at the boundary.

use serde::{Deserialize, Serialize};

/// A point in world space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Location {
    /// Create a new location.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Vector from `self` to `other`, as `(dx, dy, dz)`.
    #[must_use]
    pub fn offset_to(self, other: Location) -> (f64, f64, f64) {
        (other.x - self.x, other.y - self.y, other.z - self.z)
    }

    /// Euclidean distance to another location.
    #[must_use]
    pub fn distance_to(self, other: Location) -> f64 {
        let (dx, dy, dz) = self.offset_to(other);
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// The block this location falls inside.
    ///
    /// Coordinates beyond the `i32` range clamp to the nearest edge block.
    /// A NaN coordinate maps to block 0 on that axis.
    #[must_use]
    pub fn block(self) -> BlockLocation {
        BlockLocation::new(
            block_coordinate(self.x),
            block_coordinate(self.y),
            block_coordinate(self.z),
        )
    }
}

fn block_coordinate(value: f64) -> i32 {
    if value.is_nan() {
        return 0;
    }
    // In range after the clamp, so the cast is exact.
    value.floor().clamp(f64::from(i32::MIN), f64::from(i32::MAX)) as i32
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2}, {:.2})", self.x, self.y, self.z)
    }
}

/// A unit-length facing direction.
///
/// Construction always normalizes, deserialization included. A zero (or
/// non-finite) vector has no facing and collapses to [`Direction::FORWARD`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawDirection")]
pub struct Direction {
    x: f64,
    y: f64,
    z: f64,
}

impl Direction {
    /// Facing along +z.
    pub const FORWARD: Direction = Direction { x: 0.0, y: 0.0, z: 1.0 };

    /// Facing straight up.
    pub const UP: Direction = Direction { x: 0.0, y: 1.0, z: 0.0 };

    /// Facing straight down.
    pub const DOWN: Direction = Direction { x: 0.0, y: -1.0, z: 0.0 };

    /// Create a direction from an arbitrary vector.
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        let length = (x * x + y * y + z * z).sqrt();
        if !length.is_finite() || length <= f64::EPSILON {
            return Self::FORWARD;
        }
        Self {
            x: x / length,
            y: y / length,
            z: z / length,
        }
    }

    /// Create a direction from yaw and pitch in degrees.
    ///
    /// Yaw rotates around the vertical axis starting from +z; positive pitch
    /// looks down.
    #[must_use]
    pub fn from_yaw_pitch(yaw_degrees: f64, pitch_degrees: f64) -> Self {
        let yaw = yaw_degrees.to_radians();
        let pitch = pitch_degrees.to_radians();
        Self::new(
            -yaw.sin() * pitch.cos(),
            -pitch.sin(),
            yaw.cos() * pitch.cos(),
        )
    }

    /// Direction pointing from `from` towards `to`.
    #[must_use]
    pub fn between(from: Location, to: Location) -> Self {
        let (dx, dy, dz) = from.offset_to(to);
        Self::new(dx, dy, dz)
    }

    /// Components as `(x, y, z)`.
    #[must_use]
    pub fn components(self) -> (f64, f64, f64) {
        (self.x, self.y, self.z)
    }

    /// Dot product with an arbitrary vector.
    #[must_use]
    pub fn dot(self, (x, y, z): (f64, f64, f64)) -> f64 {
        self.x * x + self.y * y + self.z * z
    }
}

impl Default for Direction {
    fn default() -> Self {
        Self::FORWARD
    }
}

/// Wire form of a direction, before normalization.
#[derive(Deserialize)]
struct RawDirection {
    x: f64,
    y: f64,
    z: f64,
}

impl From<RawDirection> for Direction {
    fn from(raw: RawDirection) -> Self {
        Self::new(raw.x, raw.y, raw.z)
    }
}

/// Integer coordinate of a single block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BlockLocation {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockLocation {
    /// Create a new block coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Centre point of the block.
    #[must_use]
    pub fn center(self) -> Location {
        Location::new(
            f64::from(self.x) + 0.5,
            f64::from(self.y) + 0.5,
            f64::from(self.z) + 0.5,
        )
    }
}

impl std::fmt::Display for BlockLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Block({}, {}, {})", self.x, self.y, self.z)
    }
}
