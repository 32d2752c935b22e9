//! Axis-aligned geometry kernel.
//!
//! Everything here is a small `Copy` value with structural equality:
//!
//! - [`Extent`]: box dimensions (length along x, width along y, height along z)
//! - [`Rotation`]: the four discrete axis swaps an item may undergo
//! - [`Point`]: a position measured from the container's origin corner
//! - [`Aabb3`]: an axis-aligned box used by the [`fits`] and [`overlaps`] predicates

use nalgebra::Vector3;
use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use crate::{Error, Result};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tolerance absorbing floating-point accumulation in fit and stacking tests.
pub const DEFAULT_TOLERANCE: f64 = 0.001;

/// Dimensions of a box.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Extent {
    /// Size along x.
    pub length: f64,
    /// Size along y.
    pub width: f64,
    /// Size along z.
    pub height: f64,
}

impl Extent {
    /// Creates a new extent.
    pub const fn new(length: f64, width: f64, height: f64) -> Self {
        Self {
            length,
            width,
            height,
        }
    }

    /// Returns the volume.
    pub fn volume(&self) -> f64 {
        self.length * self.width * self.height
    }

    /// Returns true if every component is strictly positive and finite.
    pub fn is_valid(&self) -> bool {
        [self.length, self.width, self.height]
            .iter()
            .all(|v| v.is_finite() && *v > 0.0)
    }

    /// Applies a rotation, permuting the components.
    pub fn rotate(self, rotation: Rotation) -> Self {
        match rotation {
            Rotation::Identity => self,
            Rotation::SwapLengthWidth => Self::new(self.width, self.length, self.height),
            Rotation::SwapLengthHeight => Self::new(self.height, self.width, self.length),
            Rotation::SwapWidthHeight => Self::new(self.length, self.height, self.width),
        }
    }

    /// Returns true if each component is strictly greater than the other's.
    pub fn exceeds_on_all_axes(&self, other: &Extent) -> bool {
        self.length > other.length && self.width > other.width && self.height > other.height
    }

    pub(crate) fn to_vector(self) -> Vector3<f64> {
        Vector3::new(self.length, self.width, self.height)
    }
}

/// Discrete rotation applied to an item's extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Rotation {
    /// Original orientation.
    #[default]
    Identity,
    /// Turn about z: length and width swap.
    SwapLengthWidth,
    /// Turn about y: length and height swap.
    SwapLengthHeight,
    /// Turn about x: width and height swap.
    SwapWidthHeight,
}

impl Rotation {
    /// All rotations in trial order.
    pub const ALL: [Rotation; 4] = [
        Rotation::Identity,
        Rotation::SwapLengthWidth,
        Rotation::SwapLengthHeight,
        Rotation::SwapWidthHeight,
    ];

    const FIXED: [Rotation; 1] = [Rotation::Identity];

    /// Returns the rotations to try for an item.
    pub fn trial_order(allow_rotation: bool) -> &'static [Rotation] {
        if allow_rotation {
            &Self::ALL
        } else {
            &Self::FIXED
        }
    }

    /// Returns true for [`Rotation::Identity`].
    pub fn is_identity(&self) -> bool {
        *self == Rotation::Identity
    }
}

/// A position inside the container.
///
/// Equality and hashing compare the exact coordinate values, so candidate
/// points can be deduplicated in a `HashSet`. Deserialization rejects
/// non-finite coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "PointRecord"))]
pub struct Point {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
    /// Z coordinate (height above the floor).
    pub z: f64,
}

impl Point {
    /// The container's origin corner.
    pub const ORIGIN: Point = Point::new(0.0, 0.0, 0.0);

    /// Creates a new point.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        (self.to_vector() - other.to_vector()).norm()
    }

    pub(crate) fn to_vector(self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }
}

// Candidate points are sums of validated extents and never NaN.
impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // `+ 0.0` folds -0.0 into 0.0 so equal values hash alike.
        (self.x + 0.0).to_bits().hash(state);
        (self.y + 0.0).to_bits().hash(state);
        (self.z + 0.0).to_bits().hash(state);
    }
}

/// Unchecked wire form of a [`Point`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct PointRecord {
    x: f64,
    y: f64,
    z: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<PointRecord> for Point {
    type Error = Error;

    fn try_from(record: PointRecord) -> Result<Self> {
        if ![record.x, record.y, record.z].iter().all(|v| v.is_finite()) {
            return Err(Error::InvalidArgument("Point coordinates must be finite".into()));
        }
        Ok(Point::new(record.x, record.y, record.z))
    }
}

/// Axis-aligned box in container coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb3 {
    /// Minimum corner.
    pub min: Vector3<f64>,
    /// Maximum corner.
    pub max: Vector3<f64>,
}

impl Aabb3 {
    /// Creates the box occupied by `extent` placed at `origin`.
    pub fn new(origin: Point, extent: Extent) -> Self {
        let min = origin.to_vector();
        Self {
            min,
            max: min + extent.to_vector(),
        }
    }

    /// Returns the volume.
    pub fn volume(&self) -> f64 {
        let size = self.max - self.min;
        size.x * size.y * size.z
    }

    /// Strict intersection test; touching faces do not intersect.
    pub fn intersects(&self, other: &Aabb3) -> bool {
        (0..3).all(|axis| self.min[axis] < other.max[axis] && self.max[axis] > other.min[axis])
    }

    /// Returns true if this box lies inside `bounds` (anchored at the origin)
    /// allowing `tolerance` of overshoot on each axis.
    pub fn within(&self, bounds: &Extent, tolerance: f64) -> bool {
        let limit = bounds.to_vector();
        (0..3).all(|axis| self.max[axis] <= limit[axis] + tolerance)
    }
}

/// Returns true if `extent` placed at `point` stays inside `container`.
pub fn fits(point: Point, extent: Extent, container: &Extent, tolerance: f64) -> bool {
    Aabb3::new(point, extent).within(container, tolerance)
}

/// Returns true if two boxes share positive volume.
pub fn overlaps(a: &Aabb3, b: &Aabb3) -> bool {
    a.intersects(b)
}
