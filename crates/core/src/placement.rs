//! Placement of an item inside the container.

use crate::geometry::{overlaps, Aabb3, Extent, Point, Rotation};
use crate::item::{Item, Priority};
use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An item committed to a position and rotation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Placement {
    item: Item,
    position: Point,
    rotation: Rotation,
    actual_extent: Extent,
}

impl Placement {
    /// Creates a placement, deriving the rotated extent.
    pub fn new(item: Item, position: Point, rotation: Rotation) -> Self {
        let actual_extent = item.extent().rotate(rotation);
        Self {
            item,
            position,
            rotation,
            actual_extent,
        }
    }

    /// Returns the placed item.
    pub fn item(&self) -> &Item {
        &self.item
    }

    /// Returns the min corner.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Returns the applied rotation.
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Returns the item's extent after rotation.
    pub fn actual_extent(&self) -> Extent {
        self.actual_extent
    }

    /// Returns the occupied box.
    pub fn aabb(&self) -> Aabb3 {
        Aabb3::new(self.position, self.actual_extent)
    }

    /// Returns the z coordinate of the top face.
    pub fn top(&self) -> f64 {
        self.position.z + self.actual_extent.height
    }

    /// Returns true if the two placements share positive volume.
    pub fn overlaps(&self, other: &Placement) -> bool {
        overlaps(&self.aabb(), &other.aabb())
    }
}

/// Placement statistics for a set of placements.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlacementStats {
    /// Total number of placements.
    pub count: usize,
    /// Number of placements that use a non-identity rotation.
    pub rotated_count: usize,
    /// Distribution of rotations used.
    pub rotation_distribution: HashMap<Rotation, usize>,
    /// Distribution of priority tiers placed.
    pub priority_distribution: HashMap<Priority, usize>,
    /// Height of the tallest stack.
    pub max_height: f64,
}

impl PlacementStats {
    /// Computes statistics from a set of placements.
    pub fn from_placements(placements: &[Placement]) -> Self {
        let mut stats = Self {
            count: placements.len(),
            ..Default::default()
        };

        for p in placements {
            if !p.rotation.is_identity() {
                stats.rotated_count += 1;
            }

            *stats.rotation_distribution.entry(p.rotation).or_insert(0) += 1;
            *stats
                .priority_distribution
                .entry(p.item.priority())
                .or_insert(0) += 1;
            stats.max_height = stats.max_height.max(p.top());
        }

        stats
    }
}
