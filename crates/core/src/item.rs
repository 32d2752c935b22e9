//! Items to pack and the container they go into.

use crate::geometry::{Aabb3, Extent, Point};
use crate::{Error, Result};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

static NEXT_ITEM_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of an [`Item`].
///
/// Ids never take part in ordering decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ItemId(u64);

impl ItemId {
    /// Allocates a fresh id.
    pub fn next() -> Self {
        ItemId(NEXT_ITEM_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw value.
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item-{}", self.0)
    }
}

/// Priority tier, which also governs stacking.
///
/// Variants are declared in ascending order: `Fragile < Light < Medium < Heavy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Priority {
    /// Cannot support anything above it.
    Fragile,
    /// May rest on medium or heavy items.
    Light,
    /// Standard items.
    #[default]
    Medium,
    /// Sturdy items that belong at the bottom; may only rest on other heavy items.
    Heavy,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Priority::Fragile => "Fragile",
            Priority::Light => "Light",
            Priority::Medium => "Medium",
            Priority::Heavy => "Heavy",
        };
        f.write_str(name)
    }
}

/// A box to be packed.
///
/// Deserialized items go through the same validation as [`Item::new`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "ItemRecord"))]
pub struct Item {
    id: ItemId,
    label: String,
    extent: Extent,
    weight: f64,
    priority: Priority,
    allow_rotation: bool,
}

impl Item {
    /// Creates a new item. Rotation is allowed by default.
    pub fn new(
        label: impl Into<String>,
        length: f64,
        width: f64,
        height: f64,
        weight: f64,
        priority: Priority,
    ) -> Result<Self> {
        let item = Self {
            id: ItemId::next(),
            label: label.into(),
            extent: Extent::new(length, width, height),
            weight,
            priority,
            allow_rotation: true,
        };
        item.validate()?;
        Ok(item)
    }

    /// Sets whether the item may be rotated.
    pub fn with_rotation(mut self, allowed: bool) -> Self {
        self.allow_rotation = allowed;
        self
    }

    /// Returns the identity token.
    pub fn id(&self) -> ItemId {
        self.id
    }

    /// Returns the display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the declared (unrotated) extent.
    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// Returns the weight.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Returns the priority tier.
    pub fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns whether the item may be rotated.
    pub fn allows_rotation(&self) -> bool {
        self.allow_rotation
    }

    /// Returns the volume.
    pub fn volume(&self) -> f64 {
        self.extent.volume()
    }

    /// Checks the record's invariants.
    pub fn validate(&self) -> Result<()> {
        if self.label.trim().is_empty() {
            return Err(Error::InvalidArgument("Item label cannot be empty".into()));
        }

        if !self.weight.is_finite() || self.weight <= 0.0 {
            return Err(Error::InvalidArgument(format!(
                "Weight of '{}' must be greater than zero",
                self.label
            )));
        }

        if !self.extent.is_valid() {
            return Err(Error::InvalidArgument(format!(
                "All dimensions of '{}' must be greater than zero",
                self.label
            )));
        }

        Ok(())
    }
}

/// The box everything is packed into.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "ContainerRecord"))]
pub struct Container {
    extent: Extent,
    max_weight: f64,
}

impl Container {
    /// Creates a new container.
    pub fn new(length: f64, width: f64, height: f64, max_weight: f64) -> Result<Self> {
        let container = Self {
            extent: Extent::new(length, width, height),
            max_weight,
        };
        container.validate()?;
        Ok(container)
    }

    /// Returns the inner dimensions.
    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// Returns the maximum total weight.
    pub fn max_weight(&self) -> f64 {
        self.max_weight
    }

    /// Returns the volume.
    pub fn volume(&self) -> f64 {
        self.extent.volume()
    }

    /// Returns the container's box, anchored at the origin.
    pub fn aabb(&self) -> Aabb3 {
        Aabb3::new(Point::ORIGIN, self.extent)
    }

    /// Checks the record's invariants.
    pub fn validate(&self) -> Result<()> {
        if !self.extent.is_valid() {
            return Err(Error::InvalidArgument(
                "All container dimensions must be greater than zero".into(),
            ));
        }

        if !self.max_weight.is_finite() || self.max_weight <= 0.0 {
            return Err(Error::InvalidArgument(
                "Maximum weight must be greater than zero".into(),
            ));
        }

        Ok(())
    }
}

/// Unchecked wire form of an [`Item`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct ItemRecord {
    id: ItemId,
    label: String,
    extent: Extent,
    weight: f64,
    priority: Priority,
    allow_rotation: bool,
}

#[cfg(feature = "serde")]
impl TryFrom<ItemRecord> for Item {
    type Error = Error;

    fn try_from(record: ItemRecord) -> Result<Self> {
        let item = Self {
            id: record.id,
            label: record.label,
            extent: record.extent,
            weight: record.weight,
            priority: record.priority,
            allow_rotation: record.allow_rotation,
        };
        item.validate()?;
        Ok(item)
    }
}

/// Unchecked wire form of a [`Container`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct ContainerRecord {
    extent: Extent,
    max_weight: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<ContainerRecord> for Container {
    type Error = Error;

    fn try_from(record: ContainerRecord) -> Result<Self> {
        let container = Self {
            extent: record.extent,
            max_weight: record.max_weight,
        };
        container.validate()?;
        Ok(container)
    }
}
