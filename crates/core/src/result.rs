//! Packing outcome representation.

use crate::item::{Container, Item};
use crate::placement::{Placement, PlacementStats};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of a packing run.
///
/// The metrics are derived once from the packed list at construction.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Outcome {
    container: Container,
    packed: Vec<Placement>,
    unpacked: Vec<Item>,
    total_weight: f64,
    space_utilization: f64,
}

impl Outcome {
    /// Builds an outcome and computes its metrics.
    pub fn new(container: Container, packed: Vec<Placement>, unpacked: Vec<Item>) -> Self {
        let total_weight = packed.iter().map(|p| p.item().weight()).sum();
        let used_volume: f64 = packed.iter().map(|p| p.item().volume()).sum();
        let container_volume = container.volume();
        let space_utilization = if container_volume > 0.0 {
            used_volume / container_volume
        } else {
            0.0
        };

        Self {
            container,
            packed,
            unpacked,
            total_weight,
            space_utilization,
        }
    }

    /// Creates an outcome with nothing packed or left over.
    pub fn empty(container: Container) -> Self {
        Self::new(container, Vec::new(), Vec::new())
    }

    /// Returns the container that was packed.
    pub fn container(&self) -> &Container {
        &self.container
    }

    /// Returns the committed placements, in placement order.
    pub fn packed(&self) -> &[Placement] {
        &self.packed
    }

    /// Returns the items that found no placement.
    pub fn unpacked(&self) -> &[Item] {
        &self.unpacked
    }

    /// Returns the summed weight of the packed items.
    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    /// Returns packed volume divided by container volume (0.0 - 1.0).
    pub fn space_utilization(&self) -> f64 {
        self.space_utilization
    }

    /// Returns true if every item was packed.
    pub fn is_fully_packed(&self) -> bool {
        self.unpacked.is_empty()
    }

    /// Returns the number of packed items.
    pub fn packed_count(&self) -> usize {
        self.packed.len()
    }

    /// Returns the number of unpacked items.
    pub fn unpacked_count(&self) -> usize {
        self.unpacked.len()
    }

    /// Returns utilization as a percentage string.
    pub fn utilization_percent(&self) -> String {
        format!("{:.2}%", self.space_utilization * 100.0)
    }

    /// Computes placement statistics.
    pub fn placement_stats(&self) -> PlacementStats {
        PlacementStats::from_placements(&self.packed)
    }

    /// Returns a flat summary.
    pub fn summary(&self) -> OutcomeSummary {
        OutcomeSummary::from(self)
    }
}

/// Summary statistics for an outcome.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OutcomeSummary {
    /// Total items requested.
    pub total_requested: usize,
    /// Total items packed.
    pub total_packed: usize,
    /// Utilization percentage.
    pub utilization_percent: f64,
    /// Packed weight.
    pub total_weight: f64,
    /// Packed weight as a fraction of the container's limit.
    pub weight_ratio: f64,
}

impl From<&Outcome> for OutcomeSummary {
    fn from(outcome: &Outcome) -> Self {
        Self {
            total_requested: outcome.packed.len() + outcome.unpacked.len(),
            total_packed: outcome.packed.len(),
            utilization_percent: outcome.space_utilization * 100.0,
            total_weight: outcome.total_weight,
            weight_ratio: outcome.total_weight / outcome.container.max_weight(),
        }
    }
}
