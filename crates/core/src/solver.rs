//! Strategy trait and configuration.

use crate::geometry::DEFAULT_TOLERANCE;
use crate::item::{Container, Item};
use crate::result::Outcome;
use crate::Result;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Common configuration for packing strategies.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Numeric tolerance for fit and stacking comparisons.
    pub tolerance: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the numeric tolerance. Negative values are clamped to zero.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance.max(0.0);
        self
    }
}

/// A complete ordering, search and validation policy.
///
/// Implementations receive inputs that already passed pre-flight checks and
/// must uphold the [`Outcome`] invariants: placements inside the container,
/// no overlaps, packed weight within the limit and every item reported
/// exactly once.
pub trait PackingStrategy: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Packs `items` into `container`.
    fn pack(&self, container: &Container, items: &[Item]) -> Result<Outcome>;
}
