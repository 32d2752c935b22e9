//! First-Fit Decreasing packing strategy.
//!
//! Items are sorted sturdiest and largest first so that later, lighter or
//! fragile items land on top of them. Each item is tried exactly once; there
//! is no backtracking once a placement is committed.

use crate::search::find_first_fit;
use std::cmp::Ordering;
use std::time::Instant;
use stowage_core::solver::{Config, PackingStrategy};
use stowage_core::{Container, Item, Outcome, Result};

/// First-Fit Decreasing over extreme points.
#[derive(Debug, Clone, Default)]
pub struct FirstFitDecreasing {
    config: Config,
}

impl FirstFitDecreasing {
    /// Creates a strategy with the given configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }
}

/// Orders the backlog: priority descending, then volume descending.
///
/// The sort is stable, so ties keep input order.
pub fn sort_backlog(items: &[Item]) -> Vec<&Item> {
    let mut sorted: Vec<&Item> = items.iter().collect();
    sorted.sort_by(|a, b| {
        b.priority().cmp(&a.priority()).then_with(|| {
            b.volume()
                .partial_cmp(&a.volume())
                .unwrap_or(Ordering::Equal)
        })
    });
    sorted
}

impl PackingStrategy for FirstFitDecreasing {
    fn name(&self) -> &str {
        "FirstFitDecreasing"
    }

    fn pack(&self, container: &Container, items: &[Item]) -> Result<Outcome> {
        let start = Instant::now();
        let tolerance = self.config.tolerance;

        let mut packed = Vec::with_capacity(items.len());
        let mut unpacked = Vec::new();
        let mut total_weight = 0.0;

        for item in sort_backlog(items) {
            if total_weight + item.weight() > container.max_weight() {
                log::trace!("'{}' skipped: weight limit reached", item.label());
                unpacked.push(item.clone());
                continue;
            }

            match find_first_fit(container, item, &packed, tolerance) {
                Some(placement) => {
                    total_weight += item.weight();
                    packed.push(placement);
                }
                None => {
                    log::trace!("'{}' has no legal position", item.label());
                    unpacked.push(item.clone());
                }
            }
        }

        let outcome = Outcome::new(*container, packed, unpacked);

        log::debug!(
            "{}: packed {}/{} items, utilization {}, {}ms",
            self.name(),
            outcome.packed_count(),
            items.len(),
            outcome.utilization_percent(),
            start.elapsed().as_millis()
        );

        Ok(outcome)
    }
}
