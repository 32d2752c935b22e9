//! High-level packing entry point.

use crate::ffd::FirstFitDecreasing;
use rayon::prelude::*;
use std::panic::{self, AssertUnwindSafe};
use stowage_core::solver::PackingStrategy;
use stowage_core::{Container, Error, Item, Outcome, Result};

/// Packs items into a container with a pluggable strategy.
///
/// `optimize` rejects inputs the strategy should never see (invalid records,
/// too much total weight, oversized items) and wraps unexpected strategy
/// failures into [`Error::PackingFailure`].
pub struct ContainerOptimizer {
    strategy: Box<dyn PackingStrategy>,
}

impl ContainerOptimizer {
    /// Creates an optimizer using [`FirstFitDecreasing`] with default configuration.
    pub fn new() -> Self {
        Self::with_strategy(FirstFitDecreasing::default())
    }

    /// Creates an optimizer using the given strategy.
    pub fn with_strategy(strategy: impl PackingStrategy + 'static) -> Self {
        Self {
            strategy: Box::new(strategy),
        }
    }

    /// Returns the active strategy.
    pub fn strategy(&self) -> &dyn PackingStrategy {
        self.strategy.as_ref()
    }

    /// Packs `items` into `container`.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] if the container or an item fails validation
    /// - [`Error::CapacityExceeded`] if the items together outweigh the container's limit
    /// - [`Error::ItemTooLarge`] if an item exceeds the container on all three axes
    /// - [`Error::PackingFailure`] for any other strategy failure
    pub fn optimize(&self, container: &Container, items: &[Item]) -> Result<Outcome> {
        container.validate()?;

        if items.is_empty() {
            return Ok(Outcome::empty(*container));
        }

        validate_items(container, items)?;

        let run = panic::catch_unwind(AssertUnwindSafe(|| {
            self.strategy.pack(container, items)
        }));

        match run {
            Ok(Ok(outcome)) => Ok(outcome),
            Ok(Err(err)) if err.is_domain_error() => Err(err),
            Ok(Err(err)) => {
                log::warn!("Strategy {} failed: {}", self.strategy.name(), err);
                Err(Error::packing_failure(err))
            }
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                log::warn!("Strategy {} panicked: {}", self.strategy.name(), message);
                Err(Error::packing_failure(Error::Internal(message)))
            }
        }
    }

    /// Runs independent jobs in parallel.
    ///
    /// Each job is packed sequentially on its own; results come back in job order.
    pub fn optimize_batch(&self, jobs: &[(Container, Vec<Item>)]) -> Vec<Result<Outcome>> {
        jobs.par_iter()
            .map(|(container, items)| self.optimize(container, items))
            .collect()
    }
}

impl Default for ContainerOptimizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Pre-flight checks run before any search.
///
/// The size check compares raw, unrotated dimensions and only rejects items
/// that exceed the container on every axis at once.
fn validate_items(container: &Container, items: &[Item]) -> Result<()> {
    for item in items {
        item.validate()?;
    }

    let total_weight: f64 = items.iter().map(Item::weight).sum();
    if total_weight > container.max_weight() {
        return Err(Error::CapacityExceeded(format!(
            "Total item weight ({}kg) exceeds container capacity ({}kg)",
            total_weight,
            container.max_weight()
        )));
    }

    let bounds = container.extent();
    if let Some(item) = items.iter().find(|i| i.extent().exceeds_on_all_axes(&bounds)) {
        return Err(Error::ItemTooLarge(format!(
            "Item '{}' is too large for the container in all orientations",
            item.label()
        )));
    }

    Ok(())
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "strategy panicked".to_string()
    }
}
