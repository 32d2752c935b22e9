//! Placement legality: overlap and stacking rules.
//!
//! A candidate is legal when, against every existing placement, it neither
//! overlaps nor violates the stacking rule:
//!
//! - nothing may rest on a [`Priority::Fragile`] item;
//! - a [`Priority::Heavy`] item may only rest on another heavy item.
//!
//! "Resting on" only compares heights: the candidate's base must be at or
//! above `lower`'s top (minus tolerance). Horizontal footprints are not
//! compared, so a fragile item anywhere on the floor blocks every later
//! placement above its top face.

use stowage_core::{overlaps, Aabb3, Placement, Priority};

/// Why a candidate was turned down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Shares volume with the placement at this index.
    Overlap(usize),
    /// Breaks the stacking rule against the placement at this index.
    Stacking(usize),
}

/// Returns true if `upper` may sit above `lower`.
///
/// Pairs where `upper` does not start above `lower`'s top are always accepted
/// here; overlap is checked separately.
pub fn can_stack_on(upper: &Placement, lower: &Placement, tolerance: f64) -> bool {
    stacking_allowed(upper.position().z, upper.item().priority(), lower, tolerance)
}

fn stacking_allowed(
    base_z: f64,
    upper_priority: Priority,
    lower: &Placement,
    tolerance: f64,
) -> bool {
    if base_z <= lower.top() - tolerance {
        return true;
    }

    let lower_priority = lower.item().priority();

    if lower_priority == Priority::Fragile {
        return false;
    }

    if upper_priority == Priority::Heavy && lower_priority != Priority::Heavy {
        return false;
    }

    true
}

/// Checks `candidate` against every existing placement.
pub fn validate(
    candidate: &Placement,
    existing: &[Placement],
    tolerance: f64,
) -> Result<(), Rejection> {
    validate_box(
        &candidate.aabb(),
        candidate.item().priority(),
        existing,
        tolerance,
    )
}

/// Checks a box of the given tier against every existing placement,
/// before any [`Placement`] is built for it.
pub fn validate_box(
    bounds: &Aabb3,
    priority: Priority,
    existing: &[Placement],
    tolerance: f64,
) -> Result<(), Rejection> {
    for (idx, placed) in existing.iter().enumerate() {
        if overlaps(bounds, &placed.aabb()) {
            return Err(Rejection::Overlap(idx));
        }

        if !stacking_allowed(bounds.min.z, priority, placed, tolerance) {
            return Err(Rejection::Stacking(idx));
        }
    }

    Ok(())
}

/// Returns true if `candidate` passes [`validate`].
pub fn is_valid_placement(candidate: &Placement, existing: &[Placement], tolerance: f64) -> bool {
    validate(candidate, existing, tolerance).is_ok()
}
